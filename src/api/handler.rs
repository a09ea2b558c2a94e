//! Request handler for rosterdb
//!
//! Runs the call sequence the presentation layer relies on:
//! 1. Parse the request
//! 2. Validate every submitted field, collecting all failures
//! 3. Build or patch the record
//! 4. Apply the mutation through the store
//! 5. Report one aggregated result

use serde_json::{json, Value};

use super::errors::{ApiError, ApiResult};
use super::request::{QueryRequest, Request};
use super::response::Response;
use crate::model::StudentRecord;
use crate::observability::{log_event_with_fields, Event};
use crate::store::{StudentStore, StudentSummary};
use crate::validation::{validate_partial, validate_submission, RawStudent, ValidationError};

/// Serves requests against a single student store
pub struct RequestHandler {
    store: StudentStore,
}

impl RequestHandler {
    pub fn new(store: StudentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &StudentStore {
        &self.store
    }

    /// Handle a raw JSON request string
    pub fn handle(&mut self, json_request: &str) -> Response {
        match Request::parse(json_request) {
            Ok(request) => self.dispatch(request),
            Err(e) => Self::failed("parse", e),
        }
    }

    /// Handle an already parsed request
    pub fn dispatch(&mut self, request: Request) -> Response {
        let (op, result) = match request {
            Request::Add { student } => ("add", self.handle_add(student)),
            Request::Get { student_id } => ("get", self.handle_get(&student_id)),
            Request::List => ("list", Ok(to_json(self.store.get_all_students()))),
            Request::Update {
                student_id,
                student,
            } => ("update", self.handle_update(&student_id, student)),
            Request::Delete { student_id } => ("delete", self.handle_delete(&student_id)),
            Request::Search { query } => {
                ("search", Ok(to_json(self.store.search_students(&query))))
            }
            Request::Filter(q) => ("filter", self.handle_filter(&q)),
            Request::Stats(q) => ("stats", self.handle_stats(&q)),
        };

        match result {
            Ok(data) => Response::success(data),
            Err(e) => Self::failed(op, e),
        }
    }

    fn failed(op: &str, err: ApiError) -> Response {
        // Rejections are logged where they are detected
        if !err.is_rejection() {
            log_event_with_fields(
                Event::RequestFailed,
                &[("code", err.code()), ("message", err.message()), ("op", op)],
            );
        }
        Response::error(&err)
    }

    fn rejected(err: ValidationError) -> ApiError {
        let fields = err
            .fields()
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");
        log_event_with_fields(Event::ValidationRejected, &[("fields", fields.as_str())]);
        ApiError::from_validation_error(err)
    }

    /// Validate everything, then generate an id and insert.
    fn handle_add(&mut self, raw: RawStudent) -> ApiResult<Value> {
        let fields = validate_submission(&raw).map_err(Self::rejected)?;

        let student_id = self.store.generate_student_id();
        let record = StudentRecord::new(student_id.clone(), fields);
        self.store
            .add_student(record)
            .map_err(ApiError::from_store_error)?;

        Ok(json!({ "student_id": student_id }))
    }

    fn handle_get(&self, student_id: &str) -> ApiResult<Value> {
        self.store
            .get_student(student_id)
            .map(to_json)
            .map_err(ApiError::from_store_error)
    }

    /// Validate the supplied fields, then overwrite only those.
    fn handle_update(&mut self, student_id: &str, raw: RawStudent) -> ApiResult<Value> {
        let patch = validate_partial(&raw).map_err(Self::rejected)?;
        self.store
            .update_student(student_id, patch)
            .map(to_json)
            .map_err(ApiError::from_store_error)
    }

    fn handle_delete(&mut self, student_id: &str) -> ApiResult<Value> {
        let removed = self
            .store
            .delete_student(student_id)
            .map_err(ApiError::from_store_error)?;
        Ok(json!({ "deleted": removed.student_id }))
    }

    fn handle_filter(&self, q: &QueryRequest) -> ApiResult<Value> {
        let filter = q.to_filter()?;
        Ok(to_json(self.store.query_students(q.query_text(), &filter)))
    }

    fn handle_stats(&self, q: &QueryRequest) -> ApiResult<Value> {
        let filter = q.to_filter()?;
        let narrowed = self.store.query_students(q.query_text(), &filter);
        Ok(to_json(StudentSummary::from_records(narrowed)))
    }
}

fn to_json<T: serde::Serialize>(value: T) -> Value {
    // Records and summaries are plain data; serialization cannot fail
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> RequestHandler {
        RequestHandler::new(StudentStore::in_memory())
    }

    fn add(h: &mut RequestHandler, name: &str, age: u32, grade: &str, perf: &str) -> String {
        let request = json!({
            "op": "add",
            "student": {
                "name": name,
                "age": age,
                "grade": grade,
                "email": format!("{}@school.org", name.to_lowercase().replace(' ', ".")),
                "performance": perf
            }
        });
        let resp = h.handle(&request.to_string());
        assert!(resp.is_success(), "{}", resp.to_json());
        resp.data().unwrap()["student_id"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_add_normalizes_and_assigns_id() {
        let mut h = handler();
        let id = add(&mut h, "Alice Smith", 15, "10a", "Good");
        assert_eq!(id, "STU0001");

        let resp = h.handle(&json!({"op": "get", "student_id": id}).to_string());
        let data = resp.data().unwrap();
        assert_eq!(data["grade"], "10A");
        assert_eq!(data["performance"], "Good");
    }

    #[test]
    fn test_add_reports_every_bad_field() {
        let mut h = handler();
        let resp = h.handle(
            &json!({"op": "add", "student": {
                "name": "", "age": 101, "grade": "100A", "email": "a@b", "performance": "Good"
            }})
            .to_string(),
        );

        let parsed: Value = serde_json::from_str(&resp.to_json()).unwrap();
        assert_eq!(parsed["code"], "ROSTER_VALIDATION_FAILED");
        let fields: Vec<&str> = parsed["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["name", "age", "email", "grade"]);
        assert!(h.store().is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let mut h = handler();
        let id = add(&mut h, "Alice Smith", 15, "10A", "Good");

        let resp = h.handle(
            &json!({"op": "update", "student_id": id, "student": {"name": "New Name"}}).to_string(),
        );
        assert_eq!(resp.data().unwrap()["name"], "New Name");
        assert_eq!(resp.data().unwrap()["age"], 15);

        let resp = h.handle(&json!({"op": "delete", "student_id": id}).to_string());
        assert_eq!(resp.data().unwrap()["deleted"], id.as_str());

        let resp = h.handle(&json!({"op": "get", "student_id": id}).to_string());
        assert_eq!(resp.error_code(), Some("ROSTER_NOT_FOUND"));
    }

    #[test]
    fn test_update_with_bad_field_changes_nothing() {
        let mut h = handler();
        let id = add(&mut h, "Alice Smith", 15, "10A", "Good");

        let resp = h.handle(
            &json!({"op": "update", "student_id": id, "student": {"name": "Alicia", "age": 3}})
                .to_string(),
        );
        assert_eq!(resp.error_code(), Some("ROSTER_VALIDATION_FAILED"));
        assert_eq!(h.store().get_student(&id).unwrap().name, "Alice Smith");
    }

    #[test]
    fn test_filter_over_search() {
        let mut h = handler();
        add(&mut h, "Alice Smith", 10, "5A", "Excellent");
        let target = add(&mut h, "Carol Smith", 20, "5A", "Good");
        add(&mut h, "Bob Jones", 20, "5A", "Good");

        let resp = h.handle(
            &json!({"op": "filter", "query": "SMITH", "grade": "5a", "min_age": 15, "performance": "All"})
                .to_string(),
        );
        let data = resp.data().unwrap().as_array().unwrap().clone();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["student_id"], target.as_str());
    }

    #[test]
    fn test_stats() {
        let mut h = handler();
        add(&mut h, "Alice Smith", 10, "5A", "Excellent");
        add(&mut h, "Bob Jones", 21, "6B", "Needs Improvement");

        let resp = h.handle(r#"{"op":"stats"}"#);
        let data = resp.data().unwrap();
        assert_eq!(data["total"], 2);
        assert_eq!(data["excellent"], 1);
        assert_eq!(data["average_age"], 15.5);
        assert_eq!(data["distinct_grades"], 2);
        assert_eq!(data["by_performance"]["Needs Improvement"], 1);
    }

    #[test]
    fn test_malformed_request() {
        let mut h = handler();
        let resp = h.handle("{\"op\":");
        assert_eq!(resp.error_code(), Some("ROSTER_INVALID_REQUEST"));
    }
}
