//! Request Flow Tests
//!
//! Drives the JSON request boundary the way a presentation layer would:
//! gather raw input, submit, render the aggregated result.

use std::io::Cursor;

use rosterdb::api::RequestHandler;
use rosterdb::cli::serve;
use rosterdb::store::{IdGenerator, StudentStore};
use serde_json::{json, Value};
use tempfile::TempDir;

fn call(handler: &mut RequestHandler, request: Value) -> Value {
    serde_json::from_str(&handler.handle(&request.to_string()).to_json()).unwrap()
}

fn student(name: &str, age: u32, grade: &str, performance: &str) -> Value {
    json!({
        "name": name,
        "age": age,
        "grade": grade,
        "email": format!("{}@school.edu", name.to_lowercase().replace(' ', "_")),
        "performance": performance
    })
}

#[test]
fn test_full_lifecycle() {
    let mut h = RequestHandler::new(StudentStore::in_memory());

    let added = call(&mut h, json!({"op": "add", "student": student("Alice Smith", 15, "10a", "Good")}));
    assert_eq!(added["status"], "ok");
    let id = added["data"]["student_id"].as_str().unwrap().to_string();

    let listed = call(&mut h, json!({"op": "list"}));
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    let updated = call(
        &mut h,
        json!({"op": "update", "student_id": id, "student": student("Alice Jones", 16, "11b", "Excellent")}),
    );
    assert_eq!(updated["data"]["student_id"], id.as_str());
    assert_eq!(updated["data"]["grade"], "11B");

    let deleted = call(&mut h, json!({"op": "delete", "student_id": id}));
    assert_eq!(deleted["data"]["deleted"], id.as_str());

    let missing = call(&mut h, json!({"op": "delete", "student_id": id}));
    assert_eq!(missing["status"], "error");
    assert_eq!(missing["code"], "ROSTER_NOT_FOUND");
}

#[test]
fn test_validation_failure_lists_every_problem() {
    let mut h = RequestHandler::new(StudentStore::in_memory());

    let resp = call(
        &mut h,
        json!({"op": "add", "student": {"name": "  ", "age": "old", "grade": "0A", "email": "nope"}}),
    );

    assert_eq!(resp["code"], "ROSTER_VALIDATION_FAILED");
    assert_eq!(resp["errors"].as_array().unwrap().len(), 5);
    assert_eq!(resp["errors"][4]["field"], "performance");
}

#[test]
fn test_wrongly_typed_field_still_reports_every_problem() {
    let mut h = RequestHandler::new(StudentStore::in_memory());

    let resp = call(
        &mut h,
        json!({"op": "add", "student": {
            "name": "", "age": 200, "grade": 10, "email": "x", "performance": "Good"
        }}),
    );

    assert_eq!(resp["code"], "ROSTER_VALIDATION_FAILED");
    let fields: Vec<&str> = resp["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "age", "email", "grade"]);
    assert!(h.store().is_empty());
}

#[test]
fn test_search_then_filter_then_stats() {
    let mut h = RequestHandler::new(StudentStore::in_memory());
    for (name, age, grade, perf) in [
        ("Alice Smith", 10, "5A", "Excellent"),
        ("Bob Smith", 20, "5A", "Good"),
        ("Carol Smith", 30, "6B", "Good"),
        ("Dan Jones", 20, "5A", "Good"),
    ] {
        call(&mut h, json!({"op": "add", "student": student(name, age, grade, perf)}));
    }

    let found = call(&mut h, json!({"op": "search", "query": "SMITH"}));
    assert_eq!(found["data"].as_array().unwrap().len(), 3);

    let narrowed = call(
        &mut h,
        json!({"op": "filter", "query": "smith", "grade": "5A", "min_age": 15, "max_age": 100}),
    );
    let names: Vec<&str> = narrowed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bob Smith"]);

    let stats = call(&mut h, json!({"op": "stats", "query": "smith"}));
    assert_eq!(stats["data"]["total"], 3);
    assert_eq!(stats["data"]["excellent"], 1);
    assert_eq!(stats["data"]["average_age"], 20.0);
    assert_eq!(stats["data"]["distinct_grades"], 2);
}

#[test]
fn test_serve_persists_across_sessions() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("students.json");

    let session = |input: String| -> Vec<Value> {
        let store = StudentStore::open(&path, IdGenerator::default()).unwrap();
        let mut output = Vec::new();
        serve(RequestHandler::new(store), Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    };

    let first = session(format!(
        "{}\n",
        json!({"op": "add", "student": student("Alice Smith", 15, "10A", "Average")})
    ));
    assert_eq!(first[0]["data"]["student_id"], "STU0001");

    let second = session(format!(
        "{}\n{}\n",
        json!({"op": "get", "student_id": "STU0001"}),
        json!({"op": "add", "student": student("Bob Jones", 16, "10B", "Good")})
    ));
    assert_eq!(second[0]["data"]["name"], "Alice Smith");
    assert_eq!(second[1]["data"]["student_id"], "STU0002");
}
