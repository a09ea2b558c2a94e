//! CLI command implementations
//!
//! Every command loads the configuration first and applies its log level.
//! `start` and `exec` require an initialized student file; `init` refuses
//! to overwrite one.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::json;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, read_requests, write_error, write_json, write_response};
use crate::api::RequestHandler;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::store::StudentStore;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
        Command::Exec { config } => exec(&config),
    }
}

fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let path = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);

    Ok(config)
}

/// Open the configured student file, which must already exist
fn open_store(config: &Config) -> CliResult<StudentStore> {
    let data_path = config.data_path();
    if !data_path.exists() {
        return Err(CliError::not_initialized(data_path.display()));
    }

    Ok(StudentStore::open(data_path, config.id_generator())?)
}

/// Create an empty student file
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let data_path = config.data_path();

    if data_path.exists() {
        return Err(CliError::already_initialized(data_path.display()));
    }

    let store = StudentStore::open(data_path, config.id_generator())?;
    store.save()?;

    let path = data_path.display().to_string();
    log_event_with_fields(Event::StoreInitialized, &[("path", path.as_str())]);
    write_response(json!({"initialized": true, "data_file": path}))?;

    Ok(())
}

/// Serve requests from stdin until EOF
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    serve(RequestHandler::new(store), stdin.lock(), &mut stdout)
}

/// Answer each request line from `input` with one response line on `output`.
///
/// A read error ends the loop after reporting it.
pub fn serve<R: BufRead, W: Write>(
    mut handler: RequestHandler,
    input: R,
    output: &mut W,
) -> CliResult<()> {
    log_event(Event::Serving);

    for line in read_requests(input) {
        match line {
            Ok(request) => {
                let response = handler.handle(&request);
                writeln!(output, "{}", response.to_json())?;
                output.flush()?;
            }
            Err(e) => {
                let body = json!({"status": "error", "code": e.code_str(), "message": e.message()});
                writeln!(output, "{}", body)?;
                output.flush()?;
                break;
            }
        }
    }

    Ok(())
}

/// Execute a single request and exit
pub fn exec(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config)?;

    let request = match read_request() {
        Ok(r) => r,
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            return Err(e);
        }
    };

    let mut handler = RequestHandler::new(store);
    let response = handler.handle(&request);
    write_json(&response.to_json())?;

    Ok(())
}
