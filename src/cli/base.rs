//! Base functionality for the command line tools
//!
//! This module provides core utilities and traits used across the CLI including:
//! - Error reporting and exit code mapping
//! - Running async commands on a runtime
//! - Common traits for command processing

use std::future::Future;

use colored::Colorize;

use crate::client::{print_error, BaseClient};
use crate::console::Console;
use crate::error::FigshareError;

/// Prints the outcome of a command and returns the process exit code.
///
/// API error documents are printed raw. The two early terminations users
/// expect ("No results", bad selection) are printed as plain lines, every
/// other failure as a red error.
pub fn evaluate_and_report<T>(result: Result<T, FigshareError>) -> exitcode::ExitCode {
    let err = match result {
        Ok(_) => return exitcode::OK,
        Err(err) => err,
    };

    match &err {
        FigshareError::Api(document) => document.print(),
        FigshareError::NoResults | FigshareError::InvalidSelection(_) => {
            println!("{}", err.to_string().yellow())
        }
        _ => print_error(err.to_string()),
    }

    err.exit_code()
}

/// Drives `future` to completion on a fresh runtime.
pub fn block_on<F, T>(future: F) -> Result<T, FigshareError>
where
    F: Future<Output = Result<T, FigshareError>>,
{
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(future)
}

/// Trait for processing CLI commands
///
/// Implementors define how to run their command using the provided API
/// client and console.
pub trait Matcher {
    /// Process this command and return the process exit code
    ///
    /// # Arguments
    /// * `client` - The BaseClient for making API requests
    /// * `console` - Where prompts and messages go
    fn process(self, client: &BaseClient, console: &mut dyn Console) -> exitcode::ExitCode;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::response::ErrorDocument;

    #[test]
    fn test_evaluate_and_report_codes() {
        assert_eq!(evaluate_and_report(Ok(())), exitcode::OK);
        assert_eq!(
            evaluate_and_report::<()>(Err(FigshareError::NoResults)),
            exitcode::NOINPUT
        );
        assert_eq!(
            evaluate_and_report::<()>(Err(FigshareError::Api(
                ErrorDocument::detect(&json!({"message": "nope"})).unwrap()
            ))),
            exitcode::DATAERR
        );
    }

    #[test]
    fn test_block_on() {
        let value = block_on(async { Ok::<_, FigshareError>(7) }).unwrap();
        assert_eq!(value, 7);
    }
}
