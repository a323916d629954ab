use atty::Stream;
use colored::Colorize;
use colored_json::prelude::*;
use serde_json::Value;

/// An error body returned by the figshare API.
///
/// figshare does not wrap successful payloads, so the only way to tell an
/// error apart from data is the presence of a top-level `message` field.
///
/// For more info:
/// https://docs.figshare.com/#errors
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDocument {
    /// Human readable description of the failure
    pub message: String,

    /// Machine readable error code, e.g. `EntityNotFound`
    pub code: Option<String>,

    /// The body exactly as figshare sent it
    pub document: Value,
}

impl ErrorDocument {
    /// Returns the error document if `value` is one.
    ///
    /// Lists are never error documents, which keeps a search hit that
    /// happens to carry a `message` key from being misread.
    pub fn detect(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let message = object.get("message")?;

        Some(ErrorDocument {
            message: match message {
                Value::String(message) => message.clone(),
                other => other.to_string(),
            },
            code: object
                .get("code")
                .and_then(Value::as_str)
                .map(str::to_owned),
            document: value.clone(),
        })
    }

    /// The raw document, indented for display.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.document).unwrap_or_else(|_| self.to_string())
    }

    /// Prints the raw document, colored when stdout is a terminal.
    pub fn print(&self) {
        let json = self.pretty();

        if atty::is(Stream::Stdout) {
            println!("\n{}", "Error:".red().bold());
            println!("{}\n", json.to_colored_json_auto().unwrap_or(json.clone()));
        } else {
            println!("{}", json);
        }
    }
}

impl std::fmt::Display for ErrorDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}
