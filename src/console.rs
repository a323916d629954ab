//! User interaction for the interactive entry points
//!
//! Resolver, downloader and manager never touch stdin/stdout directly. They
//! talk to a [`Console`], which the binaries back with [`Terminal`] and the
//! tests back with a scripted double.

use std::io::{self, BufRead, Write};

use atty::Stream;
use dialoguer::Input;

/// Line-oriented user interaction.
pub trait Console {
    /// Shows a message to the user
    fn say(&mut self, line: &str);

    /// Shows `prompt` and blocks until the user answers with a line.
    ///
    /// The returned answer has its line terminator removed but is otherwise
    /// untouched, so an empty string means the user just pressed ENTER.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// The process terminal.
///
/// Prompts go through `dialoguer` when stdin is a TTY. Piped input is read
/// line by line so the tools stay scriptable.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Console for Terminal {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        if atty::is(Stream::Stdin) {
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| io::Error::other(e.to_string()));
        }

        println!("{}", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }

        Ok(strip_line_ending(&answer).to_string())
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("3\n"), "3");
        assert_eq!(strip_line_ending("3\r\n"), "3");
        assert_eq!(strip_line_ending("\n"), "");
        assert_eq!(strip_line_ending(" y \n"), " y ");
    }
}
