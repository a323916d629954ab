//! Turning a search string into a collection
//!
//! The resolver searches, then either takes the result number given on the
//! command line or lists the hits and asks the user to pick one.

use crate::client::BaseClient;
use crate::console::Console;
use crate::error::FigshareError;
use crate::native_api::collection::{search, CollectionSummary};

pub const SELECTION_PROMPT: &str = "Type the number of a result to download, or ENTER to skip";

/// What the user picked.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Selected(CollectionSummary),
    /// The user pressed ENTER without choosing
    Skipped,
}

/// Searches for `query` and picks one of the results.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `query` - Free text or DOI.
/// * `result_number` - 0-based result to take without prompting.
/// * `console` - Used to list the results and ask for a choice.
///
/// # Errors
///
/// * [`FigshareError::Api`] if figshare answers with an error document.
/// * [`FigshareError::NoResults`] if nothing matched.
/// * [`FigshareError::ResultOutOfRange`] if `result_number` does not exist.
/// * [`FigshareError::InvalidSelection`] if the typed answer is not a number in range.
pub async fn resolve_collection(
    client: &BaseClient,
    query: &str,
    result_number: Option<usize>,
    console: &mut dyn Console,
) -> Result<Resolution, FigshareError> {
    let results = search(client, query).await?;
    select_result(results, result_number, console)
}

/// Picks one of `results`, see [`resolve_collection`].
pub fn select_result(
    mut results: Vec<CollectionSummary>,
    result_number: Option<usize>,
    console: &mut dyn Console,
) -> Result<Resolution, FigshareError> {
    if results.is_empty() {
        return Err(FigshareError::NoResults);
    }

    let index = match result_number {
        Some(index) if index < results.len() => index,
        Some(index) => {
            return Err(FigshareError::ResultOutOfRange {
                index,
                len: results.len(),
            })
        }
        None => {
            for (position, result) in results.iter().enumerate() {
                console.say(&format!("   {} {} {}", position, result.title, result.doi));
            }

            let answer = console.ask(SELECTION_PROMPT)?;
            match parse_selection(&answer, results.len())? {
                Some(index) => index,
                None => return Ok(Resolution::Skipped),
            }
        }
    };

    Ok(Resolution::Selected(results.swap_remove(index)))
}

/// Parses a typed result number.
///
/// Empty input means skip (`None`). Only parse and bounds failures are
/// turned into [`FigshareError::InvalidSelection`].
pub fn parse_selection(input: &str, len: usize) -> Result<Option<usize>, FigshareError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<usize>() {
        Ok(index) if index < len => Ok(Some(index)),
        _ => Err(FigshareError::InvalidSelection(input.to_string())),
    }
}
