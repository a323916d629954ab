//! The `figshare-get` command
//!
//! Search → pick a collection → save its metadata → download every file
//! into the working directory.

use std::path::Path;

use structopt::StructOpt;

use crate::client::BaseClient;
use crate::console::Console;
use crate::data_access::collection::{download_collection_files, export_collection_metadata};
use crate::error::FigshareError;
use crate::resolver::{resolve_collection, Resolution};

use super::base::{block_on, evaluate_and_report, Matcher};

/// Download files from a figshare collection
#[derive(StructOpt, Debug)]
#[structopt(name = "figshare-get", about = "Download files from a figshare collection")]
pub struct GetCommand {
    /// Free text or DOI of the collection
    #[structopt(
        help = "Search using a DOI or description of a figshare collection to download"
    )]
    pub search: String,

    /// 0-based result number to use instead of prompting
    #[structopt(
        short = "n",
        long,
        help = "Download result number (0-based) without prompting"
    )]
    pub result_number: Option<usize>,
}

impl Matcher for GetCommand {
    fn process(self, client: &BaseClient, console: &mut dyn Console) -> exitcode::ExitCode {
        let result = block_on(run_get(
            client,
            &self.search,
            self.result_number,
            Path::new(""),
            console,
        ));

        evaluate_and_report(result)
    }
}

/// Runs the whole pipeline for one search.
///
/// Metadata and files land in `out_dir` (empty for the working directory).
///
/// # Returns
///
/// The id of the downloaded collection, or `None` if the user skipped.
pub async fn run_get(
    client: &BaseClient,
    query: &str,
    result_number: Option<usize>,
    out_dir: &Path,
    console: &mut dyn Console,
) -> Result<Option<i64>, FigshareError> {
    let collection = match resolve_collection(client, query, result_number, console).await? {
        Resolution::Selected(collection) => collection,
        Resolution::Skipped => return Ok(None),
    };

    export_collection_metadata(client, collection.id, out_dir, console).await?;
    download_collection_files(client, collection.id, out_dir, console).await?;

    Ok(Some(collection.id))
}
