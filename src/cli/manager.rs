//! The `figshare-manager` command
//!
//! Populates a numbered project folder with its data: the user picks a
//! project from `figshare_metadata.yaml` and the first file of the linked
//! figshare article is downloaded and unpacked into `<path>/data`.

use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::client::BaseClient;
use crate::console::Console;
use crate::data_access::datafile::{save_and_extract, ExtractOutcome};
use crate::error::FigshareError;
use crate::manifest::{Manifest, MANIFEST_FILE};
use crate::native_api::article::get_article_files;

use super::base::{block_on, evaluate_and_report, Matcher};

/// Download the data of one project listed in figshare_metadata.yaml
#[derive(StructOpt, Debug)]
#[structopt(
    name = "figshare-manager",
    about = "Download the data of a project listed in figshare_metadata.yaml"
)]
pub struct ManagerCommand {}

impl Matcher for ManagerCommand {
    fn process(self, client: &BaseClient, console: &mut dyn Console) -> exitcode::ExitCode {
        let result = block_on(run_download_manager(
            client,
            Path::new(MANIFEST_FILE),
            console,
        ));

        evaluate_and_report(result)
    }
}

/// What the manager did.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerOutcome {
    pub index: u32,
    pub code: String,
    pub target: PathBuf,
    pub download: ExtractOutcome,
}

/// Asks for a project number and downloads that project's data.
///
/// The manifest is loaded and validated before the user is asked, so only
/// project numbers it actually lists are accepted.
///
/// Only the first file of the article, in the order the API lists them, is
/// downloaded. It must be a zip archive.
pub async fn run_download_manager(
    client: &BaseClient,
    manifest_path: &Path,
    console: &mut dyn Console,
) -> Result<ManagerOutcome, FigshareError> {
    let manifest = Manifest::load(manifest_path)?;

    console.say("Each folder in this repo starts with a number.");
    let answer = console.ask(&format!(
        "Type the number of the folder you want to populate with data ({}):",
        manifest.describe_indices()
    ))?;
    let (index, entry) = manifest.parse_index(&answer)?;

    let code = entry.code().to_string();
    let target = entry.data_dir();

    console.say(&format!(
        "Downloading data from figshare code {} to {}",
        code,
        target.display()
    ));
    console.say("This may take a while...");

    let files = get_article_files(client, &code).await?;
    let first = files
        .first()
        .ok_or_else(|| FigshareError::EmptyArticle(code.clone()))?;

    let download = save_and_extract(client, first, &target, console).await?;

    console.say(&format!(
        "Done! You should now be able to run the code in {}",
        entry.src_dir().display()
    ));

    Ok(ManagerOutcome {
        index,
        code,
        target,
        download,
    })
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;
    use crate::test_utils::{
        create_test_client, mock_article_files, mock_download, zip_bytes, ScriptedConsole,
    };

    const INTRO_URL: &str = "https://figshare.com/articles/dataset/intro/11111";

    fn write_manifest(dir: &Path, entries: &[(u32, &str, PathBuf)]) -> PathBuf {
        let content: String = entries
            .iter()
            .map(|(index, url, path)| {
                format!("{}:\n  url: {}\n  path: {}\n", index, url, path.display())
            })
            .collect();

        let manifest_path = dir.join(MANIFEST_FILE);
        std::fs::write(&manifest_path, content).unwrap();
        manifest_path
    }

    #[tokio::test]
    async fn test_downloads_first_file_into_data_dir() {
        // Arrange
        let temp_dir = tempfile::tempdir().unwrap();
        let project = temp_dir.path().join("proj3");
        let manifest_path = write_manifest(
            temp_dir.path(),
            &[
                (0, INTRO_URL, temp_dir.path().join("proj0")),
                (3, "https://figshare.com/articles/dataset/cells/54321", project.clone()),
            ],
        );

        let archive = zip_bytes(&[("cells.csv", "id,area\n1,2.5\n")]);
        let server = MockServer::start_async().await;
        let _files =
            mock_article_files(&server, 54321, &[("cells.zip", archive.len()), ("extra.zip", 1)])
                .await;
        let first = mock_download(&server, 54321, "cells.zip", &archive).await;
        let second = mock_download(&server, 54321, "extra.zip", b"x").await;
        let mut console = ScriptedConsole::new(&["3", "n"]);

        // Act
        let outcome =
            run_download_manager(&create_test_client(&server), &manifest_path, &mut console)
                .await
                .expect("Manager failed");

        // Assert
        assert_eq!(outcome.index, 3);
        assert_eq!(outcome.code, "54321");
        assert_eq!(outcome.target, project.join("data"));
        assert_eq!(first.hits_async().await, 1);
        assert_eq!(second.hits_async().await, 0);
        assert_eq!(
            std::fs::read_to_string(project.join("data").join("cells.csv")).unwrap(),
            "id,area\n1,2.5\n"
        );
        assert!(project.join("data").join("cells.zip").exists());
        assert!(console.said("Downloading data from figshare code 54321"));
        assert!(console.said(&format!(
            "Done! You should now be able to run the code in {}",
            project.join("src").display()
        )));
        assert!(console.prompts[0].contains("(0, 3)"));
    }

    #[tokio::test]
    async fn test_rejects_index_missing_from_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest_path = write_manifest(
            temp_dir.path(),
            &[(0, INTRO_URL, temp_dir.path().join("proj0"))],
        );
        let server = MockServer::start_async().await;
        let files = mock_article_files(&server, 11111, &[("intro.zip", 1)]).await;

        let result = run_download_manager(
            &create_test_client(&server),
            &manifest_path,
            &mut ScriptedConsole::new(&["4"]),
        )
        .await;

        assert!(matches!(result, Err(FigshareError::NotInManifest { index: 4, .. })));
        assert_eq!(files.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_rejects_non_numeric_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest_path = write_manifest(
            temp_dir.path(),
            &[(1, INTRO_URL, temp_dir.path().join("proj1"))],
        );
        let server = MockServer::start_async().await;

        let result = run_download_manager(
            &create_test_client(&server),
            &manifest_path,
            &mut ScriptedConsole::new(&["one"]),
        )
        .await;

        assert!(matches!(result, Err(FigshareError::InvalidSelection(_))));
    }

    #[tokio::test]
    async fn test_article_without_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest_path = write_manifest(
            temp_dir.path(),
            &[(
                2,
                "https://figshare.com/articles/dataset/empty/22222",
                temp_dir.path().join("proj2"),
            )],
        );
        let server = MockServer::start_async().await;
        let _files = mock_article_files(&server, 22222, &[]).await;

        let result = run_download_manager(
            &create_test_client(&server),
            &manifest_path,
            &mut ScriptedConsole::new(&["2"]),
        )
        .await;

        assert!(matches!(result, Err(FigshareError::EmptyArticle(code)) if code == "22222"));
    }

    #[tokio::test]
    async fn test_missing_manifest_fails_before_prompting() {
        let temp_dir = tempfile::tempdir().unwrap();
        let server = MockServer::start_async().await;
        let mut console = ScriptedConsole::new(&["0"]);

        let result = run_download_manager(
            &create_test_client(&server),
            &temp_dir.path().join(MANIFEST_FILE),
            &mut console,
        )
        .await;

        assert!(matches!(result, Err(FigshareError::Manifest { .. })));
        assert!(console.prompts.is_empty());
    }
}
