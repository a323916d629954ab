use std::collections::VecDeque;
use std::io::{self, Cursor, Write};

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::json;

use crate::client::BaseClient;
use crate::console::Console;

/// A console that replays canned answers and records everything shown.
#[derive(Debug, Default)]
pub(crate) struct ScriptedConsole {
    answers: VecDeque<String>,
    pub(crate) transcript: Vec<String>,
    pub(crate) prompts: Vec<String>,
}

impl ScriptedConsole {
    pub(crate) fn new(answers: &[&str]) -> Self {
        ScriptedConsole {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    /// True if any line shown to the user contains `needle`
    pub(crate) fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left"))
    }
}

pub(crate) fn create_test_client(server: &MockServer) -> BaseClient {
    BaseClient::new(&server.base_url()).expect("Failed to create client")
}

/// Builds an in-memory zip archive from `(name, content)` pairs.
pub(crate) fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::FileOptions::default();

    for (name, content) in entries {
        writer.start_file(*name, options).expect("Failed to start zip entry");
        writer
            .write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }

    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// Mocks the file list of an article with files served by the same server.
pub(crate) async fn mock_article_files<'a>(
    server: &'a MockServer,
    article_id: i64,
    files: &[(&str, usize)],
) -> Mock<'a> {
    let body: Vec<_> = files
        .iter()
        .map(|(name, size)| {
            json!({
                "id": article_id * 10,
                "name": name,
                "size": size,
                "download_url": server.url(format!("/ndownloader/{}/{}", article_id, name)),
                "computed_md5": "",
            })
        })
        .collect();

    server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/articles/{}/files", article_id));
            then.status(200).json_body(json!(body));
        })
        .await
}

/// Mocks the download of a file listed by [`mock_article_files`].
pub(crate) async fn mock_download<'a>(
    server: &'a MockServer,
    article_id: i64,
    name: &str,
    content: &[u8],
) -> Mock<'a> {
    let content = content.to_vec();
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/ndownloader/{}/{}", article_id, name));
            then.status(200).body(content);
        })
        .await
}
