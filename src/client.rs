use std::collections::HashMap;
use std::time::Duration;

use atty::Stream;
use colored::Colorize;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FigshareError;
use crate::request::RequestType;
use crate::response::ErrorDocument;

/// Public figshare API, version 2.
pub const DEFAULT_API_URL: &str = "https://api.figshare.com/v2/";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "FIGSHARE_API_URL";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const READ_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct BaseClient {
    base_url: Url,
    client: Client,
}

// This is the base client that will be used to make requests to the API.
// Its acts as a wrapper around the reqwest::Client and provides
// methods to make GET and POST requests relative to the API root.
impl BaseClient {
    pub fn new(base_url: &str) -> Result<Self, FigshareError> {
        // Without a trailing slash Url::join would drop the last segment (v2)
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base_url = Url::parse(&normalized).map_err(|e| FigshareError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        // No total timeout, archives can take a long time to stream.
        // A stalled connection still fails through the read timeout.
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .default_headers(Self::default_headers())
            .build()?;

        Ok(BaseClient { base_url, client })
    }

    /// Creates a client for the API root in `FIGSHARE_API_URL`, falling back
    /// to the public figshare API.
    pub fn from_env() -> Result<Self, FigshareError> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert(
            "User-Agent",
            HeaderValue::from_static(concat!("figshare-get/", env!("CARGO_PKG_VERSION"))),
        );

        headers
    }

    /// Get the base URL of the client
    ///
    /// # Returns
    ///
    /// A reference to the base URL of the client
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a GET request. `path` is resolved against the API root;
    /// absolute URLs (download links) are used as they are.
    pub async fn get(
        &self,
        path: &str,
        parameters: Option<HashMap<String, String>>,
        context: RequestType,
    ) -> Result<reqwest::Response, FigshareError> {
        self.perform_request(reqwest::Method::GET, path, parameters, context)
            .await
    }

    pub async fn post(
        &self,
        path: &str,
        parameters: Option<HashMap<String, String>>,
        context: RequestType,
    ) -> Result<reqwest::Response, FigshareError> {
        self.perform_request(reqwest::Method::POST, path, parameters, context)
            .await
    }

    async fn perform_request(
        &self,
        method: reqwest::Method,
        path: &str,
        parameters: Option<HashMap<String, String>>,
        context: RequestType,
    ) -> Result<reqwest::Response, FigshareError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| FigshareError::InvalidUrl {
                url: path.to_string(),
                reason: e.to_string(),
            })?;

        // If the DEBUG environment variable is set, print the URL
        if std::env::var("DEBUG").is_ok() {
            print_call(url.to_string());
        }

        let request = context.to_request(self.client.request(method, url));

        let request = match parameters {
            Some(parameters) => request.query(&parameters),
            None => request,
        };

        Ok(request.send().await?)
    }
}

// Helper function to evaluate a response
//
// figshare answers errors with a JSON document carrying a `message` field,
// sometimes with a 2xx status, so the body decides rather than the status.
pub async fn evaluate_response<T>(
    response: Result<reqwest::Response, FigshareError>,
) -> Result<T, FigshareError>
where
    T: DeserializeOwned,
{
    let raw_content = response?.text().await?;

    let value = serde_json::from_str::<Value>(&raw_content).map_err(|source| {
        FigshareError::Decode {
            body: raw_content.clone(),
            source,
        }
    })?;

    if let Some(document) = ErrorDocument::detect(&value) {
        return Err(FigshareError::Api(document));
    }

    serde_json::from_value::<T>(value).map_err(|source| FigshareError::Decode {
        body: raw_content,
        source,
    })
}

pub(crate) fn print_error(error: String) {
    println!("\n{} {}\n", "Error:".red().bold(), error,);
}

fn print_call(url: String) {
    if atty::is(Stream::Stdout) {
        println!("{}: {}", "Calling".to_string().blue().bold(), url);
    }
}
