//! A Rust library and command line tools for downloading figshare collections.
//!
//! The library covers the steps of getting data out of figshare: searching
//! for a collection, saving its metadata, walking its articles and files, and
//! streaming the files to disk, optionally unpacking zip archives.

#![warn(unused_crate_dependencies)]

/// Client functionality for interacting with the figshare API
pub mod client;

/// User interaction (prompts and messages)
pub mod console;

/// Error type shared by all operations
pub mod error;

/// Project manifest for the download manager
pub mod manifest;

/// Progress tracking utilities
pub(crate) mod progress;

/// Types for making requests to the figshare API
pub mod request;

/// Collection search and selection
pub mod resolver;

/// Types for handling responses from the figshare API
pub mod response;

/// General utility functions
pub mod utils;

/// File handling functionality
pub mod file {
    /// Zip extraction
    pub(crate) mod archive;
    /// File streaming utilities
    pub(crate) mod filestream;
}

/// Data access functionality
pub mod data_access {
    pub use collection::{download_collection_files, export_collection_metadata, CollectionFiles};
    pub use datafile::{save_and_extract, save_file};

    /// Collection operations
    pub mod collection;
    /// Single file downloads
    pub mod datafile;
}

/// figshare API v2 endpoints
pub mod native_api {
    /// Collection endpoints
    pub mod collection {
        pub use articles::get_collection_articles;
        pub use metadata::{get_collection, Collection};
        pub use search::{search, CollectionSummary};

        /// Articles of a collection
        pub mod articles;
        /// Collection metadata
        pub mod metadata;
        /// Collection search
        pub mod search;
    }

    /// Article endpoints
    pub mod article {
        pub use files::{get_article_files, FileDescriptor};

        /// Files of an article
        pub mod files;
    }
}

/// Commonly used types and functions
pub mod prelude {
    pub use super::client::BaseClient;
    pub use super::console::{Console, Terminal};
    pub use super::error::FigshareError;
    pub use super::manifest::Manifest;
    pub use super::native_api::article::FileDescriptor;
    pub use super::native_api::collection::{Collection, CollectionSummary};
}

/// Command-line interface functionality
pub mod cli {
    /// Base CLI functionality
    pub mod base;
    /// The figshare-get command
    pub mod get;
    /// The figshare-manager command
    pub mod manager;
}

/// Test utilities
#[cfg(test)]
mod test_utils;
