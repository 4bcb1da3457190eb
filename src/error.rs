//! Error types
//!
//! Store errors are recovered per request and rendered into a 500 response;
//! startup errors are fatal and end the process with exit code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading from the customer store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver error; its message becomes the response `details`
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("database connection lock poisoned")]
    Poisoned,

    /// The blocking query task panicked or was cancelled
    #[error("query worker failed: {0}")]
    Worker(String),
}

/// Fatal failure before the listener is opened
#[derive(Debug, Error)]
pub enum StartupError {
    /// `folder` is the last segment of the database directory, e.g. `db`
    #[error("Database file not found at {}. Please ensure {file_name} exists in the {folder} folder.", .path.display())]
    MissingDatabase {
        path: PathBuf,
        folder: String,
        file_name: String,
    },

    #[error("failed to create directory {}: {source}", .dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

impl StartupError {
    /// Process exit code for this failure
    pub const fn exit_code(&self) -> i32 {
        1
    }
}
