//! Startup validation
//!
//! Runs once before the listener is bound: makes sure the database directory
//! exists, refuses to continue without the database file, then opens the store.

use crate::config::DatabaseConfig;
use crate::error::StartupError;
use crate::logger;
use crate::store::CustomerStore;
use std::fs;
use std::path::Path;

/// Validate the database location and open the customer store.
///
/// The directory is created when absent. A missing database file is fatal:
/// nothing here bootstraps or initializes a database.
pub fn prepare_database(db: &DatabaseConfig) -> Result<CustomerStore, StartupError> {
    let dir = Path::new(&db.dir);
    if ensure_dir(dir)? {
        logger::log_directory_created(&db.dir);
    }

    let path = db.file_path();
    if !path.is_file() {
        let folder = dir
            .file_name()
            .map_or_else(|| db.dir.clone(), |name| name.to_string_lossy().into_owned());
        return Err(StartupError::MissingDatabase {
            path,
            folder,
            file_name: db.file_name.clone(),
        });
    }

    CustomerStore::open(&path).map_err(|source| StartupError::Open { path, source })
}

/// Create `dir` and any missing parents. Returns whether it had to be created.
fn ensure_dir(dir: &Path) -> Result<bool, StartupError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| StartupError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}
