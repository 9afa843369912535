//! Error types for linetally
//!
//! Only run-level failures surface here. Per-file problems (unreadable
//! content, failed size lookups) are absorbed by the scanner and never
//! become an `Error`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a report run.
#[derive(Error, Debug)]
pub enum Error {
    /// The scan root does not exist or is not a directory
    #[error("'{}' is not a valid directory", .0.display())]
    NotADirectory(PathBuf),

    /// The walk finished without a single qualifying file
    #[error("no files found matching the criteria in '{}', report not generated", .0.display())]
    NoFiles(PathBuf),

    /// The report could not be written to disk
    #[error("error writing to {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for linetally operations
pub type Result<T> = std::result::Result<T, Error>;
