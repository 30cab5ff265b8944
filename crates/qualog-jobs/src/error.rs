use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a job directory or its results index.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("results index '{}' is not valid JSON: {source}", path.display())]
    MalformedIndex {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("job root '{}' does not exist", .0.display())]
    MissingRoot(PathBuf),
}
