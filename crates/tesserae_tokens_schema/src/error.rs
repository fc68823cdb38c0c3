use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced while loading a dataset document from disk.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be read.
    #[error("could not read dataset at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was read but is not a valid dataset document.
    #[error("could not parse dataset at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
