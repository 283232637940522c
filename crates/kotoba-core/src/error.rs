use std::path::PathBuf;

use crate::store::StoreError;

/// Fatal failures of a note ingestion run, tagged by stage
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read note file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to persist entry from line {line}: {source}")]
    Persist {
        line: usize,
        #[source]
        source: StoreError,
    },
}
