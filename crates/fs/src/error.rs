use std::{io, path::PathBuf};

/// Failures surfaced to the user. Anything else is handled per entry.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("malformed invocation")]
    Usage,

    #[error("directory not found: {}", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write listing: {0}")]
    Output(#[from] io::Error),
}
