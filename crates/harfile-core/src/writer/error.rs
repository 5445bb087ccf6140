//! Error type for the HAR writer.

use std::io;
use std::path::PathBuf;

/// Failure of a [`HarWriter`](super::HarWriter) call.
///
/// `Closed`, `MetadataFrozen` and `Create` are usage errors. After an `Io`
/// fault the writer is `Failed` and every later call returns
/// [`HarError::Failed`]. A `Json` error is raised before anything reaches the
/// sink, so the writer stays usable.
#[derive(Debug, thiserror::Error)]
pub enum HarError {
    #[error("HAR writer is closed; no more entries can be added")]
    Closed,
    #[error("HAR metadata is fixed once the document has been started")]
    MetadataFrozen,
    #[error("HAR writer is unusable after an earlier write failure")]
    Failed,
    #[error("failed to create HAR file: {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("HAR sink write failed")]
    Io(#[from] io::Error),
    #[error("failed to serialize HAR value")]
    Json(#[from] serde_json::Error),
}

impl HarError {
    /// True for faults raised by the sink or the serializer, as opposed to
    /// misuse of the writer.
    pub fn is_fault(&self) -> bool {
        matches!(self, HarError::Io(_) | HarError::Json(_))
    }
}
