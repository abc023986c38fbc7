//! Error types for batch runs.

use std::path::PathBuf;

use derive_more::{Display, Error};

/// Errors that abort a run before any file is processed.
///
/// Per-file failures are not errors at this level; they are reported as
/// [`crate::FileOutcome::Failed`].
#[derive(Display, Debug, Error)]
pub enum RunError {
    #[display("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[display("failed to start worker pool: {source}")]
    ThreadPool { source: rayon::ThreadPoolBuildError },
}
