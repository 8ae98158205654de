use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{} not found.", .0.display())]
    InputNotFound(PathBuf),

    #[error("{} is not a valid statistics document ({reason}).", .path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// True for problems with the statistics file itself, which are reported
    /// as a single diagnostic line instead of a failure trace.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InputNotFound(_) | AppError::MalformedInput { .. }
        )
    }

    /// True when stdout was closed by the reader, e.g. `setreport | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type AppResult<T> = Result<T, AppError>;
