// ABOUTME: Application-wide error types for klir.
// ABOUTME: Uses thiserror for ergonomic error handling and maps errors to exit codes.

use crate::cleanup::{QueryError, SelectError};
use crate::runtime::{RuntimeError, RuntimeErrorKind};
use thiserror::Error;

/// Exit code for an aborted prompt, as for an interrupted command.
pub const EXIT_CANCELLED: i32 = 130;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Select(#[from] SelectError),
}

impl Error {
    /// Whether the user aborted the selection prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Select(SelectError::Cancelled))
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_cancelled() { EXIT_CANCELLED } else { 1 }
    }

    /// Advice printed after the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Runtime(e) => Some(match e.kind() {
                RuntimeErrorKind::NoRuntimeFound => {
                    "Check that Docker or Podman is installed and running."
                }
                RuntimeErrorKind::UnsupportedHost => {
                    "Set --host or DOCKER_HOST to a unix://, tcp:// or http:// address."
                }
                RuntimeErrorKind::ConnectionFailed => {
                    "Check that the daemon is running and that --host or DOCKER_HOST points at it."
                }
            }),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
