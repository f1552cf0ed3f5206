//! Error handling for SliceKit
//!
//! The geometry and G-code functions are total and never return errors.
//! These types cover the outer boundaries only:
//! - Job errors (deferred generation tasks)
//! - I/O errors (reading and writing G-code files)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Job error type
///
/// Represents failures of a deferred generation job, as opposed to
/// failures inside the pipeline itself (which has none).
#[derive(Error, Debug, Clone)]
pub enum JobError {
    /// The background task panicked or was aborted before finishing
    #[error("Generation task failed: {reason}")]
    TaskFailed {
        /// The reason reported by the task runtime.
        reason: String,
    },

    /// The job configuration was rejected before generation started
    #[error("Invalid job: {reason}")]
    InvalidJob {
        /// The reason the job was rejected.
        reason: String,
    },
}

/// Main error type for SliceKit
///
/// A unified error type for the application boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Job error
    #[error(transparent)]
    Job(#[from] JobError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

}

impl Error {
    /// Check if this is a job error
    pub fn is_job_error(&self) -> bool {
        matches!(self, Error::Job(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
