//! Service-level error type and its coarse classification.

use crate::access::AccessError;
use crate::pipeline::{
    domain::{ApplicationId, JobId, ParseStatusError, PipelineDomainError},
    ports::{ApplicationRepositoryError, JobRepositoryError},
};
use thiserror::Error;

/// Service-level errors for pipeline operations.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The application does not exist.
    #[error("application not found: {0}")]
    ApplicationNotFound(ApplicationId),

    /// The job does not exist.
    #[error("job not found: {0}")]
    JobNotFound(JobId),

    /// The job is paused or closed.
    #[error("job {0} is not accepting applications")]
    JobNotAccepting(JobId),

    /// The requested status is not a known internal status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseStatusError),

    /// Authorization failed.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PipelineDomainError),

    /// Application repository operation failed.
    #[error(transparent)]
    Repository(#[from] ApplicationRepositoryError),

    /// Job repository operation failed.
    #[error(transparent)]
    JobRepository(#[from] JobRepositoryError),
}

/// Result type for pipeline service operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Coarse error classification for callers rendering errors inline.
///
/// None of these are transient; callers should not retry automatically
/// except on [`PipelineErrorKind::Persistence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineErrorKind {
    /// A referenced application, task, or job does not exist.
    NotFound,
    /// The actor lacks the required capability or ownership.
    PermissionDenied,
    /// The status value is outside the enumeration.
    InvalidStatus,
    /// A task was sent to a hired or rejected application.
    ApplicationTerminal,
    /// A second task was sent before the first was reviewed.
    TaskAlreadyActive,
    /// A submission lacked a required field.
    IncompleteSubmission,
    /// The task is in the wrong state for the operation.
    InvalidTaskState,
    /// The configured transition policy refused the change.
    TransitionNotAllowed,
    /// A request field failed validation.
    InvalidInput,
    /// The applicant already applied to the job.
    DuplicateApplication,
    /// The job is not open for applications.
    JobNotAccepting,
    /// The storage layer failed.
    Persistence,
}

impl PipelineError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> PipelineErrorKind {
        match self {
            Self::ApplicationNotFound(_)
            | Self::JobNotFound(_)
            | Self::Domain(PipelineDomainError::NoTask(_))
            | Self::Repository(ApplicationRepositoryError::NotFound(_)) => {
                PipelineErrorKind::NotFound
            }
            Self::JobNotAccepting(_) => PipelineErrorKind::JobNotAccepting,
            Self::InvalidStatus(_) => PipelineErrorKind::InvalidStatus,
            Self::Domain(
                PipelineDomainError::EmptyTaskTitle
                | PipelineDomainError::InvalidDeadline { .. }
                | PipelineDomainError::InvalidRating(_),
            ) => PipelineErrorKind::InvalidInput,
            Self::Access(_) => PipelineErrorKind::PermissionDenied,
            Self::Domain(PipelineDomainError::ApplicationTerminal { .. }) => {
                PipelineErrorKind::ApplicationTerminal
            }
            Self::Domain(PipelineDomainError::TaskAlreadyActive { .. }) => {
                PipelineErrorKind::TaskAlreadyActive
            }
            Self::Domain(PipelineDomainError::IncompleteSubmission { .. }) => {
                PipelineErrorKind::IncompleteSubmission
            }
            Self::Domain(PipelineDomainError::InvalidTaskState { .. }) => {
                PipelineErrorKind::InvalidTaskState
            }
            Self::Domain(PipelineDomainError::TransitionNotAllowed { .. }) => {
                PipelineErrorKind::TransitionNotAllowed
            }
            Self::Repository(ApplicationRepositoryError::DuplicateApplication { .. }) => {
                PipelineErrorKind::DuplicateApplication
            }
            Self::Repository(ApplicationRepositoryError::Persistence(_))
            | Self::JobRepository(_) => PipelineErrorKind::Persistence,
        }
    }
}
