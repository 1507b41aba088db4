//! Error types for pipeline domain validation and parsing.

use super::{ApplicationId, InternalApplicationStatus, SubmissionFieldKind, TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned by application and task aggregate operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineDomainError {
    /// A task cannot be sent because the application is hired or rejected.
    #[error("application {application} is terminal ({status})")]
    ApplicationTerminal {
        /// Affected application.
        application: ApplicationId,
        /// Current terminal status.
        status: InternalApplicationStatus,
    },

    /// The application already has a task that has not been resolved.
    #[error("application {application} already has active task {task}")]
    TaskAlreadyActive {
        /// Affected application.
        application: ApplicationId,
        /// The unresolved task.
        task: TaskId,
    },

    /// The application has no task to act on.
    #[error("application {0} has no task")]
    NoTask(ApplicationId),

    /// The task is not in a state that permits the requested operation.
    #[error("task {task} cannot {operation} while {status}")]
    InvalidTaskState {
        /// Affected task.
        task: TaskId,
        /// Current task status.
        status: TaskStatus,
        /// Attempted operation.
        operation: &'static str,
    },

    /// The submission payload lacks one or more required fields.
    #[error("submission for task {task} is missing required fields: {missing:?}")]
    IncompleteSubmission {
        /// Affected task.
        task: TaskId,
        /// Required fields without a value.
        missing: Vec<SubmissionFieldKind>,
    },

    /// The configured transition policy forbids the status change.
    #[error("transition from {from} to {to} is not allowed")]
    TransitionNotAllowed {
        /// Current status.
        from: InternalApplicationStatus,
        /// Requested status.
        to: InternalApplicationStatus,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task deadline is outside the accepted range.
    #[error("task deadline of {days} days is outside 1..={max}")]
    InvalidDeadline {
        /// Requested deadline in days.
        days: u16,
        /// Largest accepted deadline.
        max: u16,
    },

    /// The rating is outside 1..=5.
    #[error("rating {0} is outside 1..=5")]
    InvalidRating(u8),
}

/// Error returned while parsing an internal application status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown application status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing a task status or review decision.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
