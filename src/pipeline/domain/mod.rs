//! Domain model for the application pipeline.
//!
//! Applications carry an internal status and at most one active assessment
//! task. All infrastructure concerns stay outside this boundary.

mod application;
mod error;
pub(crate) mod ids;
mod job;
mod status;
mod task;
mod view;

pub use application::{
    ApplicantSnapshot, Application, CvReference, JobSnapshot, Rating,
};
pub use error::{ParseStatusError, ParseTaskStatusError, PipelineDomainError};
pub use ids::{ApplicationId, JobId, StackId, TaskId, UserId};
pub use job::{Job, JobStatus, JobType, StackRef};
pub use status::{
    ExternalApplicationStatus, InternalApplicationStatus, StatusProjection,
    StatusTransitionPolicy, project_status,
};
pub use task::{
    AssessmentTask, DeadlineStatus, ReviewDecision, SubmissionField, SubmissionFieldKind,
    TaskAssignment, TaskStatus, TaskSubmission, TaskType,
};
pub use view::ApplicantApplicationView;
