//! Applicant-facing read model.

use super::{Application, ApplicationId, AssessmentTask, StatusProjection};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What an applicant sees of their own application.
///
/// Carries the projected status only. Internal status, admin notes, and the
/// rating never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantApplicationView {
    /// Application identifier.
    pub application_id: ApplicationId,
    /// Job title.
    pub job_title: String,
    /// Stack name.
    pub stack_name: String,
    /// Projected status.
    pub status: StatusProjection,
    /// Current task, including reviewer feedback.
    pub task: Option<AssessmentTask>,
    /// Submission timestamp.
    pub applied_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Application> for ApplicantApplicationView {
    fn from(application: &Application) -> Self {
        Self {
            application_id: application.id(),
            job_title: application.job().title.clone(),
            stack_name: application.job().stack_name.clone(),
            status: application.external_status(),
            task: application.task().cloned(),
            applied_at: application.applied_at(),
            updated_at: application.updated_at(),
        }
    }
}
