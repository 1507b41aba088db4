//! The slice of a job posting the pipeline reads.

use super::{JobId, StackId, SubmissionField, TaskType};
use serde::{Deserialize, Serialize};

/// Tech stack a job belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRef {
    /// Stack identifier.
    pub id: StackId,
    /// Stack display name.
    pub name: String,
}

impl StackRef {
    /// Creates a stack reference.
    #[must_use]
    pub fn new(id: StackId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Kind of role a job is hiring for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    /// Engineering role.
    Developer,
    /// Design role.
    Designer,
}

impl JobType {
    /// Returns the assessment kind matching the role.
    #[must_use]
    pub const fn task_type(self) -> TaskType {
        match self {
            Self::Developer => TaskType::Coding,
            Self::Designer => TaskType::Design,
        }
    }
}

/// Publication state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Open for applications.
    Active,
    /// Temporarily hidden.
    Paused,
    /// No longer hiring.
    Closed,
}

/// Job posting as seen by the application pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    title: String,
    stack: StackRef,
    job_type: JobType,
    status: JobStatus,
    task_deadline_days: Option<u16>,
    submission_fields: Vec<SubmissionField>,
}

impl Job {
    /// Creates an active job with no task configuration.
    #[must_use]
    pub fn new(title: impl Into<String>, stack: StackRef, job_type: JobType) -> Self {
        Self {
            id: JobId::new(),
            title: title.into(),
            stack,
            job_type,
            status: JobStatus::Active,
            task_deadline_days: None,
            submission_fields: Vec::new(),
        }
    }

    /// Sets the publication state.
    #[must_use]
    pub const fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the default task deadline.
    #[must_use]
    pub const fn with_task_deadline_days(mut self, days: u16) -> Self {
        self.task_deadline_days = Some(days);
        self
    }

    /// Sets the submission fields tasks for this job require.
    #[must_use]
    pub fn with_submission_fields(mut self, fields: impl IntoIterator<Item = SubmissionField>) -> Self {
        self.submission_fields = fields.into_iter().collect();
        self
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the owning stack.
    #[must_use]
    pub const fn stack(&self) -> &StackRef {
        &self.stack
    }

    /// Returns the role kind.
    #[must_use]
    pub const fn job_type(&self) -> JobType {
        self.job_type
    }

    /// Returns the publication state.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Returns the configured task deadline, if any.
    #[must_use]
    pub const fn task_deadline_days(&self) -> Option<u16> {
        self.task_deadline_days
    }

    /// Returns the configured submission fields; empty means "use defaults".
    #[must_use]
    pub fn submission_fields(&self) -> &[SubmissionField] {
        &self.submission_fields
    }
}
