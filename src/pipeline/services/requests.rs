//! Request payloads for pipeline operations.

use crate::config::PipelineConfig;
use crate::pipeline::domain::{
    ApplicantSnapshot, ApplicationId, CvReference, Job, JobId, ReviewDecision, SubmissionField,
    TaskAssignment, TaskSubmission, TaskType,
};

/// Request payload for applying to a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitApplicationRequest {
    pub(super) job_id: JobId,
    pub(super) applicant: ApplicantSnapshot,
    pub(super) cover_letter: Option<String>,
    pub(super) cv: Option<CvReference>,
}

impl SubmitApplicationRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub const fn new(job_id: JobId, applicant: ApplicantSnapshot) -> Self {
        Self {
            job_id,
            applicant,
            cover_letter: None,
            cv: None,
        }
    }

    /// Sets the cover letter.
    #[must_use]
    pub fn with_cover_letter(mut self, cover_letter: impl Into<String>) -> Self {
        self.cover_letter = Some(cover_letter.into());
        self
    }

    /// Sets the CV reference.
    #[must_use]
    pub fn with_cv(mut self, url: impl Into<String>, file_name: impl Into<String>) -> Self {
        self.cv = Some(CvReference {
            url: url.into(),
            file_name: file_name.into(),
        });
        self
    }
}

/// Request payload for changing an application's internal status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetApplicationStatusRequest {
    pub(super) application_id: ApplicationId,
    pub(super) status: String,
}

impl SetApplicationStatusRequest {
    /// Creates a request; the status is parsed when the request is handled.
    #[must_use]
    pub fn new(application_id: ApplicationId, status: impl Into<String>) -> Self {
        Self {
            application_id,
            status: status.into(),
        }
    }
}

/// Request payload for replacing admin annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateApplicationRequest {
    pub(super) application_id: ApplicationId,
    pub(super) notes: Option<String>,
    pub(super) rating: Option<u8>,
}

impl AnnotateApplicationRequest {
    /// Creates a request clearing both annotations.
    #[must_use]
    pub const fn new(application_id: ApplicationId) -> Self {
        Self {
            application_id,
            notes: None,
            rating: None,
        }
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the rating; validated when the request is handled.
    #[must_use]
    pub const fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Request payload for sending a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTaskRequest {
    pub(super) application_id: ApplicationId,
    title: String,
    description: String,
    requirements: Vec<String>,
    resources: Vec<String>,
    required_fields: Option<Vec<SubmissionField>>,
    deadline_days: Option<u16>,
}

impl SendTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(application_id: ApplicationId, title: impl Into<String>) -> Self {
        Self {
            application_id,
            title: title.into(),
            description: String::new(),
            requirements: Vec::new(),
            resources: Vec::new(),
            required_fields: None,
            deadline_days: None,
        }
    }

    /// Sets the brief.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the requirement bullet points.
    #[must_use]
    pub fn with_requirements(mut self, requirements: impl IntoIterator<Item = String>) -> Self {
        self.requirements = requirements.into_iter().collect();
        self
    }

    /// Sets the resource links.
    #[must_use]
    pub fn with_resources(mut self, resources: impl IntoIterator<Item = String>) -> Self {
        self.resources = resources.into_iter().collect();
        self
    }

    /// Overrides the job's submission fields.
    #[must_use]
    pub fn with_required_fields(
        mut self,
        fields: impl IntoIterator<Item = SubmissionField>,
    ) -> Self {
        self.required_fields = Some(fields.into_iter().collect());
        self
    }

    /// Overrides the job's deadline.
    #[must_use]
    pub const fn with_deadline_days(mut self, days: u16) -> Self {
        self.deadline_days = Some(days);
        self
    }

    /// Resolves the task contents: request overrides first, then the job,
    /// then configured defaults.
    pub(super) fn into_assignment(
        self,
        job: Option<&Job>,
        config: &PipelineConfig,
    ) -> TaskAssignment {
        let job_fields = job
            .map(Job::submission_fields)
            .filter(|fields| !fields.is_empty());
        let required_fields = self
            .required_fields
            .or_else(|| job_fields.map(<[SubmissionField]>::to_vec))
            .unwrap_or_else(|| config.default_submission_fields.clone());
        let deadline_days = self
            .deadline_days
            .or_else(|| job.and_then(Job::task_deadline_days))
            .unwrap_or(config.default_deadline_days);
        let task_type = job.map_or(TaskType::Coding, |found| found.job_type().task_type());

        TaskAssignment {
            task_type,
            title: self.title,
            description: self.description,
            requirements: self.requirements,
            resources: self.resources,
            required_fields,
            deadline_days,
        }
    }
}

/// Request payload for an applicant's task submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTaskRequest {
    pub(super) application_id: ApplicationId,
    pub(super) submission: TaskSubmission,
    pub(super) notes: Option<String>,
}

impl SubmitTaskRequest {
    /// Creates a request with the submitted values.
    #[must_use]
    pub const fn new(application_id: ApplicationId, submission: TaskSubmission) -> Self {
        Self {
            application_id,
            submission,
            notes: None,
        }
    }

    /// Sets the applicant's notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Request payload for a review decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTaskRequest {
    pub(super) application_id: ApplicationId,
    pub(super) decision: ReviewDecision,
    pub(super) feedback: Option<String>,
}

impl ReviewTaskRequest {
    /// Creates a request with the reviewer's decision.
    #[must_use]
    pub const fn new(application_id: ApplicationId, decision: ReviewDecision) -> Self {
        Self {
            application_id,
            decision,
            feedback: None,
        }
    }

    /// Sets the reviewer feedback.
    #[must_use]
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}
