//! Application aggregate root.
//!
//! The aggregate owns the internal status and the embedded task. The
//! applicant-facing status is never stored; [`Application::external_status`]
//! derives it on demand.

use super::{
    project_status, ApplicationId, AssessmentTask, InternalApplicationStatus, Job, JobId,
    PipelineDomainError, ReviewDecision, StackId, StatusProjection, StatusTransitionPolicy,
    TaskAssignment, TaskSubmission, UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Job details captured when the application was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    /// Job identifier.
    pub job_id: JobId,
    /// Job title.
    pub title: String,
    /// Owning stack identifier.
    pub stack_id: StackId,
    /// Owning stack name.
    pub stack_name: String,
}

impl From<&Job> for JobSnapshot {
    fn from(job: &Job) -> Self {
        Self {
            job_id: job.id(),
            title: job.title().to_owned(),
            stack_id: job.stack().id,
            stack_name: job.stack().name.clone(),
        }
    }
}

/// Applicant details captured when the application was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantSnapshot {
    /// Applicant user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email; `None` once redacted.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
}

impl ApplicantSnapshot {
    /// Creates a snapshot with email but no phone.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: Some(email.into()),
            phone: None,
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Uploaded CV reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvReference {
    /// Where the file is stored.
    pub url: String,
    /// Original file name.
    pub file_name: String,
}

/// Admin rating between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Creates a validated rating.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::InvalidRating`] outside 1..=5.
    pub const fn new(value: u8) -> Result<Self, PipelineDomainError> {
        if value == 0 || value > 5 {
            return Err(PipelineDomainError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = PipelineDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// One job seeker's application to one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    job: JobSnapshot,
    applicant: ApplicantSnapshot,
    cover_letter: Option<String>,
    cv: Option<CvReference>,
    status: InternalApplicationStatus,
    task: Option<AssessmentTask>,
    task_history: Vec<AssessmentTask>,
    admin_notes: Option<String>,
    rating: Option<Rating>,
    applied_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Application {
    /// Creates a freshly submitted application in the `applied` status.
    #[must_use]
    pub fn submit(job: &Job, applicant: ApplicantSnapshot, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ApplicationId::new(),
            job: JobSnapshot::from(job),
            applicant,
            cover_letter: None,
            cv: None,
            status: InternalApplicationStatus::Applied,
            task: None,
            task_history: Vec::new(),
            admin_notes: None,
            rating: None,
            applied_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Attaches a cover letter.
    #[must_use]
    pub fn with_cover_letter(mut self, cover_letter: impl Into<String>) -> Self {
        self.cover_letter = Some(cover_letter.into());
        self
    }

    /// Attaches a CV reference.
    #[must_use]
    pub fn with_cv(mut self, cv: CvReference) -> Self {
        self.cv = Some(cv);
        self
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> ApplicationId {
        self.id
    }

    /// Returns the job snapshot.
    #[must_use]
    pub const fn job(&self) -> &JobSnapshot {
        &self.job
    }

    /// Returns the owning stack.
    #[must_use]
    pub const fn stack_id(&self) -> StackId {
        self.job.stack_id
    }

    /// Returns the applicant snapshot.
    #[must_use]
    pub const fn applicant(&self) -> &ApplicantSnapshot {
        &self.applicant
    }

    /// Returns the cover letter.
    #[must_use]
    pub fn cover_letter(&self) -> Option<&str> {
        self.cover_letter.as_deref()
    }

    /// Returns the CV reference.
    #[must_use]
    pub const fn cv(&self) -> Option<&CvReference> {
        self.cv.as_ref()
    }

    /// Returns the internal status.
    #[must_use]
    pub const fn status(&self) -> InternalApplicationStatus {
        self.status
    }

    /// Returns the applicant-facing status.
    #[must_use]
    pub const fn external_status(&self) -> StatusProjection {
        project_status(self.status)
    }

    /// Returns the current task.
    #[must_use]
    pub const fn task(&self) -> Option<&AssessmentTask> {
        self.task.as_ref()
    }

    /// Returns tasks replaced by later ones, oldest first.
    #[must_use]
    pub fn task_history(&self) -> &[AssessmentTask] {
        &self.task_history
    }

    /// Returns the admin notes.
    #[must_use]
    pub fn admin_notes(&self) -> Option<&str> {
        self.admin_notes.as_deref()
    }

    /// Returns the admin rating.
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a copy without the applicant's email and phone.
    #[must_use]
    pub fn with_redacted_contact(mut self) -> Self {
        self.applicant.email = None;
        self.applicant.phone = None;
        self
    }

    /// Replaces the internal status.
    ///
    /// Setting the current status again is accepted and only refreshes
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::TransitionNotAllowed`] when `policy`
    /// refuses the change.
    pub fn set_status(
        &mut self,
        status: InternalApplicationStatus,
        policy: StatusTransitionPolicy,
        clock: &impl Clock,
    ) -> Result<(), PipelineDomainError> {
        if !policy.permits(self.status, status) {
            return Err(PipelineDomainError::TransitionNotAllowed {
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        self.touch(clock);
        Ok(())
    }

    /// Assigns a new task and moves the application to `task_sent`.
    ///
    /// A previous task is archived in the task history; only a reviewed task
    /// may be replaced.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::ApplicationTerminal`] for hired or
    /// rejected applications, [`PipelineDomainError::TaskAlreadyActive`]
    /// when the current task has no review decision, or a task validation
    /// error from [`AssessmentTask::assign`].
    pub fn assign_task(
        &mut self,
        assignment: TaskAssignment,
        max_deadline_days: u16,
        clock: &impl Clock,
    ) -> Result<&AssessmentTask, PipelineDomainError> {
        if self.status.is_terminal() {
            return Err(PipelineDomainError::ApplicationTerminal {
                application: self.id,
                status: self.status,
            });
        }
        if let Some(active) = self.task.as_ref().filter(|task| !task.status().is_terminal()) {
            return Err(PipelineDomainError::TaskAlreadyActive {
                application: self.id,
                task: active.id(),
            });
        }

        let task = AssessmentTask::assign(self.id, assignment, max_deadline_days, clock)?;
        if let Some(previous) = self.task.replace(task) {
            self.task_history.push(previous);
        }
        self.status = InternalApplicationStatus::TaskSent;
        self.touch(clock);
        self.task
            .as_ref()
            .ok_or(PipelineDomainError::NoTask(self.id))
    }

    /// Marks the current task as started. The application status is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::NoTask`] or the task's state error.
    pub fn start_task(&mut self, clock: &impl Clock) -> Result<(), PipelineDomainError> {
        self.task_mut()?.start()?;
        self.touch(clock);
        Ok(())
    }

    /// Records the applicant's submission and moves to `task_submitted`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::NoTask`], a task state error, or
    /// [`PipelineDomainError::IncompleteSubmission`]. Nothing changes on
    /// error.
    pub fn submit_task(
        &mut self,
        submission: TaskSubmission,
        notes: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), PipelineDomainError> {
        self.task_mut()?.submit(submission, notes, clock)?;
        self.status = InternalApplicationStatus::TaskSubmitted;
        self.touch(clock);
        Ok(())
    }

    /// Marks the submitted task as under review and moves to `task_reviewing`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::NoTask`] or the task's state error.
    pub fn begin_task_review(&mut self, clock: &impl Clock) -> Result<(), PipelineDomainError> {
        self.task_mut()?.begin_review()?;
        self.status = InternalApplicationStatus::TaskReviewing;
        self.touch(clock);
        Ok(())
    }

    /// Records the review decision and advances the application.
    ///
    /// Approval moves the application to `interview`; rejection moves it to
    /// `rejected`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::NoTask`] or the task's state error.
    pub fn review_task(
        &mut self,
        decision: ReviewDecision,
        feedback: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), PipelineDomainError> {
        self.task_mut()?.review(decision, feedback, clock)?;
        self.status = match decision {
            ReviewDecision::Approved => InternalApplicationStatus::Interview,
            ReviewDecision::Rejected => InternalApplicationStatus::Rejected,
        };
        self.touch(clock);
        Ok(())
    }

    /// Replaces the admin-only annotations.
    pub fn annotate(&mut self, notes: Option<String>, rating: Option<Rating>, clock: &impl Clock) {
        self.admin_notes = notes.filter(|text| !text.trim().is_empty());
        self.rating = rating;
        self.touch(clock);
    }

    fn task_mut(&mut self) -> Result<&mut AssessmentTask, PipelineDomainError> {
        let id = self.id;
        self.task.as_mut().ok_or(PipelineDomainError::NoTask(id))
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
