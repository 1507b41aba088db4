//! Assessment task entity and its review sub-state machine.

use super::{ApplicationId, ParseTaskStatusError, PipelineDomainError, TaskId};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Sent, not yet started.
    Pending,
    /// The applicant is working on it.
    InProgress,
    /// The applicant handed it in.
    Submitted,
    /// A reviewer picked it up.
    Reviewing,
    /// Accepted by a reviewer.
    Approved,
    /// Declined by a reviewer.
    Rejected,
}

impl TaskStatus {
    /// Every task status.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::InProgress,
        Self::Submitted,
        Self::Reviewing,
        Self::Approved,
        Self::Rejected,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Submitted => "submitted",
            Self::Reviewing => "reviewing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns whether the applicant can still work on the task.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    /// Returns whether a review decision has been made.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Returns whether the task is handed in and still needs a reviewer's
    /// decision.
    #[must_use]
    pub const fn awaits_decision(self) -> bool {
        matches!(self, Self::Submitted | Self::Reviewing)
    }

    /// Returns whether the task has been handed in, at any later stage.
    #[must_use]
    pub const fn has_submission(self) -> bool {
        !self.is_open()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

/// Reviewer verdict on a submitted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Advance the applicant.
    Approved,
    /// Reject the applicant.
    Rejected,
}

impl ReviewDecision {
    /// Returns the task status the decision produces.
    #[must_use]
    pub const fn task_status(self) -> TaskStatus {
        match self {
            Self::Approved => TaskStatus::Approved,
            Self::Rejected => TaskStatus::Rejected,
        }
    }
}

impl TryFrom<&str> for ReviewDecision {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Kind of assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Programming exercise.
    Coding,
    /// Design exercise.
    Design,
}

/// Input an applicant may have to provide when submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionFieldKind {
    /// Link to a source repository.
    GithubLink,
    /// Link to a deployed demo.
    LiveDemoLink,
    /// Link to a Figma file.
    FigmaLink,
    /// Link to a walkthrough video.
    ProjectVideo,
    /// Uploaded file.
    FileUpload,
}

impl SubmissionFieldKind {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GithubLink => "github_link",
            Self::LiveDemoLink => "live_demo_link",
            Self::FigmaLink => "figma_link",
            Self::ProjectVideo => "project_video",
            Self::FileUpload => "file_upload",
        }
    }
}

impl fmt::Display for SubmissionFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of one submission input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionField {
    /// Input kind.
    pub kind: SubmissionFieldKind,
    /// Label shown to the applicant.
    pub label: String,
    /// Whether submission is refused without it.
    pub required: bool,
}

impl SubmissionField {
    /// Creates a required field.
    #[must_use]
    pub fn required(kind: SubmissionFieldKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            required: true,
        }
    }

    /// Creates an optional field.
    #[must_use]
    pub fn optional(kind: SubmissionFieldKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            required: false,
        }
    }
}

/// Values supplied by the applicant when submitting a task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskSubmission {
    /// Source repository link.
    pub github_link: Option<String>,
    /// Deployed demo link.
    pub live_demo_link: Option<String>,
    /// Figma file link.
    pub figma_link: Option<String>,
    /// Walkthrough video link.
    pub video_link: Option<String>,
    /// Uploaded file reference.
    pub file_url: Option<String>,
    /// Uploaded file name.
    pub file_name: Option<String>,
}

impl TaskSubmission {
    /// Returns the value supplied for `kind`, ignoring blank strings.
    #[must_use]
    pub fn value_for(&self, kind: SubmissionFieldKind) -> Option<&str> {
        let value = match kind {
            SubmissionFieldKind::GithubLink => self.github_link.as_deref(),
            SubmissionFieldKind::LiveDemoLink => self.live_demo_link.as_deref(),
            SubmissionFieldKind::FigmaLink => self.figma_link.as_deref(),
            SubmissionFieldKind::ProjectVideo => self.video_link.as_deref(),
            SubmissionFieldKind::FileUpload => self.file_url.as_deref(),
        };
        value.filter(|text| !text.trim().is_empty())
    }

    /// Returns the required fields of `fields` this submission leaves empty.
    #[must_use]
    pub fn missing_required(&self, fields: &[SubmissionField]) -> Vec<SubmissionFieldKind> {
        fields
            .iter()
            .filter(|field| field.required && self.value_for(field.kind).is_none())
            .map(|field| field.kind)
            .collect()
    }
}

/// Deadline urgency relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "days", rename_all = "snake_case")]
pub enum DeadlineStatus {
    /// The deadline has passed.
    Overdue,
    /// Less than a day (rounded up) remains.
    DueToday,
    /// Whole days remaining, rounded up.
    DaysLeft(i64),
}

impl DeadlineStatus {
    /// Classifies `deadline` as seen at `now`.
    #[must_use]
    pub fn at(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now > deadline {
            return Self::Overdue;
        }
        let remaining = deadline - now;
        let whole_days = remaining.num_days();
        let days_left = if remaining > TimeDelta::days(whole_days) {
            whole_days + 1
        } else {
            whole_days
        };
        if days_left <= 1 {
            Self::DueToday
        } else {
            Self::DaysLeft(days_left)
        }
    }
}

/// Admin-supplied contents of a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAssignment {
    /// Assessment kind.
    pub task_type: TaskType,
    /// Short title.
    pub title: String,
    /// Free-text brief.
    pub description: String,
    /// Requirement bullet points.
    pub requirements: Vec<String>,
    /// Helpful links.
    pub resources: Vec<String>,
    /// Inputs the applicant must or may provide.
    pub required_fields: Vec<SubmissionField>,
    /// Days the applicant has to submit.
    pub deadline_days: u16,
}

/// An assessment assigned to one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentTask {
    id: TaskId,
    application_id: ApplicationId,
    task_type: TaskType,
    title: String,
    description: String,
    requirements: Vec<String>,
    resources: Vec<String>,
    required_fields: Vec<SubmissionField>,
    deadline: DateTime<Utc>,
    deadline_days: u16,
    sent_at: DateTime<Utc>,
    submitted_at: Option<DateTime<Utc>>,
    submission: Option<TaskSubmission>,
    submission_notes: Option<String>,
    status: TaskStatus,
    feedback: Option<String>,
    reviewed_at: Option<DateTime<Utc>>,
}

impl AssessmentTask {
    /// Creates a pending task due `deadline_days` from now.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::EmptyTaskTitle`] for a blank title or
    /// [`PipelineDomainError::InvalidDeadline`] when the deadline is zero or
    /// exceeds `max_deadline_days`.
    pub fn assign(
        application_id: ApplicationId,
        assignment: TaskAssignment,
        max_deadline_days: u16,
        clock: &impl Clock,
    ) -> Result<Self, PipelineDomainError> {
        let TaskAssignment {
            task_type,
            title,
            description,
            requirements,
            resources,
            required_fields,
            deadline_days,
        } = assignment;

        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(PipelineDomainError::EmptyTaskTitle);
        }
        if deadline_days == 0 || deadline_days > max_deadline_days {
            return Err(PipelineDomainError::InvalidDeadline {
                days: deadline_days,
                max: max_deadline_days,
            });
        }

        let sent_at = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            application_id,
            task_type,
            title: trimmed_title.to_owned(),
            description,
            requirements: requirements
                .into_iter()
                .filter(|line| !line.trim().is_empty())
                .collect(),
            resources,
            required_fields,
            deadline: sent_at + TimeDelta::days(i64::from(deadline_days)),
            deadline_days,
            sent_at,
            submitted_at: None,
            submission: None,
            submission_notes: None,
            status: TaskStatus::Pending,
            feedback: None,
            reviewed_at: None,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning application.
    #[must_use]
    pub const fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    /// Returns the assessment kind.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the brief.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the requirement bullet points.
    #[must_use]
    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    /// Returns the resource links.
    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Returns the submission field descriptors.
    #[must_use]
    pub fn required_fields(&self) -> &[SubmissionField] {
        &self.required_fields
    }

    /// Returns the submission deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the deadline length in days.
    #[must_use]
    pub const fn deadline_days(&self) -> u16 {
        self.deadline_days
    }

    /// Returns when the task was sent.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// Returns when the task was submitted.
    #[must_use]
    pub const fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    /// Returns the submitted values.
    #[must_use]
    pub const fn submission(&self) -> Option<&TaskSubmission> {
        self.submission.as_ref()
    }

    /// Returns the applicant's notes.
    #[must_use]
    pub fn submission_notes(&self) -> Option<&str> {
        self.submission_notes.as_deref()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the reviewer feedback.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Returns when the review decision was made.
    #[must_use]
    pub const fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.reviewed_at
    }

    /// Returns the deadline urgency at `now`.
    #[must_use]
    pub fn deadline_status(&self, now: DateTime<Utc>) -> DeadlineStatus {
        DeadlineStatus::at(self.deadline, now)
    }

    /// Returns whether the task is still open past its deadline.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status.is_open() && now > self.deadline
    }

    /// Marks a pending task as started.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::InvalidTaskState`] unless pending.
    pub fn start(&mut self) -> Result<(), PipelineDomainError> {
        self.require(self.status == TaskStatus::Pending, "start")?;
        self.status = TaskStatus::InProgress;
        Ok(())
    }

    /// Records the applicant's submission.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::InvalidTaskState`] unless pending or in
    /// progress, or [`PipelineDomainError::IncompleteSubmission`] when a
    /// required field has no value. The task is unchanged on error.
    pub fn submit(
        &mut self,
        submission: TaskSubmission,
        notes: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), PipelineDomainError> {
        self.require(self.status.is_open(), "submit")?;
        let missing = submission.missing_required(&self.required_fields);
        if !missing.is_empty() {
            return Err(PipelineDomainError::IncompleteSubmission {
                task: self.id,
                missing,
            });
        }
        self.status = TaskStatus::Submitted;
        self.submitted_at = Some(clock.utc());
        self.submission = Some(submission);
        self.submission_notes = notes.filter(|text| !text.trim().is_empty());
        Ok(())
    }

    /// Marks a submitted task as under review.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::InvalidTaskState`] unless submitted.
    pub fn begin_review(&mut self) -> Result<(), PipelineDomainError> {
        self.require(self.status == TaskStatus::Submitted, "begin review")?;
        self.status = TaskStatus::Reviewing;
        Ok(())
    }

    /// Records the review decision.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineDomainError::InvalidTaskState`] unless submitted or
    /// under review.
    pub fn review(
        &mut self,
        decision: ReviewDecision,
        feedback: Option<String>,
        clock: &impl Clock,
    ) -> Result<(), PipelineDomainError> {
        self.require(self.status.awaits_decision(), "be reviewed")?;
        self.status = decision.task_status();
        self.feedback = feedback.filter(|text| !text.trim().is_empty());
        self.reviewed_at = Some(clock.utc());
        Ok(())
    }

    fn require(
        &self,
        allowed: bool,
        operation: &'static str,
    ) -> Result<(), PipelineDomainError> {
        if allowed {
            Ok(())
        } else {
            Err(PipelineDomainError::InvalidTaskState {
                task: self.id,
                status: self.status,
                operation,
            })
        }
    }
}
