//! Unit tests for the application pipeline.


use crate::pipeline::domain::{
    ApplicantSnapshot, Job, JobType, StackId, StackRef, SubmissionField, SubmissionFieldKind,
    TaskAssignment, TaskType, UserId,
};
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

/// Clock running at a fixed offset from wall time.
#[derive(Debug, Clone, Copy)]
pub(super) struct ShiftedClock {
    offset: TimeDelta,
}

impl ShiftedClock {
    pub(super) fn days_ahead(days: i64) -> Self {
        Self {
            offset: TimeDelta::days(days),
        }
    }
}

impl Clock for ShiftedClock {
    fn local(&self) -> DateTime<Local> {
        Local::now() + self.offset
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc::now() + self.offset
    }
}

pub(super) fn developer_job(stack: StackId) -> Job {
    Job::new("Backend Engineer", StackRef::new(stack, "Rust"), JobType::Developer)
}

pub(super) fn applicant(id: UserId) -> ApplicantSnapshot {
    ApplicantSnapshot::new(id, "Ada Lovelace", "ada@example.com").with_phone("+44 20 0000 0000")
}

pub(super) fn github_assignment(deadline_days: u16) -> TaskAssignment {
    TaskAssignment {
        task_type: TaskType::Coding,
        title: "Build a Todo App".to_owned(),
        description: "CRUD over a list of todos".to_owned(),
        requirements: vec!["Use Rust".to_owned(), "   ".to_owned()],
        resources: Vec::new(),
        required_fields: vec![
            SubmissionField::required(SubmissionFieldKind::GithubLink, "GitHub Repository"),
            SubmissionField::optional(SubmissionFieldKind::FileUpload, "Project Files"),
        ],
        deadline_days,
    }
}
