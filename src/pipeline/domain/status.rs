//! Internal and applicant-facing application statuses.
//!
//! Admins see the full [`InternalApplicationStatus`]. Applicants only ever
//! see the coarse [`ExternalApplicationStatus`] produced by
//! [`project_status`], which is derived on every read and never stored.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Admin-visible application pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternalApplicationStatus {
    /// Application received.
    Applied,
    /// Initial screening by an admin.
    Screening,
    /// Shortlisted as a promising candidate.
    Potential,
    /// Parked while the team decides.
    Waiting,
    /// Leaning towards rejection.
    PotentiallyRejected,
    /// Assessment task sent.
    TaskSent,
    /// Applicant submitted the task.
    TaskSubmitted,
    /// Task under review.
    TaskReviewing,
    /// Handed over to HR.
    ForwardedToHr,
    /// Interview stage.
    Interview,
    /// Offer extended.
    Offered,
    /// Applicant hired.
    Hired,
    /// Application rejected.
    Rejected,
}

impl InternalApplicationStatus {
    /// Every internal status, in pipeline order with `Rejected` last.
    pub const ALL: [Self; 13] = [
        Self::Applied,
        Self::Screening,
        Self::Potential,
        Self::Waiting,
        Self::PotentiallyRejected,
        Self::TaskSent,
        Self::TaskSubmitted,
        Self::TaskReviewing,
        Self::ForwardedToHr,
        Self::Interview,
        Self::Offered,
        Self::Hired,
        Self::Rejected,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::Potential => "potential",
            Self::Waiting => "waiting",
            Self::PotentiallyRejected => "potentially_rejected",
            Self::TaskSent => "task_sent",
            Self::TaskSubmitted => "task_submitted",
            Self::TaskReviewing => "task_reviewing",
            Self::ForwardedToHr => "forwarded_to_hr",
            Self::Interview => "interview",
            Self::Offered => "offered",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    /// Returns the admin-facing display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::Potential => "Potential",
            Self::Waiting => "Waiting",
            Self::PotentiallyRejected => "Potentially Rejected",
            Self::TaskSent => "Task Sent",
            Self::TaskSubmitted => "Task Submitted",
            Self::TaskReviewing => "Task Review",
            Self::ForwardedToHr => "Forwarded to HR",
            Self::Interview => "Interview",
            Self::Offered => "Offered",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns whether the status is a final outcome.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Hired | Self::Rejected)
    }
}

impl fmt::Display for InternalApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InternalApplicationStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseStatusError(value.to_owned()))
    }
}

/// Coarse applicant-facing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalApplicationStatus {
    /// Received, not yet looked at.
    Pending,
    /// Being reviewed.
    InReview,
    /// A task awaits the applicant.
    TaskAssigned,
    /// The applicant's task was received.
    TaskSubmitted,
    /// Still in progress on the employer's side.
    Waiting,
    /// Hired.
    Hired,
    /// Not selected.
    Rejected,
}

impl ExternalApplicationStatus {
    /// Every external status.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::InReview,
        Self::TaskAssigned,
        Self::TaskSubmitted,
        Self::Waiting,
        Self::Hired,
        Self::Rejected,
    ];

    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InReview => "in_review",
            Self::TaskAssigned => "task_assigned",
            Self::TaskSubmitted => "task_submitted",
            Self::Waiting => "waiting",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    /// Returns the applicant-facing display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InReview => "In Review",
            Self::TaskAssigned => "Task Assigned",
            Self::TaskSubmitted => "Task Submitted",
            Self::Waiting => "Waiting",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns the badge colour tag.
    #[must_use]
    pub const fn color_tag(self) -> &'static str {
        match self {
            Self::Pending => "gray",
            Self::InReview => "blue",
            Self::TaskAssigned => "amber",
            Self::TaskSubmitted => "indigo",
            Self::Waiting => "purple",
            Self::Hired => "green",
            Self::Rejected => "red",
        }
    }
}

impl fmt::Display for ExternalApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render-ready applicant-facing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusProjection {
    /// Coarse external status.
    pub external: ExternalApplicationStatus,
    /// Display label.
    pub label: &'static str,
    /// Badge colour tag.
    pub color_tag: &'static str,
}

/// Projects an internal status onto what the applicant may see.
///
/// Total over every internal status. Only `Hired` and `Rejected` reveal an
/// outcome; every other admin-side stage collapses into a progress state.
#[must_use]
pub const fn project_status(internal: InternalApplicationStatus) -> StatusProjection {
    use ExternalApplicationStatus as External;
    use InternalApplicationStatus as Internal;

    let external = match internal {
        Internal::Applied => External::Pending,
        Internal::Screening | Internal::Potential | Internal::PotentiallyRejected => {
            External::InReview
        }
        Internal::TaskSent => External::TaskAssigned,
        Internal::TaskSubmitted => External::TaskSubmitted,
        Internal::Waiting
        | Internal::TaskReviewing
        | Internal::ForwardedToHr
        | Internal::Interview
        | Internal::Offered => External::Waiting,
        Internal::Hired => External::Hired,
        Internal::Rejected => External::Rejected,
    };
    StatusProjection {
        external,
        label: external.label(),
        color_tag: external.color_tag(),
    }
}

/// Rule set deciding which manual status changes are accepted.
///
/// `Permissive` accepts any change, matching how operators have always been
/// able to pick any stage. `LockTerminal` refuses to move an application out
/// of `Hired` or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTransitionPolicy {
    /// Any status may follow any other.
    #[default]
    Permissive,
    /// Terminal statuses cannot be left.
    LockTerminal,
}

impl StatusTransitionPolicy {
    /// Returns whether the policy accepts moving from `from` to `to`.
    #[must_use]
    pub fn permits(
        self,
        from: InternalApplicationStatus,
        to: InternalApplicationStatus,
    ) -> bool {
        match self {
            Self::Permissive => true,
            Self::LockTerminal => !from.is_terminal() || from == to,
        }
    }
}
