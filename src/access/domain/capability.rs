//! Named boolean permissions held by admin actors.

use super::ParseCapabilityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single permission an actor may or may not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// Create job postings.
    PostJobs,
    /// Edit job postings.
    EditJobs,
    /// Delete job postings.
    DeleteJobs,
    /// Change an application's internal status.
    ChangeApplicationStatus,
    /// Send assessment tasks to applicants.
    SendTasks,
    /// Approve or reject submitted tasks.
    ReviewTasks,
    /// See applicant contact details and annotate applications.
    ViewApplicantDetails,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::PostJobs,
        Self::EditJobs,
        Self::DeleteJobs,
        Self::ChangeApplicationStatus,
        Self::SendTasks,
        Self::ReviewTasks,
        Self::ViewApplicantDetails,
    ];

    /// Returns the canonical flag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PostJobs => "canPostJobs",
            Self::EditJobs => "canEditJobs",
            Self::DeleteJobs => "canDeleteJobs",
            Self::ChangeApplicationStatus => "canChangeApplicationStatus",
            Self::SendTasks => "canSendTasks",
            Self::ReviewTasks => "canReviewTasks",
            Self::ViewApplicantDetails => "canViewApplicantDetails",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Capability {
    type Error = ParseCapabilityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|capability| capability.as_str() == trimmed)
            .ok_or_else(|| ParseCapabilityError(value.to_owned()))
    }
}

/// Capability record attached to an actor.
///
/// Serialises with the flag names used by admin invites, so a stored invite
/// round-trips without a translation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[expect(
    clippy::struct_excessive_bools,
    reason = "capabilities are independent flat permission flags"
)]
pub struct Capabilities {
    can_post_jobs: bool,
    can_edit_jobs: bool,
    can_delete_jobs: bool,
    can_change_application_status: bool,
    can_send_tasks: bool,
    can_review_tasks: bool,
    can_view_applicant_details: bool,
}

impl Capabilities {
    /// Returns a record granting every capability.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            can_post_jobs: true,
            can_edit_jobs: true,
            can_delete_jobs: true,
            can_change_application_status: true,
            can_send_tasks: true,
            can_review_tasks: true,
            can_view_applicant_details: true,
        }
    }

    /// Returns a record granting nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            can_post_jobs: false,
            can_edit_jobs: false,
            can_delete_jobs: false,
            can_change_application_status: false,
            can_send_tasks: false,
            can_review_tasks: false,
            can_view_applicant_details: false,
        }
    }

    /// Returns a copy with one capability set to `granted`.
    #[must_use]
    pub const fn with(mut self, capability: Capability, granted: bool) -> Self {
        *self.flag_mut(capability) = granted;
        self
    }

    /// Returns whether the capability is granted.
    #[must_use]
    pub const fn grants(&self, capability: Capability) -> bool {
        match capability {
            Capability::PostJobs => self.can_post_jobs,
            Capability::EditJobs => self.can_edit_jobs,
            Capability::DeleteJobs => self.can_delete_jobs,
            Capability::ChangeApplicationStatus => self.can_change_application_status,
            Capability::SendTasks => self.can_send_tasks,
            Capability::ReviewTasks => self.can_review_tasks,
            Capability::ViewApplicantDetails => self.can_view_applicant_details,
        }
    }

    /// Returns the granted capabilities.
    pub fn granted(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.grants(*capability))
    }

    const fn flag_mut(&mut self, capability: Capability) -> &mut bool {
        match capability {
            Capability::PostJobs => &mut self.can_post_jobs,
            Capability::EditJobs => &mut self.can_edit_jobs,
            Capability::DeleteJobs => &mut self.can_delete_jobs,
            Capability::ChangeApplicationStatus => &mut self.can_change_application_status,
            Capability::SendTasks => &mut self.can_send_tasks,
            Capability::ReviewTasks => &mut self.can_review_tasks,
            Capability::ViewApplicantDetails => &mut self.can_view_applicant_details,
        }
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::none(), |acc, capability| acc.with(capability, true))
    }
}
