//! Acting users supplied by the identity layer.

use super::Capabilities;
use crate::pipeline::domain::{StackId, UserId};
use serde::{Deserialize, Serialize};

/// Role of an acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// Applicant browsing and applying to jobs.
    JobSeeker,
    /// Admin scoped to a set of tech stacks.
    StackAdmin,
    /// Admin with unrestricted access.
    SuperAdmin,
}

impl ActorRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JobSeeker => "job_seeker",
            Self::StackAdmin => "stack_admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Returns whether the role is one of the admin roles.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::StackAdmin | Self::SuperAdmin)
    }
}

/// An authenticated user performing an operation.
///
/// Authentication happens elsewhere; the pipeline only checks the
/// capabilities and stack assignments carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    id: UserId,
    role: ActorRole,
    assigned_stacks: Vec<StackId>,
    capabilities: Capabilities,
}

impl Actor {
    /// Creates a job seeker. Job seekers hold no admin capabilities.
    #[must_use]
    pub const fn job_seeker(id: UserId) -> Self {
        Self {
            id,
            role: ActorRole::JobSeeker,
            assigned_stacks: Vec::new(),
            capabilities: Capabilities::none(),
        }
    }

    /// Creates a super admin holding every capability on every stack.
    #[must_use]
    pub const fn super_admin(id: UserId) -> Self {
        Self {
            id,
            role: ActorRole::SuperAdmin,
            assigned_stacks: Vec::new(),
            capabilities: Capabilities::all(),
        }
    }

    /// Creates a stack admin with the capabilities configured on their invite.
    #[must_use]
    pub fn stack_admin(
        id: UserId,
        assigned_stacks: impl IntoIterator<Item = StackId>,
        capabilities: Capabilities,
    ) -> Self {
        Self {
            id,
            role: ActorRole::StackAdmin,
            assigned_stacks: assigned_stacks.into_iter().collect(),
            capabilities,
        }
    }

    /// Returns the acting user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the actor role.
    #[must_use]
    pub const fn role(&self) -> ActorRole {
        self.role
    }

    /// Returns the stacks a stack admin is assigned to.
    ///
    /// Always empty for super admins, who are not stack-scoped.
    #[must_use]
    pub fn assigned_stacks(&self) -> &[StackId] {
        &self.assigned_stacks
    }

    /// Returns the capability record.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns whether the actor may act on records of the given stack.
    #[must_use]
    pub fn covers_stack(&self, stack: StackId) -> bool {
        match self.role {
            ActorRole::SuperAdmin => true,
            ActorRole::StackAdmin => self.assigned_stacks.contains(&stack),
            ActorRole::JobSeeker => false,
        }
    }
}
