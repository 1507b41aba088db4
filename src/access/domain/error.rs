//! Error types for authorization and invite handling.

use super::{Capability, InviteId};
use crate::pipeline::domain::{StackId, UserId};
use thiserror::Error;

/// Errors returned by the authorization gate and invite lifecycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The actor does not hold the capability required by the operation.
    #[error("actor {actor} lacks capability {capability}")]
    MissingCapability {
        /// Acting user.
        actor: UserId,
        /// Capability the operation requires.
        capability: Capability,
    },

    /// The actor is a stack admin not assigned to the record's stack.
    #[error("actor {actor} is not assigned to stack {stack}")]
    StackNotAssigned {
        /// Acting user.
        actor: UserId,
        /// Stack owning the record.
        stack: StackId,
    },

    /// The actor is not the applicant who owns the application.
    #[error("actor {actor} does not own this application")]
    NotApplicationOwner {
        /// Acting user.
        actor: UserId,
    },

    /// The operation is reserved for admins.
    #[error("actor {actor} is not an admin")]
    AdminRequired {
        /// Acting user.
        actor: UserId,
    },

    /// The operation is reserved for super admins.
    #[error("actor {actor} is not a super admin")]
    SuperAdminRequired {
        /// Acting user.
        actor: UserId,
    },

    /// The invite has already been accepted or expired.
    #[error("admin invite {0} is no longer pending")]
    InviteNotPending(InviteId),

    /// The invite expiry time has passed.
    #[error("admin invite {0} has expired")]
    InviteExpired(InviteId),
}

/// Error returned while parsing capability names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown capability: {0}")]
pub struct ParseCapabilityError(pub String);
