//! Stack admin invitations carrying the invitee's capability configuration.

use super::{AccessError, Actor, ActorRole, Capabilities};
use crate::config::PipelineConfig;
use crate::pipeline::domain::ids::uuid_id;
use crate::pipeline::domain::{StackId, UserId};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

uuid_id!(
    /// Unique identifier for an admin invite.
    InviteId
);

/// Invite lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    /// Awaiting acceptance.
    Pending,
    /// Accepted; the invitee is now a stack admin.
    Accepted,
    /// Expired before acceptance.
    Expired,
}

/// Invitation for a prospective stack admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInvite {
    id: InviteId,
    email: String,
    assigned_stacks: Vec<StackId>,
    capabilities: Capabilities,
    invited_by: UserId,
    invited_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    status: InviteStatus,
}

impl AdminInvite {
    /// Issues a pending invite valid for the configured
    /// [`PipelineConfig::invite_validity_days`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::SuperAdminRequired`] unless `inviter` is a
    /// super admin.
    pub fn issue(
        inviter: &Actor,
        email: impl Into<String>,
        assigned_stacks: impl IntoIterator<Item = StackId>,
        capabilities: Capabilities,
        config: &PipelineConfig,
        clock: &impl Clock,
    ) -> Result<Self, AccessError> {
        if inviter.role() != ActorRole::SuperAdmin {
            return Err(AccessError::SuperAdminRequired {
                actor: inviter.id(),
            });
        }
        let invited_at = clock.utc();
        Ok(Self {
            id: InviteId::new(),
            email: email.into(),
            assigned_stacks: assigned_stacks.into_iter().collect(),
            capabilities,
            invited_by: inviter.id(),
            invited_at,
            expires_at: invited_at + TimeDelta::days(i64::from(config.invite_validity_days)),
            status: InviteStatus::Pending,
        })
    }

    /// Returns the invite identifier.
    #[must_use]
    pub const fn id(&self) -> InviteId {
        self.id
    }

    /// Returns the invitee email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the stacks the invitee will administer.
    #[must_use]
    pub fn assigned_stacks(&self) -> &[StackId] {
        &self.assigned_stacks
    }

    /// Returns the capabilities granted on acceptance.
    #[must_use]
    pub const fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Returns the inviting admin.
    #[must_use]
    pub const fn invited_by(&self) -> UserId {
        self.invited_by
    }

    /// Returns the issue timestamp.
    #[must_use]
    pub const fn invited_at(&self) -> DateTime<Utc> {
        self.invited_at
    }

    /// Returns the expiry timestamp.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns the invite status.
    #[must_use]
    pub const fn status(&self) -> InviteStatus {
        self.status
    }

    /// Accepts the invite, producing the stack admin actor for `user_id`.
    ///
    /// An invite found past its expiry is marked expired as a side effect.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::InviteNotPending`] if the invite was already
    /// accepted or expired, or [`AccessError::InviteExpired`] if the expiry
    /// time has passed.
    pub fn accept(&mut self, user_id: UserId, clock: &impl Clock) -> Result<Actor, AccessError> {
        if self.status != InviteStatus::Pending {
            return Err(AccessError::InviteNotPending(self.id));
        }
        if clock.utc() >= self.expires_at {
            self.status = InviteStatus::Expired;
            return Err(AccessError::InviteExpired(self.id));
        }
        self.status = InviteStatus::Accepted;
        Ok(Actor::stack_admin(
            user_id,
            self.assigned_stacks.iter().copied(),
            self.capabilities,
        ))
    }
}
