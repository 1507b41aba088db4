//! Actor identity, capability flags, and the shared authorization gate.
//!
//! Every mutating pipeline operation calls [`authorize`] (admin actions) or
//! [`authorize_applicant`] (applicant actions) before touching state. The
//! gate is a flat capability lookup combined with stack scoping for stack
//! admins; there is no policy evaluator.

pub mod domain;
mod gate;

pub use domain::{
    AccessError, Actor, ActorRole, AdminInvite, Capabilities, Capability, InviteId, InviteStatus,
    ParseCapabilityError,
};
pub use gate::{authorize, authorize_applicant, authorize_listing};

#[cfg(test)]
mod tests;
