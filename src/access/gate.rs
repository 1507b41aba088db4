//! The single authorization gate shared by all mutating operations.

use super::{AccessError, Actor, Capability};
use crate::pipeline::domain::{StackId, UserId};

/// Checks that `actor` holds `capability` for records of `stack`.
///
/// Super admins always pass. Stack admins must hold the capability and be
/// assigned to the stack. Job seekers hold no capabilities.
///
/// # Errors
///
/// Returns [`AccessError::MissingCapability`] or
/// [`AccessError::StackNotAssigned`].
pub fn authorize(actor: &Actor, capability: Capability, stack: StackId) -> Result<(), AccessError> {
    if !actor.capabilities().grants(capability) {
        return Err(AccessError::MissingCapability {
            actor: actor.id(),
            capability,
        });
    }
    if !actor.covers_stack(stack) {
        return Err(AccessError::StackNotAssigned {
            actor: actor.id(),
            stack,
        });
    }
    Ok(())
}

/// Checks that `actor` is an admin holding `capability` on at least the
/// stacks they are assigned to. Used by cross-application listings, which
/// then scope their results with [`Actor::covers_stack`].
///
/// # Errors
///
/// Returns [`AccessError::AdminRequired`] or
/// [`AccessError::MissingCapability`].
pub fn authorize_listing(actor: &Actor, capability: Capability) -> Result<(), AccessError> {
    if !actor.role().is_admin() {
        return Err(AccessError::AdminRequired { actor: actor.id() });
    }
    if !actor.capabilities().grants(capability) {
        return Err(AccessError::MissingCapability {
            actor: actor.id(),
            capability,
        });
    }
    Ok(())
}

/// Checks that `actor` is the applicant identified by `applicant`.
///
/// # Errors
///
/// Returns [`AccessError::NotApplicationOwner`] for any other actor,
/// admins included.
pub fn authorize_applicant(actor: &Actor, applicant: UserId) -> Result<(), AccessError> {
    if actor.id() != applicant {
        return Err(AccessError::NotApplicationOwner { actor: actor.id() });
    }
    Ok(())
}
