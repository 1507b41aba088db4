//! Domain model for actors and their capabilities.

mod actor;
mod capability;
mod error;
mod invite;

pub use actor::{Actor, ActorRole};
pub use capability::{Capabilities, Capability};
pub use error::{AccessError, ParseCapabilityError};
pub use invite::{AdminInvite, InviteId, InviteStatus};
