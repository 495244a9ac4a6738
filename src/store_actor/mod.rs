//! Actor-backed in-memory record store.

pub mod actor;
pub mod messages;

pub use actor::*;
pub use messages::*;
