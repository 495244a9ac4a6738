//! System wiring, configuration, startup and shutdown.

pub mod config;
pub mod processing_system;
pub mod tracing;

pub use self::config::*;
pub use self::processing_system::*;
pub use self::tracing::*;
