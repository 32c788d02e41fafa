//! System orchestration, startup, and shutdown logic.

pub mod checkout_system;
pub mod tracing;

pub use checkout_system::*;
pub use tracing::*;
