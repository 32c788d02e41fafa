//! Checkout flow library.
//!
//! Orchestrates the transition from "items in basket" to "order submitted":
//! collaborator services run as tokio actors, [`CheckoutFlow`] sequences the
//! checkout, and presentation-bound state is published over watch channels.

pub mod app_system;
pub mod checkout_flow;
pub mod clients;
pub mod domain;
pub mod error;
pub mod events;
pub mod messages;
pub mod services;
pub mod settings;
pub mod shell;

#[cfg(test)]
mod mock_framework;

// Re-export the core component for convenience
pub use checkout_flow::{CheckoutFlow, CheckoutViewState};
