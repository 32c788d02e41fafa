//! Collaborator actors the checkout flow talks to.

pub mod basket_service;
pub mod order_service;
pub mod user_service;

pub use basket_service::*;
pub use order_service::*;
pub use user_service::*;
