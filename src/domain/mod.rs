pub mod basket;
pub mod order;
pub mod user;

pub use basket::*;
pub use order::*;
pub use user::*;
