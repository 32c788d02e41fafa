//! Host-shell actors: the navigation stack and dialog presenter the flow
//! drives. In the demo binary they log what the real shell would render.

pub mod dialog;
pub mod navigation;

pub use dialog::*;
pub use navigation::*;
