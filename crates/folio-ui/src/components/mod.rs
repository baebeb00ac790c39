//! Reusable UI components
//!
//! - Buttons with style variants
//! - Filter pills for the project slider

mod button;
mod filter_pills;

pub use button::*;
pub use filter_pills::*;
