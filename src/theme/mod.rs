//! Visual theme: the global stylesheet for both palettes.

mod styles;

pub use styles::{CARD_GAP, GLOBAL_STYLES};
