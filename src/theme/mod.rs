//! Palette and global stylesheet.

mod colors;
mod styles;

pub use colors::Palette;
pub use styles::GLOBAL_STYLES;
