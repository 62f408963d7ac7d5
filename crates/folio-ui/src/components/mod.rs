//! Reusable UI components
//!
//! Buttons, icons and tag lists styled by the host page's stylesheet.

mod button;
mod icon;
mod tag_list;

pub use button::*;
pub use icon::*;
pub use tag_list::*;
