//! UI state for the firmware render loop.
//!
//! - `button`: Debounced edge detection for the face buttons
//! - `input`: Button-to-action dispatch
//! - `popup`: Acknowledgement popup lifetimes

mod button;
mod input;
mod popup;

pub use button::DebouncedButton;
pub use input::{InputResult, process_buttons};
pub use popup::Popup;
