//! Full-screen firmware screens.
//!
//! - `boot`: Splash shown while the sensor task starts up

mod boot;

pub use boot::draw_boot_screen;
