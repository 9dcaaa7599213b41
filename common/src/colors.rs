//! Color constants for the CO monitor display.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits
//! blue. This format is native to the ST7789 panel and requires no
//! conversion when writing to the display buffer. Standard colors come
//! from the `RgbColor` trait; application-specific shades are built
//! with `Rgb565::new`.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Backgrounds and dark text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Danger band and failure popups.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Ready indicator and non-smoker readings.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Borderline band and the warming-up indicator.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Orange for the smoker band. Slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for the header bar and divider line.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
