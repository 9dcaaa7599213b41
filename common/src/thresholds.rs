//! Breath CO concentration bands.
//!
//! Band edges follow the usual breath-CO screening scale: up to 6 ppm
//! reads as non-smoker, 7-10 ppm is borderline, 11-20 ppm indicates a
//! regular smoker, and anything above that is heavy exposure. 50 ppm
//! and up is treated as a danger level and blinks.
//!
//! # Compile-Time Validation
//!
//! The band edges carry `const` assertions so a misordered edit fails
//! to compile instead of silently miscoloring the display.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, ORANGE, RED, WHITE, YELLOW};

/// Upper edge of the non-smoker band (display stays on black).
pub const CO_NONSMOKER_MAX: f32 = 6.0;

/// Upper edge of the borderline band (YELLOW background).
pub const CO_BORDERLINE_MAX: f32 = 10.0;

/// Upper edge of the smoker band (ORANGE background).
pub const CO_SMOKER_MAX: f32 = 20.0;

/// Danger level (RED background, blinking). Sustained ambient CO at
/// this concentration is a health hazard independent of breath testing.
pub const CO_DANGER: f32 = 50.0;

// Compile-time validation: band edges must be in ascending order
const _: () = assert!(CO_NONSMOKER_MAX < CO_BORDERLINE_MAX);
const _: () = assert!(CO_BORDERLINE_MAX < CO_SMOKER_MAX);
const _: () = assert!(CO_SMOKER_MAX < CO_DANGER);

/// Background and text color for a CO concentration.
pub const fn co_color(ppm: f32) -> (Rgb565, Rgb565) {
    if ppm <= CO_NONSMOKER_MAX {
        (BLACK, WHITE)
    } else if ppm <= CO_BORDERLINE_MAX {
        (YELLOW, BLACK)
    } else if ppm <= CO_SMOKER_MAX {
        (ORANGE, BLACK)
    } else {
        (RED, WHITE)
    }
}

/// Check if a concentration is in the danger band (blink the cell).
#[inline]
pub fn is_danger_co(ppm: f32) -> bool {
    ppm >= CO_DANGER
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_ordering() {
        assert!(CO_NONSMOKER_MAX < CO_BORDERLINE_MAX);
        assert!(CO_BORDERLINE_MAX < CO_SMOKER_MAX);
        assert!(CO_SMOKER_MAX < CO_DANGER);
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(co_color(0.0), (BLACK, WHITE));
        assert_eq!(co_color(6.0), (BLACK, WHITE));
        assert_eq!(co_color(8.0), (YELLOW, BLACK));
        assert_eq!(co_color(15.0), (ORANGE, BLACK));
        assert_eq!(co_color(30.0), (RED, WHITE));
        assert_eq!(co_color(80.0), (RED, WHITE));
    }

    #[test]
    fn test_is_danger_co() {
        assert!(!is_danger_co(20.0), "20 ppm is not danger level");
        assert!(!is_danger_co(49.9), "49.9 ppm is not danger level");
        assert!(is_danger_co(50.0), "50 ppm is danger level");
        assert!(is_danger_co(120.0), "120 ppm is danger level");
    }

    #[test]
    fn test_danger_band_is_red() {
        let (bg, _) = co_color(CO_DANGER);
        assert_eq!(bg, RED);
    }
}
