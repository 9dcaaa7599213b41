//! Button debounce handling.
//!
//! Time-based edge detection that prevents multiple triggers from
//! contact bounce on the physical buttons.

use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant};

/// Debounce window.
const DEBOUNCE: Duration = Duration::from_millis(50);

/// Debounced button wrapping an active-low input pin.
pub struct DebouncedButton<'d> {
    input: Input<'d>,
    was_pressed: bool,
    last_change: Option<Instant>,
}

impl<'d> DebouncedButton<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self {
            input,
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// The Display Pack buttons are active-low, so a low level means
    /// pressed. State changes inside the debounce window are ignored.
    pub fn just_pressed(&mut self) -> bool {
        let pressed = self.input.is_low();
        if pressed != self.was_pressed {
            if let Some(last) = self.last_change
                && last.elapsed() < DEBOUNCE
            {
                return false;
            }

            self.was_pressed = pressed;
            self.last_change = Some(Instant::now());

            return pressed;
        }

        false
    }
}
