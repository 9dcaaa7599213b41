//! Input handling for button events.
//!
//! Converts debounced presses into the corresponding manager request or
//! page switch. Each press produces at most one request; the labels on
//! screen only move when the manager answers.

use comonitor_common::manager::CalibrationRequest;
use comonitor_common::pages::Page;

use super::DebouncedButton;

/// Result of processing button inputs for a single frame.
#[derive(Default)]
pub struct InputResult {
    /// Request to forward to the sensor manager, if any.
    pub request: Option<CalibrationRequest>,
    /// New page if Y was pressed.
    pub new_page: Option<Page>,
}

/// Process button inputs and return the resulting actions.
pub fn process_buttons(
    btn_a: &mut DebouncedButton<'_>,
    btn_b: &mut DebouncedButton<'_>,
    btn_x: &mut DebouncedButton<'_>,
    btn_y: &mut DebouncedButton<'_>,
    current_page: Page,
) -> InputResult {
    let mut result = InputResult::default();

    // A: capture zero point (Dashboard only)
    if btn_a.just_pressed() && current_page == Page::Dashboard {
        result.request = Some(CalibrationRequest::CalibrateZero);
    }

    // B: capture span point (Dashboard only)
    if btn_b.just_pressed() && current_page == Page::Dashboard {
        result.request = Some(CalibrationRequest::CalibrateSpan);
    }

    // X: reset the tracked maximum (Dashboard only)
    if btn_x.just_pressed() && current_page == Page::Dashboard {
        result.request = Some(CalibrationRequest::ResetMax);
    }

    // Y: toggle page
    if btn_y.just_pressed() {
        result.new_page = Some(current_page.toggle());
    }

    result
}
