//! Breath CO monitor simulator for desktop.
//!
//! Runs the same sensor-manager core and widgets as the firmware, with
//! SDL keyboard input standing in for the device buttons and a
//! synthetic breath signal standing in for the analog front-end.
//!
//! # Keys
//!
//! Mirrors the Display Pack buttons:
//! - **A**: Calibrate zero point
//! - **B**: Calibrate span point
//! - **X**: Reset the tracked maximum
//! - **Y**: Toggle Dashboard / Status page

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod popup;

use std::thread;
use std::time::{Duration, Instant};

use comonitor_common::Page;
use comonitor_common::colors::BLACK;
use comonitor_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use comonitor_common::eventlog::EventLog;
use comonitor_common::manager::{CalibrationRequest, SensorManager};
use comonitor_common::reading::CoReading;
use comonitor_common::render::RenderState;
use comonitor_common::widgets::{
    draw_cal_failed_popup,
    draw_current_cell,
    draw_divider,
    draw_header,
    draw_max_cell,
    draw_reset_popup,
    draw_span_popup,
    draw_status_page,
    draw_zero_popup,
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::popup::Popup;

/// Frame pacing (~60 fps).
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Frames between manager samples, matching the firmware's 4 Hz rate.
const FRAMES_PER_SAMPLE: u32 = 15;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("CO Monitor Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // The same core the sensor task owns on hardware, driven inline here
    let mut manager = SensorManager::new();

    // Signal state
    let mut t = 0.0f32;
    let mut frame_count = 0u32;
    let started = Instant::now();

    // UI state
    let mut current_page = Page::default();
    let mut page_just_switched = false;
    let mut active_popup: Option<Popup> = None;
    let mut render_state = RenderState::new();
    let mut event_log = EventLog::new();
    let mut latest: Option<CoReading> = None;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }

                    let mut request = None;
                    match keycode {
                        Keycode::A if current_page == Page::Dashboard => {
                            request = Some(CalibrationRequest::CalibrateZero);
                        }
                        Keycode::B if current_page == Page::Dashboard => {
                            request = Some(CalibrationRequest::CalibrateSpan);
                        }
                        Keycode::X if current_page == Page::Dashboard => {
                            request = Some(CalibrationRequest::ResetMax);
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            page_just_switched = true;
                            active_popup = None;
                        }
                        _ => {}
                    }

                    // One request per press, answered synchronously; the
                    // labels still only move through the published pair
                    if let Some(request) = request {
                        let event = manager.handle(request);
                        event_log.push(event.label());
                        active_popup = Some(Popup::from_event(event, Instant::now()));
                        if let Some(reading) = manager.current_reading() {
                            latest = Some(reading);
                        }
                    }
                }
                _ => {}
            }
        }

        // Feed the manager at the firmware's sample cadence
        if frame_count % FRAMES_PER_SAMPLE == 0 {
            if let Some(reading) = manager.process_sample(breath_counts(t)) {
                latest = Some(reading);
            }
        }

        // Check popup expiration
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }
        render_state.update_popup(active_popup.as_ref().map(Popup::kind));

        // Clear display when needed
        if render_state.is_first_frame() || render_state.popup_just_closed() || page_just_switched {
            display.clear(BLACK).ok();
            if page_just_switched {
                render_state.mark_display_cleared();
            }
        }

        let status = manager.status();
        let blink_on = (frame_count / 6).is_multiple_of(2);

        match current_page {
            Page::Dashboard => {
                if render_state.check_header_dirty(status.ready) {
                    draw_header(&mut display, status.ready);
                }

                draw_current_cell(&mut display, latest.map(|r| r.ppm), blink_on);
                draw_max_cell(&mut display, latest.map(|r| r.max_ppm));

                if render_state.need_divider() {
                    draw_divider(&mut display);
                    render_state.mark_divider_drawn();
                }

                if let Some(ref popup) = active_popup {
                    match popup {
                        Popup::MaxReset(_) => draw_reset_popup(&mut display),
                        Popup::ZeroSet(_) => draw_zero_popup(&mut display),
                        Popup::SpanSet(_) => draw_span_popup(&mut display),
                        Popup::CalFailed(_, err) => draw_cal_failed_popup(&mut display, *err),
                    }
                }
            }

            Page::Status => {
                display.clear(BLACK).ok();
                draw_status_page(
                    &mut display,
                    &status,
                    &event_log,
                    started.elapsed().as_secs() as u32,
                );
            }
        }

        render_state.end_frame();
        page_just_switched = false;

        window.update(&display);

        t += FRAME_TIME.as_secs_f32();
        frame_count = frame_count.wrapping_add(1);

        let spent = frame_start.elapsed();
        if spent < FRAME_TIME {
            thread::sleep(FRAME_TIME - spent);
        }
    }
}

/// Synthetic breath profile: a drifting clean-air baseline with an
/// exhalation pulse roughly every 15 seconds peaking in the smoker
/// band.
fn breath_counts(t: f32) -> f32 {
    let baseline = 400.0 + 8.0 * (t * 0.3).sin();
    let cycle = (t * 0.42).sin();
    let pulse = if cycle > 0.85 { (cycle - 0.85) / 0.15 } else { 0.0 };
    baseline + 700.0 * pulse
}
