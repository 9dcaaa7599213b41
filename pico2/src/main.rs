//! Breath CO monitor firmware for Raspberry Pi Pico 2 (RP2350).
//!
//! Runs on the Pimoroni Pico Display Pack (ST7789 320x240, four face
//! buttons). Two embassy tasks share the work: the sensor task owns the
//! ADC front-end and the sensor manager, the main task owns the display
//! and renders whatever the manager publishes. All traffic between them
//! goes through `embassy-sync` channels, so the render loop is the
//! single writer to the display and never touches sensor state.
//!
//! # Button Controls
//!
//! - **A**: Calibrate zero point (sample clean air first)
//! - **B**: Calibrate span point (span gas attached)
//! - **X**: Reset the tracked maximum
//! - **Y**: Toggle Dashboard / Status page

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// Embedded-only modules (ARM dependencies, not testable on host)
#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod firmware;
#[cfg(target_arch = "arm")]
mod screens;
#[cfg(target_arch = "arm")]
mod st7789;
#[cfg(target_arch = "arm")]
mod state;
#[cfg(target_arch = "arm")]
mod tasks;

/// The real entry point lives in `firmware.rs` and only exists for the
/// RP2350 target; host builds get this stub so workspace-wide builds
/// and `cargo test --lib` work without the cross toolchain.
#[cfg(not(target_arch = "arm"))]
fn main() {
    eprintln!("comonitor-pico2 must be built for thumbv8m.main-none-eabihf");
}
