//! Sensor manager task.
//!
//! Owns the ADC front-end and the [`SensorManager`] core. Samples on a
//! fixed ticker, publishes the reading pair on [`READINGS`], answers
//! calibration requests from [`REQUESTS`] and reports acknowledgements
//! on [`EVENTS`]. The render loop never touches sensor state directly.

use comonitor_common::manager::{CalibrationRequest, ManagerEvent, ManagerStatus, SensorManager};
use comonitor_common::reading::CoReading;
use defmt::{info, warn};
use embassy_futures::select::{Either, select};
use embassy_rp::adc::{Adc, Async, Channel as AdcChannel};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::watch::Watch;
use embassy_time::{Duration, Instant, Ticker};

use comonitor_pico2::config::SAMPLE_INTERVAL_MS;
#[cfg(not(feature = "demo"))]
use comonitor_pico2::sampling::SampleAccumulator;

// =============================================================================
// Task Channels
// =============================================================================

/// Latest published reading pair; the render loop reads non-blockingly.
pub static READINGS: Watch<CriticalSectionRawMutex, CoReading, 2> = Watch::new();

/// Latest manager snapshot for the Status page.
pub static STATUS: Watch<CriticalSectionRawMutex, ManagerStatus, 2> = Watch::new();

/// Calibration requests from the render loop (one per button press).
pub static REQUESTS: Channel<CriticalSectionRawMutex, CalibrationRequest, 4> = Channel::new();

/// Manager acknowledgements back to the render loop (popups + log).
pub static EVENTS: Channel<CriticalSectionRawMutex, ManagerEvent, 4> = Channel::new();

// =============================================================================
// Sensor Task
// =============================================================================

#[embassy_executor::task]
pub async fn sensor_task(mut adc: Adc<'static, Async>, mut channel: AdcChannel<'static>) {
    info!("Sensor task started");

    let mut manager = SensorManager::new();
    let readings = READINGS.dyn_sender();
    let status = STATUS.dyn_sender();
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let started = Instant::now();

    status.send(manager.status());

    loop {
        match select(ticker.next(), REQUESTS.receive()).await {
            Either::First(()) => {
                let elapsed_ms = started.elapsed().as_millis() as u32;
                let counts = sample_counts(&mut adc, &mut channel, elapsed_ms).await;
                if let Some(reading) = manager.process_sample(counts) {
                    readings.send(reading);
                }
                status.send(manager.status());
            }
            Either::Second(request) => {
                let event = manager.handle(request);
                info!("{}: {}", request_label(request), event.label());

                // Publish the refreshed pair first so the labels move
                // through the normal update path, then the ack
                if let Some(reading) = manager.current_reading() {
                    readings.send(reading);
                }
                status.send(manager.status());

                if EVENTS.try_send(event).is_err() {
                    warn!("Event queue full, dropping acknowledgement");
                }
            }
        }
    }
}

/// One averaged sample from the analog front-end on GPIO26.
#[cfg(not(feature = "demo"))]
async fn sample_counts(
    adc: &mut Adc<'static, Async>,
    channel: &mut AdcChannel<'static>,
    _elapsed_ms: u32,
) -> f32 {
    let mut acc = SampleAccumulator::new();
    while !acc.is_full() {
        match adc.read(channel).await {
            Ok(raw) => acc.push(raw),
            Err(_) => {
                warn!("ADC conversion error");
                acc.push(0);
            }
        }
    }
    acc.take()
}

/// Synthetic breath profile for bench testing without a CO cell:
/// a drifting clean-air baseline with an exhalation pulse roughly
/// every 15 seconds peaking in the smoker band.
#[cfg(feature = "demo")]
async fn sample_counts(
    _adc: &mut Adc<'static, Async>,
    _channel: &mut AdcChannel<'static>,
    elapsed_ms: u32,
) -> f32 {
    let t = elapsed_ms as f32 / 1000.0;
    let baseline = 400.0 + 8.0 * micromath::F32(t * 0.3).sin().0;
    let cycle = micromath::F32(t * 0.42).sin().0;
    let pulse = if cycle > 0.85 { (cycle - 0.85) / 0.15 } else { 0.0 };
    baseline + 700.0 * pulse
}

const fn request_label(request: CalibrationRequest) -> &'static str {
    match request {
        CalibrationRequest::ResetMax => "Reset max",
        CalibrationRequest::CalibrateZero => "Calibrate zero",
        CalibrationRequest::CalibrateSpan => "Calibrate span",
    }
}
