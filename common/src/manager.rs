//! Sensor-manager core.
//!
//! Owns the calibration, the smoothing filter and the tracked maximum.
//! Hardware front-ends feed averaged raw ADC counts in; the manager
//! hands back the current/max reading pair for the display. All user
//! intent arrives as a [`CalibrationRequest`] and is answered with a
//! [`ManagerEvent`], so the display never mutates readings directly.
//!
//! # Warmup
//!
//! Electrochemical CO cells need a settle period after power-on. The
//! manager withholds readings for the first [`WARMUP_SAMPLES`] samples
//! and rejects calibration requests with
//! [`CalibrationError::NotReady`] until that window has passed.

use crate::calibration::{CalibrationError, CoCalibration};
use crate::reading::CoReading;

/// Samples to discard after power-on while the cell settles.
/// At the 4 Hz sample rate this is a ~5 second warmup window.
pub const WARMUP_SAMPLES: u32 = 20;

/// Smoothing factor for the exponential moving average over counts.
/// Closer to 1.0 = snappier response, closer to 0.0 = smoother.
const EMA_ALPHA: f32 = 0.25;

// =============================================================================
// Requests and Events
// =============================================================================

/// User intent forwarded to the sensor manager. Created on a button
/// press, consumed by exactly one [`SensorManager::handle`] call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CalibrationRequest {
    /// Clear the tracked maximum back to the current reading.
    ResetMax,
    /// Capture the current settled counts as the zero point.
    CalibrateZero,
    /// Capture the current settled counts as the span-gas point.
    CalibrateSpan,
}

/// Acknowledgement published by the manager after handling a request.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ManagerEvent {
    MaxCleared,
    ZeroCalibrated,
    SpanCalibrated,
    CalibrationFailed(CalibrationError),
}

impl ManagerEvent {
    /// Short label for the event log and defmt output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MaxCleared => "Max reset",
            Self::ZeroCalibrated => "Zero point set",
            Self::SpanCalibrated => "Span point set",
            Self::CalibrationFailed(CalibrationError::NotReady) => "Cal failed: not ready",
            Self::CalibrationFailed(CalibrationError::SpanTooClose) => "Cal failed: span too close",
        }
    }
}

/// Snapshot of manager internals for the Status page.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ManagerStatus {
    pub zero_counts: f32,
    pub span_counts: f32,
    pub sample_count: u32,
    pub ready: bool,
}

// =============================================================================
// Sensor Manager
// =============================================================================

/// Hardware-agnostic core of the sensor manager.
///
/// The embedded front-end wraps this in an async task and talks to it
/// through channels; the simulator calls it inline from the frame loop.
pub struct SensorManager {
    cal: CoCalibration,
    /// Exponentially smoothed raw counts; seeded by the first sample.
    filtered_counts: f32,
    sample_count: u32,
    max_ppm: f32,
}

impl SensorManager {
    pub const fn new() -> Self {
        Self::with_calibration(CoCalibration::FACTORY)
    }

    pub const fn with_calibration(cal: CoCalibration) -> Self {
        Self {
            cal,
            filtered_counts: 0.0,
            sample_count: 0,
            max_ppm: 0.0,
        }
    }

    /// Whether the warmup window has passed.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        self.sample_count > WARMUP_SAMPLES
    }

    /// Feed one averaged ADC sample.
    ///
    /// Returns the reading pair to publish, or `None` while the cell is
    /// still warming up. The tracked maximum only moves up here; it
    /// moves down solely through [`CalibrationRequest::ResetMax`].
    pub fn process_sample(&mut self, counts: f32) -> Option<CoReading> {
        if self.sample_count == 0 {
            self.filtered_counts = counts;
        } else {
            self.filtered_counts += EMA_ALPHA * (counts - self.filtered_counts);
        }
        self.sample_count = self.sample_count.saturating_add(1);

        if !self.is_ready() {
            return None;
        }

        let ppm = self.cal.ppm(self.filtered_counts);
        self.max_ppm = self.max_ppm.max(ppm);
        Some(CoReading::new(ppm, self.max_ppm))
    }

    /// Execute one request and return the acknowledgement.
    ///
    /// Failed requests leave all state untouched. After a successful
    /// request the caller should publish [`Self::current_reading`] so
    /// the display picks up the change through the normal update path.
    pub fn handle(&mut self, request: CalibrationRequest) -> ManagerEvent {
        if !self.is_ready() {
            return ManagerEvent::CalibrationFailed(CalibrationError::NotReady);
        }

        match request {
            CalibrationRequest::ResetMax => {
                self.max_ppm = self.cal.ppm(self.filtered_counts);
                ManagerEvent::MaxCleared
            }
            CalibrationRequest::CalibrateZero => {
                self.cal.set_zero(self.filtered_counts);
                ManagerEvent::ZeroCalibrated
            }
            CalibrationRequest::CalibrateSpan => match self.cal.set_span(self.filtered_counts) {
                Ok(()) => ManagerEvent::SpanCalibrated,
                Err(e) => ManagerEvent::CalibrationFailed(e),
            },
        }
    }

    /// The reading pair as of the last processed sample, if ready.
    pub fn current_reading(&self) -> Option<CoReading> {
        if !self.is_ready() {
            return None;
        }
        Some(CoReading::new(self.cal.ppm(self.filtered_counts), self.max_ppm))
    }

    /// Snapshot for the Status page.
    pub fn status(&self) -> ManagerStatus {
        ManagerStatus {
            zero_counts: self.cal.zero_counts(),
            span_counts: self.cal.span_counts(),
            sample_count: self.sample_count,
            ready: self.is_ready(),
        }
    }
}

impl Default for SensorManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{MIN_SPAN_DELTA, SPAN_GAS_PPM};

    /// 1 count per ppm with a zero point at 0 counts, so raw counts read
    /// directly as ppm in assertions.
    fn unit_cal() -> CoCalibration {
        CoCalibration::new(0.0, 1.0)
    }

    /// Manager past its warmup window, settled at `counts`.
    fn warmed_manager(counts: f32) -> SensorManager {
        let mut m = SensorManager::with_calibration(unit_cal());
        for _ in 0..=WARMUP_SAMPLES {
            m.process_sample(counts);
        }
        assert!(m.is_ready());
        m
    }

    #[test]
    fn test_warmup_withholds_readings() {
        let mut m = SensorManager::with_calibration(unit_cal());
        for _ in 0..WARMUP_SAMPLES {
            assert_eq!(m.process_sample(10.0), None);
        }
        assert!(m.process_sample(10.0).is_some());
    }

    #[test]
    fn test_reading_pair_matches_delivery() {
        // Manager delivers (12.5, 12.5); both labels render the pair as-is.
        let mut m = warmed_manager(12.5);
        let r = m.process_sample(12.5).unwrap();
        assert_eq!(r.ppm, 12.5);
        assert_eq!(r.max_ppm, 12.5);
    }

    #[test]
    fn test_max_does_not_regress_on_lower_reading() {
        let mut m = warmed_manager(12.5);

        // Value decays toward 8.0; the max must hold at 12.5 throughout.
        let mut last_ppm = 12.5;
        for _ in 0..200 {
            let r = m.process_sample(8.0).unwrap();
            assert!(r.ppm <= last_ppm);
            assert_eq!(r.max_ppm, 12.5);
            last_ppm = r.ppm;
        }
        assert!((last_ppm - 8.0).abs() < 1e-3);
    }

    #[test]
    fn test_reset_max_pins_to_current() {
        let mut m = warmed_manager(30.0);
        for _ in 0..200 {
            m.process_sample(5.0);
        }

        assert_eq!(m.handle(CalibrationRequest::ResetMax), ManagerEvent::MaxCleared);
        let r = m.current_reading().unwrap();
        assert!((r.max_ppm - r.ppm).abs() < 1e-6);
        assert!(r.max_ppm < 30.0);

        // A later lower sample must not drag the max below the pin point.
        let pinned = r.max_ppm;
        let r = m.process_sample(0.0).unwrap();
        assert_eq!(r.max_ppm, pinned);
    }

    #[test]
    fn test_requests_fail_during_warmup() {
        let mut m = SensorManager::with_calibration(unit_cal());
        m.process_sample(10.0);

        for req in [
            CalibrationRequest::ResetMax,
            CalibrationRequest::CalibrateZero,
            CalibrationRequest::CalibrateSpan,
        ] {
            assert_eq!(
                m.handle(req),
                ManagerEvent::CalibrationFailed(CalibrationError::NotReady)
            );
        }
        assert_eq!(m.current_reading(), None);
    }

    #[test]
    fn test_zero_calibration_rebases_current_reading() {
        let mut m = warmed_manager(42.0);
        assert_eq!(m.handle(CalibrationRequest::CalibrateZero), ManagerEvent::ZeroCalibrated);
        // The settled counts are now the zero point: current reads 0 ppm.
        assert_eq!(m.current_reading().unwrap().ppm, 0.0);
    }

    #[test]
    fn test_span_calibration_round_trip() {
        let mut m = warmed_manager(0.0);
        m.handle(CalibrationRequest::CalibrateZero);

        // Settle on the span gas, capture it, and the reading is SPAN_GAS_PPM.
        let mut m2 = m;
        for _ in 0..400 {
            m2.process_sample(900.0);
        }
        assert_eq!(m2.handle(CalibrationRequest::CalibrateSpan), ManagerEvent::SpanCalibrated);
        let r = m2.current_reading().unwrap();
        assert!((r.ppm - SPAN_GAS_PPM).abs() < 0.1);
    }

    #[test]
    fn test_span_too_close_reported_and_ignored() {
        let mut m = warmed_manager(100.0);
        m.handle(CalibrationRequest::CalibrateZero);
        let before = m.status();

        // Still sitting at the zero point; span capture must fail.
        let ev = m.handle(CalibrationRequest::CalibrateSpan);
        assert_eq!(
            ev,
            ManagerEvent::CalibrationFailed(CalibrationError::SpanTooClose)
        );
        assert_eq!(m.status(), before);
        // Sanity: the guard distance really is smaller than a valid span.
        assert!(MIN_SPAN_DELTA < before.span_counts - before.zero_counts);
    }

    #[test]
    fn test_status_snapshot() {
        let m = warmed_manager(10.0);
        let s = m.status();
        assert!(s.ready);
        assert_eq!(s.zero_counts, 0.0);
        assert_eq!(s.sample_count, WARMUP_SAMPLES + 1);
    }

    #[test]
    fn test_event_labels_are_distinct() {
        let labels = [
            ManagerEvent::MaxCleared.label(),
            ManagerEvent::ZeroCalibrated.label(),
            ManagerEvent::SpanCalibrated.label(),
            ManagerEvent::CalibrationFailed(CalibrationError::NotReady).label(),
            ManagerEvent::CalibrationFailed(CalibrationError::SpanTooClose).label(),
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in labels.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
