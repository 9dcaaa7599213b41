//! Popup state for manager acknowledgements (std time variant).

use std::time::{Duration, Instant};

use comonitor_common::calibration::CalibrationError;
use comonitor_common::manager::ManagerEvent;

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(3);

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    MaxReset(Instant),
    ZeroSet(Instant),
    SpanSet(Instant),
    CalFailed(Instant, CalibrationError),
}

impl Popup {
    /// Popup for a freshly received manager event.
    pub const fn from_event(event: ManagerEvent, now: Instant) -> Self {
        match event {
            ManagerEvent::MaxCleared => Self::MaxReset(now),
            ManagerEvent::ZeroCalibrated => Self::ZeroSet(now),
            ManagerEvent::SpanCalibrated => Self::SpanSet(now),
            ManagerEvent::CalibrationFailed(e) => Self::CalFailed(now, e),
        }
    }

    #[inline]
    const fn start_time(&self) -> Instant {
        match self {
            Self::MaxReset(t) | Self::ZeroSet(t) | Self::SpanSet(t) | Self::CalFailed(t, _) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.start_time().elapsed() >= POPUP_DURATION
    }

    /// Discriminant for `RenderState` popup tracking.
    #[inline]
    pub const fn kind(&self) -> u8 {
        match self {
            Self::MaxReset(_) => 0,
            Self::ZeroSet(_) => 1,
            Self::SpanSet(_) => 2,
            Self::CalFailed(_, _) => 3,
        }
    }
}
