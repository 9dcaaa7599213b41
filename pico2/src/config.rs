//! Firmware timing and sampling configuration.

/// Interval between published sensor samples (4 Hz).
///
/// Breath CO moves on a seconds scale; sampling faster only feeds the
/// smoothing filter noise.
pub const SAMPLE_INTERVAL_MS: u64 = 250;

/// ADC conversions averaged into one published sample.
pub const OVERSAMPLE: usize = 8;

// Compile-time validation
const _: () = assert!(OVERSAMPLE > 0);
const _: () = assert!(SAMPLE_INTERVAL_MS > 0);
