//! Async tasks for the CO monitor firmware.
//!
//! - `sensor`: Sensor manager task (ADC sampling, calibration requests)

pub mod sensor;

pub use sensor::{EVENTS, READINGS, REQUESTS, STATUS, sensor_task};
