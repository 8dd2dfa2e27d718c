//! CO2 alerting library.
//!
//! Sensors record CO2 readings and alert every registered monitor when a
//! reading exceeds the safe limit. Scenarios wire monitors and sensors from
//! configuration and drive readings through them.

pub mod config;
pub mod error;
pub mod monitor;
pub mod scenario;
pub mod sensor;

#[cfg(test)]
mod test_support;

pub use monitor::{Alert, Monitor, MonitorId, Observer, SensorId};
pub use scenario::{RunReport, Scenario};
pub use sensor::{CO2_LIMIT_PPM, Sensor};
