//! Monitors that react to sensor alerts.
//!
//! A monitor is the observer side of the alerting relationship. Sensors only
//! know the [`Observer`] capability, so anything that can be identified and
//! alerted can be registered with a [`Sensor`].

use crate::sensor::Sensor;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a monitor.
pub type MonitorId = u32;

/// Identity of a sensor.
pub type SensorId = u32;

/// Capability a sensor needs from anything it notifies.
///
/// Registrations are keyed by [`Observer::id`], so two observers reporting the
/// same id are the same registration as far as a sensor is concerned.
pub trait Observer: Send + Sync {
    /// Identity used to deduplicate registrations.
    fn id(&self) -> MonitorId;

    /// React to an alert raised by `sensor`.
    ///
    /// Called synchronously from [`Sensor::notify`]. Must not fail.
    fn alert(&self, sensor: &Sensor);
}

/// A single (monitor, sensor, value) notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub monitor: MonitorId,
    pub sensor: SensorId,
    pub value: f64,
}

impl Alert {
    /// Capture the alert `monitor` receives from `sensor` at its current value.
    pub fn new(monitor: MonitorId, sensor: &Sensor) -> Self {
        Self {
            monitor,
            sensor: sensor.id(),
            value: sensor.value(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monitor {} : Alert from sensor {}, CO2 level {}",
            self.monitor, self.sensor, self.value
        )
    }
}

/// Console monitor.
///
/// Reports every alert it receives as one line on stdout. Equality and
/// ordering follow the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Monitor {
    id: MonitorId,
}

impl Monitor {
    pub fn new(id: MonitorId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> MonitorId {
        self.id
    }
}

impl Observer for Monitor {
    fn id(&self) -> MonitorId {
        self.id
    }

    fn alert(&self, sensor: &Sensor) {
        let alert = Alert::new(self.id, sensor);
        debug!("[Monitor {}] alert received from sensor {}", self.id, alert.sensor);
        println!("{alert}");
    }
}
