//! CO2 sensor that raises alerts above a concentration limit.
//!
//! A sensor keeps its last reading and a registry of observers keyed by
//! identity. Every reading above the limit broadcasts an alert to all
//! registered observers, synchronously and in ascending id order. There is
//! no hysteresis: consecutive readings above the limit alert every time.

use crate::monitor::{MonitorId, Observer, SensorId};
use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Default alert limit in parts per million of CO2.
pub const CO2_LIMIT_PPM: f64 = 1500.0;

pub struct Sensor {
    id: SensorId,
    value: f64,
    threshold: f64,
    clients: BTreeMap<MonitorId, Arc<dyn Observer>>,
}

impl Sensor {
    /// Create a sensor alerting above [`CO2_LIMIT_PPM`].
    pub fn new(id: SensorId) -> Self {
        Self::with_threshold(id, CO2_LIMIT_PPM)
    }

    /// Create a sensor alerting above `threshold`.
    pub fn with_threshold(id: SensorId, threshold: f64) -> Self {
        Self {
            id,
            value: 0.0,
            threshold,
            clients: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> SensorId {
        self.id
    }

    /// Last recorded reading, 0.0 before the first `read`.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the last reading is above the threshold.
    pub fn is_alarming(&self) -> bool {
        self.value > self.threshold
    }

    /// Register `monitor` for alerts.
    ///
    /// Returns `false` if a monitor with the same id is already registered,
    /// in which case the existing registration is kept.
    pub fn connect(&mut self, monitor: Arc<dyn Observer>) -> bool {
        let id = monitor.id();
        if self.clients.contains_key(&id) {
            debug!("[Sensor {}] monitor {} already connected", self.id, id);
            return false;
        }
        self.clients.insert(id, monitor);
        debug!("[Sensor {}] monitor {} connected", self.id, id);
        true
    }

    /// Remove the monitor registered under `monitor`.
    ///
    /// Returns `false` if no such monitor was registered.
    pub fn disconnect(&mut self, monitor: MonitorId) -> bool {
        let removed = self.clients.remove(&monitor).is_some();
        if removed {
            debug!("[Sensor {}] monitor {} disconnected", self.id, monitor);
        }
        removed
    }

    pub fn is_connected(&self, monitor: MonitorId) -> bool {
        self.clients.contains_key(&monitor)
    }

    pub fn monitor_count(&self) -> usize {
        self.clients.len()
    }

    /// Registered monitor ids in notification order.
    pub fn monitor_ids(&self) -> impl Iterator<Item = MonitorId> + '_ {
        self.clients.keys().copied()
    }

    /// Record a reading and alert every registered monitor if it exceeds the
    /// threshold. Readings are not validated.
    pub fn read(&mut self, value: f64) {
        self.value = value;
        debug!("[Sensor {}] reading {}", self.id, value);
        if self.is_alarming() {
            self.notify();
        }
    }

    /// Alert every registered monitor with this sensor as the source.
    pub fn notify(&self) {
        debug!(
            "[Sensor {}] notifying {} monitor(s) at {}",
            self.id,
            self.clients.len(),
            self.value
        );
        for client in self.clients.values() {
            client.alert(self);
        }
    }
}

impl fmt::Debug for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sensor")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("threshold", &self.threshold)
            .field("monitors", &self.clients.keys().collect::<Vec<_>>())
            .finish()
    }
}
