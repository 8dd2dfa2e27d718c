//! Recording observers shared by unit tests.

use crate::monitor::{Alert, MonitorId, Observer};
use crate::sensor::Sensor;
use parking_lot::Mutex;
use std::sync::Arc;

/// Alerts delivered to every recording monitor created from the same log.
pub type AlertLog = Arc<Mutex<Vec<Alert>>>;

pub fn alert_log() -> AlertLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Observer that appends each alert to a shared log instead of printing it.
pub struct RecordingMonitor {
    id: MonitorId,
    log: AlertLog,
}

impl RecordingMonitor {
    pub fn new(id: MonitorId, log: &AlertLog) -> Arc<Self> {
        Arc::new(Self {
            id,
            log: log.clone(),
        })
    }
}

impl Observer for RecordingMonitor {
    fn id(&self) -> MonitorId {
        self.id
    }

    fn alert(&self, sensor: &Sensor) {
        self.log.lock().push(Alert::new(self.id, sensor));
    }
}
