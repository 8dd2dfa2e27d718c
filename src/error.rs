use thiserror::Error as ThisError;

use crate::monitor::{MonitorId, SensorId};

#[derive(ThisError, Debug)]
pub enum AlertError {
    #[error("Monitor {0} is declared more than once")]
    DuplicateMonitor(MonitorId),

    #[error("Sensor {0} is declared more than once")]
    DuplicateSensor(SensorId),

    #[error("Sensor {sensor} is wired to unknown monitor {monitor}")]
    UnknownMonitor { sensor: SensorId, monitor: MonitorId },

    #[error("Reading addressed to unknown sensor {0}")]
    UnknownSensor(SensorId),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AlertError>;
