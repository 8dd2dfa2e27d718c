use crate::error::Result;
use crate::monitor::{MonitorId, SensorId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scenario: ScenarioConfig,
}

/// Monitors, sensors and the readings driven through them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub monitors: Vec<MonitorId>,
    pub sensors: Vec<SensorConfig>,
    #[serde(default)]
    pub readings: Vec<ReadingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub id: SensorId,
    /// Monitors connected to this sensor.
    #[serde(default)]
    pub monitors: Vec<MonitorId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingConfig {
    pub sensor: SensorId,
    pub value: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scenario: ScenarioConfig {
                monitors: vec![1, 2],
                sensors: vec![
                    SensorConfig {
                        id: 10,
                        monitors: vec![1, 2],
                    },
                    SensorConfig {
                        id: 20,
                        monitors: vec![],
                    },
                ],
                readings: vec![ReadingConfig {
                    sensor: 10,
                    value: 1600.0,
                }],
            },
        }
    }
}

impl Config {
    /// Parse a JSON scenario file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load from `path` when given, otherwise use the built-in scenario.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
