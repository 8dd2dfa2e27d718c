//! Wiring of monitors and sensors from a [`ScenarioConfig`].
//!
//! A scenario owns one observer per configured monitor id and one
//! [`Sensor`] per configured sensor, connects them as configured, and then
//! drives the configured readings in order.

use crate::config::ScenarioConfig;
use crate::error::{AlertError, Result};
use crate::monitor::{Monitor, MonitorId, Observer, SensorId};
use crate::sensor::Sensor;
use log::{debug, info};
use std::collections::{BTreeMap, btree_map::Entry};
use std::sync::Arc;

/// Outcome of [`Scenario::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Readings driven.
    pub readings: usize,
    /// Readings above their sensor's threshold.
    pub triggered: usize,
    /// Alerts delivered, one per (reading, registered monitor).
    pub alerts: usize,
}

pub struct Scenario {
    monitors: BTreeMap<MonitorId, Arc<dyn Observer>>,
    sensors: BTreeMap<SensorId, Sensor>,
    readings: Vec<(SensorId, f64)>,
}

impl Scenario {
    /// Build a scenario whose monitors print their alerts to stdout.
    pub fn build(config: &ScenarioConfig) -> Result<Self> {
        Self::build_with(config, |id| Arc::new(Monitor::new(id)))
    }

    /// Build a scenario, creating each monitor through `factory`.
    pub fn build_with<F>(config: &ScenarioConfig, factory: F) -> Result<Self>
    where
        F: Fn(MonitorId) -> Arc<dyn Observer>,
    {
        let mut monitors = BTreeMap::new();
        for &id in &config.monitors {
            match monitors.entry(id) {
                Entry::Occupied(_) => return Err(AlertError::DuplicateMonitor(id)),
                Entry::Vacant(slot) => {
                    slot.insert(factory(id));
                }
            }
        }

        let mut sensors = BTreeMap::new();
        for sensor_config in &config.sensors {
            let Entry::Vacant(slot) = sensors.entry(sensor_config.id) else {
                return Err(AlertError::DuplicateSensor(sensor_config.id));
            };
            let mut sensor = Sensor::new(sensor_config.id);
            for monitor_id in &sensor_config.monitors {
                let monitor = monitors.get(monitor_id).ok_or(AlertError::UnknownMonitor {
                    sensor: sensor_config.id,
                    monitor: *monitor_id,
                })?;
                sensor.connect(Arc::clone(monitor));
            }
            slot.insert(sensor);
        }

        let readings = config
            .readings
            .iter()
            .map(|reading| {
                if sensors.contains_key(&reading.sensor) {
                    Ok((reading.sensor, reading.value))
                } else {
                    Err(AlertError::UnknownSensor(reading.sensor))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Scenario built: {} monitor(s), {} sensor(s), {} reading(s)",
            monitors.len(),
            sensors.len(),
            readings.len()
        );

        Ok(Self {
            monitors,
            sensors,
            readings,
        })
    }

    pub fn sensor(&self, id: SensorId) -> Option<&Sensor> {
        self.sensors.get(&id)
    }

    pub fn monitor_ids(&self) -> impl Iterator<Item = MonitorId> + '_ {
        self.monitors.keys().copied()
    }

    /// Drive every configured reading in order.
    pub fn run(&mut self) -> RunReport {
        let mut report = RunReport::default();
        for &(sensor_id, value) in &self.readings {
            // Validated in build_with
            let Some(sensor) = self.sensors.get_mut(&sensor_id) else {
                continue;
            };
            sensor.read(value);
            report.readings += 1;
            if sensor.is_alarming() {
                report.triggered += 1;
                report.alerts += sensor.monitor_count();
            }
        }

        info!(
            "{} reading(s), {} above limit, {} alert(s) delivered",
            report.readings, report.triggered, report.alerts
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ReadingConfig, SensorConfig};
    use crate::monitor::Alert;
    use crate::test_support::{AlertLog, RecordingMonitor, alert_log};

    fn recording(config: &ScenarioConfig, log: &AlertLog) -> Scenario {
        Scenario::build_with(config, |id| RecordingMonitor::new(id, log)).unwrap()
    }

    fn single_sensor(
        monitors: Vec<MonitorId>,
        wired: Vec<MonitorId>,
        value: f64,
    ) -> ScenarioConfig {
        ScenarioConfig {
            monitors,
            sensors: vec![SensorConfig {
                id: 10,
                monitors: wired,
            }],
            readings: vec![ReadingConfig { sensor: 10, value }],
        }
    }

    #[test]
    fn test_default_scenario_alerts_both_monitors() {
        let log = alert_log();
        let mut scenario = recording(&Config::default().scenario, &log);

        let report = scenario.run();

        assert_eq!(
            report,
            RunReport {
                readings: 1,
                triggered: 1,
                alerts: 2,
            }
        );
        assert_eq!(
            *log.lock(),
            vec![
                Alert {
                    monitor: 1,
                    sensor: 10,
                    value: 1600.0
                },
                Alert {
                    monitor: 2,
                    sensor: 10,
                    value: 1600.0
                },
            ]
        );
        assert_eq!(scenario.sensor(20).map(Sensor::value), Some(0.0));
    }

    #[test]
    fn test_reading_below_limit() {
        let log = alert_log();
        let mut scenario = recording(&single_sensor(vec![1, 2], vec![1, 2], 1000.0), &log);

        let report = scenario.run();

        assert_eq!(report.triggered, 0);
        assert_eq!(report.alerts, 0);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_sensor_without_monitors() {
        let log = alert_log();
        let config = ScenarioConfig {
            monitors: vec![1],
            sensors: vec![SensorConfig {
                id: 20,
                monitors: vec![],
            }],
            readings: vec![ReadingConfig {
                sensor: 20,
                value: 2000.0,
            }],
        };
        let mut scenario = recording(&config, &log);

        let report = scenario.run();

        assert_eq!(report.triggered, 1);
        assert_eq!(report.alerts, 0);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_duplicate_wiring_alerts_once() {
        let log = alert_log();
        let mut scenario = recording(&single_sensor(vec![1], vec![1, 1], 1600.0), &log);

        let report = scenario.run();

        assert_eq!(report.alerts, 1);
        assert_eq!(log.lock().len(), 1);
    }

    #[test]
    fn test_build_rejects_duplicate_monitor() {
        let config = single_sensor(vec![1, 1], vec![1], 1600.0);
        let err = Scenario::build(&config).err().unwrap();
        assert!(matches!(err, AlertError::DuplicateMonitor(1)));
    }

    #[test]
    fn test_build_rejects_duplicate_sensor() {
        let mut config = single_sensor(vec![1], vec![1], 1600.0);
        config.sensors.push(SensorConfig {
            id: 10,
            monitors: vec![],
        });
        let err = Scenario::build(&config).err().unwrap();
        assert!(matches!(err, AlertError::DuplicateSensor(10)));
    }

    #[test]
    fn test_build_rejects_unknown_monitor() {
        let config = single_sensor(vec![1], vec![1, 5], 1600.0);
        let err = Scenario::build(&config).err().unwrap();
        assert!(matches!(
            err,
            AlertError::UnknownMonitor {
                sensor: 10,
                monitor: 5
            }
        ));
    }

    #[test]
    fn test_build_rejects_unknown_sensor() {
        let mut config = single_sensor(vec![1], vec![1], 1600.0);
        config.readings[0].sensor = 99;
        let err = Scenario::build(&config).err().unwrap();
        assert!(matches!(err, AlertError::UnknownSensor(99)));
    }

    #[test]
    fn test_build_with_console_monitors() {
        let scenario = Scenario::build(&Config::default().scenario).unwrap();
        assert_eq!(scenario.monitor_ids().collect::<Vec<_>>(), vec![1, 2]);
        assert!(scenario.sensor(10).is_some_and(|s| s.monitor_count() == 2));
        assert!(scenario.sensor(30).is_none());
    }
}
