// src/config/mod.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::visualization::VisualizationConfig;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub stream: StreamConfig,
    pub monitor: MonitorConfig,
    pub visualization: VisualizationConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StreamConfig {
    /// Address of the sensor bridge feeding the live stream.
    pub addr: String,
    pub read_timeout_ms: u64,
    /// When set, the monitor replays this recording instead of connecting.
    pub replay_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MonitorConfig {
    pub verbose: bool,
    pub enable_debug_logging: bool,
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stream: StreamConfig::default(),
            monitor: MonitorConfig::default(),
            visualization: VisualizationConfig::default(),
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".to_string(),
            read_timeout_ms: 1000,
            replay_path: None,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            enable_debug_logging: false,
            tick_interval_ms: 10,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, String> {
    let config_str =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

    serde_yaml::from_str(&config_str).map_err(|e| format!("Failed to parse config file: {}", e))
}

pub fn save_config<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), String> {
    let yaml =
        serde_yaml::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))?;

    fs::write(path, yaml).map_err(|e| format!("Failed to write config file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_round_trip_preserves_config() {
        let mut config = Config::default();
        config.stream.addr = "10.0.0.5:9000".to_string();
        config.monitor.tick_interval_ms = 20;
        config.stream.replay_path = Some("data/session.csv".to_string());

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.stream.addr, "10.0.0.5:9000");
        assert_eq!(parsed.monitor.tick_interval_ms, 20);
        assert_eq!(parsed.stream.replay_path.as_deref(), Some("data/session.csv"));
    }

    #[test]
    fn defaults_match_live_cadence() {
        let config = Config::default();
        assert_eq!(config.monitor.tick_interval_ms, 10);
        assert_eq!(config.stream.read_timeout_ms, 1000);
    }
}
