// src/visualization/mod.rs

pub mod plotter;
pub mod window;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VisualizationConfig {
    pub enabled: bool,
    pub window_width: u32,
    pub window_height: u32,
    pub update_interval_ms: u64,
    pub plot_height: u32,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_width: 900,
            window_height: 500,
            update_interval_ms: 16, // ~60 FPS
            plot_height: 320,
        }
    }
}
