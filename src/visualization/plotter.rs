// src/visualization/plotter.rs

use std::sync::{Arc, Mutex};

use crate::processing::classifier::FallState;

/// Latest state window handed over by the monitor loop, consumed by the
/// render thread. The monitor replaces the whole window each tick; points
/// are `(seconds relative to the earliest retained sample, state ordinal)`.
pub struct StatePlotter {
    window: Vec<(f64, u8)>,
    latest: Option<(f64, FallState)>, // (svm, state)
}

impl StatePlotter {
    pub fn new() -> Self {
        Self {
            window: Vec::new(),
            latest: None,
        }
    }

    pub fn update(&mut self, window: Vec<(f64, u8)>, svm: f64, state: FallState) {
        self.window = window;
        self.latest = Some((svm, state));
    }

    pub fn window(&self) -> &[(f64, u8)] {
        &self.window
    }

    pub fn latest(&self) -> Option<(f64, FallState)> {
        self.latest
    }
}

impl Default for StatePlotter {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedPlotter = Arc<Mutex<StatePlotter>>;

pub fn create_shared_plotter() -> SharedPlotter {
    Arc::new(Mutex::new(StatePlotter::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_window_and_latest() {
        let mut plotter = StatePlotter::new();
        plotter.update(vec![(0.0, 0), (0.5, 2)], 2.4, FallState::Fall);

        assert_eq!(plotter.window(), &[(0.0, 0), (0.5, 2)]);
        let (svm, state) = plotter.latest().unwrap();
        assert_eq!(svm, 2.4);
        assert_eq!(state, FallState::Fall);
    }
}
