use super::classifier::{classify, FallState};
use super::frame::{parse_frame, Reading};
use super::window::{Sample, WindowBuffer};
use crate::utils::log::log_to_file;

// FALL PIPELINE ---------------------------------------------------------------

#[derive(Default)]
pub struct FallPipelineConfig {
    pub enable_debug_logging: bool,
}

/// What one successful tick produced.
#[derive(Debug, Clone, Copy)]
pub struct TickOutcome {
    pub reading: Reading,
    pub svm: f64,
    pub state: FallState,
}

/// Per-tick pipeline: parse -> magnitude -> classify -> window.
///
/// Single-threaded; one call per tick, with the caller supplying the sample
/// timestamp. A malformed frame skips the tick and leaves the window
/// untouched.
pub struct FallPipeline {
    pub index: usize,
    window: WindowBuffer,
    config: FallPipelineConfig,
}

impl FallPipeline {
    pub fn new(config: FallPipelineConfig) -> Self {
        Self {
            index: 0,
            window: WindowBuffer::new(),
            config,
        }
    }

    pub fn process_line(&mut self, line: &str, now: f64) -> Option<TickOutcome> {
        self.index += 1;

        let reading = match parse_frame(line) {
            Ok(reading) => reading,
            Err(err) => {
                if self.config.enable_debug_logging {
                    let message = format!("index: {}, skipped frame: {}", self.index, err);
                    log_to_file("pipeline.log", &message).ok();
                }
                return None;
            }
        };

        let svm = reading.svm();
        let state = classify(svm);

        self.window.append(Sample {
            timestamp: now,
            state,
        });
        self.window.prune(now);

        if self.config.enable_debug_logging {
            let message = format!(
                "index: {}, svm: {:.4}, state: {}, window_len: {}",
                self.index,
                svm,
                state.label(),
                self.window.len()
            );
            log_to_file("pipeline.log", &message).ok();
        }

        Some(TickOutcome {
            reading,
            svm,
            state,
        })
    }

    pub fn window(&self) -> &WindowBuffer {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> FallPipeline {
        FallPipeline::new(FallPipelineConfig::default())
    }

    #[test]
    fn classifies_axis_triples_end_to_end() {
        let mut p = pipeline();

        let cases = [
            ("0.0 0.0 0.5 0 0 0", 0.5, FallState::NoFall),
            ("0.0 0.0 1.2 0 0 0", 1.2, FallState::PreFall),
            ("0.0 0.0 2.5 0 0 0", 2.5, FallState::Fall),
            // Dead zone between the pre-fall and fall limits.
            ("0.0 0.0 1.7 0 0 0", 1.7, FallState::NoFall),
        ];

        for (i, (line, svm, state)) in cases.iter().enumerate() {
            let outcome = p.process_line(line, i as f64).unwrap();
            assert!((outcome.svm - svm).abs() < 1e-12);
            assert_eq!(outcome.state, *state);
        }
        assert_eq!(p.window().len(), 4);
    }

    #[test]
    fn malformed_frame_skips_tick_and_leaves_window_unchanged() {
        let mut p = pipeline();
        assert!(p.process_line("0.0 0.0 0.5 0 0 0", 0.0).is_some());

        assert!(p.process_line("x y", 1.0).is_none());
        assert!(p.process_line("a b c d e f", 2.0).is_none());
        assert_eq!(p.window().len(), 1);
    }

    #[test]
    fn window_prunes_as_ticks_advance() {
        let mut p = pipeline();
        for t in 0..=6 {
            p.process_line("0.0 0.0 0.5 0 0 0", t as f64).unwrap();
        }
        // t=0 is stale at t=6 with a 5 second window.
        assert_eq!(p.window().len(), 6);
        assert_eq!(p.window().snapshot().next(), Some((0.0, 0)));
    }
}
