use std::collections::VecDeque;

use super::classifier::FallState;

/// Span of history kept for display, in seconds.
pub const WINDOW_SECONDS: f64 = 5.0;

/// One classified observation. Owned by the buffer once appended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: f64,
    pub state: FallState,
}

// WINDOW BUFFER ---------------------------------------------------------------

/// Rolling buffer of the last [`WINDOW_SECONDS`] of samples.
///
/// Samples arrive in timestamp order, so eviction is always a front trim:
/// after `prune(now)`, every retained sample satisfies
/// `now - sample.timestamp <= WINDOW_SECONDS`.
pub struct WindowBuffer {
    samples: VecDeque<Sample>,
    window_seconds: f64,
}

impl WindowBuffer {
    pub fn new() -> Self {
        Self::with_window(WINDOW_SECONDS)
    }

    pub fn with_window(window_seconds: f64) -> Self {
        Self {
            samples: VecDeque::new(),
            window_seconds,
        }
    }

    /// Appends a sample at the newest end. Sole mutator besides `prune`.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push_back(sample);
    }

    /// Drops samples older than the window, measured from `now`.
    pub fn prune(&mut self, now: f64) {
        while let Some(front) = self.samples.front() {
            if now - front.timestamp > self.window_seconds {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Retained samples as `(relative_time, ordinal)` pairs, time-shifted so
    /// the earliest retained sample sits at 0. Empty buffer yields an empty
    /// iterator.
    pub fn snapshot(&self) -> impl Iterator<Item = (f64, u8)> + '_ {
        let t0 = self.samples.front().map_or(0.0, |s| s.timestamp);
        self.samples
            .iter()
            .map(move |s| (s.timestamp - t0, s.state.ordinal()))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for WindowBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: f64) -> Sample {
        Sample {
            timestamp,
            state: FallState::NoFall,
        }
    }

    #[test]
    fn evicts_only_samples_older_than_window() {
        let mut buffer = WindowBuffer::new();
        for t in 0..=6 {
            buffer.append(sample(t as f64));
            buffer.prune(t as f64);
        }

        // After the sample at t=6, only t=0 is stale (6 - 0 = 6 > 5).
        let retained: Vec<f64> = buffer.snapshot().map(|(rel, _)| rel + 1.0).collect();
        assert_eq!(retained, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(buffer.len(), 6);
    }

    #[test]
    fn sample_exactly_at_window_edge_is_retained() {
        let mut buffer = WindowBuffer::new();
        buffer.append(sample(0.0));
        buffer.append(sample(5.0));
        buffer.prune(5.0);
        // 5.0 - 0.0 is not strictly greater than the window.
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn snapshot_starts_at_relative_zero() {
        let mut buffer = WindowBuffer::new();
        buffer.append(sample(100.5));
        buffer.append(Sample {
            timestamp: 101.0,
            state: FallState::Fall,
        });
        buffer.prune(101.0);

        let points: Vec<(f64, u8)> = buffer.snapshot().collect();
        assert_eq!(points[0], (0.0, 0));
        assert_eq!(points[1], (0.5, 2));
    }

    #[test]
    fn snapshot_of_empty_buffer_is_empty() {
        let buffer = WindowBuffer::new();
        assert_eq!(buffer.snapshot().count(), 0);
    }

    #[test]
    fn snapshot_is_restartable() {
        let mut buffer = WindowBuffer::new();
        buffer.append(sample(1.0));
        buffer.append(sample(2.0));

        let first: Vec<(f64, u8)> = buffer.snapshot().collect();
        let second: Vec<(f64, u8)> = buffer.snapshot().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn prune_on_empty_buffer_is_a_no_op() {
        let mut buffer = WindowBuffer::new();
        buffer.prune(1000.0);
        assert!(buffer.is_empty());
    }
}
