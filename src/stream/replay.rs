use std::collections::VecDeque;
use std::fs::File;
use std::path::Path;

use super::{LineStream, StreamError};

/// Replays a recorded sensor session from a CSV file.
///
/// Each record is one frame, `ax,ay,az,gx,gy,gz`, re-emitted as the
/// whitespace-separated wire form one line per read. The end of the
/// recording reads as [`StreamError::Exhausted`].
pub struct ReplayLineStream {
    frames: VecDeque<String>,
}

impl ReplayLineStream {
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, StreamError> {
        let file = File::open(&path).map_err(|e| {
            StreamError::Unavailable(format!(
                "open recording {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(file);

        let mut frames = VecDeque::new();
        for result in reader.records() {
            let record =
                result.map_err(|e| StreamError::Unavailable(format!("read recording: {}", e)))?;
            frames.push_back(record.iter().collect::<Vec<_>>().join(" "));
        }

        Ok(Self { frames })
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl LineStream for ReplayLineStream {
    fn read_line(&mut self) -> Result<Option<String>, StreamError> {
        match self.frames.pop_front() {
            Some(frame) => Ok(Some(frame)),
            None => Err(StreamError::Exhausted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_recording(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn replays_records_as_frame_lines() {
        let path = write_recording(
            "fall_monitor_replay_test.csv",
            "0.0,0.0,0.98,0.01,0.02,0.03\n0.1,0.2,2.4,0.0,0.0,0.0\n",
        );
        let mut stream = ReplayLineStream::from_csv(&path).unwrap();
        assert_eq!(stream.remaining(), 2);

        assert_eq!(
            stream.read_line().unwrap(),
            Some("0.0 0.0 0.98 0.01 0.02 0.03".to_string())
        );
        assert_eq!(
            stream.read_line().unwrap(),
            Some("0.1 0.2 2.4 0.0 0.0 0.0".to_string())
        );
        assert!(matches!(stream.read_line(), Err(StreamError::Exhausted)));
    }

    #[test]
    fn missing_recording_is_unavailable() {
        let result = ReplayLineStream::from_csv("/nonexistent/recording.csv");
        assert!(matches!(result, Err(StreamError::Unavailable(_))));
    }
}
