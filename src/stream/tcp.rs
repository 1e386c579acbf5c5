use std::io::{self, BufRead, BufReader};
use std::net::TcpStream;
use std::time::Duration;

use super::{LineStream, StreamError};

/// Live sensor feed over TCP, one frame line per read.
pub struct TcpLineStream {
    reader: BufReader<TcpStream>,
}

impl TcpLineStream {
    pub fn connect(addr: &str, read_timeout: Duration) -> Result<Self, StreamError> {
        let stream = TcpStream::connect(addr)
            .map_err(|e| StreamError::Unavailable(format!("connect to {}: {}", addr, e)))?;
        stream.set_read_timeout(Some(read_timeout))?;

        Ok(Self {
            reader: BufReader::new(stream),
        })
    }
}

impl LineStream for TcpLineStream {
    fn read_line(&mut self) -> Result<Option<String>, StreamError> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(StreamError::Unavailable(
                "sensor closed the connection".to_string(),
            )),
            Ok(_) => Ok(Some(line.trim_end().to_string())),
            // A timed-out read surfaces as WouldBlock or TimedOut depending
            // on the platform.
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                Ok(None)
            }
            Err(e) => Err(StreamError::Io(e)),
        }
    }
}
