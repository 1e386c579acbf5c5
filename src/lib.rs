pub mod config;
pub mod local;
pub mod processing;
pub mod stream;
pub mod utils;
pub mod visualization;

pub use processing::classifier::{classify, FallState};
pub use processing::frame::{parse_frame, Reading};
pub use processing::pipeline::FallPipeline;
pub use processing::window::{Sample, WindowBuffer, WINDOW_SECONDS};
