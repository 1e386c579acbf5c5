pub mod classifier;
pub mod frame;
pub mod pipeline;
pub mod window;
