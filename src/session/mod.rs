// Session module
// Owns the current run and the navigation cursor over its trace

pub mod cursor;
pub mod visualizer;

pub use cursor::Cursor;
pub use visualizer::{Run, SessionError, Visualizer, VisualizerConfig, VisualizerView};
