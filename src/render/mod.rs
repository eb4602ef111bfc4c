// Render module
// Presentation adapters over the visualizer view

pub mod console;
pub mod labels;

pub use console::ConsolePresenter;
pub use labels::{Labels, Locale};

use crate::session::VisualizerView;

/// A swappable presentation layer
///
/// Presenters only read the view; navigation stays with the session.
pub trait Presenter {
    fn present(&self, view: &VisualizerView) -> String;
}
