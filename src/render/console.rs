// Console presenter
// Plain-text rendering of the visible steps, one block per event

use std::fmt::{self, Write};

use super::labels::Locale;
use super::Presenter;
use crate::session::VisualizerView;
use crate::sorting::{EventKind, TraceEvent};
use crate::themes::{ansi_fg, Theme, ANSI_RESET};

/// Renders a view as indented text blocks
///
/// With a theme set, step headers and pivots are colored with 24-bit ANSI
/// escapes taken from the theme.
#[derive(Debug, Clone, Default)]
pub struct ConsolePresenter {
    locale: Locale,
    theme: Option<Theme>,
}

impl ConsolePresenter {
    pub fn new(locale: Locale) -> Self {
        ConsolePresenter {
            locale,
            theme: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    fn paint(&self, color: impl Fn(&Theme) -> &str, text: &str) -> String {
        match &self.theme {
            Some(theme) => format!("{}{}{}", ansi_fg(color(theme)), text, ANSI_RESET),
            None => text.to_string(),
        }
    }

    fn write_step(&self, out: &mut String, number: usize, event: &TraceEvent) -> fmt::Result {
        let labels = self.locale.labels();
        let indent = "  ".repeat(event.depth);

        let header = format!("{} {}: {}", labels.step, number, labels.kind(event.kind));
        let header = match event.kind {
            EventKind::Partition => self.paint(|t| t.partition_fill.as_str(), &header),
            EventKind::Merge => self.paint(|t| t.merge_fill.as_str(), &header),
        };
        let pivot = self.paint(|t| t.pivot_highlight.as_str(), &event.pivot_value.to_string());
        let values = event
            .range_values()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(out, "{}{}", indent, header)?;
        writeln!(out, "{}  {}: {}", indent, labels.pivot, pivot)?;
        writeln!(
            out,
            "{}  [{}..{}] {}",
            indent, event.range_low, event.range_high, values
        )
    }

    fn render(&self, view: &VisualizerView) -> Result<String, fmt::Error> {
        let labels = self.locale.labels();
        let mut out = String::new();

        writeln!(out, "{}", labels.title)?;
        writeln!(out, "{}: {}", labels.initial_array, view.initial)?;
        writeln!(out)?;

        for (i, event) in view.steps.iter().enumerate() {
            self.write_step(&mut out, i + 1, event)?;
        }

        writeln!(
            out,
            "{} {} / {}",
            labels.step,
            view.step_number(),
            view.total_steps
        )?;
        Ok(out)
    }
}

impl Presenter for ConsolePresenter {
    fn present(&self, view: &VisualizerView) -> String {
        self.render(view).expect("formatting into a String does not fail")
    }
}
