// Dark Theme
// Deep blue and green cards on near-black

use super::types::*;

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: "DARK".to_string(),
        mode: ThemeMode::Dark,
        background: "#111827".to_string(),
        foreground: "#f3f4f6".to_string(),
        border: "#374151".to_string(),
        partition_fill: "#1e3a8a".to_string(), // blue-900
        merge_fill: "#14532d".to_string(),     // green-900
        pivot_highlight: "#fca5a5".to_string(),
    }
}
