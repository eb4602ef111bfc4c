// Light Theme
// Blue partition cards, green merge cards on white

use super::types::*;

/// Create the light theme
///
/// Partition steps use a pale blue fill and merge steps a pale green one,
/// so the two kinds stay distinguishable at a glance.
pub fn light_theme() -> Theme {
    Theme {
        name: "LIGHT".to_string(),
        mode: ThemeMode::Light,
        background: "#ffffff".to_string(),
        foreground: "#111827".to_string(),
        border: "#d1d5db".to_string(),
        partition_fill: "#dbeafe".to_string(), // blue-100
        merge_fill: "#dcfce7".to_string(),     // green-100
        pivot_highlight: "#b91c1c".to_string(),
    }
}
