// Themes Module
// Light and dark color tables for presentation adapters

pub mod types;
mod dark;
mod light;

/// Get a theme by name
pub fn get_theme(name: &str) -> Option<types::Theme> {
    match name.to_uppercase().as_str() {
        "LIGHT" => Some(light::light_theme()),
        "DARK" => Some(dark::dark_theme()),
        _ => None,
    }
}

/// Theme matching a detected system appearance
pub fn theme_for_mode(mode: types::ThemeMode) -> types::Theme {
    match mode {
        types::ThemeMode::Light => light::light_theme(),
        types::ThemeMode::Dark => dark::dark_theme(),
    }
}

/// List all available themes with summaries
pub fn list_themes() -> Vec<types::ThemeSummary> {
    vec![
        light::light_theme().summary(
            "Pale blue partition steps and pale green merge steps on white."
        ),
        dark::dark_theme().summary(
            "Deep blue partition steps and deep green merge steps on near-black."
        ),
    ]
}

/// Get all theme names
pub fn list_theme_names() -> Vec<String> {
    vec![
        "LIGHT".to_string(),
        "DARK".to_string(),
    ]
}

// Re-export main types
pub use types::{
    Theme,
    ThemeMode,
    ThemeSummary,
    ansi_fg,
    hex_to_rgb,
    ANSI_RESET,
};
