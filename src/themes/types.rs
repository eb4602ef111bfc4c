// Theme Type Definitions
// Color tables for presentation adapters

use serde::{Deserialize, Serialize};

/// Light or dark appearance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light, // Default fallback
        }
    }

    pub fn to_string(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Complete theme definition (colors as `#rrggbb`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub mode: ThemeMode,
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub partition_fill: String,      // Card fill for partition steps
    pub merge_fill: String,          // Card fill for merge steps
    pub pivot_highlight: String,     // Pivot value emphasis
}

/// Theme summary for UI display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSummary {
    pub name: String,
    pub description: String,
    pub mode: ThemeMode,
}

impl Theme {
    /// Get a summary of this theme for UI display
    pub fn summary(&self, description: &str) -> ThemeSummary {
        ThemeSummary {
            name: self.name.clone(),
            description: description.to_string(),
            mode: self.mode,
        }
    }
}

// Helper functions for terminal output

/// Parse `#rrggbb` into RGB components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// 24-bit ANSI foreground escape for a `#rrggbb` color
pub fn ansi_fg(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        None => String::new(),
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";
