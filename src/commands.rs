// Tauri IPC Commands
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use tauri::State;
use uuid::Uuid;

use crate::session::{SessionError, Visualizer, VisualizerConfig, VisualizerView};
use crate::themes::{self, Theme, ThemeMode, ThemeSummary};

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

type CommandResult<T> = Result<T, CommandError>;

/// Session shared across commands; every command holds the lock for its whole body
pub struct VisualizerState(pub Mutex<Visualizer>);

impl VisualizerState {
    pub fn new(config: VisualizerConfig) -> Result<Self, SessionError> {
        Ok(VisualizerState(Mutex::new(Visualizer::new(config)?)))
    }
}

fn lock<'a>(state: &'a State<'_, VisualizerState>) -> CommandResult<MutexGuard<'a, Visualizer>> {
    state.0.lock().map_err(|e| CommandError::from(e))
}

// ==================== NAVIGATION COMMANDS ====================

#[derive(Debug, Default, Deserialize)]
pub struct StepInput {
    /// Run the caller is looking at; stale ids are rejected
    pub run_id: Option<String>,
}

fn check_run(visualizer: &Visualizer, input: Option<StepInput>) -> CommandResult<()> {
    let run_id = match input.and_then(|i| i.run_id) {
        Some(id) => Some(Uuid::parse_str(&id).map_err(|e| CommandError::from(e))?),
        None => None,
    };
    visualizer
        .ensure_current(run_id)
        .map_err(|e| CommandError::from(e))
}

#[tauri::command]
pub fn get_view(state: State<'_, VisualizerState>) -> CommandResult<VisualizerView> {
    let visualizer = lock(&state)?;
    Ok(visualizer.view())
}

#[tauri::command]
pub fn reset(state: State<'_, VisualizerState>) -> CommandResult<VisualizerView> {
    let mut visualizer = lock(&state)?;
    visualizer.reset();
    Ok(visualizer.view())
}

#[tauri::command]
pub fn step_forward(
    state: State<'_, VisualizerState>,
    input: Option<StepInput>,
) -> CommandResult<VisualizerView> {
    let mut visualizer = lock(&state)?;
    check_run(&visualizer, input)?;
    visualizer.step_forward();
    Ok(visualizer.view())
}

#[tauri::command]
pub fn step_backward(
    state: State<'_, VisualizerState>,
    input: Option<StepInput>,
) -> CommandResult<VisualizerView> {
    let mut visualizer = lock(&state)?;
    check_run(&visualizer, input)?;
    visualizer.step_backward();
    Ok(visualizer.view())
}

// ==================== THEME COMMANDS ====================

#[tauri::command]
pub fn list_themes() -> CommandResult<Vec<ThemeSummary>> {
    Ok(themes::list_themes())
}

#[tauri::command]
pub fn get_theme(name: String) -> CommandResult<Option<Theme>> {
    Ok(themes::get_theme(&name))
}

#[tauri::command]
pub fn list_theme_names() -> CommandResult<Vec<String>> {
    Ok(themes::list_theme_names())
}

/// Theme matching the window's current system appearance
#[tauri::command]
pub fn detect_theme(window: tauri::Window) -> CommandResult<Theme> {
    let mode = match window.theme().map_err(|e| CommandError::from(e))? {
        tauri::Theme::Dark => ThemeMode::Dark,
        _ => ThemeMode::Light,
    };
    log::debug!("Detected {} appearance", mode.to_string());
    Ok(themes::theme_for_mode(mode))
}
