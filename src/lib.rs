// Quicktrace - Step-by-step quicksort visualizer
// Module declarations

pub mod logging;
pub mod render;
pub mod sequence;
pub mod session;
pub mod sorting;
pub mod themes;

#[cfg(feature = "desktop")]
mod commands;

pub use render::{ConsolePresenter, Locale, Presenter};
pub use sequence::{Sequence, SequenceConfig, SequenceGenerator};
pub use session::{Visualizer, VisualizerConfig, VisualizerView};
pub use sorting::{EventKind, PivotPolicy, Trace, TraceEvent, TracingSorter};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            use tauri::Manager;

            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let state = commands::VisualizerState::new(session::VisualizerConfig::default())
                .map_err(|e| {
                    log::error!("Failed to start visualizer: {}", e);
                    e
                })?;

            app.manage(state);

            log::info!("Quicktrace initialized successfully");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_view,
            commands::reset,
            commands::step_forward,
            commands::step_backward,
            commands::list_themes,
            commands::get_theme,
            commands::list_theme_names,
            commands::detect_theme,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
