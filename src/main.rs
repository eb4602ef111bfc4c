// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(
    all(not(debug_assertions), feature = "desktop"),
    windows_subsystem = "windows"
)]

#[cfg(feature = "desktop")]
fn main() {
    quicktrace_lib::run()
}

#[cfg(not(feature = "desktop"))]
fn main() {
    use clap::Parser;

    quicktrace_lib::logging::init_console_logging();

    let cli = console::Cli::parse();
    if let Err(e) = console::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Terminal front end: the same session driven from stdin
#[cfg(not(feature = "desktop"))]
mod console {
    use std::io::{self, BufRead, Write};

    use clap::Parser;
    use quicktrace_lib::themes::{theme_for_mode, ThemeMode};
    use quicktrace_lib::{
        ConsolePresenter, Locale, PivotPolicy, Presenter, SequenceConfig, Visualizer,
        VisualizerConfig,
    };

    /// Step through a traced quicksort run
    #[derive(Parser, Debug)]
    #[command(name = "quicktrace")]
    #[command(version, about, long_about = None)]
    pub struct Cli {
        /// Number of values per sequence
        #[arg(long, default_value_t = 10)]
        pub length: usize,

        /// Exclusive upper bound for values
        #[arg(long, default_value_t = 100)]
        pub max_value: i32,

        /// Pivot policy: low (leftmost) or high (rightmost)
        #[arg(long, default_value = "low", value_parser = parse_policy)]
        pub pivot: PivotPolicy,

        /// Fixed seed for reproducible sequences
        #[arg(long)]
        pub seed: Option<u64>,

        /// Korean labels
        #[arg(long)]
        pub korean: bool,

        /// Color output with the dark theme
        #[arg(long)]
        pub dark: bool,

        /// Color output with the light theme
        #[arg(long, conflicts_with = "dark")]
        pub light: bool,

        /// Print the whole run as JSON and exit
        #[arg(long)]
        pub json: bool,
    }

    fn parse_policy(s: &str) -> Result<PivotPolicy, String> {
        PivotPolicy::from_string(s).ok_or_else(|| format!("unknown pivot policy '{}'", s))
    }

    pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
        let config = VisualizerConfig {
            sequence: SequenceConfig::new(cli.length, cli.max_value),
            pivot_policy: cli.pivot,
            seed: cli.seed,
        };
        let mut visualizer = Visualizer::new(config)?;

        if cli.json {
            println!("{}", serde_json::to_string_pretty(visualizer.run())?);
            return Ok(());
        }

        let locale = if cli.korean {
            Locale::Korean
        } else {
            Locale::English
        };
        let presenter = match (cli.dark, cli.light) {
            (true, _) => ConsolePresenter::new(locale).with_theme(theme_for_mode(ThemeMode::Dark)),
            (_, true) => ConsolePresenter::new(locale).with_theme(theme_for_mode(ThemeMode::Light)),
            _ => ConsolePresenter::new(locale),
        };

        let labels = locale.labels();
        let prompt = labels.prompt();

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut lines = stdin.lock().lines();

        loop {
            write!(stdout, "{}\n{} > ", presenter.present(&visualizer.view()), prompt)?;
            stdout.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match line.trim() {
                "" | "n" | "next" => {
                    visualizer.step_forward();
                }
                "p" | "prev" | "previous" => {
                    visualizer.step_backward();
                }
                "r" | "reset" => {
                    visualizer.reset();
                }
                "q" | "quit" => break,
                other => writeln!(stdout, "{}", labels.unknown(other))?,
            }
        }

        Ok(())
    }
}
