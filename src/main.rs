mod app;
mod domain;
mod input;
mod logging;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::DurationPicker;
use notifications::{Notifier, StatusLine, TerminalNotifier};
use persistence::{default_config_file, default_log_dir, load_config, save_config, Config};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "ticklist")]
#[command(about = "A two-screen terminal companion: countdown timer and to-do list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file. Defaults to <config dir>/ticklist/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Initial picker hours (0-23)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    hours: Option<u32>,

    /// Initial picker minutes (0-59)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..60))]
    minutes: Option<u32>,

    /// Initial picker seconds (0-59)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..60))]
    seconds: Option<u32>,

    /// Do not ring the terminal bell when the countdown completes
    #[arg(long)]
    mute: bool,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_file()?,
    };

    match cli.command {
        Some(Commands::Init { force }) => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            save_config(&config_path, &Config::default())?;
            println!("Wrote default config: {}", config_path.display());
            Ok(())
        }
        None => {
            let config = load_config(&config_path)
                .with_context(|| format!("Could not load config {}", config_path.display()))?;
            run_tui(&cli, config)
        }
    }
}

fn run_tui(cli: &Cli, config: Config) -> Result<()> {
    let log_dir = match &cli.log_dir {
        Some(dir) => dir.clone(),
        None => default_log_dir()?,
    };
    // Keep the handle alive until exit so buffered lines get flushed
    let _logger = match logging::init_logging(&config.log_level, &log_dir) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let picker = DurationPicker::new(
        cli.hours.unwrap_or(config.default_hours),
        cli.minutes.unwrap_or(config.default_minutes),
        cli.seconds.unwrap_or(config.default_seconds),
    );

    let status = StatusLine::new();
    let notifier: Rc<dyn Notifier> = Rc::new(TerminalNotifier::new(
        status.clone(),
        config.sound && !cli.mute,
        config.desktop_notifications,
    ));
    let mut app = AppState::new(picker, notifier, status);
    app.announce_screen();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, Duration::from_millis(config.refresh_ms));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    } else {
        log::info!("exiting");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    refresh: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(refresh)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key, Instant::now()) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
