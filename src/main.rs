mod app;
mod audio;
mod config;
mod dialog;
mod domain;
mod error;
mod hit_map;
mod input;
mod logging;
mod notifications;
mod persistence;
mod report;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::SessionController;
use audio::SystemAlarm;
use clap::{Parser, Subcommand};
use config::{AppConfig, DataPaths};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_dir, get_data_dir, init_local_data_dir, JsonFiles, Persistence};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use store::{StatsStore, TaskStore};
use ticker::{SystemClock, Ticker};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "focusflow")]
#[command(about = "A terminal Pomodoro timer with a scored to-do list and daily statistics", long_about = None)]
struct Cli {
    /// Use this data directory instead of a local or home .focusflow
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .focusflow directory in the current directory
    Init,
    /// Write a markdown report of the statistics and the last seven days
    Report {
        /// Last day of the report (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            println!("Initialized focusflow directory: {}", data_dir.display());
            println!();
            println!("Focus Flow will now keep tasks and stats in this directory.");
            println!("Run 'focusflow' to start a session.");
            Ok(())
        }
        Some(Commands::Report { date, output }) => {
            let report_date = if let Some(date_str) = date {
                chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?
            } else {
                chrono::Local::now().date_naive()
            };

            let paths = DataPaths::new(get_data_dir(cli.data_dir.as_deref())?);
            println!("Generating report for {}...", report_date);
            let report_path = report::generate_report(&paths, report_date, output)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(cli.data_dir),
    }
}

/// Load everything the session needs before the terminal is taken over
fn build_controller(paths: DataPaths) -> Result<SessionController> {
    let files = Rc::new(JsonFiles::new(&paths));
    let durations = files
        .load_config()
        .context("Failed to load settings")?
        .unwrap_or_default();
    let config = AppConfig::new(paths, durations);

    let persistence: Rc<dyn Persistence> = files;
    let mut tasks = TaskStore::new(persistence.clone());
    tasks.load().context("Failed to load tasks")?;
    let mut stats = StatsStore::new(persistence.clone(), Rc::new(SystemClock));
    stats.load().context("Failed to load stats")?;

    let audio = Box::new(SystemAlarm::new(&config.paths.alarms));
    Ok(SessionController::new(config, tasks, stats, persistence, audio))
}

fn run_tui(data_dir: Option<PathBuf>) -> Result<()> {
    let data_dir = get_data_dir(data_dir.as_deref())?;
    ensure_dir(&data_dir)?;
    let paths = DataPaths::new(&data_dir);

    let _logging = logging::init_logging(&paths.logs)?;
    info!(dir = %data_dir.display(), "Starting focusflow");

    let mut app = build_controller(paths)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Save on exit
    let saved = app.save_all();
    if let Err(e) = &saved {
        error!("Error saving on exit: {:#}", e);
    }

    if let Err(err) = &result {
        error!("Exiting after error: {:#}", err);
    }
    info!("Stopped focusflow");
    result.and(saved)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut SessionController,
) -> Result<()> {
    let tick_rate = ticker::tick_duration();
    let mut ticker = Ticker::new();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key)? {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse)?,
                _ => {}
            }
        }

        // Advance the timer by the real time since the last pass
        app.tick(ticker.tick())?;
    }
}
