// bubbleviz: step-through bubble sort visualizer

use std::fs::File;
use std::io::{self, Stdout};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bubbleviz::config::Config;
use bubbleviz::errors::{SetupError, SetupStage};
use bubbleviz::playback::PlaybackController;
use bubbleviz::snapshot::SnapshotHistory;
use bubbleviz::sorting::constants::DATASET;
use bubbleviz::sorting::{record_bubble_sort, SortStats};
use bubbleviz::ui::{animation, App};

fn main() {
    let config = Config::parse();

    if let Err(e) = init_tracing(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Record the whole sort before touching the display
    let history = match config.capacity {
        Some(limit) => SnapshotHistory::with_limit(limit),
        None => SnapshotHistory::unbounded(),
    };
    let recording = match record_bubble_sort(&DATASET, history) {
        Ok(recording) => recording,
        Err(e) => {
            debug!(%e, "recording aborted");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!(
        snapshots = recording.history.len(),
        comparisons = recording.stats.comparisons,
        swaps = recording.stats.swaps,
        "sort recorded"
    );

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            debug!(%e, "terminal setup failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let res = run(&mut terminal, &config, recording.history, recording.stats);

    if let Err(e) = restore_terminal(&mut terminal) {
        eprintln!("Warning: Failed to restore terminal: {}", e);
    }

    if let Err(err) = res {
        debug!(%err, "event loop failed");
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &Config,
    history: SnapshotHistory<u64>,
    stats: SortStats,
) -> io::Result<()> {
    if !config.skip_animation {
        animation::animate(terminal, &history, config.step_delay())?;
    }

    let mut app = App::new(
        PlaybackController::new(history),
        stats,
        config.frame_interval(),
    );
    app.run(terminal)
}

fn init_tracing(config: &Config) -> Result<(), SetupError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(config.log_directives(rust_log.as_deref()));

    match &config.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| SetupError::new(SetupStage::LogFile, e))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
    }
    Ok(())
}

/// Acquire raw mode, the alternate screen and the terminal, undoing the
/// earlier steps if a later one fails
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, SetupError> {
    enable_raw_mode().map_err(|e| SetupError::new(SetupStage::RawMode, e))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(SetupError::new(SetupStage::AlternateScreen, e));
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(SetupError::new(SetupStage::Terminal, e))
        }
    }
}

/// Release terminal resources in reverse order of acquisition
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()
}
