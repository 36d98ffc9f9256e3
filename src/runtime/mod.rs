use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{RodioBackend, Sequencer};
use crate::cli::Cli;
use crate::config;
use crate::library::{FsGate, load_library};
use crate::logging::init_logger;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (settings, settings_warning) = settings::load_settings();

    if settings.log.enabled {
        let log_path = cli
            .log_file
            .clone()
            .or_else(|| settings.log.file.clone())
            .or_else(config::default_log_path);
        if let Some(path) = log_path {
            if let Err(e) = init_logger(&path, settings.log.level.into()) {
                eprintln!("repro: logging disabled: {e}");
            }
        }
    }
    if let Some(msg) = settings_warning {
        warn!("{msg}");
    }

    let root = settings::resolve_root(cli.dir.as_deref(), &settings);
    info!("starting with root {:?}", root);

    // Without read access there is nothing this player can do.
    let mut gate = FsGate;
    let library = load_library(&mut gate, &root, &settings.library)?;

    let backend = RodioBackend::open_default()?;
    let mut app = App::new(Sequencer::new(backend, library), root);
    app.follow_playback = settings.ui.follow_playback;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &mut gate, &mut state)
    })();

    app.sequencer.shutdown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
