use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioBackend;
use crate::config;
use crate::error::Result;
use crate::library::{StorageGate, load_library};
use crate::ui;

/// Everything the keyboard can ask for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    PlaySelected,
    PlayPause,
    Next,
    Prev,
    Rescan,
    Quit,
}

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: forwards the engine's completion signal, draws,
/// and dispatches key presses. Returns `Ok(())` when the user quits.
pub fn run<B: AudioBackend, G: StorageGate>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<B>,
    gate: &mut G,
    state: &mut EventLoopState,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick()?;

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(cmd) = key_to_command(key, state) else {
                    continue;
                };
                if apply_command(cmd, settings, app, gate)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Map a key press to a command, tracking the `gg` prefix.
pub fn key_to_command(key: KeyEvent, state: &mut EventLoopState) -> Option<Command> {
    if key.code == KeyCode::Char('g') {
        if state.pending_gg {
            state.pending_gg = false;
            return Some(Command::SelectFirst);
        }
        state.pending_gg = true;
        return None;
    }
    state.pending_gg = false;

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Command::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::SelectPrev),
        KeyCode::Char('G') | KeyCode::End => Some(Command::SelectLast),
        KeyCode::Home => Some(Command::SelectFirst),
        KeyCode::Enter => Some(Command::PlaySelected),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Command::PlayPause),
        KeyCode::Char('l') | KeyCode::Right => Some(Command::Next),
        KeyCode::Char('h') | KeyCode::Left => Some(Command::Prev),
        KeyCode::Char('r') => Some(Command::Rescan),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Run one command against the app. Returns `Ok(true)` when it is time to quit.
pub fn apply_command<B: AudioBackend, G: StorageGate>(
    cmd: Command,
    settings: &config::Settings,
    app: &mut App<B>,
    gate: &mut G,
) -> Result<bool> {
    match cmd {
        Command::SelectNext => {
            app.follow_playback_off();
            app.next();
        }
        Command::SelectPrev => {
            app.follow_playback_off();
            app.prev();
        }
        Command::SelectFirst => {
            app.follow_playback_off();
            app.select_first();
        }
        Command::SelectLast => {
            app.follow_playback_off();
            app.select_last();
        }
        Command::PlaySelected => app.play_selected()?,
        Command::PlayPause => app.toggle_play_pause()?,
        Command::Next => app.advance()?,
        Command::Prev => app.retreat()?,
        Command::Rescan => {
            let library = load_library(gate, &app.root, &settings.library)?;
            info!("rescan found {} track(s)", library.len());
            app.replace_library(library);
        }
        Command::Quit => return Ok(true),
    }
    Ok(false)
}
