//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::{AudioBackend, PlaybackState};
use crate::config::UiSettings;

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter", "play selected"),
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("r", "rescan"),
    ("q", "quit"),
];

const NO_MUSIC: &str = "No music found. Add .mp3 files and press r to rescan.";

fn controls_text(enabled: bool) -> String {
    CONTROLS
        .iter()
        .filter(|(k, _)| enabled || matches!(*k, "r" | "q"))
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn state_icon(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Idle => "■",
        PlaybackState::Playing => "▶",
        PlaybackState::Paused => "⏸",
    }
}

/// Status line: state, current track, root directory and the last error.
fn status_text<B: AudioBackend>(app: &App<B>) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = app.playback();
    match app.sequencer.current() {
        Some(track) => parts.push(format!(
            "{} {:?}: {}",
            state_icon(state),
            state,
            track.display_name
        )),
        None => parts.push(format!("{} Idle", state_icon(state))),
    }

    parts.push(format!("Tracks: {}", app.library().len()));
    parts.push(format!("Dir: {}", app.root.display()));

    if let Some(err) = &app.last_error {
        parts.push(format!("Error: {err}"));
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw<B: AudioBackend>(frame: &mut Frame, app: &App<B>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" repro ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(app))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    if app.has_tracks() {
        // Only build ListItems for the visible window, centred on the selection.
        let tracks = app.library().tracks();
        let total = tracks.len();
        let list_height = chunks[2].height.saturating_sub(2) as usize;
        let sel = app.selected.min(total - 1);
        let (start, end) = if total <= list_height || list_height == 0 {
            (0, total)
        } else {
            let half = list_height / 2;
            let mut start = sel.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height)
        };

        let playing = app.sequencer.cursor();
        let items: Vec<ListItem> = tracks[start..end]
            .iter()
            .enumerate()
            .map(|(offset, track)| {
                let marker = if playing == Some(start + offset) {
                    state_icon(app.playback())
                } else {
                    " "
                };
                ListItem::new(format!("{marker} {}", track.display_name))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(Some(sel - start));
        frame.render_stateful_widget(list, chunks[2], &mut state);
    } else {
        let empty = Paragraph::new(NO_MUSIC)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" tracks "))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, chunks[2]);
    }

    let footer = Paragraph::new(controls_text(app.has_tracks()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
