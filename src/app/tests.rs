use super::*;
use crate::audio::fake::{FakeBackend, Probe, library};
use crate::audio::{PlaybackState, Sequencer};
use std::path::PathBuf;
use std::rc::Rc;

fn app(names: &[&str]) -> (App<FakeBackend>, Rc<Probe>) {
    let (backend, probe) = FakeBackend::new();
    let sequencer = Sequencer::new(backend, library(names));
    (App::new(sequencer, PathBuf::from("/music")), probe)
}

#[test]
fn selection_wraps_both_ways() {
    let (mut app, _probe) = app(&["A.mp3", "B.mp3", "C.mp3"]);
    app.prev();
    assert_eq!(app.selected, 2);
    app.next();
    assert_eq!(app.selected, 0);
    app.select_last();
    assert_eq!(app.selected, 2);
    app.select_first();
    assert_eq!(app.selected, 0);
}

#[test]
fn moving_selection_does_not_touch_playback() {
    let (mut app, probe) = app(&["A.mp3", "B.mp3", "C.mp3"]);
    app.next();
    app.next();
    assert_eq!(app.playback(), PlaybackState::Idle);
    assert!(probe.calls().is_empty());
}

#[test]
fn play_selected_plays_highlighted_track() {
    let (mut app, _probe) = app(&["A.mp3", "B.mp3", "C.mp3"]);
    app.next();
    app.play_selected().unwrap();
    assert_eq!(app.sequencer.cursor(), Some(1));
    assert_eq!(app.playback(), PlaybackState::Playing);
}

#[test]
fn selection_follows_playback_until_user_roams() {
    let (mut app, probe) = app(&["A.mp3", "B.mp3", "C.mp3"]);
    app.advance().unwrap();
    app.advance().unwrap();
    assert_eq!(app.selected, 1);

    app.follow_playback_off();
    app.prev();
    probe.finished.set(true);
    app.tick().unwrap();
    assert_eq!(app.sequencer.cursor(), Some(2));
    assert_eq!(app.selected, 0);

    app.toggle_play_pause().unwrap();
    assert!(app.follow_playback);
    assert_eq!(app.selected, 2);
}

#[test]
fn transport_is_disabled_for_empty_library() {
    let (mut app, probe) = app(&[]);
    assert!(!app.has_tracks());
    app.play_selected().unwrap();
    app.toggle_play_pause().unwrap();
    app.advance().unwrap();
    app.retreat().unwrap();
    app.tick().unwrap();
    app.next();
    app.prev();
    app.select_last();
    assert_eq!(app.selected, 0);
    assert_eq!(app.playback(), PlaybackState::Idle);
    assert!(probe.calls().is_empty());
}

#[test]
fn engine_failure_is_shown_not_propagated() {
    let (mut app, probe) = app(&["A.mp3", "B.mp3"]);
    probe.failing.borrow_mut().push("A.mp3".into());

    app.toggle_play_pause().unwrap();
    assert!(app.last_error.as_deref().unwrap().contains("A.mp3"));
    assert_eq!(app.playback(), PlaybackState::Paused);

    app.advance().unwrap();
    assert!(app.last_error.is_none());
    assert_eq!(app.playback(), PlaybackState::Playing);
    assert_eq!(app.selected, 1);
}

#[test]
fn replace_library_resets_selection_and_playback() {
    let (mut app, probe) = app(&["A.mp3", "B.mp3", "C.mp3"]);
    app.select_last();
    app.play_selected().unwrap();

    app.replace_library(library(&["Z.mp3"]));
    assert_eq!(app.selected, 0);
    assert_eq!(app.playback(), PlaybackState::Idle);
    assert_eq!(app.library().len(), 1);
    assert_eq!(probe.live.get(), 0);
}
