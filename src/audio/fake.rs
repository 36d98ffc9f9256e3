//! In-memory playback engine that records every call, for tests.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{PlayerError, Result};
use crate::library::{Library, Track};

use super::engine::{AudioBackend, Voice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Load(String),
    Start(String),
    Pause(String),
    Resume(String),
    Release(String),
}

#[derive(Default)]
pub(crate) struct Probe {
    pub(crate) calls: RefCell<Vec<Call>>,
    pub(crate) live: Cell<usize>,
    pub(crate) max_live: Cell<usize>,
    pub(crate) failing: RefCell<Vec<String>>,
    pub(crate) finished: Cell<bool>,
}

impl Probe {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

pub(crate) struct FakeBackend {
    pub(crate) probe: Rc<Probe>,
}

pub(crate) struct FakeVoice {
    name: String,
    paused: bool,
    probe: Rc<Probe>,
}

fn name_of(location: &Path) -> String {
    location
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl AudioBackend for FakeBackend {
    type Voice = FakeVoice;

    fn load(&mut self, location: &Path) -> Result<FakeVoice> {
        let name = name_of(location);
        self.probe.calls.borrow_mut().push(Call::Load(name.clone()));
        if self.probe.failing.borrow().contains(&name) {
            return Err(PlayerError::Open {
                path: location.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt"),
            });
        }

        let live = self.probe.live.get() + 1;
        self.probe.live.set(live);
        self.probe.max_live.set(self.probe.max_live.get().max(live));
        self.probe.finished.set(false);
        Ok(FakeVoice {
            name,
            paused: true,
            probe: self.probe.clone(),
        })
    }
}

impl Voice for FakeVoice {
    fn start(&mut self) {
        self.paused = false;
        self.probe.calls.borrow_mut().push(Call::Start(self.name.clone()));
    }

    fn pause(&mut self) {
        self.paused = true;
        self.probe.calls.borrow_mut().push(Call::Pause(self.name.clone()));
    }

    fn resume(&mut self) {
        self.paused = false;
        self.probe.calls.borrow_mut().push(Call::Resume(self.name.clone()));
    }

    fn is_finished(&self) -> bool {
        !self.paused && self.probe.finished.get()
    }

    fn release(self) {
        self.probe.live.set(self.probe.live.get() - 1);
        self.probe.calls.borrow_mut().push(Call::Release(self.name));
    }
}

pub(crate) fn library(names: &[&str]) -> Library {
    Library::from_scan(
        names
            .iter()
            .map(|n| Track::new(&PathBuf::from("/music").join(n)))
            .collect(),
    )
}

impl FakeBackend {
    pub(crate) fn new() -> (Self, Rc<Probe>) {
        let probe = Rc::new(Probe::default());
        (
            Self {
                probe: probe.clone(),
            },
            probe,
        )
    }
}
