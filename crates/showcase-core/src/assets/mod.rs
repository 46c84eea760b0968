//! Asset loading contracts shared by the web loader and tests: progress
//! accounting, cancellation, outcomes, and the pure decoding steps.

mod cubemap;
mod model;

pub use cubemap::*;
pub use model::*;

use crate::error::AssetError;
use std::cell::Cell;
use std::rc::Rc;

/// What to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetSource {
    Model { url: String },
    Cubemap { dir: String },
}

impl AssetSource {
    /// Number of files this source fetches.
    pub fn file_count(&self) -> usize {
        match self {
            AssetSource::Model { .. } => 1,
            AssetSource::Cubemap { .. } => CUBE_FACES.len(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AssetSource::Model { url } => url,
            AssetSource::Cubemap { dir } => dir,
        }
    }
}

/// Result of a single load attempt. There is no retry.
#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Failed(AssetError),
    Cancelled,
}

impl<T> LoadOutcome<T> {
    pub fn from_result(r: Result<T, AssetError>, token: &CancelToken) -> Self {
        if token.is_cancelled() {
            return LoadOutcome::Cancelled;
        }
        match r {
            Ok(v) => LoadOutcome::Loaded(v),
            Err(e) => LoadOutcome::Failed(e),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadOutcome<U> {
        match self {
            LoadOutcome::Loaded(v) => LoadOutcome::Loaded(f(v)),
            LoadOutcome::Failed(e) => LoadOutcome::Failed(e),
            LoadOutcome::Cancelled => LoadOutcome::Cancelled,
        }
    }
}

/// Shared flag checked by a load between fetches.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Loaded/total file counters for the loading overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self { loaded: 0, total }
    }

    pub fn advance(&mut self) {
        self.loaded = (self.loaded + 1).min(self.total);
    }

    /// Whole percent; an empty load counts as complete.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.loaded.min(self.total) * 100) / self.total) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.loaded >= self.total
    }
}

/// Start-up gate: the render loop starts only from `Ready`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootState {
    Loading(LoadProgress),
    Ready,
    Failed(String),
}

impl BootState {
    pub fn start(total: usize) -> Self {
        if total == 0 {
            BootState::Ready
        } else {
            BootState::Loading(LoadProgress::new(total))
        }
    }

    /// Record one finished file. Turns `Ready` when every eager file is in.
    pub fn file_loaded(&mut self) {
        if let BootState::Loading(p) = self {
            p.advance();
            if p.is_complete() {
                *self = BootState::Ready;
            }
        }
    }

    /// A failure is terminal; later progress is ignored.
    pub fn fail(&mut self, error: &AssetError) {
        if !matches!(self, BootState::Failed(_)) {
            *self = BootState::Failed(error.to_string());
        }
    }

    pub fn may_render(&self) -> bool {
        matches!(self, BootState::Ready)
    }

    /// Text for the loading overlay.
    pub fn message(&self) -> String {
        match self {
            BootState::Loading(p) => format!("Loading… {}%", p.percent()),
            BootState::Ready => String::new(),
            BootState::Failed(e) => format!("Failed to load assets: {e}"),
        }
    }
}
