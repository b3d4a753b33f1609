pub mod runner;

pub use self::runner::Searcher;

use crate::candidate::Candidate;
use crate::config::Config;
use crate::consts::{DEFAULT_BUFFER_LEN, DEFAULT_PROGRESS_INTERVAL};
use crate::grid::Cell;
use serde::Serialize;
use std::time::Duration;
use strum_macros::Display;

/// Which axis is free on the next pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Row,
    Col,
}

impl Direction {
    #[inline(always)]
    pub fn toggle(&mut self) {
        *self = self.flipped();
    }

    #[inline(always)]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Row => Direction::Col,
            Direction::Col => Direction::Row,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub buffer_len: usize,
    pub start: Cell,
    /// First pick may be any cell of the start row instead of the start cell.
    pub free_start: bool,
    pub progress_interval: usize,
    pub max_time: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            buffer_len: DEFAULT_BUFFER_LEN,
            start: Cell::ORIGIN,
            free_start: false,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            max_time: None,
        }
    }
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            buffer_len: cfg.search.buffer_len,
            start: Cell::new(cfg.search.start_row, cfg.search.start_col),
            free_start: cfg.search.free_start,
            progress_interval: cfg.search.progress_interval,
            max_time: cfg.search.max_time.map(Duration::from_secs),
        }
    }
}

/// Receives updates while the search runs.
/// Returning `false` stops the search; what was collected so far is kept.
pub trait ProgressCallback {
    fn on_progress(&self, collected: usize, paths_examined: u64) -> bool;
}

/// Callback that never interrupts and reports nothing.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_progress(&self, _collected: usize, _paths_examined: u64) -> bool {
        true
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "candidates", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A walk matched every target; the search stopped on it.
    Solved(Candidate),
    /// Every nonzero-score walk found (possibly none).
    Partial(Vec<Candidate>),
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    pub fn candidates(&self) -> &[Candidate] {
        match self {
            SearchOutcome::Solved(c) => std::slice::from_ref(c),
            SearchOutcome::Partial(list) => list,
        }
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        match self {
            SearchOutcome::Solved(c) => vec![c],
            SearchOutcome::Partial(list) => list,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub paths_examined: u64,
    /// Stopped by the callback or the time limit before the space was exhausted.
    pub interrupted: bool,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }
}
