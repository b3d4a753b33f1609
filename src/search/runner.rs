use super::{Direction, ProgressCallback, SearchOptions, SearchOutcome, SearchReport};
use crate::candidate::Candidate;
use crate::consts::TIME_CHECK_INTERVAL;
use crate::error::{BfResult, BreachError};
use crate::grid::{Cell, Grid};
use crate::scorer::PathScorer;
use crate::targets::TargetSet;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Exhaustive depth-first enumeration of alternating walks.
pub struct Searcher<'a> {
    scorer: PathScorer<'a>,
    options: SearchOptions,
}

impl<'a> Searcher<'a> {
    pub fn new(grid: &'a Grid, targets: &'a TargetSet, options: SearchOptions) -> BfResult<Self> {
        if options.buffer_len == 0 {
            return Err(BreachError::Config(
                "Buffer length must be at least 1".to_string(),
            ));
        }
        if !grid.contains(options.start) {
            return Err(BreachError::Config(format!(
                "Start cell {} is outside the {}x{} grid",
                options.start,
                grid.size(),
                grid.size()
            )));
        }
        if options.progress_interval == 0 {
            return Err(BreachError::Config(
                "Progress interval must be at least 1".to_string(),
            ));
        }
        if options.buffer_len > grid.size() * grid.size() {
            warn!(
                "Buffer length {} exceeds the {} cells of the grid; no walk can complete.",
                options.buffer_len,
                grid.size() * grid.size()
            );
        }

        Ok(Self {
            scorer: PathScorer::new(grid, targets),
            options,
        })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn run<CB: ProgressCallback>(&self, callback: &CB) -> SearchReport {
        let grid = self.scorer.grid();
        let started = Instant::now();
        debug!(
            "Searching {}x{} grid | buffer {} | start {} | free start: {}",
            grid.size(),
            grid.size(),
            self.options.buffer_len,
            self.options.start,
            self.options.free_start
        );

        let mut walk = Walk {
            scorer: &self.scorer,
            options: &self.options,
            callback,
            path: Vec::with_capacity(self.options.buffer_len),
            visited: vec![false; grid.size() * grid.size()],
            collected: Vec::new(),
            examined: 0,
            started,
        };

        let start = self.options.start;
        let step = if self.options.free_start {
            walk.explore(Direction::Row, start)
        } else {
            // The start cell is the first pick, taken under Row.
            walk.push(start);
            walk.explore(Direction::Row.flipped(), start)
        };

        let (outcome, interrupted) = match step {
            Step::Solved(candidate) => (SearchOutcome::Solved(candidate), false),
            Step::Stopped => (SearchOutcome::Partial(walk.collected), true),
            Step::Continue => (SearchOutcome::Partial(walk.collected), false),
        };

        SearchReport {
            outcome,
            paths_examined: walk.examined,
            interrupted,
            elapsed: started.elapsed(),
        }
    }
}

enum Step {
    Continue,
    Solved(Candidate),
    Stopped,
}

/// Mutable state of one run. `path` is the only walk buffer; it is pushed
/// and popped in place, with `visited` mirroring its membership.
struct Walk<'s, CB> {
    scorer: &'s PathScorer<'s>,
    options: &'s SearchOptions,
    callback: &'s CB,
    path: Vec<Cell>,
    visited: Vec<bool>,
    collected: Vec<Candidate>,
    examined: u64,
    started: Instant,
}

impl<CB: ProgressCallback> Walk<'_, CB> {
    fn explore(&mut self, direction: Direction, current: Cell) -> Step {
        if self.path.len() == self.options.buffer_len {
            return self.complete();
        }

        let size = self.scorer.grid().size();
        for k in 0..size {
            let next = match direction {
                Direction::Row => Cell::new(current.row, k),
                Direction::Col => Cell::new(k, current.col),
            };
            if self.visited[self.scorer.grid().index_of(next)] {
                continue;
            }

            self.push(next);
            match self.explore(direction.flipped(), next) {
                Step::Continue => self.pop(),
                halt => return halt,
            }
        }

        Step::Continue
    }

    fn complete(&mut self) -> Step {
        self.examined += 1;
        let candidate = self.scorer.score(&self.path);
        if candidate.score() == 0 {
            return self.poll_clock();
        }

        let collected = self.collected.len() + 1;
        let keep_going = collected % self.options.progress_interval != 0
            || self.callback.on_progress(collected, self.examined);

        if candidate.is_fully_solved() {
            info!("Solved after checking {} good chains", collected);
            self.collected.clear();
            return Step::Solved(candidate);
        }

        self.collected.push(candidate);
        if !keep_going {
            info!("Search stopped by caller after {} chains", self.examined);
            return Step::Stopped;
        }
        self.poll_clock()
    }

    fn poll_clock(&self) -> Step {
        if let Some(limit) = self.options.max_time {
            if self.examined % TIME_CHECK_INTERVAL == 0 && self.started.elapsed() >= limit {
                warn!(
                    "Time limit of {:?} reached after {} chains",
                    limit, self.examined
                );
                return Step::Stopped;
            }
        }
        Step::Continue
    }

    #[inline(always)]
    fn push(&mut self, cell: Cell) {
        self.visited[self.scorer.grid().index_of(cell)] = true;
        self.path.push(cell);
    }

    #[inline(always)]
    fn pop(&mut self) {
        if let Some(cell) = self.path.pop() {
            self.visited[self.scorer.grid().index_of(cell)] = false;
        }
    }
}
