use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::Board;
use crate::config::SimulationConfig;
use crate::engine::next_generation;
use crate::error::Result;
use crate::history::History;
use crate::scheduler::{Scheduler, TimerHandle};

/// Owns the board, its one-step history and the play/pause loop.
///
/// The loop is cooperative: [`Simulation::play`] schedules an advance, and the
/// surface driving the simulation calls [`Simulation::tick`] with the current
/// time whenever it gets a chance. Each fired advance schedules the next one
/// for `now + interval` as long as the simulation is still running.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    board: Board,
    history: History,
    generation: u64,
    running: bool,
    scheduler: Scheduler,
    pending: Option<TimerHandle>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_valid_config(SimulationConfig::default())
    }
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimulationConfig) -> Self {
        Simulation {
            board: Board::new(config.rows, config.cols),
            config,
            history: History::new(),
            generation: 0,
            running: false,
            scheduler: Scheduler::new(),
            pending: None,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_previous(&self) -> bool {
        self.history.has_previous()
    }

    /// Flip a cell while paused. Returns `Ok(false)` without touching the board
    /// when the loop is running.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool> {
        if self.running {
            debug!("ignoring toggle of ({row}, {col}) while running");
            return Ok(false);
        }
        let state = self.board.toggle(row, col)?;
        debug!("toggled ({row}, {col}) to {state:?}");
        Ok(true)
    }

    /// Advance exactly one generation, remembering the board it replaced.
    pub fn step(&mut self) {
        self.advance();
    }

    /// Restore the board from before the last step. Does nothing when there is
    /// no snapshot, including a second call right after a successful one.
    pub fn step_back(&mut self) -> bool {
        match self.history.step_back() {
            Some(previous) => {
                self.board = previous;
                self.generation = self.generation.saturating_sub(1);
                debug!("stepped back to generation {}", self.generation);
                true
            }
            None => false,
        }
    }

    pub fn play(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.cancel_pending();
        self.pending = Some(self.scheduler.schedule_at(now));
        info!(
            "playing from generation {} every {:?}",
            self.generation, self.config.interval
        );
    }

    /// Stop the loop. The pending advance is cancelled before this returns.
    pub fn pause(&mut self) {
        let was_running = self.running;
        self.running = false;
        self.cancel_pending();
        if was_running {
            info!("paused at generation {}", self.generation);
        }
    }

    /// Back to the initial state: empty board, generation 0, no history, paused.
    pub fn reset(&mut self) {
        self.running = false;
        self.cancel_pending();
        self.scheduler.clear();
        self.board = Board::new(self.config.rows, self.config.cols);
        self.history.reset();
        self.generation = 0;
        info!("reset");
    }

    /// Fill the board with a random pattern. Only allowed while paused; history
    /// and the generation counter are left alone.
    pub fn randomize(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.board.randomize(&mut rand::rng());
        info!("randomized board, population {}", self.population());
        true
    }

    /// Run every advance that is due at `now`. Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        for handle in self.scheduler.take_due(now) {
            if self.pending != Some(handle) {
                // stale: superseded by a pause, reset or replay
                continue;
            }
            self.pending = None;
            if !self.running {
                continue;
            }
            self.advance();
            fired += 1;
            if self.running {
                self.pending = Some(self.scheduler.schedule_after(now, self.config.interval));
            }
        }
        fired
    }

    /// Time left until the next scheduled advance, `None` when nothing is
    /// scheduled. Zero if it is already due.
    pub fn time_until_next_advance(&self, now: Instant) -> Option<Duration> {
        let deadline = self.scheduler.deadline(self.pending?)?;
        Some(deadline.saturating_duration_since(now))
    }

    fn advance(&mut self) {
        self.history.record_before_step(&self.board);
        let next = next_generation(&self.board);
        if next == self.board {
            debug!("generation {} is unchanged", self.generation + 1);
        }
        self.board = next;
        self.generation += 1;
        debug!(
            "advanced to generation {}, population {}",
            self.generation,
            self.board.population()
        );
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}
