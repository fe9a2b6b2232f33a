use std::time::Duration;

use crate::error::{LifeError, Result};

pub const ROWS: usize = 40;
pub const COLS: usize = 40;
pub const ADVANCE_INTERVAL: Duration = Duration::from_millis(100);
/// Edge length of one cell on the canvas, in pixels.
pub const CELL_SIZE: f32 = 20.0;

/// Board dimensions and auto-advance cadence for one [`crate::simulation::Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            interval: ADVANCE_INTERVAL,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidConfig(format!(
                "board must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.interval.is_zero() {
            return Err(LifeError::InvalidConfig("advance interval must be non-zero".into()));
        }
        Ok(())
    }
}
