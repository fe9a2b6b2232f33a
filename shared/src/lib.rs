//! Conway's Game of Life on a fixed 40x40 board with a single-step undo and a
//! cooperative play/pause loop. Rendering lives in the `life-gui` crate; this
//! crate holds everything that can be tested without a window.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod scheduler;
pub mod simulation;

pub use board::{Board, CellState};
pub use config::SimulationConfig;
pub use error::{LifeError, Result};
pub use simulation::Simulation;
