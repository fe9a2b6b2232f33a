use std::fmt;

use rand::Rng;

use crate::board::CellState::{Alive, Dead};
use crate::config::{COLS, ROWS};
use crate::error::{LifeError, Result};

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

/// A fixed-size grid of cells, stored row-major.
///
/// Every row holds exactly `cols` cells. A board never changes shape after
/// construction; the engine produces a fresh board for each generation, so a
/// clone kept elsewhere is never touched by later advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<CellState>>,
    rows: usize,
    cols: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// The 40x40 all-dead board the simulation starts from.
    pub fn empty() -> Self {
        Self::new(ROWS, COLS)
    }

    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            cells: vec![vec![Dead; cols]; rows],
            rows,
            cols,
        }
    }

    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut board = Self::new(rows, cols);
        for &(row, col) in alive {
            board.set(row, col, Alive)?;
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        self.check(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        self.check(row, col)?;
        self.cells[row][col] = state;
        Ok(())
    }

    /// Flip one cell and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<CellState> {
        self.check(row, col)?;
        let cell = &mut self.cells[row][col];
        *cell = cell.toggled();
        Ok(*cell)
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .map(move |(col, _)| (row, col))
        })
    }

    /// Number of alive cells. Derived on demand, never cached.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_alive()).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = if rng.random_bool(0.5) { Alive } else { Dead };
            }
        }
    }

    /// Unchecked read for callers that already hold an in-range coordinate.
    pub(crate) fn cell(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    pub(crate) fn from_cells(cells: Vec<Vec<CellState>>) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        debug_assert!(cells.iter().all(|row| row.len() == cols));
        Board { cells, rows, cols }
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
