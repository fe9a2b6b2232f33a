/*
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*/
use crate::board::CellState::{self, Alive, Dead};
use crate::board::Board;

/// The Moore neighborhood as (row, col) deltas, clockwise from the right.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Compute the board one generation after `board`. The input is left untouched.
pub fn next_generation(board: &Board) -> Board {
    let cells = (0..board.rows())
        .map(|row| {
            (0..board.cols())
                .map(|col| next_state(board.cell(row, col), live_neighbors(board, row, col)))
                .collect()
        })
        .collect();
    Board::from_cells(cells)
}

/// Count the alive neighbors of a cell. Coordinates past the edge are dead;
/// the board does not wrap.
pub fn live_neighbors(board: &Board, row: usize, col: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let neighbor_row = row.checked_add_signed(dr)?;
            let neighbor_col = col.checked_add_signed(dc)?;
            board
                .contains(neighbor_row, neighbor_col)
                .then(|| board.cell(neighbor_row, neighbor_col))
        })
        .filter(|cell| cell.is_alive())
        .count()
}

pub fn next_state(current: CellState, alive_neighbors: usize) -> CellState {
    match (current, alive_neighbors) {
        (Alive, 2..=3) => Alive, // Survives
        (Dead, 3) => Alive,      // Becomes alive
        _ => Dead,               // Dies or remains dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_cover_the_moore_neighborhood_once() {
        let mut offsets = NEIGHBOR_OFFSETS.to_vec();
        offsets.sort();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.iter().all(|&(dr, dc)| dr.abs() <= 1 && dc.abs() <= 1));
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            let survives = n == 2 || n == 3;
            assert_eq!(next_state(Alive, n) == Alive, survives, "alive with {n}");
            assert_eq!(next_state(Dead, n) == Alive, n == 3, "dead with {n}");
        }
    }

    #[test]
    fn corner_has_three_neighbors_and_no_wraparound() {
        let board = Board::with_alive(5, 5, &[(4, 4), (0, 4), (4, 0), (0, 1), (1, 0), (1, 1)]).unwrap();
        assert_eq!(live_neighbors(&board, 0, 0), 3);

        let far_corners = Board::with_alive(5, 5, &[(4, 4), (0, 4), (4, 0)]).unwrap();
        assert_eq!(live_neighbors(&far_corners, 0, 0), 0);
    }

    #[test]
    fn corner_birth_uses_in_grid_neighbors_only() {
        let board = Board::with_alive(5, 5, &[(0, 1), (1, 0), (1, 1)]).unwrap();
        let next = next_generation(&board);
        assert_eq!(next.get(0, 0), Ok(Alive));
    }

    #[test]
    fn edge_pattern_does_not_leak_to_opposite_side() {
        // vertical blinker hugging the left edge
        let board = Board::with_alive(6, 6, &[(1, 0), (2, 0), (3, 0)]).unwrap();
        let next = next_generation(&board);
        assert_eq!(next.alive_cells().collect::<Vec<_>>(), vec![(2, 0), (2, 1)]);
        assert!((0..6).all(|row| next.get(row, 5) == Ok(Dead)));
    }

    #[test]
    fn input_board_is_not_mutated() {
        let board = Board::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        let before = board.clone();
        let next = next_generation(&board);
        assert_eq!(board, before);
        assert_ne!(next, board);
        assert_eq!((next.rows(), next.cols()), (5, 5));
    }

    #[test]
    fn overcrowded_center_dies() {
        let board = Board::with_alive(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)]).unwrap();
        let next = next_generation(&board);
        assert_eq!(next.get(1, 1), Ok(Dead));
    }
}
