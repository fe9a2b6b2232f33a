use eframe::egui::{self, Color32, Painter, Pos2, Rect, Stroke};
use life_shared::config::CELL_SIZE;
use life_shared::Board;

const ALIVE_COLOR: Color32 = Color32::WHITE;
const DEAD_COLOR: Color32 = Color32::BLACK;
const GRID_STROKE: f32 = 0.1;

/// Pixel size of a board drawn at [`CELL_SIZE`].
pub fn canvas_size(board: &Board) -> egui::Vec2 {
    egui::vec2(CELL_SIZE * board.cols() as f32, CELL_SIZE * board.rows() as f32)
}

pub fn cell_rect(origin: Pos2, row: usize, col: usize) -> Rect {
    let min = origin + egui::vec2(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE);
    Rect::from_min_size(min, egui::vec2(CELL_SIZE, CELL_SIZE))
}

/// Map a pointer position to the (row, col) under it. Positions outside the
/// board are discarded so the core never sees an out-of-range coordinate.
pub fn cell_at(origin: Pos2, pointer: Pos2, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let offset = pointer - origin;
    if !offset.x.is_finite() || !offset.y.is_finite() || offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let row = (offset.y / CELL_SIZE).floor() as usize;
    let col = (offset.x / CELL_SIZE).floor() as usize;
    (row < rows && col < cols).then_some((row, col))
}

pub fn paint_board(painter: &Painter, origin: Pos2, board: &Board) {
    let stroke = Stroke::new(GRID_STROKE, Color32::WHITE);
    for (row_index, row) in board.rows_iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            let rect = cell_rect(origin, row_index, col_index);
            let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
            painter.rect_filled(rect, 0.0, color);
            painter.rect_stroke(rect, 0.0, stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn canvas_matches_reference_size() {
        assert_eq!(canvas_size(&Board::empty()), egui::vec2(800.0, 800.0));
    }

    #[test]
    fn clicks_map_to_row_and_column() {
        let origin = pos2(10.0, 50.0);
        assert_eq!(cell_at(origin, pos2(10.0, 50.0), 40, 40), Some((0, 0)));
        assert_eq!(cell_at(origin, pos2(10.0 + 45.0, 50.0 + 119.9), 40, 40), Some((5, 2)));
        assert_eq!(cell_at(origin, pos2(809.9, 849.9), 40, 40), Some((39, 39)));
    }

    #[test]
    fn clicks_outside_the_grid_are_discarded() {
        let origin = pos2(10.0, 50.0);
        assert_eq!(cell_at(origin, pos2(9.0, 60.0), 40, 40), None);
        assert_eq!(cell_at(origin, pos2(20.0, 49.0), 40, 40), None);
        assert_eq!(cell_at(origin, pos2(810.0, 60.0), 40, 40), None);
        assert_eq!(cell_at(origin, pos2(20.0, 850.0), 40, 40), None);
        assert_eq!(cell_at(origin, pos2(f32::NAN, 60.0), 40, 40), None);
    }

    #[test]
    fn cell_rect_round_trips_through_cell_at() {
        let origin = pos2(0.0, 0.0);
        let rect = cell_rect(origin, 7, 3);
        assert_eq!(cell_at(origin, rect.center(), 40, 40), Some((7, 3)));
    }
}
