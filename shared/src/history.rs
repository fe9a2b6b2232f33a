use crate::board::Board;

/// Single-level undo: remembers only the board from just before the latest step.
#[derive(Debug, Default, Clone)]
pub struct History {
    previous: Option<Board>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the retained snapshot with a copy of `current`.
    pub fn record_before_step(&mut self, current: &Board) {
        self.previous = Some(current.clone());
    }

    /// Hand back the retained snapshot, leaving nothing behind.
    pub fn step_back(&mut self) -> Option<Board> {
        self.previous.take()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}
