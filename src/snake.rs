use std::collections::VecDeque;

use crate::board::{Board, Cell};
use crate::input::{Direction, direction_change_is_valid};

/// Mutable snake state: ordered body, heading, and a one-slot input buffer.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_removed: Option<Cell>,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            pending_direction: None,
            last_removed: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: None,
            last_removed: None,
        }
    }

    /// Buffers a turn for the next tick, silently dropping direct reversals.
    ///
    /// Later calls before the next tick overwrite earlier ones.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Commits the buffered turn, if any, and clears the buffer.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the cell the head will occupy if the snake moves this tick.
    #[must_use]
    pub fn next_cell(&self, board: &Board) -> Cell {
        board.wrap(self.head(), self.direction)
    }

    /// Steps onto `next` without growing, remembering the vacated tail cell.
    pub fn move_to(&mut self, next: Cell) {
        self.body.push_front(next);
        self.last_removed = self.body.pop_back();
    }

    /// Steps onto `next` and keeps the tail.
    pub fn grow(&mut self, next: Cell) {
        self.body.push_front(next);
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn has_self_collision(&self) -> bool {
        let head = self.head();
        self.body.len() > 1 && self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Respawns as a single cell at `start`, heading `direction`.
    pub fn reset(&mut self, start: Cell, direction: Direction) {
        self.body.clear();
        self.body.push_front(start);
        self.direction = direction;
        self.pending_direction = None;
        self.last_removed = None;
    }

    /// Tail cell vacated by the most recent non-growing move.
    #[must_use]
    pub fn last_removed(&self) -> Option<Cell> {
        self.last_removed
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
