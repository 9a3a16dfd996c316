use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, Cell};

/// Raised when food cannot be placed anywhere.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    #[error("every one of the {cells} cells is occupied")]
    BoardFull { cells: usize },
}

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Creates food on a uniformly random cell outside `occupied`.
    pub fn spawn<'a, R, I>(rng: &mut R, board: &Board, occupied: I) -> Result<Self, PlacementError>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell>,
    {
        spawn_position(rng, board, occupied).map(Self::new)
    }

    /// Moves the food to a uniformly random cell outside `occupied`.
    ///
    /// On `BoardFull` the position is left untouched.
    pub fn randomize_position<'a, R, I>(
        &mut self,
        rng: &mut R,
        board: &Board,
        occupied: I,
    ) -> Result<Cell, PlacementError>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Cell>,
    {
        self.position = spawn_position(rng, board, occupied)?;
        Ok(self.position)
    }
}

/// Rejection-samples a free cell.
///
/// Sampling is uniform over the whole grid and retried until it misses
/// `occupied`. A board with no free cell is reported up front instead of
/// looping forever.
pub fn spawn_position<'a, R, I>(
    rng: &mut R,
    board: &Board,
    occupied: I,
) -> Result<Cell, PlacementError>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Cell>,
{
    let occupied: HashSet<Cell> = occupied
        .into_iter()
        .copied()
        .filter(|cell| board.contains(*cell))
        .collect();

    if occupied.len() >= board.total_cells() {
        return Err(PlacementError::BoardFull {
            cells: board.total_cells(),
        });
    }

    loop {
        let candidate = board.random_cell(rng);
        if !occupied.contains(&candidate) {
            log::debug!("food placed at ({}, {})", candidate.x, candidate.y);
            return Ok(candidate);
        }
    }
}
