use rand::Rng;

use crate::config::ConfigError;
use crate::input::Direction;

/// Grid-aligned position in pixel units.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Playing-field geometry: screen size in pixels and the cell edge length.
///
/// Both screen dimensions are exact multiples of the cell size, so the grid
/// is `width / cell_size` by `height / cell_size` cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Board {
    /// Validates and builds a board.
    pub fn new(width: u16, height: u16, cell_size: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || cell_size == 0 {
            return Err(ConfigError::ZeroDimension);
        }

        for (axis, size) in [("width", width), ("height", height)] {
            if size % cell_size != 0 {
                return Err(ConfigError::NotCellAligned {
                    axis,
                    size,
                    cell_size,
                });
            }
        }

        let board = Self {
            width: i32::from(width),
            height: i32::from(height),
            cell_size: i32::from(cell_size),
        };

        if board.total_cells() < 2 {
            return Err(ConfigError::TooFewCells {
                cells: board.total_cells(),
            });
        }

        Ok(board)
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of columns.
    #[must_use]
    pub fn grid_width(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of rows.
    #[must_use]
    pub fn grid_height(&self) -> i32 {
        self.height / self.cell_size
    }

    #[must_use]
    pub fn total_cells(&self) -> usize {
        // Both factors are positive and bounded by u16::MAX.
        self.grid_width().unsigned_abs() as usize * self.grid_height().unsigned_abs() as usize
    }

    /// The spawn cell: the middle column and row, snapped to the grid.
    #[must_use]
    pub fn center(&self) -> Cell {
        Cell::new(
            self.grid_width() / 2 * self.cell_size,
            self.grid_height() / 2 * self.cell_size,
        )
    }

    /// Returns true when `cell` is a grid-aligned position on this board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
    }

    /// Moves one cell from `cell` in `direction`, wrapping around the edges.
    #[must_use]
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(
            (cell.x + dx * self.cell_size).rem_euclid(self.width),
            (cell.y + dy * self.cell_size).rem_euclid(self.height),
        )
    }

    /// Samples a cell uniformly over the whole grid.
    #[must_use]
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(
            rng.gen_range(0..self.grid_width()) * self.cell_size,
            rng.gen_range(0..self.grid_height()) * self.cell_size,
        )
    }

    /// Column and row of `cell`.
    #[must_use]
    pub fn to_grid(&self, cell: Cell) -> (i32, i32) {
        (cell.x / self.cell_size, cell.y / self.cell_size)
    }
}
