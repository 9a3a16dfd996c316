use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::board::Board;

const APP_DIR_NAME: &str = "wrap-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Default screen width in pixels.
pub const DEFAULT_SCREEN_WIDTH: u16 = 640;

/// Default screen height in pixels.
pub const DEFAULT_SCREEN_HEIGHT: u16 = 640;

/// Default cell edge length in pixels.
pub const DEFAULT_CELL_SIZE: u16 = 20;

/// Default simulation rate.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// Upper bound accepted for the simulation rate.
pub const MAX_TICKS_PER_SECOND: u32 = 1000;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board dimensions and cell size must be non-zero")]
    ZeroDimension,

    #[error("{axis} of {size}px is not a multiple of the {cell_size}px cell size")]
    NotCellAligned {
        axis: &'static str,
        size: u16,
        cell_size: u16,
    },

    #[error("a board of {cells} cell(s) leaves no room for food")]
    TooFewCells { cells: usize },

    #[error("tick rate must be between 1 and {max}, got {0}", max = MAX_TICKS_PER_SECOND)]
    InvalidTickRate(u32),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How the snake's direction is chosen when it respawns after a collision.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResetDirection {
    /// Always respawn heading right.
    #[default]
    Fixed,
    /// Respawn heading in a uniformly random direction.
    Random,
}

/// Pixel geometry of the playing field.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    pub cell_size: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Everything the driver needs to start a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub ticks_per_second: u32,
    pub reset_direction: ResetDirection,
    /// Re-place food that ends up under the respawned head.
    pub reroll_food_on_reset: bool,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            reset_direction: ResetDirection::Fixed,
            reroll_food_on_reset: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from `path`, or from the per-user config file.
    ///
    /// A missing per-user file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::load_from_path(&path)
                } else {
                    log::debug!("no config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from a JSON document; absent fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Checks the configuration and returns the board it describes.
    pub fn validate(&self) -> Result<Board, ConfigError> {
        if !(1..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return Err(ConfigError::InvalidTickRate(self.ticks_per_second));
        }

        Board::new(
            self.board.screen_width,
            self.board.screen_height,
            self.board.cell_size,
        )
    }
}

/// Returns the platform-correct config file path.
#[must_use]
pub fn config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Returns the default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push("wrap-snake.log");
    base
}

/// Colors applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
    pub snake: Color,
    pub snake_head: Color,
    pub food: Color,
    pub hud: Color,
}

/// Black board, cyan grid border, green snake, red food.
pub const PALETTE_CLASSIC: Palette = Palette {
    background: Color::Black,
    border: Color::Rgb(93, 216, 228),
    snake: Color::Rgb(0, 255, 0),
    snake_head: Color::Rgb(170, 255, 170),
    food: Color::Rgb(255, 0, 0),
    hud: Color::Gray,
};

/// Glyph used to fill one grid cell (two terminal columns wide).
pub const GLYPH_CELL: &str = "██";

/// Glyph used for the food cell.
pub const GLYPH_FOOD: &str = "▐▌";

/// Glyph used to erase a cell.
pub const GLYPH_EMPTY: &str = "  ";

/// Terminal columns per grid cell.
pub const TERMINAL_COLUMNS_PER_CELL: u16 = 2;
