use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};
use wrap_snake::clock::TickClock;
use wrap_snake::config::{GameConfig, PALETTE_CLASSIC, ResetDirection, default_log_path};
use wrap_snake::error::AppError;
use wrap_snake::game::{GameState, TickOutcome};
use wrap_snake::input::{GameInput, InputHandler};
use wrap_snake::renderer;
use wrap_snake::terminal_runtime::TerminalSession;
use wrap_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about = "Wrap-around grid Snake in the terminal")]
struct Cli {
    /// JSON config file (defaults to the per-user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in pixels.
    #[arg(long)]
    height: Option<u16>,

    /// Cell edge length in pixels.
    #[arg(long = "cell-size")]
    cell_size: Option<u16>,

    /// Simulation ticks per second.
    #[arg(long)]
    tps: Option<u32>,

    /// Direction the snake faces after respawning.
    #[arg(long = "reset-direction", value_enum)]
    reset_direction: Option<ResetDirection>,

    /// Leave food in place even when it ends up under the respawned snake.
    #[arg(long = "no-food-reroll")]
    no_food_reroll: bool,

    /// Seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply_overrides(&self, mut config: GameConfig) -> GameConfig {
        if let Some(width) = self.width {
            config.board.screen_width = width;
        }
        if let Some(height) = self.height {
            config.board.screen_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.board.cell_size = cell_size;
        }
        if let Some(tps) = self.tps {
            config.ticks_per_second = tps;
        }
        if let Some(reset_direction) = self.reset_direction {
            config.reset_direction = reset_direction;
        }
        if self.no_food_reroll {
            config.reroll_food_on_reset = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("wrap-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<(), AppError> {
    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path, cli.verbose)?;

    let config = cli.apply_overrides(GameConfig::load(cli.config.as_deref())?);
    let state = GameState::new(&config)?;
    log::info!(
        "starting at {} ticks/s, reset direction {:?}, food reroll {}",
        config.ticks_per_second,
        config.reset_direction,
        config.reroll_food_on_reset
    );

    let mut session = TerminalSession::enter()?;
    let hud_info = HudInfo {
        ticks_per_second: config.ticks_per_second,
    };
    run(&mut session, state, TickClock::new(config.ticks_per_second), hud_info)
}

fn run(
    session: &mut TerminalSession,
    mut state: GameState,
    mut clock: TickClock,
    hud_info: HudInfo,
) -> Result<(), AppError> {
    let mut input = InputHandler::new();

    'game: loop {
        clock.tick();

        for game_input in input.drain()? {
            if game_input == GameInput::Quit {
                log::info!("quit after {} ticks", state.tick_count);
                break 'game;
            }
            state.apply_input(game_input);
        }

        if state.tick() == TickOutcome::Won {
            log::info!("board cleared at length {}", state.snake.len());
        }

        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &PALETTE_CLASSIC, hud_info))?;
    }

    Ok(())
}

fn init_logging(path: &Path, verbose: bool) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(path)?)?;
    Ok(())
}
