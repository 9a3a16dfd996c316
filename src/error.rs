use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Failures that stop the binary before or during a session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
