use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
