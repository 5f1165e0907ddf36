//! Subcommands of the `gs1` binary.
//!
//! Each command is a separate module implementing [`CommandExecutor`].

mod compose;
mod encode;
mod inspect;
mod table;

pub use compose::ComposeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;
pub use table::TableCommand;

use std::io::{self, Read};

use anyhow::{Context, Result};

/// Trait for command execution.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Returns `data`, or all of stdin when `data` is `-`.
pub(crate) fn read_data(data: &str) -> Result<String> {
    if data != "-" {
        return Ok(data.to_string());
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read data from stdin")?;
    Ok(buffer)
}
