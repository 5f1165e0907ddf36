//! Table command - list fixed-length AIs.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use gs1_128::AiTable;

use super::CommandExecutor;

/// Print the fixed-length AI table.
#[derive(Args, Debug)]
pub struct TableCommand {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TableEntry {
    ai: &'static str,
    length: usize,
}

impl CommandExecutor for TableCommand {
    fn execute(&self) -> Result<()> {
        let entries = AiTable::gs1().entries();

        if self.json {
            let entries: Vec<TableEntry> = entries
                .into_iter()
                .map(|(ai, length)| TableEntry { ai, length })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        println!("AI  LENGTH");
        for (ai, length) in entries {
            println!("{:<3} {}", ai, length);
        }
        println!("Any other AI is variable-length.");
        Ok(())
    }
}
