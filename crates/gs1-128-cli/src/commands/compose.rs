//! Compose command - product label fields to GS1-128 stream.

use anyhow::{Context, Result};
use clap::Args;

use gs1_128::{encode_label, ProductLabel};

use super::CommandExecutor;
use crate::output::{format_stream, OutputFormat};

/// Build `(01)GTIN(11)DATE(10)LOT` from label fields and encode it.
#[derive(Args, Debug)]
pub struct ComposeCommand {
    /// 14-digit GTIN
    #[arg(long)]
    pub gtin: String,

    /// Lot number in MMDDYY form
    #[arg(long)]
    pub lot_number: String,

    /// Production date in YYMMDD form
    #[arg(long)]
    pub production_date: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Raw, env = "GS1_OUTPUT")]
    pub output: OutputFormat,
}

impl CommandExecutor for ComposeCommand {
    fn execute(&self) -> Result<()> {
        let label = ProductLabel::new(&self.gtin, &self.lot_number, &self.production_date);
        let stream = encode_label(&label).context("invalid product label")?;

        let element_string = label.trimmed().element_string();
        println!("{}", format_stream(&element_string, &stream, self.output)?);
        Ok(())
    }
}
