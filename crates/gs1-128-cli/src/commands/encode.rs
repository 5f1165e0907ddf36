//! Encode command - element string to GS1-128 stream.

use anyhow::{Context, Result};
use clap::Args;

use gs1_128::{encode_with_options, prepare_input, AiTable, EncodeOptions};

use super::{read_data, CommandExecutor};
use crate::output::{format_stream, OutputFormat};

/// Encode a bracketed element string.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Element string, e.g. "(01)12345678901234(10)LOT42" ("-" reads stdin)
    pub data: String,

    /// Reject values containing ')', FNC1, or control characters
    #[arg(long, env = "GS1_STRICT")]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Raw, env = "GS1_OUTPUT")]
    pub output: OutputFormat,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let data = read_data(&self.data)?;
        let input = prepare_input(&data)?;

        let options = if self.strict {
            EncodeOptions::strict()
        } else {
            EncodeOptions::new()
        };
        let stream = encode_with_options(input, AiTable::gs1(), options)
            .with_context(|| format!("cannot encode {input:?}"))?;

        tracing::debug!(
            structured = stream.is_structured(),
            fnc1_count = stream.fnc1_count(),
            "encoded input"
        );
        println!("{}", format_stream(input, &stream, self.output)?);
        Ok(())
    }
}
