//! Inspect command - split an encoded stream into segments.

use anyhow::{Context, Result};
use clap::Args;

use gs1_128::{decode_stream, FNC1};

use super::{read_data, CommandExecutor};

/// Split an encoded stream back into AI segments.
///
/// The stream may contain FNC1 as U+00F1 or spelled out as <FNC1>.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Encoded stream ("-" reads stdin)
    pub stream: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Replaces `<FNC1>` placeholders with the FNC1 character.
fn unescape(stream: &str) -> String {
    stream.replace("<FNC1>", &FNC1.to_string())
}

impl CommandExecutor for InspectCommand {
    fn execute(&self) -> Result<()> {
        let data = read_data(&self.stream)?;
        let stream = unescape(data.trim_end_matches(['\r', '\n']));
        let segments = decode_stream(&stream).context("malformed encoded stream")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&segments)?);
            return Ok(());
        }

        if segments.is_empty() {
            println!("no AI segments (stream does not start with FNC1)");
            return Ok(());
        }
        for segment in &segments {
            let kind = match segment.fixed_length {
                Some(len) => format!("fixed({len})"),
                None => "variable".to_string(),
            };
            let separator = if segment.separated { " <FNC1>" } else { "" };
            println!("({}) {:<10} {}{}", segment.ai, kind, segment.value, separator);
        }
        Ok(())
    }
}
