//! Output formatting for encoded streams.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use gs1_128::{decode_stream, EncodedStream, Segment};

/// How an encoded stream is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The stream as the renderer receives it (FNC1 as U+00F1)
    Raw,
    /// FNC1 spelled out as <FNC1>
    Escaped,
    /// Space-separated UTF-8 bytes in hex
    Hex,
    /// JSON report with the segment breakdown
    Json,
}

/// JSON view of one encoding.
#[derive(Debug, Serialize)]
pub struct StreamReport<'a> {
    pub input: &'a str,
    pub structured: bool,
    pub escaped: String,
    pub fnc1_count: usize,
    pub segments: Vec<Segment<'a>>,
}

impl<'a> StreamReport<'a> {
    pub fn new(input: &'a str, stream: &'a EncodedStream) -> Result<Self> {
        Ok(Self {
            input,
            structured: stream.is_structured(),
            escaped: stream.escaped(),
            fnc1_count: stream.fnc1_count(),
            segments: decode_stream(stream.as_str())?,
        })
    }
}

/// Formats `stream`, encoded from `input`, for printing.
pub fn format_stream(input: &str, stream: &EncodedStream, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Raw => stream.as_str().to_string(),
        OutputFormat::Escaped => stream.escaped(),
        OutputFormat::Hex => format_hex(stream.as_bytes()),
        OutputFormat::Json => serde_json::to_string_pretty(&StreamReport::new(input, stream)?)?,
    })
}

fn format_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{:02x}", byte));
    }
    s
}
