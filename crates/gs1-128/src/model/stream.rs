//! Encoded GS1-128 streams and the AI segments they carry.

use std::fmt;

use serde::Serialize;

use crate::limits::FNC1;

/// One `(AI)value` segment of an element string or encoded stream.
///
/// Borrows from the string it was scanned out of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    /// AI code, digits only.
    pub ai: &'a str,
    /// Value characters, without any FNC1 separator.
    pub value: &'a str,
    /// Byte offset of the segment's `(` in the scanned string.
    pub position: usize,
    /// Mandated value length, or `None` for variable-length AIs.
    pub fixed_length: Option<usize>,
    /// Whether an FNC1 separator follows the value.
    pub separated: bool,
}

impl Segment<'_> {
    /// Returns true if the AI has no mandated length.
    pub fn is_variable_length(&self) -> bool {
        self.fixed_length.is_none()
    }
}

/// Output of the AI-stream encoder.
///
/// Either a structured stream (leading FNC1, bracketed segments, FNC1 after
/// non-final variable-length values) or free-form data passed through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedStream {
    data: String,
    structured: bool,
}

impl EncodedStream {
    pub(crate) fn structured(data: String) -> Self {
        debug_assert!(data.starts_with(FNC1));
        Self {
            data,
            structured: true,
        }
    }

    pub(crate) fn passthrough(data: &str) -> Self {
        Self {
            data: data.to_string(),
            structured: false,
        }
    }

    /// Returns the stream as handed to the symbol renderer.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the UTF-8 bytes of the stream.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Consumes the stream, returning the underlying string.
    pub fn into_string(self) -> String {
        self.data
    }

    /// Returns true if the input was a bracketed element string.
    pub fn is_structured(&self) -> bool {
        self.structured
    }

    /// Number of FNC1 characters in the stream (start marker included).
    pub fn fnc1_count(&self) -> usize {
        self.data.chars().filter(|&c| c == FNC1).count()
    }

    /// Returns the stream with every FNC1 spelled out as `<FNC1>`.
    pub fn escaped(&self) -> String {
        self.data.replace(FNC1, "<FNC1>")
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the stream is empty (only possible for pass-through input).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for EncodedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl AsRef<str> for EncodedStream {
    fn as_ref(&self) -> &str {
        &self.data
    }
}

impl From<EncodedStream> for String {
    fn from(stream: EncodedStream) -> Self {
        stream.data
    }
}
