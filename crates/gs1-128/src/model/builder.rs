//! Builder API for bracketed AI element strings.
//!
//! # Example
//!
//! ```rust
//! use gs1_128::model::builder::ElementStringBuilder;
//!
//! let data = ElementStringBuilder::new()
//!     .gtin("12345678901234")
//!     .production_date("240315")
//!     .batch("LOT42")
//!     .build();
//! assert_eq!(data, "(01)12345678901234(11)240315(10)LOT42");
//! ```

use crate::codec::encode;
use crate::error::FormatError;
use crate::limits::{AI_CLOSE, AI_OPEN};
use crate::model::EncodedStream;

/// Builder for a bracketed `(AI)value...` element string.
///
/// Values are appended verbatim; nothing is checked until the string is
/// encoded.
#[derive(Debug, Clone, Default)]
pub struct ElementStringBuilder {
    buf: String,
}

impl ElementStringBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an `(ai)value` segment.
    pub fn ai(mut self, ai: &str, value: &str) -> Self {
        self.buf.reserve(ai.len() + value.len() + 2);
        self.buf.push(AI_OPEN);
        self.buf.push_str(ai);
        self.buf.push(AI_CLOSE);
        self.buf.push_str(value);
        self
    }

    /// AI 00: serial shipping container code.
    pub fn sscc(self, value: &str) -> Self {
        self.ai("00", value)
    }

    /// AI 01: global trade item number.
    pub fn gtin(self, value: &str) -> Self {
        self.ai("01", value)
    }

    /// AI 10: batch or lot number.
    pub fn batch(self, value: &str) -> Self {
        self.ai("10", value)
    }

    /// AI 11: production date (YYMMDD).
    pub fn production_date(self, value: &str) -> Self {
        self.ai("11", value)
    }

    /// AI 17: expiration date (YYMMDD).
    pub fn expiration_date(self, value: &str) -> Self {
        self.ai("17", value)
    }

    /// AI 21: serial number.
    pub fn serial(self, value: &str) -> Self {
        self.ai("21", value)
    }

    /// Returns true if no segment has been added.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the element string built so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the builder, returning the element string.
    pub fn build(self) -> String {
        self.buf
    }

    /// Encodes the element string against the GS1 table.
    pub fn encode(&self) -> Result<EncodedStream, FormatError> {
        encode(&self.buf)
    }
}
