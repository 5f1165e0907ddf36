//! GS1-128: Application Identifier stream encoding for Code 128 symbols.
//!
//! This crate turns human-entered GS1 element strings such as
//! `(01)12345678901234(10)LOT42` into the character stream a Code 128
//! renderer draws as a GS1-128 symbol.
//!
//! # Overview
//!
//! A GS1-128 symbol starts with the FNC1 function character. Values of
//! fixed-length AIs (GTIN, dates, ...) need nothing else, since a scanner
//! knows where they end. A variable-length value that is followed by another
//! AI must be terminated by FNC1, or the scanner reads the next AI as part
//! of it.
//!
//! # Quick Start
//!
//! ```rust
//! use gs1_128::{encode, FormatError, FNC1};
//!
//! // Batch (AI 10) is variable-length and not last: FNC1 follows it
//! let stream = encode("(10)ABC123(11)240101").unwrap();
//! assert_eq!(stream.as_str(), format!("{FNC1}(10)ABC123{FNC1}(11)240101"));
//!
//! // GTIN (AI 01) must be exactly 14 digits
//! assert!(matches!(encode("(01)1234"), Err(FormatError::WrongLength { .. })));
//!
//! // Anything not starting with '(' passes through unchanged
//! assert_eq!(encode("HELLO").unwrap().as_str(), "HELLO");
//! ```
//!
//! # Modules
//!
//! - [`codec`]: Element-string scanning and FNC1 encoding/decoding
//! - [`table`]: Fixed-length AI table
//! - [`model`]: Segments, encoded streams, builders, product labels
//! - [`validate`]: Input and form-field validation
//! - [`render`]: Contract for the external symbol renderer
//! - [`error`]: Error types
//! - [`limits`]: Format constants
//!
//! # Wire Format
//!
//! The encoded stream keeps the `(AI)` brackets of the element string, which
//! is what the paired renderer expects. FNC1 is the codepoint `U+00F1`.
//!
//! Encoding is pure: no I/O, no shared mutable state. The AI table is built
//! once and only read afterwards, so encoding is safe from any thread.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod render;
pub mod table;
pub mod validate;

// Re-export commonly used types at crate root
pub use codec::{
    decode_stream, decode_stream_with_table, encode, encode_label, encode_with_options,
    encode_with_table, EncodeOptions,
};
pub use error::{ErrorCode, FormatError, LabelError, RenderError, ValidationError};
pub use limits::FNC1;
pub use model::{ElementStringBuilder, EncodedStream, ProductLabel, Segment};
pub use render::{render_ai_data, ImageFormat, RenderOptions, SymbolRenderer};
pub use table::{lookup, AiTable};
pub use validate::{prepare_input, validate_label};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
