//! GS1-128 AI-stream encoding.
//!
//! - [`scanner`]: tokenizes bracketed element strings
//! - [`stream`]: FNC1 placement and the inverse split

pub mod scanner;
pub mod stream;

pub use scanner::{RawSegment, Scanner};
pub use stream::{
    decode_stream, decode_stream_with_table, encode, encode_label, encode_with_options,
    encode_with_table, EncodeOptions,
};
