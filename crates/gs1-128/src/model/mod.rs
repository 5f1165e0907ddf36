//! Data model types for GS1-128 element strings.
//!
//! - Segments and encoded streams
//! - Product label fields
//! - Builders (ergonomic construction)

pub mod builder;
pub mod label;
pub mod stream;

pub use builder::ElementStringBuilder;
pub use label::ProductLabel;
pub use stream::{EncodedStream, Segment};
