//! Format constants for GS1-128 element strings.

/// Function-1 character as consumed by the paired Code 128 renderer.
///
/// The renderer maps this codepoint to the symbology's FNC1 rather than
/// printing it.
pub const FNC1: char = '\u{f1}';

/// Opens an AI marker in the bracketed element-string form.
pub const AI_OPEN: char = '(';

/// Closes an AI marker in the bracketed element-string form.
pub const AI_CLOSE: char = ')';

/// Length of the AI codes the fixed-length table is keyed by.
pub const TABLE_AI_LEN: usize = 2;

/// Length of a GTIN-14 value (AI 01).
pub const GTIN_LEN: usize = 14;

/// Length of a YYMMDD date value (AIs 11-17).
pub const DATE_LEN: usize = 6;

/// Length of the MMDDYY lot numbers accepted by the product-label form.
pub const LOT_NUMBER_LEN: usize = 6;
