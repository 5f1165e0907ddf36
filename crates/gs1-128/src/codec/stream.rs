//! AI-stream encoding and decoding.
//!
//! Encoding turns a bracketed element string into the character stream a
//! Code 128 renderer draws as GS1-128:
//!
//! ```text
//! (10)ABC123(11)240101  ->  FNC1 (10)ABC123 FNC1 (11)240101
//! ```
//!
//! - one FNC1 start marker
//! - `(AI)value` segments in input order, brackets retained
//! - FNC1 after a variable-length value when another segment follows
//!
//! Fixed-length values (per [`AiTable`]) never get a separator; a scanner
//! finds their end by counting.

use crate::codec::scanner::{RawSegment, Scanner};
use crate::error::{FormatError, LabelError};
use crate::limits::{AI_CLOSE, AI_OPEN, FNC1};
use crate::model::{EncodedStream, ProductLabel, Segment};
use crate::table::AiTable;
use crate::validate::{check_value_characters, validate_label};

/// Options for encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    /// Reject values holding characters that would corrupt the stream.
    ///
    /// When enabled, a value containing `)`, FNC1, or an ASCII control
    /// character fails with [`FormatError::UnexpectedCharacter`]. When
    /// disabled, such characters are copied through like any other.
    pub strict: bool,
}

impl EncodeOptions {
    /// Creates default (tolerant) encoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates strict encoding options.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Encodes an element string against the GS1 fixed-length table.
///
/// Input that does not start with `(` is returned unchanged.
pub fn encode(raw: &str) -> Result<EncodedStream, FormatError> {
    encode_with_options(raw, AiTable::gs1(), EncodeOptions::default())
}

/// Encodes an element string against the given table.
pub fn encode_with_table(raw: &str, table: &AiTable) -> Result<EncodedStream, FormatError> {
    encode_with_options(raw, table, EncodeOptions::default())
}

/// Encodes an element string with the given table and options.
pub fn encode_with_options(
    raw: &str,
    table: &AiTable,
    options: EncodeOptions,
) -> Result<EncodedStream, FormatError> {
    if !raw.starts_with(AI_OPEN) {
        tracing::trace!(len = raw.len(), "passing through free-form data");
        return Ok(EncodedStream::passthrough(raw));
    }

    encode_segments(raw, table, options)
        .map(EncodedStream::structured)
        .inspect_err(|e| tracing::debug!(error = %e, "rejected AI element string"))
}

fn encode_segments(
    raw: &str,
    table: &AiTable,
    options: EncodeOptions,
) -> Result<String, FormatError> {
    let mut scanner = Scanner::new(raw);
    // Start marker plus room for a few separators
    let mut out = String::with_capacity(raw.len() + 4 * FNC1.len_utf8());
    out.push(FNC1);

    while let Some(segment) = scanner.next_segment()? {
        let fixed_length = check_segment(&segment, table, options)?;
        let separated = fixed_length.is_none() && !scanner.is_empty();

        tracing::trace!(
            ai = segment.ai,
            fixed_length,
            separated,
            "encoded AI segment"
        );

        out.push(AI_OPEN);
        out.push_str(segment.ai);
        out.push(AI_CLOSE);
        out.push_str(segment.value);
        if separated {
            out.push(FNC1);
        }
    }

    Ok(out)
}

/// Validates a product label's fields, then encodes its element string.
///
/// ```rust
/// use gs1_128::{encode_label, ProductLabel, FNC1};
///
/// let label = ProductLabel::new("12345678901234", "031524", "240315");
/// let stream = encode_label(&label).unwrap();
/// assert_eq!(stream.as_str(), format!("{FNC1}(01)12345678901234(11)240315(10)031524"));
/// ```
pub fn encode_label(label: &ProductLabel) -> Result<EncodedStream, LabelError> {
    validate_label(label)?;
    Ok(encode(&label.trimmed().element_string())?)
}

/// Validates one segment, returning its fixed length if it has one.
fn check_segment(
    segment: &RawSegment<'_>,
    table: &AiTable,
    options: EncodeOptions,
) -> Result<Option<usize>, FormatError> {
    if options.strict {
        check_value_characters(segment.ai, segment.value, segment.value_position)?;
    }

    let fixed_length = table.lookup(segment.ai);
    if let Some(expected) = fixed_length {
        let actual = segment.value.chars().count();
        if actual != expected {
            return Err(FormatError::WrongLength {
                ai: segment.ai.to_string(),
                expected,
                actual,
            });
        }
    }
    Ok(fixed_length)
}

/// Splits an encoded stream back into its segments.
///
/// Separators are stripped from the values and reported through
/// [`Segment::separated`]. A stream without the leading FNC1 is free-form
/// data and yields no segments.
pub fn decode_stream(encoded: &str) -> Result<Vec<Segment<'_>>, FormatError> {
    decode_stream_with_table(encoded, AiTable::gs1())
}

/// Splits an encoded stream back into its segments using the given table.
pub fn decode_stream_with_table<'a>(
    encoded: &'a str,
    table: &AiTable,
) -> Result<Vec<Segment<'a>>, FormatError> {
    if !encoded.starts_with(FNC1) {
        return Ok(Vec::new());
    }

    let mut scanner = Scanner::at(encoded, FNC1.len_utf8());
    let mut segments = Vec::new();
    while let Some(raw) = scanner.next_segment()? {
        let (value, separated) = match raw.value.strip_suffix(FNC1) {
            Some(value) => (value, true),
            None => (raw.value, false),
        };
        segments.push(Segment {
            ai: raw.ai,
            value,
            position: raw.position,
            fixed_length: table.lookup(raw.ai),
            separated,
        });
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fnc1(s: &str) -> String {
        s.replace('|', &FNC1.to_string())
    }

    #[test]
    fn test_passthrough() {
        for raw in ["", "HELLO", "12345", " (01)12345678901234", "01)x"] {
            let stream = encode(raw).unwrap();
            assert_eq!(stream.as_str(), raw);
            assert!(!stream.is_structured());
        }
    }

    #[test]
    fn test_fixed_length_gtin() {
        let stream = encode("(01)12345678901234").unwrap();
        assert_eq!(stream.as_str(), fnc1("|(01)12345678901234"));

        let result = encode("(01)1234");
        assert_eq!(
            result,
            Err(FormatError::WrongLength {
                ai: "01".to_string(),
                expected: 14,
                actual: 4,
            })
        );
    }

    #[test]
    fn test_variable_length_separator() {
        let stream = encode("(10)ABC123(11)240101").unwrap();
        assert_eq!(stream.as_str(), fnc1("|(10)ABC123|(11)240101"));
        assert!(!stream.as_str().ends_with(FNC1));
    }

    #[test]
    fn test_label_scenario_has_no_separators() {
        let raw = "(01)12345678901234(11)240315(10)LOT42";
        let stream = encode(raw).unwrap();
        assert_eq!(stream.as_str(), format!("{FNC1}{raw}"));
        assert_eq!(stream.fnc1_count(), 1);
    }

    #[test]
    fn test_consecutive_variable_length() {
        let stream = encode("(10)A(21)B(240)C").unwrap();
        assert_eq!(stream.as_str(), fnc1("|(10)A|(21)B|(240)C"));
    }

    #[test]
    fn test_last_variable_gets_no_separator() {
        let stream = encode("(10)ABC").unwrap();
        assert_eq!(stream.as_str(), fnc1("|(10)ABC"));
    }

    #[test]
    fn test_empty_variable_value() {
        let stream = encode("(10)(21)X").unwrap();
        assert_eq!(stream.as_str(), fnc1("|(10)|(21)X"));
    }

    #[test]
    fn test_empty_fixed_value() {
        assert!(matches!(
            encode("(11)(10)A"),
            Err(FormatError::WrongLength { expected: 6, actual: 0, .. })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let table = AiTable::from_entries([("99", 3)]);
        let stream = encode_with_table("(99)äöü", &table).unwrap();
        assert_eq!(stream.as_str(), fnc1("|(99)äöü"));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(encode("(01"), Err(FormatError::UnterminatedAi { position: 0 }));
        assert_eq!(
            encode("(AB)123"),
            Err(FormatError::InvalidAiCode("AB".to_string()))
        );
    }

    #[test]
    fn test_error_after_valid_segments() {
        // No partial output: the whole call fails
        assert!(encode("(10)ABC(11)2401").is_err());
        assert!(encode("(10)ABC(1X)240101").is_err());
    }

    #[test]
    fn test_stub_table_changes_separators() {
        // With 10 declared fixed-length, no separator follows it
        let table = AiTable::from_entries([("10", 6)]);
        let stream = encode_with_table("(10)ABC123(11)240101", &table).unwrap();
        assert_eq!(stream.as_str(), fnc1("|(10)ABC123(11)240101"));

        // With an empty table every AI is variable-length
        let stream = encode_with_table("(01)1(11)2", &AiTable::default()).unwrap();
        assert_eq!(stream.as_str(), fnc1("|(01)1|(11)2"));
    }

    #[test]
    fn test_tolerant_mode_keeps_stray_characters() {
        let stream = encode("(10)AB)C(11)240101").unwrap();
        assert_eq!(stream.as_str(), fnc1("|(10)AB)C|(11)240101"));
    }

    #[test]
    fn test_strict_mode_rejects_stray_characters() {
        let options = EncodeOptions::strict();
        let result = encode_with_options("(10)AB)C(11)240101", AiTable::gs1(), options);
        assert_eq!(
            result,
            Err(FormatError::UnexpectedCharacter {
                ai: "10".to_string(),
                character: ')',
                position: 6,
            })
        );

        let result = encode_with_options("(10)A\u{1d}B", AiTable::gs1(), options);
        assert!(matches!(
            result,
            Err(FormatError::UnexpectedCharacter { character: '\u{1d}', .. })
        ));

        let stream = encode_with_options("(10)ABC123(11)240101", AiTable::gs1(), options).unwrap();
        assert_eq!(stream.as_str(), fnc1("|(10)ABC123|(11)240101"));
    }

    #[test]
    fn test_strict_mode_passthrough_unchecked() {
        let stream = encode_with_options("free)\u{1d}", AiTable::gs1(), EncodeOptions::strict()).unwrap();
        assert_eq!(stream.as_str(), "free)\u{1d}");
    }

    #[test]
    fn test_encode_label() {
        let label = ProductLabel::new(" 12345678901234", "031524", "240315\n");
        let stream = encode_label(&label).unwrap();
        assert_eq!(stream.as_str(), fnc1("|(01)12345678901234(11)240315(10)031524"));

        let label = ProductLabel::new("12345678901234", "", "240315");
        assert!(matches!(encode_label(&label), Err(LabelError::Validation(_))));
    }

    #[test]
    fn test_decode_stream() {
        let stream = encode("(10)ABC123(11)240101").unwrap();
        let segments = decode_stream(stream.as_str()).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment {
                    ai: "10",
                    value: "ABC123",
                    position: 2,
                    fixed_length: None,
                    separated: true,
                },
                Segment {
                    ai: "11",
                    value: "240101",
                    position: 14,
                    fixed_length: Some(6),
                    separated: false,
                },
            ]
        );
    }

    #[test]
    fn test_decode_passthrough_has_no_segments() {
        assert!(decode_stream("(01)12345678901234").unwrap().is_empty());
        assert!(decode_stream("").unwrap().is_empty());
        assert!(decode_stream(&FNC1.to_string()).unwrap().is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        let bad = fnc1("|(10)A|(2");
        assert_eq!(decode_stream(&bad), Err(FormatError::UnterminatedAi { position: 9 }));
    }
}
