//! Tokenizer for bracketed AI element strings.
//!
//! Splits `(AI)value(AI)value...` into raw segments without consulting the
//! AI table. Length checks and separator placement happen in the encoder.

use crate::error::FormatError;
use crate::limits::{AI_CLOSE, AI_OPEN};

/// A segment as it appears in the scanned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    /// AI code between the parentheses (digits only).
    pub ai: &'a str,
    /// Everything from after `)` up to the next `(` or end of input.
    pub value: &'a str,
    /// Byte offset of the `(`.
    pub position: usize,
    /// Byte offset of the first value byte.
    pub value_position: usize,
}

/// Left-to-right cursor over an element string.
///
/// After each segment the cursor rests on the next `(` or at end of input.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Creates a scanner positioned at byte offset `pos` of `input`.
    ///
    /// Reported positions stay relative to the start of `input`.
    pub fn at(input: &'a str, pos: usize) -> Self {
        debug_assert!(input.is_char_boundary(pos));
        Self { input, pos }
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unconsumed input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns true if all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Reads the next segment, or `None` once no `(` is left.
    ///
    /// Characters before the next `(` are skipped. Since a value always runs
    /// up to the following `(`, skipping only ever happens at the very start
    /// of the input.
    pub fn next_segment(&mut self) -> Result<Option<RawSegment<'a>>, FormatError> {
        let Some(skip) = self.remaining().find(AI_OPEN) else {
            self.pos = self.input.len();
            return Ok(None);
        };
        if skip > 0 {
            tracing::trace!(position = self.pos, skipped = skip, "skipping text outside AI markers");
        }

        let open = self.pos + skip;
        let code_start = open + AI_OPEN.len_utf8();
        let close = self.input[code_start..]
            .find(AI_CLOSE)
            .map(|i| code_start + i)
            .ok_or(FormatError::UnterminatedAi { position: open })?;

        let ai = &self.input[code_start..close];
        if ai.is_empty() || !ai.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::InvalidAiCode(ai.to_string()));
        }

        let value_start = close + AI_CLOSE.len_utf8();
        let value_end = self.input[value_start..]
            .find(AI_OPEN)
            .map_or(self.input.len(), |i| value_start + i);
        self.pos = value_end;

        Ok(Some(RawSegment {
            ai,
            value: &self.input[value_start..value_end],
            position: open,
            value_position: value_start,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(input: &str) -> Result<Vec<RawSegment<'_>>, FormatError> {
        let mut scanner = Scanner::new(input);
        let mut segments = Vec::new();
        while let Some(segment) = scanner.next_segment()? {
            segments.push(segment);
        }
        Ok(segments)
    }

    #[test]
    fn test_scan_segments() {
        let segments = scan_all("(01)12345678901234(10)AB").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].ai, "01");
        assert_eq!(segments[0].value, "12345678901234");
        assert_eq!(segments[0].position, 0);
        assert_eq!(segments[0].value_position, 4);
        assert_eq!(segments[1].ai, "10");
        assert_eq!(segments[1].value, "AB");
        assert_eq!(segments[1].position, 18);
    }

    #[test]
    fn test_cursor_rests_on_next_marker() {
        let mut scanner = Scanner::new("(10)X(21)Y");
        scanner.next_segment().unwrap();
        assert_eq!(scanner.position(), 5);
        assert_eq!(scanner.remaining(), "(21)Y");
        assert!(!scanner.is_empty());
        scanner.next_segment().unwrap();
        assert!(scanner.is_empty());
        assert_eq!(scanner.next_segment().unwrap(), None);
    }

    #[test]
    fn test_scanner_at_offset() {
        let mut scanner = Scanner::at("##(10)A", 2);
        let segment = scanner.next_segment().unwrap().unwrap();
        assert_eq!(segment.position, 2);
        assert_eq!(segment.value_position, 6);
    }

    #[test]
    fn test_leading_text_is_skipped() {
        let segments = scan_all("xx(10)A").unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].position, 2);
    }

    #[test]
    fn test_stray_close_paren_stays_in_value() {
        let segments = scan_all("(10)AB)C(21)D").unwrap();
        assert_eq!(segments[0].value, "AB)C");
    }

    #[test]
    fn test_empty_value() {
        let segments = scan_all("(10)(21)").unwrap();
        assert_eq!(segments[0].value, "");
        assert_eq!(segments[1].value, "");
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            scan_all("(01"),
            Err(FormatError::UnterminatedAi { position: 0 })
        );
        assert_eq!(
            scan_all("(10)AB(21"),
            Err(FormatError::UnterminatedAi { position: 6 })
        );
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(
            scan_all("(AB)123"),
            Err(FormatError::InvalidAiCode("AB".to_string()))
        );
        assert_eq!(scan_all("()123"), Err(FormatError::InvalidAiCode(String::new())));
        // Nested open paren ends up inside the code
        assert_eq!(
            scan_all("((01)1"),
            Err(FormatError::InvalidAiCode("(01".to_string()))
        );
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(matches!(scan_all("(٠١)1"), Err(FormatError::InvalidAiCode(_))));
    }
}
