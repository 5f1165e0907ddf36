//! Validation of user-entered GS1 data.
//!
//! Structural checks of element strings happen while encoding. This module
//! holds the checks that run before an element string exists (form fields,
//! free-form input) and the character rules of strict encoding.

use crate::error::{FormatError, ValidationError};
use crate::limits::{AI_CLOSE, DATE_LEN, FNC1, GTIN_LEN, LOT_NUMBER_LEN};
use crate::model::ProductLabel;

/// Trims free-form barcode input, rejecting input that is blank.
pub fn prepare_input(raw: &str) -> Result<&str, ValidationError> {
    let data = raw.trim();
    if data.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(data)
}

/// Validates the fields of a product label.
///
/// Fields are checked after trimming, in order: all present, then GTIN,
/// lot number, and production date formats. The first failure is returned.
pub fn validate_label(label: &ProductLabel) -> Result<(), ValidationError> {
    let fields = [
        ("gtin", label.gtin.trim()),
        ("lot_number", label.lot_number.trim()),
        ("production_date", label.production_date.trim()),
    ];
    for (field, value) in fields {
        if value.is_empty() {
            return Err(ValidationError::MissingField { field });
        }
    }

    let [(_, gtin), (_, lot_number), (_, production_date)] = fields;
    if !is_digits(gtin, GTIN_LEN) {
        return Err(ValidationError::InvalidGtin);
    }
    if !is_digits(lot_number, LOT_NUMBER_LEN) {
        return Err(ValidationError::InvalidLotNumber);
    }
    if !is_digits(production_date, DATE_LEN) {
        return Err(ValidationError::InvalidProductionDate);
    }
    Ok(())
}

/// Checks that a value contains no character that would corrupt the stream.
///
/// Rejected: `)`, FNC1, and ASCII control characters. `offset` is the byte
/// position of the value in the scanned input, used for error reporting.
pub fn check_value_characters(ai: &str, value: &str, offset: usize) -> Result<(), FormatError> {
    match value
        .char_indices()
        .find(|&(_, c)| c == AI_CLOSE || c == FNC1 || c.is_ascii_control())
    {
        Some((i, character)) => Err(FormatError::UnexpectedCharacter {
            ai: ai.to_string(),
            character,
            position: offset + i,
        }),
        None => Ok(()),
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(gtin: &str, lot: &str, date: &str) -> ProductLabel {
        ProductLabel::new(gtin, lot, date)
    }

    #[test]
    fn test_prepare_input() {
        assert_eq!(prepare_input("  (01)12345678901234\n"), Ok("(01)12345678901234"));
        assert_eq!(prepare_input(" \t\n"), Err(ValidationError::EmptyInput));
        assert_eq!(prepare_input(""), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_valid_label() {
        assert_eq!(validate_label(&label("12345678901234", "031524", "240315")), Ok(()));
        // Surrounding whitespace is ignored
        assert_eq!(validate_label(&label(" 12345678901234 ", "031524\n", "240315")), Ok(()));
    }

    #[test]
    fn test_missing_field_reported_first() {
        assert_eq!(
            validate_label(&label("bad", "", "240315")),
            Err(ValidationError::MissingField { field: "lot_number" })
        );
        assert_eq!(
            validate_label(&label("  ", "031524", "240315")),
            Err(ValidationError::MissingField { field: "gtin" })
        );
    }

    #[test]
    fn test_invalid_gtin() {
        assert_eq!(
            validate_label(&label("1234567890123", "031524", "240315")),
            Err(ValidationError::InvalidGtin)
        );
        assert_eq!(
            validate_label(&label("1234567890123A", "031524", "240315")),
            Err(ValidationError::InvalidGtin)
        );
    }

    #[test]
    fn test_invalid_lot_and_date() {
        assert_eq!(
            validate_label(&label("12345678901234", "LOT42", "240315")),
            Err(ValidationError::InvalidLotNumber)
        );
        assert_eq!(
            validate_label(&label("12345678901234", "031524", "2024-03-15")),
            Err(ValidationError::InvalidProductionDate)
        );
    }

    #[test]
    fn test_check_value_characters() {
        assert!(check_value_characters("10", "ABC-123/x", 4).is_ok());
        assert_eq!(
            check_value_characters("10", "AB)", 4),
            Err(FormatError::UnexpectedCharacter {
                ai: "10".to_string(),
                character: ')',
                position: 6,
            })
        );
        assert!(check_value_characters("21", "A\u{f1}", 0).is_err());
        assert!(check_value_characters("21", "A\tB", 0).is_err());
    }
}
