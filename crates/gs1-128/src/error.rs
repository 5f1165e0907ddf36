//! Error types for GS1-128 encoding, input validation, and rendering.

use thiserror::Error;

/// Error codes for malformed AI element strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: `(` without a closing `)`
    UnterminatedAi,
    /// E002: AI code is not all digits
    InvalidAiCode,
    /// E003: Fixed-length AI value has the wrong length
    WrongLength,
    /// E004: Character not allowed in a value (strict mode)
    UnexpectedCharacter,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnterminatedAi => "E001",
            ErrorCode::InvalidAiCode => "E002",
            ErrorCode::WrongLength => "E003",
            ErrorCode::UnexpectedCharacter => "E004",
        }
    }
}

/// Error while encoding a bracketed AI element string.
///
/// All variants are input-validation failures. The encoder never emits partial
/// output alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("[E001] unterminated AI starting at position {position}: missing ')'")]
    UnterminatedAi { position: usize },

    #[error("[E002] invalid AI code {0:?}: expected digits only")]
    InvalidAiCode(String),

    #[error("[E003] AI ({ai}) requires exactly {expected} characters, found {actual}")]
    WrongLength {
        ai: String,
        expected: usize,
        actual: usize,
    },

    #[error("[E004] unexpected character {character:?} at position {position} in value of AI ({ai})")]
    UnexpectedCharacter {
        ai: String,
        character: char,
        position: usize,
    },
}

impl FormatError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            FormatError::UnterminatedAi { .. } => ErrorCode::UnterminatedAi,
            FormatError::InvalidAiCode(_) => ErrorCode::InvalidAiCode,
            FormatError::WrongLength { .. } => ErrorCode::WrongLength,
            FormatError::UnexpectedCharacter { .. } => ErrorCode::UnexpectedCharacter,
        }
    }
}

/// Error in user-supplied fields before an element string is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a barcode")]
    EmptyInput,

    #[error("please fill in all fields: {field} is empty")]
    MissingField { field: &'static str },

    #[error("GTIN must be a 14-digit number")]
    InvalidGtin,

    #[error("lot number must be in MMDDYY format")]
    InvalidLotNumber,

    #[error("production date must be in YYMMDD format")]
    InvalidProductionDate,
}

/// Error while encoding a product label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Error at the symbol-renderer boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("renderer failed: {0}")]
    Backend(String),
}
