//! Error types for SGF parsing and validation.

use thiserror::Error;

/// Error categories, used as stable message prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// S001: Input does not match the grammar
    Syntax,
    /// S002: Input exceeds a configured limit
    LimitExceeded,
    /// S003: Property value does not match its schema type
    InvalidValue,
    /// S004: Structural violation (duplicate identifier, empty list, arity)
    Structure,
    /// S005: Unsupported or undecodable charset
    Charset,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "S001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Syntax => "S001",
            ErrorCode::LimitExceeded => "S002",
            ErrorCode::InvalidValue => "S003",
            ErrorCode::Structure => "S004",
            ErrorCode::Charset => "S005",
        }
    }
}

/// Grammar failure at a byte offset.
///
/// Inside repetitions this is the normal stop signal and is discarded; it
/// only reaches the caller when raised at a mandatory point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}")]
pub struct ParseError {
    /// Consumed-byte count at the point of failure.
    pub position: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(position: usize, kind: ParseErrorKind) -> Self {
        Self { position, kind }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::NestingTooDeep { .. } | ParseErrorKind::InputTooLarge { .. } => {
                ErrorCode::LimitExceeded
            }
            _ => ErrorCode::Syntax,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("[S001] expected {expected}, found {}", describe_byte(.found))]
    Expected {
        expected: &'static str,
        found: Option<u8>,
    },

    #[error("[S001] unterminated property value")]
    UnterminatedValue,

    #[error("[S001] unexpected trailing input {}", describe_byte(.found))]
    TrailingInput { found: Option<u8> },

    #[error("[S002] variations nested deeper than {max}")]
    NestingTooDeep { max: usize },

    #[error("[S002] input length {len} exceeds maximum {max}")]
    InputTooLarge { len: usize, max: usize },
}

fn describe_byte(found: &Option<u8>) -> String {
    match found {
        Some(b) if b.is_ascii_graphic() => format!("'{}'", *b as char),
        Some(b) => format!("byte 0x{b:02x}"),
        None => "end of input".to_string(),
    }
}

/// Semantic failure found while validating a parsed tree.
///
/// `position` is the byte offset of the property identifier the error
/// refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("[S003] invalid {expected} value {value:?} for {identifier} at byte {position}")]
    InvalidValue {
        identifier: String,
        expected: &'static str,
        value: String,
        position: usize,
    },

    #[error("[S003] point {value:?} for {identifier} outside {width}x{height} board at byte {position}")]
    PointOutOfRange {
        identifier: String,
        value: String,
        width: u8,
        height: u8,
        position: usize,
    },

    #[error("[S003] invalid board size {value:?} at byte {position}")]
    InvalidBoardSize { value: String, position: usize },

    #[error("[S004] duplicate property {identifier} in node at byte {position}")]
    DuplicateProperty { identifier: String, position: usize },

    #[error("[S004] property {identifier} requires at least one value at byte {position}")]
    EmptyList { identifier: String, position: usize },

    #[error("[S004] property {identifier} takes a single value, found {count} at byte {position}")]
    TooManyValues {
        identifier: String,
        count: usize,
        position: usize,
    },

    #[error("[S005] unsupported charset {charset:?} at byte {position}")]
    UnsupportedCharset { charset: String, position: usize },

    #[error("[S005] value of {identifier} is not valid {charset} at byte {position}")]
    InvalidEncoding {
        identifier: String,
        charset: &'static str,
        position: usize,
    },
}

impl ValidationError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidValue { .. }
            | ValidationError::PointOutOfRange { .. }
            | ValidationError::InvalidBoardSize { .. } => ErrorCode::InvalidValue,
            ValidationError::DuplicateProperty { .. }
            | ValidationError::EmptyList { .. }
            | ValidationError::TooManyValues { .. } => ErrorCode::Structure,
            ValidationError::UnsupportedCharset { .. }
            | ValidationError::InvalidEncoding { .. } => ErrorCode::Charset,
        }
    }

    /// Byte offset of the property this error refers to.
    pub fn position(&self) -> usize {
        match self {
            ValidationError::InvalidValue { position, .. }
            | ValidationError::PointOutOfRange { position, .. }
            | ValidationError::InvalidBoardSize { position, .. }
            | ValidationError::DuplicateProperty { position, .. }
            | ValidationError::EmptyList { position, .. }
            | ValidationError::TooManyValues { position, .. }
            | ValidationError::UnsupportedCharset { position, .. }
            | ValidationError::InvalidEncoding { position, .. } => *position,
        }
    }
}

/// The single error returned by the top-level entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Byte offset from the start of the input.
    pub fn position(&self) -> usize {
        match self {
            Error::Parse(e) => e.position,
            Error::Validation(e) => e.position(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Parse(e) => e.code(),
            Error::Validation(e) => e.code(),
        }
    }
}
