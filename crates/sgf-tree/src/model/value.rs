//! Property values, raw and typed.

use std::fmt;

use crate::model::Point;

/// A two-level emphasis flag (`1` normal, `2` emphasized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Double {
    Normal = 1,
    Emphasized = 2,
}

/// Player color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

/// Text encoding named by the root `CA` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    Utf8,
    #[default]
    Latin1,
    Ascii,
}

impl Charset {
    /// Looks up a charset by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Charset> {
        match name.trim().to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Some(Charset::Utf8),
            "ISO-8859-1" | "ISO8859-1" | "LATIN-1" | "LATIN1" => Some(Charset::Latin1),
            "US-ASCII" | "ASCII" => Some(Charset::Ascii),
            _ => None,
        }
    }

    /// Canonical name of the charset.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Latin1 => "ISO-8859-1",
            Charset::Ascii => "US-ASCII",
        }
    }

    /// Decodes bytes, or `None` if they are not valid in this charset.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Charset::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            // Latin-1 code points are the byte values
            Charset::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
            Charset::Ascii => bytes
                .is_ascii()
                .then(|| bytes.iter().map(|&b| b as char).collect()),
        }
    }
}

/// A property value.
///
/// The parser produces only [`Value::Raw`]; validation replaces raw values
/// of known properties with typed ones. Properties the schema does not know
/// stay raw.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unescaped bytes as they appeared between the brackets.
    Raw(Vec<u8>),
    /// An empty value where no content is allowed.
    None,
    Number(i64),
    Real(f64),
    Double(Double),
    Color(Color),
    /// Text with line breaks folded to spaces.
    SimpleText(String),
    /// Text with line breaks kept as `\n`.
    Text(String),
    Point(Point),
    /// An empty move.
    Pass,
    /// Two values joined by `:`.
    Composed(Box<Value>, Box<Value>),
}

impl Value {
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Value::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the text of a `SimpleText` or `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::SimpleText(s) | Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<Point> {
        match self {
            Value::Point(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_composed(&self) -> Option<(&Value, &Value)> {
        match self {
            Value::Composed(a, b) => Some((a, b)),
            _ => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Value::Pass)
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Value::Raw(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Raw(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            Value::None | Value::Pass => Ok(()),
            Value::Number(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Double(d) => write!(f, "{}", *d as u8),
            Value::Color(Color::Black) => write!(f, "B"),
            Value::Color(Color::White) => write!(f, "W"),
            Value::SimpleText(s) | Value::Text(s) => write!(f, "{s}"),
            Value::Point(p) => write!(f, "{p}"),
            Value::Composed(a, b) => write!(f, "{a}:{b}"),
        }
    }
}
