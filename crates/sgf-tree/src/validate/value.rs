//! Decoding raw property values into typed values.

use crate::error::ValidationError;
use crate::model::{Color, Double, Point, Property, Value};
use crate::validate::ValidationContext;
use crate::validate::schema::{Cardinality, PropertyType, ValueType};
use crate::validate::text::{normalize_simple_text, normalize_text};

/// Decodes all raw values of `property` according to `property_type`.
pub(crate) fn decode_property(
    property: &Property,
    property_type: PropertyType,
    context: &ValidationContext,
) -> Result<Vec<Value>, ValidationError> {
    let raws: Vec<&[u8]> = property.values.iter().filter_map(Value::as_raw).collect();
    let decoder = Decoder { property, context };

    match property_type.cardinality {
        Cardinality::One => match raws.as_slice() {
            [raw] => Ok(vec![decoder.decode(raw, property_type.value)?]),
            [] => Err(decoder.empty_list()),
            _ => Err(ValidationError::TooManyValues {
                identifier: property.identifier.to_string(),
                count: raws.len(),
                position: property.position,
            }),
        },
        Cardinality::List | Cardinality::EList => {
            // A single empty value spells the empty list
            if matches!(raws.as_slice(), [] | [[]]) {
                return match property_type.cardinality {
                    Cardinality::EList => Ok(Vec::new()),
                    _ => Err(decoder.empty_list()),
                };
            }
            let mut values = Vec::with_capacity(raws.len());
            for raw in raws {
                decoder.decode_list_item(raw, property_type.value, &mut values)?;
            }
            Ok(values)
        }
    }
}

struct Decoder<'a> {
    property: &'a Property,
    context: &'a ValidationContext,
}

impl Decoder<'_> {
    fn invalid(&self, expected: &'static str, raw: &[u8]) -> ValidationError {
        ValidationError::InvalidValue {
            identifier: self.property.identifier.to_string(),
            expected,
            value: String::from_utf8_lossy(raw).into_owned(),
            position: self.property.position,
        }
    }

    fn empty_list(&self) -> ValidationError {
        ValidationError::EmptyList {
            identifier: self.property.identifier.to_string(),
            position: self.property.position,
        }
    }

    /// Decodes one list entry, expanding `aa:cc` rectangles of points.
    fn decode_list_item(
        &self,
        raw: &[u8],
        value_type: ValueType,
        out: &mut Vec<Value>,
    ) -> Result<(), ValidationError> {
        if matches!(value_type, ValueType::Point | ValueType::Stone) {
            if let Some((a, b)) = split_composed(raw) {
                let a = self.decode_point(a, raw, value_type)?;
                let b = self.decode_point(b, raw, value_type)?;
                out.extend(Point::rectangle(a, b).map(Value::Point));
                return Ok(());
            }
        }
        out.push(self.decode(raw, value_type)?);
        Ok(())
    }

    fn decode(&self, raw: &[u8], value_type: ValueType) -> Result<Value, ValidationError> {
        match value_type {
            ValueType::None if raw.is_empty() => Ok(Value::None),
            ValueType::Double => match raw {
                b"1" => Ok(Value::Double(Double::Normal)),
                b"2" => Ok(Value::Double(Double::Emphasized)),
                _ => Err(self.invalid("double", raw)),
            },
            ValueType::Color => match raw {
                b"B" => Ok(Value::Color(Color::Black)),
                b"W" => Ok(Value::Color(Color::White)),
                _ => Err(self.invalid("color", raw)),
            },
            ValueType::Number => parse_number(raw)
                .map(Value::Number)
                .ok_or_else(|| self.invalid("number", raw)),
            ValueType::Real => parse_real(raw)
                .map(Value::Real)
                .ok_or_else(|| self.invalid("real", raw)),
            ValueType::SimpleText => Ok(Value::SimpleText(normalize_simple_text(&self.text(raw)?))),
            ValueType::Text => Ok(Value::Text(normalize_text(&self.text(raw)?))),
            ValueType::Point | ValueType::Move | ValueType::Stone => {
                if raw.is_empty() {
                    return Ok(Value::Pass);
                }
                // FF[3] wrote passes as "tt" on boards up to 19x19
                if value_type == ValueType::Move && raw == b"tt" && self.context.board_size.fits_19() {
                    return Ok(Value::Pass);
                }
                self.decode_point(raw, raw, value_type).map(Value::Point)
            }
            ValueType::Composed(a, b) => {
                let (left, right) = split_composed(raw).ok_or_else(|| self.invalid("composed value", raw))?;
                Ok(Value::Composed(
                    Box::new(self.decode(left, *a)?),
                    Box::new(self.decode(right, *b)?),
                ))
            }
            ValueType::Either(a, b) => self.decode(raw, *a).or_else(|_| self.decode(raw, *b)),
            ValueType::None => Err(self.invalid("none", raw)),
        }
    }

    fn decode_point(
        &self,
        letters: &[u8],
        raw: &[u8],
        value_type: ValueType,
    ) -> Result<Point, ValidationError> {
        let point = Point::parse(letters).ok_or_else(|| self.invalid(value_type.name(), raw))?;
        let board = self.context.board_size;
        if !board.contains(point) {
            return Err(ValidationError::PointOutOfRange {
                identifier: self.property.identifier.to_string(),
                value: String::from_utf8_lossy(raw).into_owned(),
                width: board.width,
                height: board.height,
                position: self.property.position,
            });
        }
        Ok(point)
    }

    fn text(&self, raw: &[u8]) -> Result<String, ValidationError> {
        let charset = self.context.charset;
        charset
            .decode(raw)
            .ok_or_else(|| ValidationError::InvalidEncoding {
                identifier: self.property.identifier.to_string(),
                charset: charset.name(),
                position: self.property.position,
            })
    }
}

/// Splits at the first `:`.
fn split_composed(raw: &[u8]) -> Option<(&[u8], &[u8])> {
    let at = raw.iter().position(|&b| b == b':')?;
    Some((&raw[..at], &raw[at + 1..]))
}

fn split_sign(raw: &[u8]) -> &[u8] {
    match raw {
        [b'+' | b'-', rest @ ..] => rest,
        _ => raw,
    }
}

/// Parses `[+-]digits` as a base-10 integer.
pub(crate) fn parse_number(raw: &[u8]) -> Option<i64> {
    let digits = split_sign(raw);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(raw).ok()?.parse().ok()
}

/// Parses `[+-]digits[.digits]` as a decimal number.
pub(crate) fn parse_real(raw: &[u8]) -> Option<f64> {
    let unsigned = split_sign(raw);
    let (int, frac) = match unsigned.iter().position(|&b| b == b'.') {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let all_digits = |s: &[u8]| s.iter().all(u8::is_ascii_digit);
    let valid = !int.is_empty()
        && all_digits(int)
        && frac.is_none_or(|f| !f.is_empty() && all_digits(f));
    if !valid {
        return None;
    }
    std::str::from_utf8(raw).ok()?.parse().ok()
}
