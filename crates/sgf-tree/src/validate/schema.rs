//! Property type schema.
//!
//! The standard schema covers the general FF[4] properties plus the Go
//! specific ones (`HA`, `KM`, `TB`, `TW`).

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Type of a single property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Must be empty.
    None,
    Double,
    Color,
    Number,
    Real,
    SimpleText,
    Text,
    Point,
    /// A point or a pass.
    Move,
    Stone,
    /// Two values joined by the first `:`.
    Composed(&'static ValueType, &'static ValueType),
    /// The first type that accepts the value.
    Either(&'static ValueType, &'static ValueType),
}

impl ValueType {
    /// Name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::None => "none",
            ValueType::Double => "double",
            ValueType::Color => "color",
            ValueType::Number => "number",
            ValueType::Real => "real",
            ValueType::SimpleText => "simple text",
            ValueType::Text => "text",
            ValueType::Point => "point",
            ValueType::Move => "move",
            ValueType::Stone => "stone",
            ValueType::Composed(..) => "composed value",
            ValueType::Either(..) => "value",
        }
    }

    /// Returns true if the type contains board coordinates anywhere.
    pub fn has_coordinates(&self) -> bool {
        match self {
            ValueType::Point | ValueType::Move | ValueType::Stone => true,
            ValueType::Composed(a, b) | ValueType::Either(a, b) => {
                a.has_coordinates() || b.has_coordinates()
            }
            _ => false,
        }
    }
}

/// How many values a property takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one value.
    One,
    /// One or more values.
    List,
    /// Zero or more values; zero is written as a single empty value.
    EList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyType {
    pub value: ValueType,
    pub cardinality: Cardinality,
}

impl PropertyType {
    pub const fn one(value: ValueType) -> Self {
        Self {
            value,
            cardinality: Cardinality::One,
        }
    }

    pub const fn list(value: ValueType) -> Self {
        Self {
            value,
            cardinality: Cardinality::List,
        }
    }

    pub const fn elist(value: ValueType) -> Self {
        Self {
            value,
            cardinality: Cardinality::EList,
        }
    }
}

/// Identifier → type table used during validation.
///
/// Identifiers without an entry are left unvalidated.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    properties: FxHashMap<String, PropertyType>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the standard schema, for extending.
    pub fn standard() -> Self {
        STANDARD_SCHEMA.clone()
    }

    /// Registers or replaces the type of `identifier`.
    pub fn add_property(&mut self, identifier: &str, property_type: PropertyType) {
        self.properties.insert(identifier.to_owned(), property_type);
    }

    /// Gets the type registered for `identifier`.
    pub fn get_property_type(&self, identifier: &str) -> Option<PropertyType> {
        self.properties.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Type of a board size: `19` or `19:13`.
pub const BOARD_SIZE: ValueType =
    ValueType::Either(&ValueType::Number, &ValueType::Composed(&ValueType::Number, &ValueType::Number));

lazy_static! {
    /// The standard FF[4] schema.
    pub static ref STANDARD_SCHEMA: Schema = {
        use ValueType::*;

        let point_pair = Composed(&Point, &Point);
        let label = Composed(&Point, &SimpleText);
        let application = Composed(&SimpleText, &SimpleText);
        let figure = Either(&None, &Composed(&Number, &SimpleText));

        let table: &[(&str, PropertyType)] = &[
            // Move
            ("B", PropertyType::one(Move)),
            ("W", PropertyType::one(Move)),
            ("KO", PropertyType::one(None)),
            ("MN", PropertyType::one(Number)),
            // Setup
            ("AB", PropertyType::list(Stone)),
            ("AW", PropertyType::list(Stone)),
            ("AE", PropertyType::list(Point)),
            ("PL", PropertyType::one(Color)),
            // Node annotation
            ("C", PropertyType::one(Text)),
            ("DM", PropertyType::one(Double)),
            ("GB", PropertyType::one(Double)),
            ("GW", PropertyType::one(Double)),
            ("HO", PropertyType::one(Double)),
            ("N", PropertyType::one(SimpleText)),
            ("UC", PropertyType::one(Double)),
            ("V", PropertyType::one(Real)),
            // Move annotation
            ("BM", PropertyType::one(Double)),
            ("DO", PropertyType::one(None)),
            ("IT", PropertyType::one(None)),
            ("TE", PropertyType::one(Double)),
            // Markup
            ("AR", PropertyType::list(point_pair)),
            ("CR", PropertyType::list(Point)),
            ("DD", PropertyType::elist(Point)),
            ("LB", PropertyType::list(label)),
            ("LN", PropertyType::list(point_pair)),
            ("MA", PropertyType::list(Point)),
            ("SL", PropertyType::list(Point)),
            ("SQ", PropertyType::list(Point)),
            ("TR", PropertyType::list(Point)),
            // Root
            ("AP", PropertyType::one(application)),
            ("CA", PropertyType::one(SimpleText)),
            ("FF", PropertyType::one(Number)),
            ("GM", PropertyType::one(Number)),
            ("ST", PropertyType::one(Number)),
            ("SZ", PropertyType::one(BOARD_SIZE)),
            // Game info
            ("AN", PropertyType::one(SimpleText)),
            ("BR", PropertyType::one(SimpleText)),
            ("BT", PropertyType::one(SimpleText)),
            ("CP", PropertyType::one(SimpleText)),
            ("DT", PropertyType::one(SimpleText)),
            ("EV", PropertyType::one(SimpleText)),
            ("GC", PropertyType::one(Text)),
            ("GN", PropertyType::one(SimpleText)),
            ("ON", PropertyType::one(SimpleText)),
            ("OT", PropertyType::one(SimpleText)),
            ("PB", PropertyType::one(SimpleText)),
            ("PC", PropertyType::one(SimpleText)),
            ("PW", PropertyType::one(SimpleText)),
            ("RE", PropertyType::one(SimpleText)),
            ("RO", PropertyType::one(SimpleText)),
            ("RU", PropertyType::one(SimpleText)),
            ("SO", PropertyType::one(SimpleText)),
            ("TM", PropertyType::one(Real)),
            ("US", PropertyType::one(SimpleText)),
            ("WR", PropertyType::one(SimpleText)),
            ("WT", PropertyType::one(SimpleText)),
            // Timing
            ("BL", PropertyType::one(Real)),
            ("WL", PropertyType::one(Real)),
            ("OB", PropertyType::one(Number)),
            ("OW", PropertyType::one(Number)),
            // Miscellaneous
            ("FG", PropertyType::one(figure)),
            ("PM", PropertyType::one(Number)),
            ("VW", PropertyType::elist(Point)),
            // Go
            ("HA", PropertyType::one(Number)),
            ("KM", PropertyType::one(Real)),
            ("TB", PropertyType::elist(Point)),
            ("TW", PropertyType::elist(Point)),
        ];

        let mut schema = Schema::new();
        for (identifier, property_type) in table {
            schema.add_property(identifier, *property_type);
        }
        schema
    };
}
