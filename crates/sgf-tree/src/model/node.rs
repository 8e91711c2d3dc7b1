//! Nodes and properties.

use std::fmt;

use crate::model::Value;

/// One or more uppercase ASCII letters naming a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyIdentifier(String);

impl PropertyIdentifier {
    /// Creates an identifier, or `None` if `s` is empty or not all `A`–`Z`.
    pub fn new(s: &str) -> Option<Self> {
        (!s.is_empty() && s.bytes().all(|b| b.is_ascii_uppercase())).then(|| Self(s.to_owned()))
    }

    /// Builds an identifier from bytes the grammar already checked.
    pub(crate) fn from_checked(bytes: &[u8]) -> Self {
        debug_assert!(!bytes.is_empty() && bytes.iter().all(u8::is_ascii_uppercase));
        Self(bytes.iter().map(|&b| b as char).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PropertyIdentifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PropertyIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An identifier with its values.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub identifier: PropertyIdentifier,
    pub values: Vec<Value>,
    /// Byte offset of the identifier in the input.
    pub position: usize,
}

impl Property {
    pub fn new(identifier: PropertyIdentifier, values: Vec<Value>, position: usize) -> Self {
        Self {
            identifier,
            values,
            position,
        }
    }
}

/// A single `;`-delimited node.
///
/// Properties are kept in input order. The grammar accepts a repeated
/// identifier; validation rejects it, after which identifiers are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameTreeNode {
    properties: Vec<Property>,
    position: usize,
}

impl GameTreeNode {
    /// Creates an empty node starting at byte `position`.
    pub fn new(position: usize) -> Self {
        Self {
            properties: Vec::new(),
            position,
        }
    }

    /// Byte offset of the node's `;`.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Returns the first property named `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.identifier == identifier)
    }

    /// Returns the values of the first property named `identifier`.
    pub fn values(&self, identifier: &str) -> Option<&[Value]> {
        self.get(identifier).map(|p| p.values.as_slice())
    }

    /// Returns the single value of `identifier`, if it has exactly one.
    pub fn value(&self, identifier: &str) -> Option<&Value> {
        match self.values(identifier)? {
            [v] => Some(v),
            _ => None,
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub(crate) fn properties_mut(&mut self) -> &mut [Property] {
        &mut self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_rules() {
        assert!(PropertyIdentifier::new("B").is_some());
        assert!(PropertyIdentifier::new("AB").is_some());
        assert!(PropertyIdentifier::new("").is_none());
        assert!(PropertyIdentifier::new("Ab").is_none());
        assert!(PropertyIdentifier::new("A1").is_none());
    }

    #[test]
    fn test_node_lookup() {
        let mut node = GameTreeNode::new(4);
        node.push(Property::new(
            PropertyIdentifier::new("B").unwrap(),
            vec![Value::Raw(b"dp".to_vec())],
            5,
        ));
        node.push(Property::new(
            PropertyIdentifier::new("AB").unwrap(),
            vec![Value::Raw(b"aa".to_vec()), Value::Raw(b"bb".to_vec())],
            10,
        ));

        assert_eq!(node.position(), 4);
        assert_eq!(node.len(), 2);
        assert_eq!(node.value("B"), Some(&Value::Raw(b"dp".to_vec())));
        assert_eq!(node.values("AB").map(<[Value]>::len), Some(2));
        assert!(node.value("AB").is_none());
        assert!(!node.contains("W"));
    }
}
