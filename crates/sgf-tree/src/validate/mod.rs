//! Semantic validation for parsed game trees.
//!
//! Parsing only checks structure. Validation then types every property the
//! schema knows, in place:
//! - Root defaults are established (`SZ` → 19×19, `CA` → ISO-8859-1)
//! - Coordinates are decoded against the effective board size
//! - Duplicate identifiers, empty required lists and malformed values are
//!   rejected
//!
//! Unknown properties are kept as raw values. The first error aborts the
//! pass; a tree that failed validation should be discarded.

pub mod schema;
pub mod text;
mod value;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::model::{BoardSize, Charset, GameTree, GameTreeNode, Value};
use crate::validate::schema::{BOARD_SIZE, STANDARD_SCHEMA};
use crate::validate::value::{decode_property, parse_number};

pub use schema::{Cardinality, PropertyType, Schema, ValueType};

/// Tree-wide settings derived from the root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub board_size: BoardSize,
    pub charset: Charset,
    /// False when the root names a game other than Go (`GM` ≠ 1); coordinate
    /// properties are then left raw.
    pub decode_coordinates: bool,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            charset: Charset::default(),
            decode_coordinates: true,
        }
    }
}

/// Validates a tree against the standard schema.
pub fn validate_game_tree(tree: &mut GameTree) -> Result<(), ValidationError> {
    validate_game_tree_with_schema(tree, &STANDARD_SCHEMA)
}

/// Validates every tree, stopping at the first error.
pub fn validate_collection(trees: &mut [GameTree]) -> Result<(), ValidationError> {
    for (index, tree) in trees.iter_mut().enumerate() {
        validate_game_tree(tree)
            .inspect_err(|e| debug!(tree = index, error = %e, "validation failed"))?;
    }
    Ok(())
}

/// Validates a tree against `schema`.
pub fn validate_game_tree_with_schema(
    tree: &mut GameTree,
    schema: &Schema,
) -> Result<(), ValidationError> {
    let context = match tree.root() {
        Some(root) => root_context(root)?,
        None => ValidationContext::default(),
    };
    tree.set_defaults(context.board_size, context.charset);
    debug!(
        nodes = tree.len(),
        board = %context.board_size,
        charset = context.charset.name(),
        "validating game tree"
    );

    let order: Vec<_> = tree.iter_preorder().collect();
    for id in order {
        if let Some(node) = tree.node_mut(id) {
            trace!(node = id.index(), properties = node.len(), "validating node");
            validate_node(node, schema, &context)?;
        }
    }
    Ok(())
}

/// Reads `SZ`, `CA` and `GM` from the root.
///
/// Values that an earlier pass already typed are read as they are.
fn root_context(root: &GameTreeNode) -> Result<ValidationContext, ValidationError> {
    let mut context = ValidationContext::default();

    if let Some(property) = root.get("SZ") {
        let size = match property.values.as_slice() {
            [Value::Raw(_)] => decode_property(property, PropertyType::one(BOARD_SIZE), &context)
                .ok()
                .and_then(|values| board_size(values.first()?)),
            [value] => board_size(value),
            _ => None,
        };
        context.board_size = size.ok_or_else(|| ValidationError::InvalidBoardSize {
            value: joined(&property.values),
            position: property.position,
        })?;
    }

    if let Some(property) = root.get("CA") {
        let name = match property.values.as_slice() {
            [Value::SimpleText(name)] => name.clone(),
            _ => {
                let values =
                    decode_property(property, PropertyType::one(ValueType::SimpleText), &context)?;
                values.first().map(Value::to_string).unwrap_or_default()
            }
        };
        context.charset =
            Charset::from_name(&name).ok_or(ValidationError::UnsupportedCharset {
                charset: name,
                position: property.position,
            })?;
    }

    let game = match root.value("GM") {
        Some(Value::Raw(raw)) => parse_number(raw),
        Some(Value::Number(n)) => Some(*n),
        _ => None,
    };
    context.decode_coordinates = game.is_none_or(|g| g == 1);

    Ok(context)
}

fn joined(values: &[Value]) -> String {
    values.iter().map(Value::to_string).collect::<Vec<_>>().join("][")
}

fn board_size(value: &Value) -> Option<BoardSize> {
    let dimension = |v: &Value| v.as_number().and_then(|n| u8::try_from(n).ok());
    match value {
        Value::Number(_) => BoardSize::square(dimension(value)?),
        Value::Composed(w, h) => BoardSize::new(dimension(w)?, dimension(h)?),
        _ => None,
    }
}

fn validate_node(
    node: &mut GameTreeNode,
    schema: &Schema,
    context: &ValidationContext,
) -> Result<(), ValidationError> {
    let mut seen = FxHashSet::with_capacity_and_hasher(node.len(), Default::default());
    for property in node.properties() {
        if !seen.insert(property.identifier.as_str()) {
            return Err(ValidationError::DuplicateProperty {
                identifier: property.identifier.to_string(),
                position: property.position,
            });
        }
    }

    for property in node.properties_mut() {
        let Some(property_type) = schema.get_property_type(property.identifier.as_str()) else {
            continue;
        };
        // Already typed by an earlier pass
        if !property.values.iter().all(Value::is_raw) {
            continue;
        }
        if !context.decode_coordinates && property_type.value.has_coordinates() {
            continue;
        }
        property.values = decode_property(property, property_type, context)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Cursor, parse_collection};
    use crate::model::{Point, TreeBuilder};

    fn tree(input: &str) -> GameTree {
        parse_collection(Cursor::new(input.as_bytes()), TreeBuilder::new)
            .unwrap()
            .remove(0)
    }

    fn validated(input: &str) -> Result<GameTree, ValidationError> {
        let mut tree = tree(input);
        validate_game_tree(&mut tree).map(|_| tree)
    }

    #[test]
    fn test_default_board_size_and_charset() {
        let tree = validated("(;B[aa])").unwrap();
        assert_eq!(tree.board_size(), Some(BoardSize::square(19).unwrap()));
        assert_eq!(tree.charset(), Some(Charset::Latin1));
    }

    #[test]
    fn test_board_size_forms() {
        let tree = validated("(;SZ[9])").unwrap();
        assert_eq!(tree.board_size(), BoardSize::square(9));
        assert_eq!(tree.root().unwrap().value("SZ"), Some(&Value::Number(9)));

        let tree = validated("(;SZ[13:9])").unwrap();
        assert_eq!(tree.board_size(), BoardSize::new(13, 9));
    }

    #[test]
    fn test_invalid_board_size() {
        for input in ["(;SZ[x])", "(;SZ[9:])", "(;SZ[0])", "(;SZ[53])", "(;SZ[-9])", "(;SZ[9][9])"] {
            let err = validated(input).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidBoardSize { position: 2, .. }),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn test_coordinates_follow_board_size() {
        assert!(validated("(;SZ[9];B[ii])").is_ok());
        let err = validated("(;SZ[9];B[jj])").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::PointOutOfRange { width: 9, height: 9, position: 8, .. }
        ));
    }

    #[test]
    fn test_charset() {
        let tree = validated("(;CA[UTF-8]C[caf\u{e9}])").unwrap();
        assert_eq!(tree.charset(), Some(Charset::Utf8));
        assert_eq!(tree.root().unwrap().value("C"), Some(&Value::Text("café".to_string())));

        let err = validated("(;CA[EBCDIC])").unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedCharset { .. }));
    }

    #[test]
    fn test_duplicate_property() {
        let err = validated("(;B[aa]C[x]B[bb])").unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateProperty {
                identifier: "B".to_string(),
                position: 11
            }
        );
    }

    #[test]
    fn test_same_identifier_in_different_nodes() {
        assert!(validated("(;B[aa];B[bb])").is_ok());
    }

    #[test]
    fn test_unknown_property_stays_raw() {
        let tree = validated("(;XY[anything]B[aa])").unwrap();
        let root = tree.root().unwrap();
        assert_eq!(root.value("XY"), Some(&Value::Raw(b"anything".to_vec())));
        assert_eq!(root.value("B"), Some(&Value::Point(Point::new(0, 0))));
    }

    #[test]
    fn test_errors_in_variations_are_found() {
        let err = validated("(;B[aa](;W[bb])(;W[cc];DM[5]))").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { expected: "double", .. }));
    }

    #[test]
    fn test_other_games_keep_coordinates_raw() {
        let tree = validated("(;GM[2]SZ[8];B[e2e4])").unwrap();
        let id = tree.main_line()[1];
        assert_eq!(tree.node(id).unwrap().value("B"), Some(&Value::Raw(b"e2e4".to_vec())));
        assert_eq!(tree.root().unwrap().value("GM"), Some(&Value::Number(2)));
    }

    #[test]
    fn test_revalidation_is_a_no_op() {
        let mut tree = validated("(;SZ[9]AB[aa:bb];C[hi])").unwrap();
        let before = tree.clone();
        validate_game_tree(&mut tree).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_custom_schema() {
        let mut schema = Schema::standard();
        schema.add_property("XP", PropertyType::list(ValueType::Point));

        let mut t = tree("(;XP[aa][zz])");
        assert!(validate_game_tree(&mut t).is_ok());

        let mut t = tree("(;XP[aa][zz])");
        let err = validate_game_tree_with_schema(&mut t, &schema).unwrap_err();
        assert!(matches!(err, ValidationError::PointOutOfRange { .. }));
    }

    #[test]
    fn test_collection_fails_fast() {
        let mut trees = parse_collection(
            Cursor::new(b"(;DM[1])(;DM[3])(;DM[2])"),
            TreeBuilder::new,
        )
        .unwrap();
        let err = validate_collection(&mut trees).unwrap_err();
        assert_eq!(err.position(), 10);
        // The third tree was never visited
        assert!(trees[2].board_size().is_none());
    }
}
