//! Recursive-descent productions for the SGF grammar.
//!
//! ```text
//! Collection = GameTree { GameTree }
//! GameTree   = "(" Sequence { GameTree } ")"
//! Sequence   = Node { Node }
//! Node       = ";" { Property }
//! Property   = PropIdent PropValue { PropValue }
//! PropIdent  = UcLetter { UcLetter }
//! PropValue  = "[" CValueType "]"
//! ```
//!
//! Every production takes a [`Cursor`] by value and returns the advanced
//! cursor with its result, or a [`ParseError`] at the offset where matching
//! failed. Repetitions try one more item and, on a syntax error, keep the
//! cursor from before the attempt. Limit errors are never swallowed.

use crate::codec::cursor::Cursor;
use crate::error::{ErrorCode, ParseError, ParseErrorKind};
use crate::limits::MAX_NESTING_DEPTH;
use crate::model::{GameTreeBuilder, GameTreeNode, Property, PropertyIdentifier, Value};

type Parsed<'a, T> = Result<(Cursor<'a>, T), ParseError>;

fn mismatch(cursor: Cursor<'_>, expected: &'static str) -> ParseError {
    ParseError::new(
        cursor.position(),
        ParseErrorKind::Expected {
            expected,
            found: cursor.peek(),
        },
    )
}

/// Requires `byte` after optional whitespace and consumes it.
fn expect_byte<'a>(cursor: Cursor<'a>, byte: u8, what: &'static str) -> Parsed<'a, usize> {
    let cursor = cursor.skip_whitespace();
    if cursor.peek() == Some(byte) {
        Ok((cursor.consume(1), cursor.position()))
    } else {
        Err(mismatch(cursor, what))
    }
}

/// Applies `item` until it fails with a syntax error.
fn many<'a, T>(
    mut cursor: Cursor<'a>,
    mut item: impl FnMut(Cursor<'a>) -> Parsed<'a, T>,
) -> Parsed<'a, Vec<T>> {
    let mut items = Vec::new();
    loop {
        match item(cursor) {
            Ok((next, value)) => {
                cursor = next;
                items.push(value);
            }
            Err(e) if e.code() == ErrorCode::LimitExceeded => return Err(e),
            Err(_) => return Ok((cursor, items)),
        }
    }
}

/// Parses one or more uppercase letters after optional whitespace.
pub fn parse_property_identifier(cursor: Cursor<'_>) -> Parsed<'_, PropertyIdentifier> {
    let cursor = cursor.skip_whitespace();
    let (next, letters) = cursor.take_while(|b| b.is_ascii_uppercase());
    if letters.is_empty() {
        return Err(mismatch(cursor, "property identifier"));
    }
    Ok((next, PropertyIdentifier::from_checked(letters)))
}

/// Parses a bracketed value and returns its unescaped bytes.
///
/// A backslash makes the next byte literal. An escaped line break (`\n`,
/// `\r`, `\n\r` or `\r\n`) is removed together with its backslash.
pub fn parse_property_value(cursor: Cursor<'_>) -> Parsed<'_, Vec<u8>> {
    let (mut cursor, _) = expect_byte(cursor, b'[', "'['")?;
    let mut value = Vec::new();
    loop {
        let (next, chunk) = cursor.take_while(|b| b != b']' && b != b'\\');
        value.extend_from_slice(chunk);
        cursor = next;

        match (cursor.peek(), cursor.peek_at(1), cursor.peek_at(2)) {
            (Some(b']'), _, _) => return Ok((cursor.consume(1), value)),
            (Some(b'\\'), Some(b'\n'), Some(b'\r')) | (Some(b'\\'), Some(b'\r'), Some(b'\n')) => {
                cursor = cursor.consume(3);
            }
            (Some(b'\\'), Some(b'\n' | b'\r'), _) => cursor = cursor.consume(2),
            (Some(b'\\'), Some(escaped), _) => {
                value.push(escaped);
                cursor = cursor.consume(2);
            }
            // A lone trailing backslash or plain end of input
            _ => {
                let end = cursor.consume(usize::MAX);
                return Err(ParseError::new(end.position(), ParseErrorKind::UnterminatedValue));
            }
        }
    }
}

/// Parses an identifier followed by one or more values.
pub fn parse_property(cursor: Cursor<'_>) -> Parsed<'_, Property> {
    let position = cursor.skip_whitespace().position();
    let (cursor, identifier) = parse_property_identifier(cursor)?;
    let (cursor, first) = parse_property_value(cursor)?;
    let (cursor, rest) = many(cursor, parse_property_value)?;

    let values = std::iter::once(first)
        .chain(rest)
        .map(Value::Raw)
        .collect();
    Ok((cursor, Property::new(identifier, values, position)))
}

/// Parses `;` followed by zero or more properties.
pub fn parse_node(cursor: Cursor<'_>) -> Parsed<'_, GameTreeNode> {
    let (cursor, position) = expect_byte(cursor, b';', "';'")?;
    let (cursor, properties) = many(cursor, parse_property)?;

    let mut node = GameTreeNode::new(position);
    for property in properties {
        node.push(property);
    }
    Ok((cursor, node))
}

/// Parses one or more nodes, handing each to `builder`.
pub fn parse_sequence<'a, B: GameTreeBuilder>(
    cursor: Cursor<'a>,
    builder: &mut B,
) -> Result<Cursor<'a>, ParseError> {
    let (cursor, first) = parse_node(cursor)?;
    builder.add_node(first);
    let (cursor, _) = many(cursor, |c| {
        parse_node(c).map(|(next, node)| {
            builder.add_node(node);
            (next, ())
        })
    })?;
    Ok(cursor)
}

/// Parses a parenthesized game tree with the default nesting limit.
pub fn parse_game_tree<'a, B: GameTreeBuilder>(
    cursor: Cursor<'a>,
    builder: &mut B,
) -> Result<Cursor<'a>, ParseError> {
    game_tree(cursor, builder, 0, MAX_NESTING_DEPTH)
}

// A failed nested attempt may already have fed nodes to the builder. That
// is harmless: the enclosing tree then finds '(' where it needs ')' and the
// whole parse fails.
fn game_tree<'a, B: GameTreeBuilder>(
    cursor: Cursor<'a>,
    builder: &mut B,
    depth: usize,
    max_depth: usize,
) -> Result<Cursor<'a>, ParseError> {
    let (cursor, open) = expect_byte(cursor, b'(', "'('")?;
    if depth >= max_depth {
        return Err(ParseError::new(
            open,
            ParseErrorKind::NestingTooDeep { max: max_depth },
        ));
    }

    builder.start_variation();
    let cursor = parse_sequence(cursor, builder)?;
    let (cursor, _) = many(cursor, |c| {
        game_tree(c, builder, depth + 1, max_depth).map(|next| (next, ()))
    })?;
    let (cursor, _) = expect_byte(cursor, b')', "')'")?;
    builder.end_variation();

    Ok(cursor)
}

/// Parses one or more game trees followed by end of input.
///
/// Each tree gets a fresh builder from `make_builder`.
pub fn parse_collection<'a, B, F>(
    cursor: Cursor<'a>,
    make_builder: F,
) -> Result<Vec<B::Output>, ParseError>
where
    B: GameTreeBuilder,
    F: FnMut() -> B,
{
    parse_collection_limited(cursor, make_builder, MAX_NESTING_DEPTH)
}

pub(crate) fn parse_collection_limited<'a, B, F>(
    cursor: Cursor<'a>,
    mut make_builder: F,
    max_depth: usize,
) -> Result<Vec<B::Output>, ParseError>
where
    B: GameTreeBuilder,
    F: FnMut() -> B,
{
    let mut tree = |c: Cursor<'a>| {
        let mut builder = make_builder();
        game_tree(c, &mut builder, 0, max_depth).map(|next| (next, builder.get_game_tree()))
    };

    let (cursor, first) = tree(cursor)?;
    let (cursor, rest) = many(cursor, tree)?;

    let end = cursor.skip_whitespace();
    if !end.at_end() {
        return Err(ParseError::new(
            end.position(),
            ParseErrorKind::TrailingInput { found: end.peek() },
        ));
    }

    let mut trees = Vec::with_capacity(rest.len() + 1);
    trees.push(first);
    trees.extend(rest);
    Ok(trees)
}
