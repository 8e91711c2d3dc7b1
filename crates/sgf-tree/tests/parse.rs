//! End-to-end checks through the public API.

use sgf_tree::{
    BoardSize, Charset, DotBuilder, Error, ErrorCode, GameTree, ParseErrorKind, ParseOptions,
    Point, Value, ValidationError, parse, parse_collection_with, parse_with_options,
};

fn single(input: &[u8]) -> GameTree {
    let mut trees = parse(input).unwrap();
    assert_eq!(trees.len(), 1);
    trees.remove(0)
}

#[test]
fn test_escapes_survive_validation() {
    let tree = single(br"(;C[t\:e\\s\]t]N[a\
b])");
    let root = tree.root().unwrap();
    assert_eq!(root.value("C"), Some(&Value::Text("t:e\\s]t".to_string())));
    assert_eq!(root.value("N"), Some(&Value::SimpleText("ab".to_string())));
}

#[test]
fn test_nested_tree_error_position() {
    let err = parse(b"(;A[test](;B[test]);C[test])").unwrap_err();
    assert_eq!(err.position(), 19);
    assert_eq!(err.code(), ErrorCode::Syntax);
}

#[test]
fn test_collection_and_trailing_input() {
    let trees = parse(b"(;A[test])(;B[test])").unwrap();
    assert_eq!(trees.len(), 2);

    let err = parse(b"(;A[test]) test").unwrap_err();
    assert_eq!(err.position(), 11);
    assert!(matches!(
        err,
        Error::Parse(ref e) if e.kind == ParseErrorKind::TrailingInput { found: Some(b't') }
    ));
}

#[test]
fn test_unterminated_value_backtracks_to_tree_end() {
    // The property attempt is discarded; the tree then lacks its ')'
    let err = parse(b"(;C[never closed").unwrap_err();
    assert_eq!(err.position(), 2);
    assert!(matches!(
        err,
        Error::Parse(ref e) if e.kind == ParseErrorKind::Expected { expected: "')'", found: Some(b'C') }
    ));
}

#[test]
fn test_validation_rules() {
    assert_eq!(single(b"(;B[aa])").board_size(), BoardSize::square(19));
    assert!(parse(b"(;DM[3])").is_err());
    assert!(parse(b"(;AB[])").is_err());

    let tree = single(b"(;DD[])");
    assert_eq!(tree.root().unwrap().values("DD"), Some(&[][..]));
}

#[test]
fn test_non_square_board() {
    let tree = single(b"(;SZ[5:3];B[ec])");
    assert_eq!(tree.board_size(), BoardSize::new(5, 3));
    let err = parse(b"(;SZ[5:3];B[ed])").unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::PointOutOfRange { width: 5, height: 3, .. })
    ));
}

#[test]
fn test_uppercase_coordinates_on_large_board() {
    let tree = single(b"(;SZ[52];B[AZ])");
    let id = tree.main_line()[1];
    assert_eq!(
        tree.node(id).unwrap().value("B"),
        Some(&Value::Point(Point::new(26, 51)))
    );
}

#[test]
fn test_latin1_default_charset() {
    let tree = single(b"(;PW[Jos\xe9])");
    assert_eq!(tree.charset(), Some(Charset::Latin1));
    assert_eq!(
        tree.root().unwrap().value("PW"),
        Some(&Value::SimpleText("José".to_string()))
    );
}

#[test]
fn test_first_error_aborts_collection() {
    let err = parse(b"(;B[aa])(;AB[])(;DM[9])").unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::EmptyList { position: 10, .. })));
}

#[test]
fn test_deep_nesting_is_rejected() {
    let depth = 300;
    let mut input = Vec::new();
    for _ in 0..depth {
        input.extend_from_slice(b"(;B[aa]");
    }
    input.extend(std::iter::repeat_n(b')', depth));

    let trees = parse(&input).unwrap();
    assert_eq!(trees[0].len(), depth);
    assert_eq!(trees[0].main_line().len(), depth);

    let options = ParseOptions {
        max_nesting_depth: depth - 1,
        ..ParseOptions::new()
    };
    let err = parse_with_options(&input, options).unwrap_err();
    assert_eq!(err.code(), ErrorCode::LimitExceeded);
    // Offset of the first '(' past the limit
    assert_eq!(err.position(), (depth - 1) * 7);
}

#[test]
fn test_preorder_visits_variations_in_order() {
    let tree = single(b"(;C[0];C[1](;C[2];C[3])(;C[4]))");
    let comments: Vec<String> = tree
        .iter_preorder()
        .filter_map(|id| tree.node(id)?.value("C").map(Value::to_string))
        .collect();
    assert_eq!(comments, ["0", "1", "2", "3", "4"]);
}

#[test]
fn test_dot_rendering() {
    let dots = parse_collection_with(b"(;B[aa];W[bb](;B[cc])(;B[dd];W[ee]))", DotBuilder::new)
        .unwrap();
    assert_eq!(
        dots[0],
        "digraph game {\n    1 -> 2;\n    2 -> 3;\n    2 -> 4;\n    4 -> 5;\n}\n"
    );
}
