//! Board coordinates.
//!
//! A point is written as two letters, column then row. Letters map to
//! indices through a single alphabet: `a`–`z` are 0–25 and `A`–`Z` are
//! 26–51, which addresses boards up to 52×52. `aa` is the top-left corner.

use std::fmt;

use crate::limits::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// Maps a coordinate letter to its index.
#[inline]
pub fn coordinate_index(letter: u8) -> Option<u8> {
    match letter {
        b'a'..=b'z' => Some(letter - b'a'),
        b'A'..=b'Z' => Some(letter - b'A' + 26),
        _ => None,
    }
}

/// Maps an index back to its coordinate letter.
#[inline]
pub fn coordinate_letter(index: u8) -> Option<char> {
    match index {
        0..=25 => Some((b'a' + index) as char),
        26..=51 => Some((b'A' + index - 26) as char),
        _ => None,
    }
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    pub width: u8,
    pub height: u8,
}

impl BoardSize {
    /// Creates a board size, or `None` if a dimension is outside `1..=52`.
    pub fn new(width: u8, height: u8) -> Option<Self> {
        let valid = |d: u8| (1..=MAX_BOARD_SIZE).contains(&d);
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Creates a square board size.
    pub fn square(size: u8) -> Option<Self> {
        Self::new(size, size)
    }

    /// Returns true if `point` lies on this board.
    pub fn contains(&self, point: Point) -> bool {
        point.column < self.width && point.row < self.height
    }

    /// Returns true if both dimensions are at most 19.
    pub fn fits_19(&self) -> bool {
        self.width <= 19 && self.height <= 19
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_SIZE,
            height: DEFAULT_BOARD_SIZE,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == self.height {
            write!(f, "{}", self.width)
        } else {
            write!(f, "{}:{}", self.width, self.height)
        }
    }
}

/// A board intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub column: u8,
    pub row: u8,
}

impl Point {
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    /// Parses two coordinate letters. Board bounds are not checked.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [c, r] => Some(Self {
                column: coordinate_index(*c)?,
                row: coordinate_index(*r)?,
            }),
            _ => None,
        }
    }

    /// Every point in the rectangle spanned by two corners, row by row.
    ///
    /// Corners may be given in any order.
    pub fn rectangle(a: Point, b: Point) -> impl Iterator<Item = Point> {
        let (c0, c1) = (a.column.min(b.column), a.column.max(b.column));
        let (r0, r1) = (a.row.min(b.row), a.row.max(b.row));
        (r0..=r1).flat_map(move |row| (c0..=c1).map(move |column| Point { column, row }))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (coordinate_letter(self.column), coordinate_letter(self.row)) {
            (Some(c), Some(r)) => write!(f, "{c}{r}"),
            _ => write!(f, "({},{})", self.column, self.row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet() {
        assert_eq!(coordinate_index(b'a'), Some(0));
        assert_eq!(coordinate_index(b's'), Some(18));
        assert_eq!(coordinate_index(b'z'), Some(25));
        assert_eq!(coordinate_index(b'A'), Some(26));
        assert_eq!(coordinate_index(b'Z'), Some(51));
        assert_eq!(coordinate_index(b'0'), None);
        assert_eq!(coordinate_letter(51), Some('Z'));
        assert_eq!(coordinate_letter(52), None);
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(Point::parse(b"dp"), Some(Point::new(3, 15)));
        assert_eq!(Point::parse(b"aA"), Some(Point::new(0, 26)));
        assert_eq!(Point::parse(b"d"), None);
        assert_eq!(Point::parse(b"dpq"), None);
        assert_eq!(Point::parse(b"d1"), None);
    }

    #[test]
    fn test_board_contains() {
        let board = BoardSize::default();
        assert!(board.contains(Point::new(18, 18)));
        assert!(!board.contains(Point::new(19, 0)));

        let board = BoardSize::new(5, 3).unwrap();
        assert!(board.contains(Point::new(4, 2)));
        assert!(!board.contains(Point::new(2, 3)));
    }

    #[test]
    fn test_board_size_bounds() {
        assert!(BoardSize::square(0).is_none());
        assert!(BoardSize::square(52).is_some());
        assert!(BoardSize::square(53).is_none());
        assert_eq!(BoardSize::new(9, 13).unwrap().to_string(), "9:13");
        assert_eq!(BoardSize::square(13).unwrap().to_string(), "13");
    }

    #[test]
    fn test_rectangle() {
        let points: Vec<_> = Point::rectangle(Point::new(1, 1), Point::new(0, 0)).collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
        assert_eq!(Point::new(3, 15).to_string(), "dp");
    }
}
