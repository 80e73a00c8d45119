//! Tile coordinates: [`Point`] and the grid extent [`Range`].
//!
//! `x` is the column and grows right, `y` is the row and grows down.
//! Constructors and accessors are row-first to match how grids are
//! described (`7×16`, tile `(3, 15)`).

use std::fmt;
use std::ops::Sub;

/// Integer tile coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile at `row`, `col`.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// Tiles sharing an edge with this one: up, down, left, right.
    pub fn neighbors_4(self) -> [Point; 4] {
        let (r, c) = (self.row(), self.col());
        [
            Point::at(r - 1, c),
            Point::at(r + 1, c),
            Point::at(r, c - 1),
            Point::at(r, c + 1),
        ]
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Formats as `row,col`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row(), self.col())
    }
}

/// A `rows × cols` block of tiles anchored at `(0, 0)`, indexed row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub rows: i32,
    pub cols: i32,
}

impl Range {
    /// Negative sizes are clamped to zero.
    pub fn grid(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.cols
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.rows).contains(&p.row()) && (0..self.cols).contains(&p.col())
    }

    /// Flat index of `p`, or `None` when it lies outside.
    pub fn index_of(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.row() as usize * self.cols as usize + p.col() as usize)
    }

    /// Tile at flat index `idx`. Inverse of [`index_of`](Self::index_of)
    /// for indices below [`len`](Self::len).
    pub fn point_at(self, idx: usize) -> Point {
        let cols = self.cols.max(1) as usize;
        Point::at((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Every tile, row by row.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Point::at(r, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_order() {
        let p = Point::at(3, 15);
        assert_eq!((p.row(), p.col()), (3, 15));
        assert_eq!(p, Point::new(15, 3));
        assert_eq!(p.to_string(), "3,15");
        assert_eq!(Point::at(2, 4) - Point::at(1, 6), Point::at(1, -2));
    }

    #[test]
    fn neighbors_up_down_left_right() {
        assert_eq!(
            Point::at(5, 5).neighbors_4(),
            [Point::at(4, 5), Point::at(6, 5), Point::at(5, 4), Point::at(5, 6)]
        );
    }

    #[test]
    fn grid_indexing() {
        let r = Range::grid(7, 16);
        assert_eq!((r.height(), r.width()), (7, 16));
        assert_eq!(r.len(), 112);
        assert_eq!(r.index_of(Point::at(3, 15)), Some(63));
        assert_eq!(r.point_at(63), Point::at(3, 15));
        assert_eq!(r.index_of(Point::at(7, 0)), None);
        assert_eq!(r.index_of(Point::at(0, -1)), None);
        assert_eq!(r.index_of(Point::at(0, 16)), None);
    }

    #[test]
    fn iter_is_row_major_and_matches_index() {
        let r = Range::grid(2, 3);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[1], Point::at(0, 1));
        assert_eq!(pts[3], Point::at(1, 0));
        for (i, p) in pts.into_iter().enumerate() {
            assert_eq!(r.index_of(p), Some(i));
        }
    }

    #[test]
    fn degenerate_grid_is_empty() {
        let r = Range::grid(0, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
        assert!(!r.contains(Point::at(0, 0)));
        assert!(Range::grid(-2, 3).is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::at(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
