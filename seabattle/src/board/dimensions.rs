// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements a basic rectangular board.
use std::collections::HashSet;

use crate::board::Coordinate;

/// Simple rectangular dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectDimensions {
    /// Number of rows. This cooresponds to the `row` of a [`Coordinate`].
    rows: usize,
    /// Number of columns. This cooresponds to the `col` of a [`Coordinate`].
    cols: usize,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified number of rows and columns.
    /// Panics if `rows * cols` exceeds `usize::max_value()` or if `rows` or `cols` is 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None => {
                if rows == 0 || cols == 0 {
                    panic!("RectDimensions must be nonzero, got {}x{}", rows, cols);
                } else {
                    panic!(
                        "RectDimensions too large: {} * {} > {}",
                        rows,
                        cols,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`RectDimensions`] with the specified number of rows and columns.
    /// Returns `None` if `rows * cols` exceeds `usize::max_value()` or if `rows` or `cols`
    /// is 0.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            None
        } else {
            rows.checked_mul(cols).map(|_| Self { rows, cols })
        }
    }

    /// Get the number of rows of these [`RectDimensions`].
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns of these [`RectDimensions`].
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Compute the number of cells on the board.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`RectDimensions`].
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Coordinate { row, col }))
    }

    /// Every in-bounds coordinate within one cell, diagonals included, of the rectangle
    /// spanned by `top_left` and `bottom_right`. The rectangle itself is included.
    pub fn padded(&self, top_left: &Coordinate, bottom_right: &Coordinate) -> HashSet<Coordinate> {
        let rows = top_left.row.saturating_sub(1)..(bottom_right.row + 2).min(self.rows);
        let cols = top_left.col.saturating_sub(1)..(bottom_right.col + 2).min(self.cols);
        rows.flat_map(|row| cols.clone().map(move |col| Coordinate { row, col }))
            .collect()
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, a 10x10 board.
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_by_ten() {
        let dim = RectDimensions::default();
        assert_eq!((dim.rows(), dim.cols()), (10, 10));
        assert_eq!(dim.total_size(), 100);
    }

    #[test]
    fn try_new_rejects_empty() {
        assert_eq!(RectDimensions::try_new(0, 5), None);
        assert_eq!(RectDimensions::try_new(5, 0), None);
        assert_eq!(RectDimensions::try_new(usize::max_value(), 2), None);
    }

    #[test]
    #[should_panic]
    fn new_panics_on_empty() {
        RectDimensions::new(0, 0);
    }

    #[test]
    fn iter_coordinates_row_major() {
        let dim = RectDimensions::new(2, 3);
        let coords: Vec<Vec<_>> = dim.iter_coordinates().map(|row| row.collect()).collect();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0][2], Coordinate::new(0, 2));
        assert_eq!(coords[1][0], Coordinate::new(1, 0));
    }

    #[test]
    fn padded_clips_to_bounds() {
        let dim = RectDimensions::default();
        let zone = dim.padded(&Coordinate::new(0, 0), &Coordinate::new(0, 0));
        assert_eq!(zone.len(), 4);
        let zone = dim.padded(&Coordinate::new(9, 6), &Coordinate::new(9, 9));
        assert_eq!(zone.len(), 10);
        let zone = dim.padded(&Coordinate::new(4, 4), &Coordinate::new(6, 4));
        assert_eq!(zone.len(), 15);
        assert!(zone.contains(&Coordinate::new(3, 3)));
        assert!(zone.contains(&Coordinate::new(7, 5)));
        assert!(!zone.contains(&Coordinate::new(8, 4)));
    }
}
