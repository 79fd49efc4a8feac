/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use serde::Deserialize;
use serde::Serialize;

/// The type of error for matrix view operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("row index {row} out of range {rows}")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("column index {column} out of range {columns}")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("index {index} out of range {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("dimension {dim} out of range for a 2-dimensional view")]
    DimensionOutOfRange { dim: usize },

    #[error("element count {rows}x{columns} overflows usize")]
    CountOverflow { rows: usize, columns: usize },

    #[error("buffer of length {len} too short for a shape of {required} elements")]
    BufferTooShort { len: usize, required: usize },
}

/// The logical extents of a two-dimensional view: a row count and a
/// column count, fixed for the lifetime of the views built from it.
///
/// `Shape` is a plain value: it is copied freely and never mutated
/// after construction. It carries no storage of its own; pairing it
/// with a buffer is [`MatrixView`]'s job.
///
/// ```
/// # use matview::Shape;
/// let shape = Shape::new(2, 3);
/// assert_eq!(shape.extent(0).unwrap(), 2);
/// assert_eq!(shape.extent(1).unwrap(), 3);
/// assert_eq!(shape.count().unwrap(), 6);
/// ```
///
/// [`MatrixView`]: crate::MatrixView
#[derive(Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Shape {
    rows: usize,
    columns: usize,
}

impl Shape {
    /// Create a shape with the provided row and column counts.
    pub fn new(rows: usize, columns: usize) -> Self {
        Shape { rows, columns }
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns; equivalently, the length of one row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Extent lookup by dimension index: 0 for rows, 1 for columns.
    pub fn extent(&self, dim: usize) -> Result<usize, MatrixError> {
        match dim {
            0 => Ok(self.rows),
            1 => Ok(self.columns),
            _ => Err(MatrixError::DimensionOutOfRange { dim }),
        }
    }

    /// Total element count, `rows * columns`. Overflow is reported
    /// rather than wrapped: a shape whose count exceeds `usize` can
    /// never describe an addressable buffer.
    pub fn count(&self) -> Result<usize, MatrixError> {
        self.rows
            .checked_mul(self.columns)
            .ok_or(MatrixError::CountOverflow {
                rows: self.rows,
                columns: self.columns,
            })
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Shape::new(rows, columns)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extents() {
        let shape = Shape::new(4, 7);
        assert_eq!(shape.rows(), 4);
        assert_eq!(shape.columns(), 7);
        assert_eq!(shape.extent(0).unwrap(), 4);
        assert_eq!(shape.extent(1).unwrap(), 7);
        assert!(matches!(
            shape.extent(2),
            Err(MatrixError::DimensionOutOfRange { dim: 2 })
        ));
    }

    #[test]
    fn test_count() {
        assert_eq!(Shape::new(4, 7).count().unwrap(), 28);
        assert_eq!(Shape::new(0, 7).count().unwrap(), 0);
        assert!(matches!(
            Shape::new(usize::MAX, 2).count(),
            Err(MatrixError::CountOverflow { .. })
        ));
    }

    #[test]
    fn test_from_pair() {
        let shape: Shape = (2, 3).into();
        assert_eq!(shape, Shape::new(2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::new(10, 10).to_string(), "10x10");
    }
}
