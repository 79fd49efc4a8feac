/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Row-major offset arithmetic.
//!
//! Every translation from a logical (row, column) coordinate to a
//! linear buffer offset lives here, so the matrix view and the line
//! views it derives can never disagree about layout. Under row-major
//! storage a full matrix linearizes as
//!
//! ```text
//! offset(row, column) = row * columns + column
//! ```
//!
//! and the two derived 1-D shapes fall out of the same formula: row
//! `i` occupies the contiguous run starting at `i * columns`, while
//! column `j` starts at `j` and strides by the row length.
//!
//! All functions here are pure: they inspect a [`Shape`] and some
//! indices, check bounds explicitly (the underlying buffer carries no
//! knowledge of the 2-D structure, so bounds enforcement cannot be
//! delegated to it), and either return offsets or report the
//! out-of-range condition.

use serde::Deserialize;
use serde::Serialize;

use crate::shape::MatrixError;
use crate::shape::Shape;

/// A 1-D strided span inside a parent buffer: a start offset, an
/// element count, and the distance in elements between consecutive
/// logical entries.
///
/// A span is pure index arithmetic; pairing it with a buffer is
/// [`LineView`]'s job. Spans derived twice for the same row or column
/// compare equal.
///
/// [`LineView`]: crate::LineView
#[derive(Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LineSpan {
    /// Buffer offset of the first element.
    pub start: usize,
    /// Number of logical elements.
    pub len: usize,
    /// Distance in elements between consecutive entries.
    pub stride: usize,
}

impl LineSpan {
    /// The buffer offset of the `index`-th logical element,
    /// `start + index * stride`.
    pub fn at(&self, index: usize) -> Result<usize, MatrixError> {
        if index >= self.len {
            return Err(MatrixError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.offset(index))
    }

    /// Unchecked companion of [`LineSpan::at`] for callers that have
    /// already established `index < len`.
    pub(crate) fn offset(&self, index: usize) -> usize {
        debug_assert!(index < self.len);
        self.start + index * self.stride
    }

    /// Whether the span's elements occupy an unbroken run of storage.
    pub fn is_contiguous(&self) -> bool {
        self.stride == 1
    }
}

/// Linear offset of element `(row, column)` under row-major layout.
pub fn offset(shape: Shape, row: usize, column: usize) -> Result<usize, MatrixError> {
    if row >= shape.rows() {
        return Err(MatrixError::RowOutOfRange {
            row,
            rows: shape.rows(),
        });
    }
    if column >= shape.columns() {
        return Err(MatrixError::ColumnOutOfRange {
            column,
            columns: shape.columns(),
        });
    }
    Ok(row * shape.columns() + column)
}

/// The span of row `row`: a contiguous run of `columns` elements
/// starting at `row * columns`.
pub fn row_span(shape: Shape, row: usize) -> Result<LineSpan, MatrixError> {
    if row >= shape.rows() {
        return Err(MatrixError::RowOutOfRange {
            row,
            rows: shape.rows(),
        });
    }
    Ok(LineSpan {
        start: row * shape.columns(),
        len: shape.columns(),
        stride: 1,
    })
}

/// The span of column `column`: `rows` elements starting at `column`,
/// each a full row length apart.
pub fn column_span(shape: Shape, column: usize) -> Result<LineSpan, MatrixError> {
    if column >= shape.columns() {
        return Err(MatrixError::ColumnOutOfRange {
            column,
            columns: shape.columns(),
        });
    }
    Ok(LineSpan {
        start: column,
        len: shape.rows(),
        stride: shape.columns(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let shape = Shape::new(2, 3);
        assert_eq!(offset(shape, 0, 0).unwrap(), 0);
        assert_eq!(offset(shape, 0, 2).unwrap(), 2);
        assert_eq!(offset(shape, 1, 0).unwrap(), 3);
        assert_eq!(offset(shape, 1, 2).unwrap(), 5);
    }

    #[test]
    fn test_offset_out_of_range() {
        let shape = Shape::new(2, 3);
        assert!(matches!(
            offset(shape, 2, 0),
            Err(MatrixError::RowOutOfRange { row: 2, rows: 2 })
        ));
        assert!(matches!(
            offset(shape, 0, 3),
            Err(MatrixError::ColumnOutOfRange {
                column: 3,
                columns: 3
            })
        ));
    }

    #[test]
    fn test_row_span() {
        let shape = Shape::new(2, 3);
        let span = row_span(shape, 1).unwrap();
        assert_eq!(
            span,
            LineSpan {
                start: 3,
                len: 3,
                stride: 1
            }
        );
        assert!(span.is_contiguous());
        assert!(matches!(
            row_span(shape, 2),
            Err(MatrixError::RowOutOfRange { row: 2, rows: 2 })
        ));
    }

    #[test]
    fn test_column_span() {
        let shape = Shape::new(2, 3);
        let span = column_span(shape, 2).unwrap();
        assert_eq!(
            span,
            LineSpan {
                start: 2,
                len: 2,
                stride: 3
            }
        );
        assert!(!span.is_contiguous());
        assert!(matches!(
            column_span(shape, 3),
            Err(MatrixError::ColumnOutOfRange {
                column: 3,
                columns: 3
            })
        ));
    }

    #[test]
    fn test_span_at() {
        let span = column_span(Shape::new(2, 3), 2).unwrap();
        assert_eq!(span.at(0).unwrap(), 2);
        assert_eq!(span.at(1).unwrap(), 5);
        assert!(matches!(
            span.at(2),
            Err(MatrixError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    // Span arithmetic and 2-D offsets come from the same formula; a
    // row/column span's k-th offset must match the direct lookup.
    #[test]
    fn test_spans_agree_with_offsets() {
        let shape = Shape::new(4, 5);
        for i in 0..shape.rows() {
            let span = row_span(shape, i).unwrap();
            for k in 0..span.len {
                assert_eq!(span.at(k).unwrap(), offset(shape, i, k).unwrap());
            }
        }
        for j in 0..shape.columns() {
            let span = column_span(shape, j).unwrap();
            for k in 0..span.len {
                assert_eq!(span.at(k).unwrap(), offset(shape, k, j).unwrap());
            }
        }
    }
}
