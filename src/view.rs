/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use crate::capability::Capability;
use crate::layout;
use crate::line::LineView;
use crate::line::LineViewMut;
use crate::shape::MatrixError;
use crate::shape::Shape;

/// A dense, row-major matrix view over a borrowed buffer.
///
/// The view pairs a [`Shape`] with a non-owning borrow of a
/// contiguous buffer; construction stores the borrow and checks that
/// the buffer covers the shape, but never reads or copies elements.
/// Views are `Copy`: any number may alias the same buffer for reads,
/// and dropping one has no side effects.
///
/// Element access and row/column derivation delegate their offset
/// arithmetic to [`layout`](crate::layout), so the 2-D lookup and the
/// derived 1-D views can never disagree about where an element lives.
///
/// ```
/// # use matview::{MatrixView, Shape};
/// let data: Vec<u32> = (0..6).collect();
/// let view = MatrixView::new(&data, Shape::new(2, 3))?;
/// assert_eq!(*view.get(1, 2)?, 5);
/// assert_eq!(view.row(1)?.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
/// assert_eq!(view.column(2)?.iter().copied().collect::<Vec<_>>(), [2, 5]);
/// # Ok::<(), matview::MatrixError>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct MatrixView<'a, T> {
    buf: &'a [T],
    shape: Shape,
}

impl<'a, T> MatrixView<'a, T> {
    /// Create a view of `shape` over `buf`.
    ///
    /// Fails with [`MatrixError::CountOverflow`] if the shape's
    /// element count is not representable, or
    /// [`MatrixError::BufferTooShort`] if the buffer cannot back it.
    /// Only the addressed prefix of the buffer is retained; trailing
    /// elements are invisible to the view.
    pub fn new(buf: &'a [T], shape: impl Into<Shape>) -> Result<Self, MatrixError> {
        let shape = shape.into();
        let required = shape.count()?;
        if buf.len() < required {
            return Err(MatrixError::BufferTooShort {
                len: buf.len(),
                required,
            });
        }
        Ok(MatrixView {
            buf: &buf[..required],
            shape,
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Reference to element `(row, column)`, or out-of-range if
    /// either index exceeds its extent.
    pub fn get(&self, row: usize, column: usize) -> Result<&'a T, MatrixError> {
        Ok(&self.buf[layout::offset(self.shape, row, column)?])
    }

    /// The `row`-th row as a contiguous line view of length
    /// `columns`.
    pub fn row(&self, row: usize) -> Result<LineView<'a, T>, MatrixError> {
        Ok(LineView::new(self.buf, layout::row_span(self.shape, row)?))
    }

    /// The `column`-th column as a line view of length `rows`,
    /// striding by the row length.
    pub fn column(&self, column: usize) -> Result<LineView<'a, T>, MatrixError> {
        Ok(LineView::new(
            self.buf,
            layout::column_span(self.shape, column)?,
        ))
    }

    /// The whole matrix in row-major order. The native linearization
    /// of a dense view is always a plain slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.buf
    }

    /// Row-major iteration over every element.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.buf.iter()
    }

    /// A dense view is contiguous along its native row-major
    /// linearization.
    pub fn capability(&self) -> Capability {
        Capability::Contiguous
    }
}

/// Structural equality: same shape, same elements.
impl<'a, T: PartialEq> PartialEq for MatrixView<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.buf == other.buf
    }
}

impl<'a, T> IntoIterator for &MatrixView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable counterpart of [`MatrixView`].
///
/// Holds the buffer uniquely, so element mutation needs no
/// coordination: the borrow checker rules out a second view (shared
/// or mutable) of the same region while this one is live. Shared
/// accessors reborrow, letting callers drop back to aliasing reads
/// via [`as_view`](MatrixViewMut::as_view) when mutation is done.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    buf: &'a mut [T],
    shape: Shape,
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// See [`MatrixView::new`] for the construction checks.
    pub fn new(buf: &'a mut [T], shape: impl Into<Shape>) -> Result<Self, MatrixError> {
        let shape = shape.into();
        let required = shape.count()?;
        if buf.len() < required {
            return Err(MatrixError::BufferTooShort {
                len: buf.len(),
                required,
            });
        }
        Ok(MatrixViewMut {
            buf: &mut buf[..required],
            shape,
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// A shared view of the same elements.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            buf: &self.buf[..],
            shape: self.shape,
        }
    }

    /// Consume the mutable view, releasing it as a shared one for the
    /// full borrow.
    pub fn into_view(self) -> MatrixView<'a, T> {
        MatrixView {
            buf: self.buf,
            shape: self.shape,
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Result<&T, MatrixError> {
        Ok(&self.buf[layout::offset(self.shape, row, column)?])
    }

    /// Mutable reference to element `(row, column)`.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut T, MatrixError> {
        let offset = layout::offset(self.shape, row, column)?;
        Ok(&mut self.buf[offset])
    }

    pub fn row(&self, row: usize) -> Result<LineView<'_, T>, MatrixError> {
        Ok(LineView::new(
            &self.buf[..],
            layout::row_span(self.shape, row)?,
        ))
    }

    pub fn row_mut(&mut self, row: usize) -> Result<LineViewMut<'_, T>, MatrixError> {
        let span = layout::row_span(self.shape, row)?;
        Ok(LineViewMut::new(self.buf, span))
    }

    pub fn column(&self, column: usize) -> Result<LineView<'_, T>, MatrixError> {
        Ok(LineView::new(
            &self.buf[..],
            layout::column_span(self.shape, column)?,
        ))
    }

    pub fn column_mut(&mut self, column: usize) -> Result<LineViewMut<'_, T>, MatrixError> {
        let span = layout::column_span(self.shape, column)?;
        Ok(LineViewMut::new(self.buf, span))
    }

    pub fn as_slice(&self) -> &[T] {
        self.buf
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    pub fn capability(&self) -> Capability {
        Capability::Contiguous
    }
}
