/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use crate::capability::Capability;
use crate::layout::LineSpan;
use crate::shape::MatrixError;

/// A 1-D strided view over a parent buffer: one logical row or column
/// of a [`MatrixView`], addressed through a [`LineSpan`].
///
/// The view borrows the parent's buffer and owns nothing. It is
/// `Copy`; any number of line views may alias the same buffer for
/// reads. Requesting the same row twice yields independent,
/// structurally equal views.
///
/// Element `k` resolves to buffer offset `start + k * stride` in
/// O(1). A view with stride 1 is contiguous: its elements occupy an
/// unbroken run of storage, exposed by [`as_slice`] for bulk
/// operations.
///
/// [`MatrixView`]: crate::MatrixView
/// [`as_slice`]: LineView::as_slice
#[derive(Copy, Clone, Debug)]
pub struct LineView<'a, T> {
    buf: &'a [T],
    span: LineSpan,
}

impl<'a, T> LineView<'a, T> {
    /// Invariant: every offset the span can produce is within `buf`.
    /// Upheld by the layout functions that produce spans from a
    /// length-checked [`MatrixView`](crate::MatrixView).
    pub(crate) fn new(buf: &'a [T], span: LineSpan) -> Self {
        debug_assert!(span.len == 0 || span.offset(span.len - 1) < buf.len());
        LineView { buf, span }
    }

    /// The number of logical elements.
    pub fn len(&self) -> usize {
        self.span.len
    }

    pub fn is_empty(&self) -> bool {
        self.span.len == 0
    }

    /// Buffer offset of the first element.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Distance in elements between consecutive logical entries:
    /// 1 for a row, the row length for a column.
    pub fn stride(&self) -> usize {
        self.span.stride
    }

    /// The span addressing this view inside its parent buffer.
    pub fn span(&self) -> LineSpan {
        self.span
    }

    /// Reference to the `index`-th element, or out-of-range if
    /// `index >= len`.
    pub fn get(&self, index: usize) -> Result<&'a T, MatrixError> {
        Ok(&self.buf[self.span.at(index)?])
    }

    pub fn first(&self) -> Option<&'a T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&'a T> {
        self.get(self.span.len.checked_sub(1)?).ok()
    }

    /// Whether the elements occupy an unbroken run of storage.
    pub fn is_contiguous(&self) -> bool {
        self.span.is_contiguous()
    }

    /// The elements as a plain slice, available exactly when the view
    /// is contiguous.
    pub fn as_slice(&self) -> Option<&'a [T]> {
        self.is_contiguous()
            .then(|| &self.buf[self.span.start..self.span.start + self.span.len])
    }

    /// The strongest traversal tier this view satisfies. Fixed stride
    /// makes every line view at least random-access; unit stride
    /// upgrades it to contiguous.
    pub fn capability(&self) -> Capability {
        Capability::of_stride(self.span.stride)
    }

    /// Double-ended iterator over the elements, front to back.
    pub fn iter(&self) -> LineIter<'a, T> {
        LineIter {
            buf: self.buf,
            span: self.span,
            front: 0,
            back: self.span.len,
        }
    }
}

/// Structural equality: same span, same element sequence. Two
/// derivations of the same row or column of one matrix compare equal.
impl<'a, T: PartialEq> PartialEq for LineView<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.span == other.span && self.iter().eq(other.iter())
    }
}

impl<'a, T> IntoIterator for &LineView<'a, T> {
    type Item = &'a T;
    type IntoIter = LineIter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for LineView<'a, T> {
    type Item = &'a T;
    type IntoIter = LineIter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a line view's elements.
///
/// Walks the strided span from either end: `next` advances front to
/// back, `next_back` the reverse. Exact-size and fused.
#[derive(Clone, Debug)]
pub struct LineIter<'a, T> {
    buf: &'a [T],
    span: LineSpan,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for LineIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = &self.buf[self.span.offset(self.front)];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for LineIter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.buf[self.span.offset(self.back)])
    }
}

impl<'a, T> ExactSizeIterator for LineIter<'a, T> {}
impl<'a, T> std::iter::FusedIterator for LineIter<'a, T> {}

/// Mutable counterpart of [`LineView`]. Unlike the shared view it is
/// not `Copy`: the borrow checker guarantees at most one mutable view
/// of a buffer region at a time.
#[derive(Debug)]
pub struct LineViewMut<'a, T> {
    buf: &'a mut [T],
    span: LineSpan,
}

impl<'a, T> LineViewMut<'a, T> {
    /// See [`LineView::new`] for the bounds invariant.
    pub(crate) fn new(buf: &'a mut [T], span: LineSpan) -> Self {
        debug_assert!(span.len == 0 || span.offset(span.len - 1) < buf.len());
        LineViewMut { buf, span }
    }

    pub fn len(&self) -> usize {
        self.span.len
    }

    pub fn is_empty(&self) -> bool {
        self.span.len == 0
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn stride(&self) -> usize {
        self.span.stride
    }

    pub fn span(&self) -> LineSpan {
        self.span
    }

    pub fn is_contiguous(&self) -> bool {
        self.span.is_contiguous()
    }

    pub fn capability(&self) -> Capability {
        Capability::of_stride(self.span.stride)
    }

    /// A shared view of the same elements.
    pub fn as_view(&self) -> LineView<'_, T> {
        LineView::new(&self.buf[..], self.span)
    }

    /// Consume the mutable view, releasing it as a shared one for the
    /// full borrow.
    pub fn into_view(self) -> LineView<'a, T> {
        LineView::new(self.buf, self.span)
    }

    pub fn get(&self, index: usize) -> Result<&T, MatrixError> {
        Ok(&self.buf[self.span.at(index)?])
    }

    /// Mutable reference to the `index`-th element.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, MatrixError> {
        let offset = self.span.at(index)?;
        Ok(&mut self.buf[offset])
    }

    pub fn iter(&self) -> LineIter<'_, T> {
        self.as_view().iter()
    }

    /// Mutable iterator over the elements, front to back.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        let LineSpan { start, len, stride } = self.span;
        // A span with len > 0 always has start in bounds; an empty
        // span's start may lie past the end of a zero-sized buffer.
        let tail: &mut [T] = if len == 0 { &mut [] } else { &mut self.buf[start..] };
        tail.iter_mut().step_by(stride).take(len)
    }

    pub fn as_slice(&self) -> Option<&[T]> {
        self.is_contiguous()
            .then(|| &self.buf[self.span.start..self.span.start + self.span.len])
    }

    /// The elements as a plain mutable slice, available exactly when
    /// the view is contiguous.
    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        if !self.is_contiguous() {
            return None;
        }
        let LineSpan { start, len, .. } = self.span;
        Some(&mut self.buf[start..start + len])
    }
}
