/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Zero-copy dense matrix views over flat, row-major buffers.
//!
//! Provides [`MatrixView`], a two-dimensional window onto a borrowed
//! contiguous buffer, and [`LineView`], the 1-D strided views it
//! derives for individual rows and columns. No storage is owned,
//! allocated, or copied: views are borrows plus a [`Shape`], and the
//! row-major offset arithmetic that connects logical coordinates to
//! buffer positions is centralized in [`layout`].
//!
//! Each produced view classifies itself by the strongest traversal
//! [`Capability`] its stride structure supports (forward,
//! bidirectional, random-access, or contiguous), so generic callers
//! can pick the cheapest valid strategy — a bulk copy over a
//! contiguous run, a strided loop otherwise — without the view
//! dictating which algorithm runs.
//!
//! ```
//! use matview::Capability;
//! use matview::MatrixView;
//! use matview::Shape;
//!
//! let data: Vec<i32> = (0..6).collect();
//! let view = MatrixView::new(&data, Shape::new(2, 3))?;
//! assert_eq!(*view.get(1, 2)?, 5);
//!
//! let row = view.row(1)?;
//! assert!(row.is_contiguous());
//! assert_eq!(row.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
//!
//! let column = view.column(2)?;
//! assert_eq!(column.stride(), 3);
//! assert_eq!(column.iter().rev().copied().collect::<Vec<_>>(), [5, 2]);
//! assert!(column.capability().satisfies(Capability::RandomAccess));
//! # Ok::<(), matview::MatrixError>(())
//! ```

mod shape;
pub use shape::MatrixError;
pub use shape::Shape;

/// Row-major offset arithmetic shared by matrix and line views.
pub mod layout;
pub use layout::LineSpan;

mod view;
pub use view::MatrixView;
pub use view::MatrixViewMut;

mod line;
pub use line::LineIter;
pub use line::LineView;
pub use line::LineViewMut;

mod capability;
pub use capability::Capability;
