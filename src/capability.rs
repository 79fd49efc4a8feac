/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use serde::Deserialize;
use serde::Serialize;

/// The traversal capability a view structurally satisfies, ordered
/// weakest to strongest. Each tier subsumes every weaker one, so
/// `Ord` on this enum is the subset ordering: a [`Contiguous`] view
/// supports everything a [`Forward`] one does.
///
/// Classification is derived purely from a view's stride pattern and
/// never changes the values or order a traversal produces; it only
/// tells generic callers which strategies are allowed (bulk copies
/// over a contiguous run, a strided loop otherwise, and so on).
///
/// A line view's stride is always fixed and known at construction, so
/// every line view classifies at least as [`RandomAccess`]; unit
/// stride upgrades it to [`Contiguous`]. The weaker tiers exist so
/// callers can state minimal requirements, mirroring the standard
/// iterator traits ([`Iterator`], [`DoubleEndedIterator`],
/// [`ExactSizeIterator`]) that [`LineIter`] implements.
///
/// [`Forward`]: Capability::Forward
/// [`RandomAccess`]: Capability::RandomAccess
/// [`Contiguous`]: Capability::Contiguous
/// [`LineIter`]: crate::LineIter
#[derive(Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Capability {
    /// A single front-to-back pass.
    Forward,
    /// Front-to-back and back-to-front passes.
    Bidirectional,
    /// Direct O(1) access to any index, without visiting the
    /// elements in between.
    RandomAccess,
    /// Random access over a physically adjacent run (stride 1),
    /// permitting bulk and vectorized operations.
    Contiguous,
}

impl Capability {
    /// Whether this tier provides everything `required` does.
    pub fn satisfies(self, required: Capability) -> bool {
        self >= required
    }

    /// Classify a fixed-stride view: a known stride always permits
    /// random access, and unit stride makes the run adjacent in
    /// memory.
    pub fn of_stride(stride: usize) -> Capability {
        if stride == 1 {
            Capability::Contiguous
        } else {
            Capability::RandomAccess
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::Forward => "forward",
            Capability::Bidirectional => "bidirectional",
            Capability::RandomAccess => "random-access",
            Capability::Contiguous => "contiguous",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Capability::Forward < Capability::Bidirectional);
        assert!(Capability::Bidirectional < Capability::RandomAccess);
        assert!(Capability::RandomAccess < Capability::Contiguous);
    }

    #[test]
    fn test_satisfies() {
        // Reflexive, and downward along the order.
        for tier in [
            Capability::Forward,
            Capability::Bidirectional,
            Capability::RandomAccess,
            Capability::Contiguous,
        ] {
            assert!(tier.satisfies(tier));
            assert!(tier.satisfies(Capability::Forward));
        }
        assert!(!Capability::Forward.satisfies(Capability::Bidirectional));
        assert!(!Capability::RandomAccess.satisfies(Capability::Contiguous));
    }

    #[test]
    fn test_of_stride() {
        assert_eq!(Capability::of_stride(1), Capability::Contiguous);
        assert_eq!(Capability::of_stride(3), Capability::RandomAccess);
    }
}
