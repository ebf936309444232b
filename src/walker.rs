//! Adjacent-pair traversal over a [`SymbolStream`].

use crate::stream::{LiveCursor, SymbolStream};

/// Live positions whose pair membership changed after a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    /// Live position immediately before the merged occurrence.
    pub before: Option<usize>,
    /// Live position immediately after the merged occurrence.
    pub after: Option<usize>,
}

/// Sliding window over the two most recent live positions.
///
/// The walker is a small state machine:
///
/// - [`next`](Self::next) yields the window `(left, right)` and slides it by
///   one live position.
/// - When the caller merges the pair it was just given (writing the new symbol
///   at `left` and turning `right` into a hole), it must call
///   [`resync`](Self::resync) before calling `next` again. `resync` slides the
///   window past the consumed occurrence and reports the two [`Neighbors`] of
///   the merged slot.
///
/// Calling `next` without `resync` after such a merge would yield a pair
/// starting at the hole.
#[derive(Debug, Clone)]
pub struct PairWalker {
    cursor: LiveCursor,
    left: Option<usize>,
    right: Option<usize>,
}

impl PairWalker {
    pub fn new(stream: &SymbolStream) -> Self {
        let mut cursor = stream.cursor();
        let left = cursor.next(stream);
        let right = cursor.next(stream);
        Self {
            cursor,
            left,
            right,
        }
    }

    /// Returns the next pair of live positions, or `None` once fewer than two remain.
    pub fn next(&mut self, stream: &SymbolStream) -> Option<(usize, usize)> {
        let (left, right) = (self.left?, self.right?);
        self.advance(stream);
        Some((left, right))
    }

    /// Resynchronizes after the pair at `merged` (the left position last
    /// yielded by [`next`](Self::next)) was merged in place.
    pub fn resync(&mut self, stream: &SymbolStream, merged: usize) -> Neighbors {
        debug_assert!(
            stream.get(merged).is_some(),
            "resync called on a position that is not live"
        );

        // The window currently starts at the hole left by the merge
        self.advance(stream);

        Neighbors {
            before: stream.prev_live(merged),
            after: self.left,
        }
    }

    fn advance(&mut self, stream: &SymbolStream) {
        self.left = self.right;
        self.right = self.cursor.next(stream);
    }
}
