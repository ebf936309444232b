//! The hole-tolerant symbol stream.
//!
//! The stream is a flat array with one slot per input byte. Merges never move
//! slots: they rewrite the left slot of an occurrence and turn the right slot
//! into a [`Slot::Hole`]. The live (non-hole) slots read in array order are
//! always the current tokenization. Holes are only removed physically by
//! [`SymbolStream::compact`].

use crate::symbol::{Slot, Symbol};

/// Mutable array of symbol slots.
#[derive(Debug, Clone, Default)]
pub struct SymbolStream {
    slots: Vec<Slot>,
    /// Number of slots that are not holes.
    live: usize,
}

impl SymbolStream {
    /// Creates a stream holding one live slot per input byte.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            slots: bytes.iter().copied().map(Slot::from).collect(),
            live: bytes.len(),
        }
    }

    /// Creates a stream directly from symbols.
    pub fn from_symbols<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        let slots: Vec<Slot> = symbols.into_iter().map(Slot::Live).collect();
        let live = slots.len();
        Self { slots, live }
    }

    /// Physical length, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of live symbols.
    pub fn live_len(&self) -> usize {
        self.live
    }

    /// Number of holes currently in the array.
    pub fn hole_count(&self) -> usize {
        self.slots.len() - self.live
    }

    /// Returns the symbol at `pos`, or `None` for a hole or an out-of-range index.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<Symbol> {
        self.slots.get(pos).and_then(|slot| slot.symbol())
    }

    /// Rewrites the occurrence starting at `left` to `symbol` and deletes `right`.
    ///
    /// Both positions must be live.
    pub(crate) fn merge_at(&mut self, left: usize, right: usize, symbol: Symbol) {
        debug_assert!(left < right, "merge positions out of order");
        debug_assert!(!self.slots[left].is_hole() && !self.slots[right].is_hole());

        self.slots[left] = Slot::Live(symbol);
        self.slots[right] = Slot::Hole;
        self.live -= 1;
    }

    /// First live position at or after `pos`.
    #[inline]
    pub fn next_live(&self, mut pos: usize) -> Option<usize> {
        while pos < self.slots.len() {
            if !self.slots[pos].is_hole() {
                return Some(pos);
            }
            pos += 1;
        }
        None
    }

    /// Last live position strictly before `pos`, scanning backward over holes.
    #[inline]
    pub fn prev_live(&self, pos: usize) -> Option<usize> {
        (0..pos.min(self.slots.len()))
            .rev()
            .find(|&i| !self.slots[i].is_hole())
    }

    /// Starts a lazy hole-skipping traversal over live positions.
    pub fn cursor(&self) -> LiveCursor {
        LiveCursor::new(self)
    }

    /// Iterates over the live symbols in order. Does not mutate the stream.
    pub fn tokens(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.slots.iter().filter_map(|slot| slot.symbol())
    }

    /// Fraction of slots that are live. An empty stream counts as fully live.
    pub fn live_fraction(&self) -> f64 {
        if self.slots.is_empty() {
            1.0
        } else {
            self.live as f64 / self.slots.len() as f64
        }
    }

    /// Removes every hole in place, keeping live symbols in their relative order.
    ///
    /// Afterwards the physical length equals the live count. Returns the
    /// number of holes removed.
    pub fn compact(&mut self) -> usize {
        let before = self.slots.len();
        self.slots.retain(|slot| !slot.is_hole());
        debug_assert_eq!(self.slots.len(), self.live);
        before - self.slots.len()
    }
}

/// Lazy traversal over the live positions of a [`SymbolStream`].
///
/// The cursor holds only a position, and each call receives the stream, so it
/// sees in-place writes made since it was created. Skipping costs one step per
/// consecutive hole, which is what compaction bounds.
#[derive(Debug, Clone, Copy)]
pub struct LiveCursor {
    pos: usize,
}

impl LiveCursor {
    fn new(stream: &SymbolStream) -> Self {
        let mut cursor = Self { pos: 0 };
        cursor.skip_holes(stream);
        cursor
    }

    fn skip_holes(&mut self, stream: &SymbolStream) {
        self.pos = stream.next_live(self.pos).unwrap_or(stream.len());
    }

    /// The position [`next`](Self::next) would return, without advancing.
    pub fn peek(&self, stream: &SymbolStream) -> Option<usize> {
        stream.next_live(self.pos)
    }

    /// Returns the next live position and advances past it.
    pub fn next(&mut self, stream: &SymbolStream) -> Option<usize> {
        let pos = self.peek(stream)?;
        self.pos = pos + 1;
        self.skip_holes(stream);
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(stream: &SymbolStream) -> Vec<usize> {
        let mut cursor = stream.cursor();
        let mut out = Vec::new();
        while let Some(p) = cursor.next(stream) {
            out.push(p);
        }
        out
    }

    #[test]
    fn test_from_bytes() {
        let stream = SymbolStream::from_bytes(&[0, 1, 2]);
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.live_len(), 3);
        assert_eq!(stream.get(0), Some(0));
        assert_eq!(stream.tokens().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_cursor_skips_holes() {
        let mut stream = SymbolStream::from_bytes(b"abcdef");
        stream.merge_at(0, 1, 300);
        stream.merge_at(2, 3, 301);
        stream.merge_at(4, 5, 302);
        assert_eq!(positions(&stream), vec![0, 2, 4]);
        assert_eq!(stream.live_len(), 3);
        assert_eq!(stream.hole_count(), 3);
    }

    #[test]
    fn test_cursor_sees_later_writes() {
        let mut stream = SymbolStream::from_bytes(b"abcd");
        let mut cursor = stream.cursor();
        assert_eq!(cursor.next(&stream), Some(0));
        stream.merge_at(1, 2, 300);
        assert_eq!(cursor.next(&stream), Some(1));
        assert_eq!(cursor.next(&stream), Some(3));
        assert_eq!(cursor.next(&stream), None);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let stream = SymbolStream::from_bytes(b"ab");
        let mut cursor = stream.cursor();
        assert_eq!(cursor.peek(&stream), Some(0));
        assert_eq!(cursor.peek(&stream), Some(0));
        assert_eq!(cursor.next(&stream), Some(0));
        assert_eq!(cursor.peek(&stream), Some(1));
    }

    #[test]
    fn test_prev_live() {
        let mut stream = SymbolStream::from_bytes(b"abcde");
        stream.merge_at(0, 1, 300);
        stream.merge_at(2, 3, 301);
        assert_eq!(stream.prev_live(4), Some(2));
        assert_eq!(stream.prev_live(2), Some(0));
        assert_eq!(stream.prev_live(0), None);
    }

    #[test]
    fn test_prev_live_all_holes_before() {
        let mut stream = SymbolStream::from_bytes(b"abc");
        stream.merge_at(1, 2, 300);
        stream.merge_at(0, 1, 301);
        // Only slot 0 is live now
        assert_eq!(stream.prev_live(2), Some(0));
        assert_eq!(stream.prev_live(0), None);
    }

    #[test]
    fn test_compact_preserves_order() {
        let mut stream = SymbolStream::from_bytes(b"abcdef");
        stream.merge_at(1, 2, 300);
        stream.merge_at(3, 4, 301);
        let before: Vec<Symbol> = stream.tokens().collect();

        let removed = stream.compact();
        assert_eq!(removed, 2);
        assert_eq!(stream.len(), stream.live_len());
        assert_eq!(stream.tokens().collect::<Vec<_>>(), before);
        assert_eq!(stream.hole_count(), 0);
    }

    #[test]
    fn test_live_fraction() {
        let mut stream = SymbolStream::from_bytes(b"abcd");
        assert_eq!(stream.live_fraction(), 1.0);
        stream.merge_at(0, 1, 300);
        assert_eq!(stream.live_fraction(), 0.75);
        assert_eq!(SymbolStream::default().live_fraction(), 1.0);
    }

    #[test]
    fn test_empty_cursor() {
        let stream = SymbolStream::default();
        assert!(positions(&stream).is_empty());
    }
}
