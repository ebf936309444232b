//! Pair-frequency histogram.
//!
//! The histogram is built once with a full walk of the stream. After that it is
//! only touched through local deltas applied by the merge executor, so a count
//! always equals the number of live adjacent occurrences of its pair.

use crate::pair::Pair;
use crate::stream::SymbolStream;
use crate::walker::PairWalker;
use ahash::AHashMap as HashMap;

/// Result of scanning the histogram for the next pair to merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The most frequent pair, lexicographically smallest on ties.
    pub pair: Pair,
    /// Its occurrence count.
    pub frequency: usize,
    /// Sum of all counts seen during the scan.
    pub total: usize,
}

/// Mapping from pair to live occurrence count.
///
/// Entries that drop to zero are removed, so every stored count is positive.
#[derive(Debug, Clone, Default)]
pub struct PairHistogram {
    counts: HashMap<Pair, usize>,
}

impl PairHistogram {
    /// Counts every adjacent live pair of the stream.
    pub fn build(stream: &SymbolStream) -> Self {
        let mut histogram = Self::default();
        let mut walker = PairWalker::new(stream);

        while let Some((left, right)) = walker.next(stream) {
            if let (Some(l), Some(r)) = (stream.get(left), stream.get(right)) {
                histogram.increment(Pair::new(l, r));
            }
        }

        histogram
    }

    /// Count for `pair`, zero if absent.
    pub fn get(&self, pair: &Pair) -> usize {
        self.counts.get(pair).copied().unwrap_or(0)
    }

    /// Number of distinct pairs with a positive count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pair, &usize)> {
        self.counts.iter()
    }

    pub(crate) fn increment(&mut self, pair: Pair) {
        *self.counts.entry(pair).or_insert(0) += 1;
    }

    pub(crate) fn decrement(&mut self, pair: Pair) {
        match self.counts.get_mut(&pair) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.counts.remove(&pair);
            }
            None => debug_assert!(false, "decrement of absent pair {pair}"),
        }
    }

    /// Drops the entry for a pair that no longer occurs.
    pub(crate) fn clear(&mut self, pair: &Pair) {
        self.counts.remove(pair);
    }

    /// Finds the most frequent pair.
    ///
    /// Ties go to the lexicographically smallest pair, whatever order the map
    /// happens to enumerate in. Returns `None` for an empty histogram.
    pub fn select(&self) -> Option<Selection> {
        let mut best: Option<(Pair, usize)> = None;
        let mut total = 0;

        for (&pair, &count) in &self.counts {
            total += count;
            best = match best {
                Some((top, top_count))
                    if top_count > count || (top_count == count && top < pair) =>
                {
                    Some((top, top_count))
                }
                _ => Some((pair, count)),
            };
        }

        best.map(|(pair, frequency)| Selection {
            pair,
            frequency,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts_pairs() {
        let stream = SymbolStream::from_bytes(&[97, 98, 97, 98, 97, 98]);
        let histogram = PairHistogram::build(&stream);
        assert_eq!(histogram.get(&Pair::new(97, 98)), 3);
        assert_eq!(histogram.get(&Pair::new(98, 97)), 2);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.total(), 5);
    }

    #[test]
    fn test_build_counts_zero_bytes() {
        let stream = SymbolStream::from_bytes(&[0, 0, 0]);
        let histogram = PairHistogram::build(&stream);
        assert_eq!(histogram.get(&Pair::new(0, 0)), 2);
    }

    #[test]
    fn test_build_skips_holes() {
        let mut stream = SymbolStream::from_bytes(b"abc");
        stream.merge_at(0, 1, 300);
        let histogram = PairHistogram::build(&stream);
        assert_eq!(histogram.get(&Pair::new(300, b'c' as u16)), 1);
        assert_eq!(histogram.total(), 1);
    }

    #[test]
    fn test_select_highest() {
        let stream = SymbolStream::from_bytes(&[97, 98, 97, 98, 97, 98]);
        let selection = PairHistogram::build(&stream).select().unwrap();
        assert_eq!(selection.pair, Pair::new(97, 98));
        assert_eq!(selection.frequency, 3);
        assert_eq!(selection.total, 5);
    }

    #[test]
    fn test_select_tie_prefers_smallest() {
        let mut histogram = PairHistogram::default();
        for pair in [Pair::new(9, 1), Pair::new(3, 7), Pair::new(3, 5), Pair::new(4, 0)] {
            histogram.increment(pair);
            histogram.increment(pair);
        }
        histogram.increment(Pair::new(1, 1));

        let selection = histogram.select().unwrap();
        assert_eq!(selection.pair, Pair::new(3, 5));
        assert_eq!(selection.frequency, 2);
        assert_eq!(selection.total, 9);
    }

    #[test]
    fn test_select_empty() {
        assert_eq!(PairHistogram::default().select(), None);
    }

    #[test]
    fn test_decrement_removes_at_zero() {
        let mut histogram = PairHistogram::default();
        let pair = Pair::new(1, 2);
        histogram.increment(pair);
        histogram.increment(pair);
        histogram.decrement(pair);
        assert_eq!(histogram.get(&pair), 1);
        histogram.decrement(pair);
        assert_eq!(histogram.get(&pair), 0);
        assert!(histogram.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut histogram = PairHistogram::default();
        histogram.increment(Pair::new(1, 2));
        histogram.clear(&Pair::new(1, 2));
        assert!(histogram.is_empty());
    }
}
