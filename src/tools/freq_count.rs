use rustc_hash::FxHashMap;

/// Occurrence count of every distinct symbol in a text.
///
/// Counts are u64 so that no in-memory text, and no sum of u32 weights, can wrap them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreqTable {
    counts: FxHashMap<char, u64>,
}

impl FreqTable {
    /// Count every character of the text. The empty text gives the empty table.
    pub fn from_text(text: &str) -> Self {
        let mut counts = FxHashMap::default();
        text.chars().for_each(|c| *counts.entry(c).or_insert(0_u64) += 1);
        Self { counts }
    }

    /// Returns the count for a symbol, or None if it never occurred.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// (symbol, count) pairs in ascending symbol order. The tree builder relies on this order.
    pub fn sorted(&self) -> Vec<(char, u64)> {
        let mut pairs = self
            .counts
            .iter()
            .map(|(&s, &c)| (s, c))
            .collect::<Vec<(char, u64)>>();
        pairs.sort_unstable_by_key(|&(s, _)| s);
        pairs
    }
}

impl FromIterator<(char, u32)> for FreqTable {
    /// Build a table from explicit weights. Zero weights are dropped, repeated symbols add up.
    fn from_iter<I: IntoIterator<Item = (char, u32)>>(iter: I) -> Self {
        let mut counts = FxHashMap::default();
        for (s, c) in iter.into_iter().filter(|&(_, c)| c > 0) {
            *counts.entry(s).or_insert(0_u64) += c as u64;
        }
        Self { counts }
    }
}

#[cfg(test)]
mod test {
    use super::FreqTable;

    #[test]
    fn empty_text_test() {
        let freqs = FreqTable::from_text("");
        assert!(freqs.is_empty());
        assert_eq!(freqs.total(), 0);
        assert!(freqs.sorted().is_empty());
    }

    #[test]
    fn single_symbol_test() {
        let freqs = FreqTable::from_text("aaaa");
        assert_eq!(freqs.len(), 1);
        assert_eq!(freqs.get('a'), Some(4));
    }

    #[test]
    fn mixed_test() {
        let freqs = FreqTable::from_text("aabbbcc\n");
        assert_eq!(
            freqs.sorted(),
            vec![('\n', 1), ('a', 2), ('b', 3), ('c', 2)]
        );
        assert_eq!(freqs.get('z'), None);
        assert_eq!(freqs.total(), 8);
    }

    #[test]
    fn counts_chars_not_bytes_test() {
        let freqs = FreqTable::from_text("héé");
        assert_eq!(freqs.get('é'), Some(2));
        assert_eq!(freqs.total(), 3);
    }

    #[test]
    fn from_weights_test() {
        let freqs: FreqTable = [('x', 3), ('y', 0), ('x', 2)].into_iter().collect();
        assert_eq!(freqs.sorted(), vec![('x', 5)]);
    }

    #[test]
    fn large_weights_do_not_wrap_test() {
        let freqs: FreqTable = [('a', u32::MAX), ('a', u32::MAX), ('b', 1)]
            .into_iter()
            .collect();
        assert_eq!(freqs.get('a'), Some(2 * u32::MAX as u64));
        assert_eq!(freqs.total(), 2 * u32::MAX as u64 + 1);
    }
}
