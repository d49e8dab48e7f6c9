/// Occurrence counts for discrete values with stable ordering.
///
/// Entries are kept in first-insertion order, which makes tie-breaking in
/// [`most_common`](Self::most_common) deterministic: when two values have the
/// same count, the one seen first ranks first. The table is intended for small
/// domains (mistake tags, grades), so lookups are linear scans.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<T> {
    entries: Vec<(T, u64)>,
}

impl<T: Eq> FrequencyTable<T> {
    /// Creates an empty frequency table.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: vec![] }
    }

    /// Records one occurrence of `value`.
    pub fn add(&mut self, value: T) {
        if let Some((_, count)) = self.entries.iter_mut().find(|(v, _)| *v == value) {
            *count += 1;
        } else {
            self.entries.push((value, 1));
        }
    }

    /// Returns how many times `value` has been recorded.
    #[must_use]
    pub fn count(&self, value: &T) -> u64 {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map_or(0, |(_, count)| *count)
    }

    /// Returns the number of distinct values recorded.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no occurrences have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of recorded occurrences.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Returns up to `n` entries ordered by descending count.
    ///
    /// Ties preserve first-insertion order.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(&T, u64)> {
        let mut ranked = self
            .entries
            .iter()
            .map(|(v, count)| (v, *count))
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Iterates over `(value, count)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> {
        self.entries.iter().map(|(v, count)| (v, *count))
    }
}
