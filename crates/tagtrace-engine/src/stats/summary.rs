use std::collections::BTreeSet;

use super::statistic::{Statistic, StatisticSet, StatisticValue};

/// Running string statistics over a sequence of optional values.
///
/// Populate either in one shot with [`calculate`](Self::calculate), or
/// incrementally with [`add_value`](Self::add_value) /
/// [`add_string`](Self::add_string) followed by [`finish`](Self::finish).
/// Both paths produce identical results for the same multiset of values,
/// regardless of insertion order.
///
/// Ordering is byte-wise `str` ordering and lengths are `str::len` bytes.
#[derive(Debug, Clone)]
pub struct StringStatistics {
    set: StatisticSet,
    count: usize,
    missing: usize,
    distinct: BTreeSet<String>,
    min: Option<String>,
    max: Option<String>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl StringStatistics {
    pub fn new(set: StatisticSet) -> Self {
        Self {
            set,
            count: 0,
            missing: 0,
            distinct: BTreeSet::new(),
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// The configured statistic kinds.
    pub fn statistics(&self) -> StatisticSet {
        self.set
    }

    /// Compute statistics over `values` in one pass.
    ///
    /// Resets any previous state first, so repeated calls on the same
    /// accumulator are independent.
    pub fn calculate<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        self.reset();
        for value in values {
            self.add_value(value.as_ref().map(|s| s.as_ref()));
        }
        self.finish();
    }

    /// Add a single non-missing value.
    pub fn add_string(&mut self, value: &str) {
        self.count += 1;

        if self.set.contains(Statistic::CountDistinct) {
            self.distinct.insert(value.to_string());
        }

        if self.set.contains(Statistic::Min)
            && self.min.as_deref().is_none_or(|current| value < current)
        {
            self.min = Some(value.to_string());
        }
        if self.set.contains(Statistic::Max)
            && self.max.as_deref().is_none_or(|current| value > current)
        {
            self.max = Some(value.to_string());
        }

        let len = value.len();
        if self.set.contains(Statistic::MinLength)
            && self.min_length.is_none_or(|current| len < current)
        {
            self.min_length = Some(len);
        }
        if self.set.contains(Statistic::MaxLength)
            && self.max_length.is_none_or(|current| len > current)
        {
            self.max_length = Some(len);
        }
    }

    /// Add a single value; `None` is a missing entry.
    ///
    /// Missing entries count toward [`count`](Self::count) and
    /// [`count_missing`](Self::count_missing) and nothing else.
    pub fn add_value(&mut self, value: Option<&str>) {
        match value {
            Some(value) => self.add_string(value),
            None => {
                self.count += 1;
                self.missing += 1;
            }
        }
    }

    /// Finalize incremental accumulation.
    ///
    /// Must be called after the last `add_value` and before reading
    /// statistics, so that incremental usage mirrors `calculate`.
    pub fn finish(&mut self) {}

    /// Clear all running state back to empty. The configured kind set is kept.
    pub fn reset(&mut self) {
        self.count = 0;
        self.missing = 0;
        self.distinct.clear();
        self.min = None;
        self.max = None;
        self.min_length = None;
        self.max_length = None;
    }

    /// Total number of values seen, missing ones included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of missing values seen.
    pub fn count_missing(&self) -> usize {
        self.missing
    }

    /// Number of distinct non-missing values. 0 when `CountDistinct` was not
    /// requested.
    pub fn count_distinct(&self) -> usize {
        self.distinct.len()
    }

    /// Lexicographic minimum of non-missing values. `None` on empty or
    /// all-missing input.
    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    /// Lexicographic maximum of non-missing values. `None` on empty or
    /// all-missing input.
    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    /// Length of the shortest non-missing value, in bytes. `None` on empty or
    /// all-missing input.
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// Length of the longest non-missing value, in bytes. `None` on empty or
    /// all-missing input.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Look up a statistic by kind.
    ///
    /// `None` when the kind was not requested at construction, or when the
    /// value is undefined (min/max/lengths over empty or all-missing input).
    pub fn statistic(&self, stat: Statistic) -> Option<StatisticValue> {
        if !self.set.contains(stat) {
            return None;
        }

        match stat {
            Statistic::Count => Some(StatisticValue::Count(self.count)),
            Statistic::CountDistinct => Some(StatisticValue::Count(self.distinct.len())),
            Statistic::CountMissing => Some(StatisticValue::Count(self.missing)),
            Statistic::Min => self.min.clone().map(StatisticValue::Text),
            Statistic::Max => self.max.clone().map(StatisticValue::Text),
            Statistic::MinLength => self.min_length.map(StatisticValue::Length),
            Statistic::MaxLength => self.max_length.map(StatisticValue::Length),
        }
    }
}

impl Default for StringStatistics {
    fn default() -> Self {
        Self::new(StatisticSet::all())
    }
}
