use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A statistic kind the accumulator can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Statistic {
    /// Total number of values, missing ones included
    Count,
    /// Number of distinct non-missing values
    CountDistinct,
    /// Number of missing values
    CountMissing,
    /// Lexicographic minimum of non-missing values
    Min,
    /// Lexicographic maximum of non-missing values
    Max,
    /// Shortest non-missing value, in bytes
    MinLength,
    /// Longest non-missing value, in bytes
    MaxLength,
}

impl Statistic {
    /// All kinds, in report order.
    pub const ALL: [Statistic; 7] = [
        Statistic::Count,
        Statistic::CountDistinct,
        Statistic::CountMissing,
        Statistic::Min,
        Statistic::Max,
        Statistic::MinLength,
        Statistic::MaxLength,
    ];

    /// Stable machine id, used for CLI selection and JSON/CSV report keys.
    pub fn id(&self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::CountDistinct => "count-distinct",
            Statistic::CountMissing => "count-missing",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::MinLength => "min-length",
            Statistic::MaxLength => "max-length",
        }
    }

    /// Human-readable label for reports and UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Statistic::Count => "Count",
            Statistic::CountDistinct => "Count (distinct)",
            Statistic::CountMissing => "Count (missing)",
            Statistic::Min => "Minimum",
            Statistic::Max => "Maximum",
            Statistic::MinLength => "Minimum length",
            Statistic::MaxLength => "Maximum length",
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Statistic::Count => 1 << 0,
            Statistic::CountDistinct => 1 << 1,
            Statistic::CountMissing => 1 << 2,
            Statistic::Min => 1 << 3,
            Statistic::Max => 1 << 4,
            Statistic::MinLength => 1 << 5,
            Statistic::MaxLength => 1 << 6,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Statistic::ALL
            .iter()
            .find(|stat| stat.id() == s)
            .copied()
            .ok_or_else(|| format!("unknown statistic: {}", s))
    }
}

/// The set of statistics an accumulator is configured to compute.
///
/// Defaults to all kinds. Kinds outside the set report `None` from
/// [`StringStatistics::statistic`](super::StringStatistics::statistic) and
/// skip their accumulation cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticSet(u8);

impl StatisticSet {
    pub const EMPTY: StatisticSet = StatisticSet(0);

    pub fn all() -> Self {
        Statistic::ALL.iter().copied().collect()
    }

    pub fn with(self, stat: Statistic) -> Self {
        StatisticSet(self.0 | stat.bit())
    }

    pub fn contains(&self, stat: Statistic) -> bool {
        self.0 & stat.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Kinds in this set, in report order.
    pub fn iter(&self) -> impl Iterator<Item = Statistic> + '_ {
        Statistic::ALL.into_iter().filter(|stat| self.contains(*stat))
    }
}

impl Default for StatisticSet {
    fn default() -> Self {
        StatisticSet::all()
    }
}

impl FromIterator<Statistic> for StatisticSet {
    fn from_iter<I: IntoIterator<Item = Statistic>>(iter: I) -> Self {
        iter.into_iter().fold(StatisticSet::EMPTY, StatisticSet::with)
    }
}

/// The typed result of a single-kind lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatisticValue {
    Count(usize),
    Text(String),
    Length(usize),
}

impl fmt::Display for StatisticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatisticValue::Count(n) | StatisticValue::Length(n) => write!(f, "{}", n),
            StatisticValue::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip_through_from_str() {
        for stat in Statistic::ALL {
            assert_eq!(stat.id().parse::<Statistic>().unwrap(), stat);
        }
        assert!("median".parse::<Statistic>().is_err());
    }

    #[test]
    fn default_set_contains_everything() {
        let set = StatisticSet::default();
        for stat in Statistic::ALL {
            assert!(set.contains(stat));
        }
    }

    #[test]
    fn collected_set_contains_only_requested() {
        let set: StatisticSet = [Statistic::Min, Statistic::Max].into_iter().collect();
        assert!(set.contains(Statistic::Min));
        assert!(set.contains(Statistic::Max));
        assert!(!set.contains(Statistic::Count));
        assert_eq!(set.iter().count(), 2);
    }
}
