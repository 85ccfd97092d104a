pub mod log;
pub mod stats;

pub use log::{MessageLog, TabBuffer};
pub use stats::{Statistic, StatisticSet, StatisticValue, StringStatistics};
