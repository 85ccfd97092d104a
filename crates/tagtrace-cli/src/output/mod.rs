mod stats_report;

pub use stats_report::StatsReport;
