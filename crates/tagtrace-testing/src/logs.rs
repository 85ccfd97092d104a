//! Canned log and data files used across integration tests.

/// Plain-format log with three tags and mixed levels.
pub fn sample_plain_log() -> &'static str {
    "\
2026-08-07T10:00:00Z INFO [Network] connection established
2026-08-07T10:00:01Z WARNING [Storage] disk almost full
2026-08-07T10:00:02Z CRITICAL [Network] connection lost
2026-08-07T10:00:03Z INFO unclassified startup message
2026-08-07T10:00:04Z SUCCESS [Storage] cleanup finished
"
}

/// JSONL-format log equivalent in shape to [`sample_plain_log`].
pub fn sample_jsonl_log() -> &'static str {
    r#"{"timestamp":"2026-08-07T10:00:00Z","tag":"Network","level":"info","message":"connection established"}
{"timestamp":"2026-08-07T10:00:01Z","tag":"Storage","level":"warning","message":"disk almost full"}
{"timestamp":"2026-08-07T10:00:02Z","tag":"Network","level":"critical","message":"connection lost"}
"#
}

/// CSV with a header row, an empty cell (missing), and a duplicate value.
pub fn sample_csv() -> &'static str {
    "\
id,name,city
1,ash,berlin
2,birch,
3,ash,paris
4,,lima
"
}

/// JSONL records with a null field and a numeric field value.
pub fn sample_jsonl_records() -> &'static str {
    r#"{"name":"ash","size":12}
{"name":null,"size":7}
{"name":"birch","size":3}
"#
}
