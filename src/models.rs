use serde::Deserialize;
use serde_json::{Map, Value};

/// Fields kept from a raw issue payload. Everything else is dropped.
pub const ISSUE_FIELDS: [&str; 22] = [
    "component",
    "subProject",
    "rule",
    "severity",
    "status",
    "message",
    "effort",
    "debt",
    "author",
    "tags",
    "transitions",
    "actions",
    "comments",
    "assignee",
    "creationDate",
    "updateDate",
    "closeDate",
    "type",
    "scope",
    "quickFixAvailable",
    "messageFormattings",
    "codeSnippet",
];

/// The only metric currently tracked.
pub const TRACKED_METRIC: &str = "goutsum";

pub type IssueRecord = Map<String, Value>;
pub type MetricsAggregate = Map<String, Value>;

#[derive(Deserialize)]
pub struct IssueSearchResponse {
    #[serde(default)]
    pub issues: Vec<Map<String, Value>>,
}

#[derive(Deserialize)]
pub struct MetricSearchResponse {
    #[serde(default)]
    pub metrics: Vec<Map<String, Value>>,
}

/// Projects a raw issue onto [`ISSUE_FIELDS`], keeping the payload's key order.
pub fn extract_issue_fields(issue: &Map<String, Value>) -> IssueRecord {
    issue
        .iter()
        .filter(|(key, _)| ISSUE_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns `{TRACKED_METRIC: value}` for a matching record, nothing otherwise.
pub fn extract_metric_value(metric: &Map<String, Value>) -> Option<(String, Value)> {
    match metric.get("key") {
        Some(Value::String(key)) if key == TRACKED_METRIC => Some((
            TRACKED_METRIC.to_string(),
            metric.get("value").cloned().unwrap_or(Value::Null),
        )),
        _ => None,
    }
}

pub fn aggregate_metrics(metrics: &[Map<String, Value>]) -> MetricsAggregate {
    metrics.iter().filter_map(extract_metric_value).collect()
}
