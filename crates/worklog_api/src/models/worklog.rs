//! Worklog payloads exchanged with the Tempo REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical worklog record as returned by Tempo. Identifiers arrive as
/// either JSON numbers or strings depending on the endpoint, so they are
/// kept as raw values and rendered to text on demand.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TempoWorklog {
    pub tempo_worklog_id: Value,
    #[serde(default)]
    pub issue: Option<WorklogIssueRef>,
    pub time_spent_seconds: i64,
    #[serde(default)]
    pub billable_seconds: Option<i64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<WorklogAuthor>,
}

impl TempoWorklog {
    /// Linked Jira issue id as display text, when the worklog carries one.
    pub fn issue_id(&self) -> Option<String> {
        self.issue.as_ref().and_then(|issue| id_text(&issue.id))
    }

    pub fn id_text(&self) -> String {
        id_text(&self.tempo_worklog_id).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorklogIssueRef {
    pub id: Value,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogAuthor {
    pub account_id: String,
}

/// One page of a user worklog listing. `metadata.next`, when present, is the
/// absolute URL of the following page.
#[derive(Debug, Deserialize, Clone)]
pub struct WorklogPage {
    #[serde(default)]
    pub results: Vec<TempoWorklog>,
    #[serde(default)]
    pub metadata: Option<PageMetadata>,
}

impl WorklogPage {
    pub fn next_url(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|metadata| metadata.next.as_deref())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageMetadata {
    #[serde(default)]
    pub next: Option<String>,
}

/// Response shape for worklog creation, single and bulk.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatedWorklog {
    pub tempo_worklog_id: Value,
}

impl CreatedWorklog {
    pub fn id_text(&self) -> String {
        id_text(&self.tempo_worklog_id).unwrap_or_default()
    }
}

/// Per-entry write payload shared by the single and bulk create endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayload {
    pub time_spent_seconds: i64,
    pub start_date: String,
    pub author_account_id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<WorklogAttribute>>,
}

/// Work attribute attached to a write payload, e.g. the `_Account_` tag.
#[derive(Debug, Clone, Serialize)]
pub struct WorklogAttribute {
    pub key: String,
    pub value: String,
}

impl WorklogAttribute {
    pub fn account(value: impl Into<String>) -> Self {
        Self {
            key: "_Account_".to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogCreateRequest {
    pub issue_id: String,
    #[serde(flatten)]
    pub entry: WorklogPayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogUpdateRequest {
    pub author_account_id: String,
    pub start_date: String,
    pub time_spent_seconds: i64,
    pub billable_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{TempoWorklog, WorklogAttribute, WorklogCreateRequest, WorklogPayload};

    #[test]
    fn numeric_and_string_ids_both_render_as_text() {
        let numeric: TempoWorklog = serde_json::from_str(
            r#"{"tempoWorklogId":12345,"issue":{"id":67},"timeSpentSeconds":3600}"#,
        )
        .unwrap();
        assert_eq!(numeric.id_text(), "12345");
        assert_eq!(numeric.issue_id().as_deref(), Some("67"));

        let text: TempoWorklog = serde_json::from_str(
            r#"{"tempoWorklogId":"12345","timeSpentSeconds":900}"#,
        )
        .unwrap();
        assert_eq!(text.id_text(), "12345");
        assert_eq!(text.issue_id(), None);
    }

    #[test]
    fn create_request_flattens_entry_and_skips_absent_fields() {
        let request = WorklogCreateRequest {
            issue_id: "10001".to_string(),
            entry: WorklogPayload {
                time_spent_seconds: 4500,
                start_date: "2026-01-05".to_string(),
                author_account_id: "acc-1".to_string(),
                description: String::new(),
                start_time: None,
                attributes: Some(vec![WorklogAttribute::account("DEV")]),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["issueId"], "10001");
        assert_eq!(value["timeSpentSeconds"], 4500);
        assert!(value.get("startTime").is_none());
        assert_eq!(value["attributes"][0]["key"], "_Account_");
        assert_eq!(value["attributes"][0]["value"], "DEV");
    }
}
