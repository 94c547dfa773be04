use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Resolved view of a Jira issue: both identifiers plus the Tempo account id
/// read from the configured custom field, when an account is linked.
#[derive(Debug, Clone)]
pub struct IssueRef {
    pub id: String,
    pub key: String,
    pub account_id: Option<String>,
}

/// Raw issue payload from `GET /rest/api/3/issue/{idOrKey}`.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct IssueBean {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

impl IssueBean {
    /// Account id held by `customfield_<field_id>`, tolerating null or
    /// missing values (an unlinked issue is not an error).
    pub fn account_field_id(&self, field_id: &str) -> Option<String> {
        let field = self.fields.get(&format!("customfield_{field_id}"))?;
        match field.get("id")? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IssueBean;

    #[test]
    fn account_field_tolerates_null_and_missing_values() {
        let bean: IssueBean = serde_json::from_str(
            r#"{"id":"10001","key":"DEV-1","fields":{"customfield_10234":{"id":42},"customfield_9999":null}}"#,
        )
        .unwrap();

        assert_eq!(bean.account_field_id("10234").as_deref(), Some("42"));
        assert_eq!(bean.account_field_id("9999"), None);
        assert_eq!(bean.account_field_id("1"), None);
    }
}
