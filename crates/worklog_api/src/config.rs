use std::time::Duration;

pub const DEFAULT_TEMPO_BASE: &str = "https://api.tempo.io/4";
pub const DEFAULT_USER_AGENT: &str = "tempo-worklog-server";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the Tempo REST API (bearer token auth).
#[derive(Clone, Debug)]
pub struct TempoConfig {
    pub base_url: String,
    pub token: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl TempoConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_TEMPO_BASE.to_string(),
            token: token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    pub fn api_root(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

/// Connection settings for the Jira REST API (basic auth with email + token).
#[derive(Clone, Debug)]
pub struct JiraConfig {
    pub base_url: String,
    pub email: String,
    pub token: String,
    /// Numeric id of the custom field linking issues to Tempo accounts.
    /// When set, issue lookups surface `customfield_<id>.id` as the linked
    /// account identifier.
    pub tempo_account_field: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl JiraConfig {
    pub fn new(
        base_url: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            email: email.into(),
            token: token.into(),
            tempo_account_field: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_tempo_account_field(mut self, field_id: impl Into<String>) -> Self {
        self.tempo_account_field = Some(field_id.into());
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    pub fn api_root(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::{JiraConfig, TempoConfig, DEFAULT_TEMPO_BASE};

    #[test]
    fn tempo_api_root_normalizes_trailing_slash() {
        let config = TempoConfig::new("t").with_base_url("https://tempo.example/4/");
        assert_eq!(config.api_root(), "https://tempo.example/4/");

        let config = TempoConfig::new("t");
        assert_eq!(config.api_root(), format!("{DEFAULT_TEMPO_BASE}/"));
    }

    #[test]
    fn jira_config_carries_optional_account_field() {
        let config = JiraConfig::new("https://jira.example", "me@example.com", "t");
        assert!(config.tempo_account_field.is_none());

        let config = config.with_tempo_account_field("10234");
        assert_eq!(config.tempo_account_field.as_deref(), Some("10234"));
    }
}
