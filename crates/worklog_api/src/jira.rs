use crate::config::JiraConfig;
use crate::error::{error_for, header_value, ApiError, Result};
use crate::models::issue::IssueBean;
use crate::models::{IssueRef, JiraUser};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;

/// Client for the Jira REST API (user and issue lookups).
#[derive(Clone)]
pub struct JiraClient {
    http: HttpClient,
    config: JiraConfig,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// Account id of the configured user, found by searching for the
    /// configured email and requiring an exact address match.
    pub async fn current_user_account_id(&self) -> Result<String> {
        let url = self.url_for("rest/api/3/user/search");
        let response = self
            .http
            .get(url)
            .query(&[("query", self.config.email.as_str())])
            .send()
            .await?;
        let users: Vec<JiraUser> = Self::parse_json(response).await?;

        if users.is_empty() {
            return Err(ApiError::Other(format!(
                "no Jira user found with email: {}",
                self.config.email
            )));
        }
        users
            .into_iter()
            .find(|user| user.email_address.as_deref() == Some(self.config.email.as_str()))
            .map(|user| user.account_id)
            .ok_or_else(|| {
                ApiError::Other(format!(
                    "no exact Jira user match for email: {}",
                    self.config.email
                ))
            })
    }

    /// Display key for a numeric issue id.
    pub async fn issue_key(&self, issue_id: &str) -> Result<String> {
        let bean = self.issue_bean(issue_id).await?;
        Ok(bean.key)
    }

    /// Full issue reference for an id or key, including the linked Tempo
    /// account id when the account custom field is configured.
    pub async fn issue(&self, id_or_key: &str) -> Result<IssueRef> {
        let bean = self.issue_bean(id_or_key).await?;
        let account_id = self
            .config
            .tempo_account_field
            .as_deref()
            .and_then(|field_id| bean.account_field_id(field_id));
        Ok(IssueRef {
            id: bean.id,
            key: bean.key,
            account_id,
        })
    }

    async fn issue_bean(&self, id_or_key: &str) -> Result<IssueBean> {
        let url = self.url_for(&format!("rest/api/3/issue/{id_or_key}"));
        let response = self.http.get(url).send().await?;
        Self::parse_json(response).await
    }

    fn url_for(&self, path: &str) -> String {
        let mut base = self.config.api_root();
        base.push_str(path.trim_start_matches('/'));
        base
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(ApiError::from)
        } else {
            Err(error_for(status, response).await)
        }
    }
}

fn build_http_client(config: &JiraConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    let credentials = BASE64_STANDARD.encode(format!("{}:{}", config.email, config.token));
    headers.insert(AUTHORIZATION, header_value(format!("Basic {credentials}"))?);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| ApiError::Other(err.to_string()))
}
