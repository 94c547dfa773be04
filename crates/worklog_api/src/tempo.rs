use crate::config::TempoConfig;
use crate::error::{error_for, header_value, ApiError, Result};
use crate::models::{
    CreatedWorklog, TempoAccount, TempoWorklog, WorklogCreateRequest, WorklogPage, WorklogPayload,
    WorklogUpdateRequest,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Client for the Tempo REST API (worklogs and accounts).
#[derive(Clone)]
pub struct TempoClient {
    http: HttpClient,
    config: TempoConfig,
}

impl TempoClient {
    pub fn new(config: TempoConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TempoConfig {
        &self.config
    }

    /// First page of the user worklog listing for a date range.
    pub async fn user_worklogs_page(
        &self,
        account_id: &str,
        from: &str,
        to: &str,
    ) -> Result<WorklogPage> {
        let path = format!("worklogs/user/{account_id}");
        let request = self
            .http
            .get(self.url_for(&path))
            .query(&[("from", from), ("to", to)]);
        let response = request.send().await?;
        Self::parse_json(response).await
    }

    /// Follow-up page fetched through the absolute continuation URL returned
    /// in the previous page's metadata.
    pub async fn worklogs_page_at(&self, next_url: &str) -> Result<WorklogPage> {
        let response = self.http.get(next_url).send().await?;
        Self::parse_json(response).await
    }

    pub async fn worklog(&self, worklog_id: &str) -> Result<TempoWorklog> {
        let path = format!("worklogs/{worklog_id}");
        self.get(&path).await
    }

    pub async fn create_worklog(&self, request: &WorklogCreateRequest) -> Result<CreatedWorklog> {
        self.post("worklogs", request).await
    }

    /// One bulk-create call for all payloads targeting a single issue.
    pub async fn bulk_create_worklogs(
        &self,
        issue_id: &str,
        payloads: &[WorklogPayload],
    ) -> Result<Vec<CreatedWorklog>> {
        let path = format!("worklogs/issue/{issue_id}/bulk");
        self.post(&path, payloads).await
    }

    pub async fn update_worklog(
        &self,
        worklog_id: &str,
        request: &WorklogUpdateRequest,
    ) -> Result<()> {
        let path = format!("worklogs/{worklog_id}");
        self.send_expect_empty(Method::PUT, &path, Some(request))
            .await
    }

    pub async fn delete_worklog(&self, worklog_id: &str) -> Result<()> {
        let path = format!("worklogs/{worklog_id}");
        self.send_expect_empty(Method::DELETE, &path, None::<&Value>)
            .await
    }

    pub async fn account(&self, account_id: &str) -> Result<TempoAccount> {
        let path = format!("accounts/{account_id}");
        self.get(&path).await
    }

    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.http.get(self.url_for(path)).send().await?;
        Self::parse_json(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url_for(path)).json(body).send().await?;
        Self::parse_json(response).await
    }

    async fn send_expect_empty<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method, self.url_for(path));
        if let Some(payload) = body {
            request = request.json(payload);
        }
        let response = request.send().await?;
        Self::ensure_success(response).await
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

    async fn ensure_success(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(error_for(status, response).await)
        }
    }
}

fn build_http_client(config: &TempoConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        header_value(format!("Bearer {}", config.token))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, header_value(config.user_agent.clone())?);

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| ApiError::Other(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::TempoClient;
    use crate::config::TempoConfig;
    use crate::error::ApiError;

    fn client_for(server: &mockito::ServerGuard) -> TempoClient {
        TempoClient::new(TempoConfig::new("token").with_base_url(server.url())).unwrap()
    }

    #[tokio::test]
    async fn worklog_fetch_decodes_record() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/worklogs/42")
            .match_header("authorization", "Bearer token")
            .with_status(200)
            .with_body(
                r#"{"tempoWorklogId":42,"issue":{"id":10001},"timeSpentSeconds":5400,
                    "startDate":"2026-01-05","author":{"accountId":"acc-1"}}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let worklog = client.worklog("42").await.unwrap();

        mock.assert_async().await;
        assert_eq!(worklog.id_text(), "42");
        assert_eq!(worklog.issue_id().as_deref(), Some("10001"));
        assert_eq!(worklog.time_spent_seconds, 5400);
    }

    #[tokio::test]
    async fn structured_error_body_surfaces_its_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/worklogs/42")
            .with_status(404)
            .with_body(r#"{"message":"Worklog not found"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.delete_worklog("42").await.unwrap_err();

        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(message, "Worklog not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/accounts/7")
            .with_status(401)
            .with_body("denied")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.account("7").await.unwrap_err();
        assert!(matches!(err, ApiError::Authentication(_)));
    }
}
