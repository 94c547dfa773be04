//! Typed Tempo and Jira API client crate used by the worklog server.

pub mod config;
pub mod error;
pub mod jira;
pub mod models;
pub mod tempo;

pub use config::{JiraConfig, TempoConfig};
pub use error::{ApiError, Result};
pub use jira::JiraClient;
pub use models::{
    CreatedWorklog, IssueRef, JiraUser, TempoAccount, TempoWorklog, WorklogAttribute,
    WorklogCreateRequest, WorklogPage, WorklogPayload, WorklogUpdateRequest,
};
pub use tempo::TempoClient;
