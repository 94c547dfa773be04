mod account;
pub(crate) mod issue;
mod user;
mod worklog;

pub use account::TempoAccount;
pub use issue::IssueRef;
pub use user::JiraUser;
pub use worklog::{
    CreatedWorklog, PageMetadata, TempoWorklog, WorklogAttribute, WorklogAuthor,
    WorklogCreateRequest, WorklogIssueRef, WorklogPage, WorklogPayload, WorklogUpdateRequest,
};
