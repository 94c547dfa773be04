use serde::Deserialize;

/// Tempo account (cost center) metadata used to tag worklogs.
#[derive(Debug, Deserialize, Clone)]
pub struct TempoAccount {
    pub key: String,
    pub name: String,
}
