use crate::error::Result;
use launchkit_ranking::ResultList;
use serde::{Deserialize, Serialize};

/// What a handler sends back to the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Results in display order
    pub result: ResultList,
}

impl Response {
    pub fn new(result: ResultList) -> Self {
        Self { result }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<ResultList> for Response {
    fn from(result: ResultList) -> Self {
        Self::new(result)
    }
}
