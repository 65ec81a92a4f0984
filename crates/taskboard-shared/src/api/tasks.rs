use serde::{Deserialize, Serialize};

use super::validation::{required_text, ValidationError};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CreateTaskRequest {
    /// Returns the trimmed title.
    pub fn validate(self) -> Result<String, ValidationError> {
        required_text("title", self.title)
    }
}
