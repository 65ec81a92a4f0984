use serde::{Deserialize, Deserializer, Serialize};

use super::validation::{optional_text, required_text, ValidationError};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// `author` distinguishes an absent key (leave as is) from an explicit
/// value, which may be `null` or blank to clear it.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<Option<String>>,
}

/// Validated body of a comment creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub author: Option<String>,
}

/// Validated body of a comment update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentChanges {
    pub text: String,
    /// `Some` replaces the stored author.
    pub author: Option<Option<String>>,
}

impl CreateCommentRequest {
    pub fn validate(self) -> Result<NewComment, ValidationError> {
        Ok(NewComment {
            text: required_text("text", self.text)?,
            author: optional_text(self.author),
        })
    }
}

impl UpdateCommentRequest {
    pub fn validate(self) -> Result<CommentChanges, ValidationError> {
        Ok(CommentChanges {
            text: required_text("text", self.text)?,
            author: self.author.map(optional_text),
        })
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
