mod comments;
mod tasks;
mod validation;

use serde::{Deserialize, Serialize};

pub use comments::*;
pub use tasks::*;
pub use validation::*;

/// Confirmation body returned by delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: "deleted".to_string(),
        }
    }
}
