//! Response envelope used by every backend endpoint

use serde::{Deserialize, Serialize};

use crate::errors::{MISSING_ERROR_MESSAGE, PumpError, Result};

/// `{error, msg, data}` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub error: bool,
    pub msg: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Turn an `error: true` envelope into [`PumpError::Api`], otherwise yield the payload
    pub fn into_result(self) -> Result<Option<T>> {
        if self.error {
            let msg = self
                .msg
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| MISSING_ERROR_MESSAGE.to_string());
            return Err(PumpError::Api(msg));
        }
        Ok(self.data)
    }
}
