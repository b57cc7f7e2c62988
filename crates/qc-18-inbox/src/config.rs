//! Inbox configuration from environment variables.

use crate::domain::DEFAULT_MAX_DATA_SIZE;
use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the inbox service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboxConfig {
    /// Maximum packed payload length in bytes
    pub max_data_size: usize,
}

impl Default for InboxConfig {
    fn default() -> Self {
        Self {
            max_data_size: DEFAULT_MAX_DATA_SIZE,
        }
    }
}

impl InboxConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_INBOX_MAX_DATA_SIZE`: Payload ceiling in bytes (default: 117964)
    pub fn from_env() -> Self {
        Self {
            max_data_size: env::var("QC_INBOX_MAX_DATA_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_DATA_SIZE),
        }
    }

    /// Configuration with a custom payload ceiling.
    #[must_use]
    pub fn with_max_data_size(mut self, max_data_size: usize) -> Self {
        self.max_data_size = max_data_size;
        self
    }
}
