//! Session behaviour configuration.

use serde::{Deserialize, Serialize};

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Require an explicit confirm step before clearing the ledger.
    #[serde(default = "default_true")]
    pub confirm_clear: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confirm_clear: true,
        }
    }
}

const fn default_true() -> bool {
    true
}
