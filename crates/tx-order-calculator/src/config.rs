//! Configuration for transaction ordering

use serde::{Deserialize, Serialize};

/// Ordering configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Maximum distinct nodes a single calculator accepts via `enqueue`
    pub max_request_size: usize,
    /// Maximum nodes the selection phase may collect (anti-DoS)
    pub max_selection_size: usize,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            max_request_size: 100_000,
            max_selection_size: 100_000,
        }
    }
}
