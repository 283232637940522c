use serde::{Deserialize, Serialize};

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Pretty-print the JSON store file
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}
