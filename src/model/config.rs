use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::filter::TodoFilter;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Filter the TUI starts on. Never written back.
    #[serde(default)]
    pub default_filter: TodoFilter,
    /// Theme slot overrides, `"#RRGGBB"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            default_filter: TodoFilter::All,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
