//! Editing-surface configuration

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Module that only exposes the View toggle by default
pub const DEFAULT_INVOICE_MODULE: &str = "generate_invoice";

/// Access-rights editing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Modules whose Edit and Delete toggles are not offered for editing
    #[serde(default = "default_view_only_modules")]
    pub view_only_modules: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            view_only_modules: default_view_only_modules(),
        }
    }
}

impl AccessConfig {
    pub fn view_only_set(&self) -> HashSet<String> {
        self.view_only_modules.iter().cloned().collect()
    }
}

fn default_view_only_modules() -> Vec<String> {
    vec![DEFAULT_INVOICE_MODULE.to_string()]
}
