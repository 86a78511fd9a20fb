//! Settings file data model

use serde::{Deserialize, Serialize};

use crate::api::PaginationScheme;
use crate::output::OutputFormat;

/// Persistent CLI settings (`~/.rtmsctl/config.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// RTMS host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// API key sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Default page size for list commands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    /// Consecutive empty pages tolerated before giving up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_empty_pages: Option<u32>,
    /// Pagination parameter and envelope field names
    pub pagination: PaginationScheme,
}

impl Settings {
    /// Copy of the settings that is safe to print
    pub fn masked(&self) -> Self {
        Self {
            api_key: self.api_key.as_deref().map(mask_secret),
            ..self.clone()
        }
    }
}

/// Keep the last four characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
