//! Host and API key resolution from multiple sources

use log::debug;

use crate::config::{credentials, defaults, host as host_config};
use crate::error::{Result, RtmsError};

use super::models::Settings;

/// Resolve the RTMS host:
/// 1. --host CLI flag
/// 2. RTMS_HOST env var
/// 3. host from the settings file
/// 4. built-in default
pub fn resolve_host(cli_host: Option<&str>, settings: &Settings) -> String {
    if let Some(host) = cli_host {
        debug!("Using host from CLI argument: {}", host);
        return host.to_string();
    }

    if let Ok(host) = std::env::var(host_config::ENV_VAR) {
        if !host.is_empty() {
            debug!("Using host from {} env var: {}", host_config::ENV_VAR, host);
            return host;
        }
    }

    if let Some(host) = &settings.host {
        debug!("Using host from settings file: {}", host);
        return host.clone();
    }

    debug!("Using default host: {}", defaults::HOST);
    defaults::HOST.to_string()
}

/// Resolve the API key:
/// 1. --api-key CLI flag
/// 2. RTMS_API_KEY env var
/// 3. api-key from the settings file
pub fn resolve_api_key(cli_key: Option<&str>, settings: &Settings) -> Result<String> {
    if let Some(key) = cli_key.filter(|k| !k.is_empty()) {
        debug!("Using API key from CLI argument");
        return Ok(key.to_string());
    }

    if let Ok(key) = std::env::var(credentials::API_KEY_ENV_VAR) {
        if !key.is_empty() {
            debug!("Using API key from {} env var", credentials::API_KEY_ENV_VAR);
            return Ok(key);
        }
    }

    if let Some(key) = settings.api_key.as_deref().filter(|k| !k.is_empty()) {
        debug!("Using API key from settings file");
        return Ok(key.to_string());
    }

    Err(RtmsError::ApiKeyNotFound(api_key_not_found_message()))
}

fn api_key_not_found_message() -> String {
    format!(
        "No RTMS API key found. Please provide one using one of:\n\
         \n\
         1. CLI argument:      rtmsctl --api-key <KEY>\n\
         2. Environment var:   export {}=<KEY>\n\
         3. Settings file:     rtmsctl config set --api-key <KEY>\n",
        credentials::API_KEY_ENV_VAR
    )
}
