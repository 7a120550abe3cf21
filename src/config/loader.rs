use std::{fs, path::Path};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::settings::{ClientConfig, LoggingConfig};
use crate::config::validator;
use crate::error::ConfigError;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::DEFAULT_HTTP_TIMEOUT_MS;

/// Load and validate config from YAML file
pub async fn file_to_config(path: &Path) -> Result<ClientConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    let expanded = expand_env_vars(&content);
    parse_config(expanded).await
}

pub async fn parse_config(content: String) -> Result<ClientConfig> {
    let metrics = get_metrics().await;
    let mut client_config: ClientConfig = serde_yaml::from_str(&content)
        .inspect_err(|e| {
            error!("parse config error: {}", e);
            metrics.parse_failures.inc();
        })?;

    // Apply defaults
    if client_config.logging.is_none() {
        client_config.logging = Some(LoggingConfig::default());
    }
    if client_config.http.timeout_ms.is_none() {
        client_config.http.timeout_ms = Some(DEFAULT_HTTP_TIMEOUT_MS);
    }

    debug!("validation config ...");
    validator::validate_client_config(&client_config)
        .await
        .map_err(ConfigError::Invalid)?;

    Ok(client_config)
}

/// Replace `${VAR}` and `${VAR:default}` with environment values
pub fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}").expect("static regex");
    re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}
