//! Configuration validation with aggregated errors.
//! Every problem is collected so a broken file is reported in one pass.

use tracing::{error, info};

use crate::auth::token_type::TokenType;
use crate::config::settings::{ClientConfig, Endpoints, HttpConfig, LoggingConfig};
use crate::observability::metrics::get_metrics;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Returns Ok(()) or Err(Vec<String>) containing all issues.
pub async fn validate_client_config(cfg: &ClientConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(err) = cfg.auth.token_type.parse::<TokenType>() {
        errors.push(format!("auth.token_type: {}", err));
    }
    if cfg.auth.refresh_token.trim().is_empty() {
        errors.push("auth.refresh_token must not be empty".to_string());
    }

    validate_http(&cfg.http, &mut errors);
    validate_endpoints(&cfg.endpoints, &mut errors);
    if let Some(logging) = &cfg.logging {
        validate_logging(logging, &mut errors);
    }

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        let metrics = get_metrics().await;
        metrics.config_validation_errors.inc_by(errors.len() as u64);
        for e in &errors {
            error!("config error: {}", e);
        }
        Err(errors)
    }
}

fn validate_http(http: &HttpConfig, errors: &mut Vec<String>) {
    if http.timeout_ms == Some(0) {
        errors.push("http.timeout_ms must be > 0".to_string());
    }
}

fn validate_endpoints(endpoints: &Endpoints, errors: &mut Vec<String>) {
    let all = [
        ("legacy_refresh_url", &endpoints.legacy_refresh_url),
        ("developer_refresh_url", &endpoints.developer_refresh_url),
        ("player_cache", &endpoints.player_cache),
        ("client", &endpoints.client),
        ("stash", &endpoints.stash),
        ("reports", &endpoints.reports),
        ("linking", &endpoints.linking),
    ];
    for (name, url) in all {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("endpoints.{} must be an absolute http(s) url, got '{}'", name, url));
        }
    }
}

fn validate_logging(logging: &LoggingConfig, errors: &mut Vec<String>) {
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(format!(
            "logging.level '{}' is not one of {:?}",
            logging.level, LOG_LEVELS
        ));
    }
}
