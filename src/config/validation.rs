//! Semantic configuration checks.
//!
//! Serde handles the syntactic side; everything here is a constraint a
//! well-formed TOML file can still violate.

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic violation in an otherwise parseable config.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    MetricsAddress(String),

    #[error("retries.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("route.{field} {value:?} is not a valid URI")]
    RouteUrl { field: &'static str, value: String },

    #[error("route.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,
}

/// Check every semantic constraint, collecting all violations rather than
/// stopping at the first.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config
        .listener
        .bind_address
        .parse::<std::net::SocketAddr>()
        .is_err()
    {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }

    for (field, value) in [
        ("if_url", &config.route.if_url),
        ("else_url", &config.route.else_url),
    ] {
        if value.parse::<axum::http::Uri>().is_err() {
            errors.push(ValidationError::RouteUrl {
                field,
                value: value.clone(),
            });
        }
    }

    if config.route.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn invalid_fields_are_all_reported() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.retries.max_attempts = 0;
        config.route.if_url = "http://bad host/".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
