//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Hosts are bare host names, not URLs
//! - Log level is one the subscriber understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LinksConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::LinksConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("links.allowed_hosts must not be empty")]
    NoAllowedHosts,

    #[error("links.allowed_hosts entry `{0}` must be a bare host name")]
    InvalidHost(String),

    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &LinksConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.links.allowed_hosts.is_empty() {
        errors.push(ValidationError::NoAllowedHosts);
    }
    for host in &config.links.allowed_hosts {
        if !is_bare_host(host) {
            errors.push(ValidationError::InvalidHost(host.clone()));
        }
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_bare_host(host: &str) -> bool {
    !host.is_empty()
        && !host.contains("://")
        && !host.contains(['/', '?', '#', ' ', '@'])
}
