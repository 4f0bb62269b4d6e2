//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the link
//! router. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LinksConfig {
    /// Which links are accepted and which routes are registered.
    pub links: LinkRoutingConfig,

    /// Feature switches consulted by route actions.
    pub features: FeatureConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Link acceptance and route registration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LinkRoutingConfig {
    /// Hosts whose links are handled (exact match, case-insensitive).
    /// The first entry is used to resolve bare paths.
    pub allowed_hosts: Vec<String>,

    /// Register routes that only exist in the Jetpack-powered app.
    pub jetpack_powered_routes: bool,
}

impl Default for LinkRoutingConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: vec![
                "wordpress.com".to_string(),
                "www.wordpress.com".to_string(),
                "apps.wordpress.com".to_string(),
            ],
            jetpack_powered_routes: true,
        }
    }
}

/// Feature switches.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FeatureConfig {
    /// When false, Reader links only open the static Reader tab.
    pub jetpack_features_enabled: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            jetpack_features_enabled: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record dispatch counters.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}
