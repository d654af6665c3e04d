// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Process configuration from environment variables.
//!
//! The configuration is built exactly once at startup and passed by reference
//! into every pipeline stage; no ambient/global state. Missing required
//! variables fail fast before any external call is made.
//!
//! Required variables:
//! - `PUBLIC_HOSTED_ZONE_ID` - Route53 hosted zone with the public records
//! - `PRIVATE_HOSTED_ZONE_ID` - Route53 hosted zone with the private records
//! - `PROMETHEUS_NAMESPACE` - namespace of the scrape config Secret
//! - `PROMETHEUS_SECRET_NAME` - name of the scrape config Secret
//! - `MATTERMOST_ALERTS_HOOK` - webhook for failure notifications
//!
//! Optional variables:
//! - `EXCLUDED_TARGETS` - comma-separated record names to skip
//! - `ADDITIONAL_TARGETS` - comma-separated targets appended verbatim
//! - `BIND_SERVERS` - comma-separated bind server targets
//! - `DEVELOPER_MODE` - `"true"` selects the local kubeconfig, default `"false"`

use crate::errors::DiscoveryError;

/// Immutable configuration for one discovery run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Route53 hosted zone id for the public zone
    pub public_hosted_zone_id: String,
    /// Route53 hosted zone id for the private zone
    pub private_hosted_zone_id: String,
    /// Namespace the scrape config Secret lives in
    pub prometheus_namespace: String,
    /// Name of the scrape config Secret
    pub prometheus_secret_name: String,
    /// Mattermost webhook URL for failure notifications
    pub mattermost_alerts_hook: String,
    /// Record names excluded from target derivation (exact match)
    pub excluded_targets: Vec<String>,
    /// Operator-supplied targets appended verbatim after derived targets
    pub additional_targets: Vec<String>,
    /// Bind server targets, one per dedicated template job
    pub bind_servers: Vec<String>,
    /// Use the local kubeconfig instead of in-cluster credentials
    pub developer_mode: bool,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::MissingEnvVar`] for the first required
    /// variable that is absent or empty.
    pub fn from_env() -> Result<Self, DiscoveryError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Factored out of [`Config::from_env`] so tests can supply variables
    /// without mutating the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::MissingEnvVar`] for the first required
    /// variable that is absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DiscoveryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            public_hosted_zone_id: required(&lookup, "PUBLIC_HOSTED_ZONE_ID")?,
            private_hosted_zone_id: required(&lookup, "PRIVATE_HOSTED_ZONE_ID")?,
            prometheus_namespace: required(&lookup, "PROMETHEUS_NAMESPACE")?,
            prometheus_secret_name: required(&lookup, "PROMETHEUS_SECRET_NAME")?,
            mattermost_alerts_hook: required(&lookup, "MATTERMOST_ALERTS_HOOK")?,
            excluded_targets: comma_list(lookup("EXCLUDED_TARGETS")),
            additional_targets: comma_list(lookup("ADDITIONAL_TARGETS")),
            bind_servers: comma_list(lookup("BIND_SERVERS")),
            developer_mode: lookup("DEVELOPER_MODE").as_deref() == Some("true"),
        })
    }
}

/// Fetch a required variable, treating an empty value as absent.
fn required<F>(lookup: &F, name: &'static str) -> Result<String, DiscoveryError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DiscoveryError::MissingEnvVar { name }),
    }
}

/// Split an optional comma-separated variable into a list, preserving order.
///
/// An unset or empty variable yields an empty list. Entries are taken as-is,
/// without trimming, matching the exact-equality exclusion semantics.
fn comma_list(value: Option<String>) -> Vec<String> {
    match value {
        Some(v) if !v.is_empty() => v.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
