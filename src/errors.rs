// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error taxonomy for the probe discovery pipeline.
//!
//! Every stage of the pipeline wraps the first error it encounters into one
//! of these variants and forwards it; there is no local recovery or retry
//! anywhere. The whole run is a single atomic attempt, so `main` only ever
//! sees one `DiscoveryError`, logs it, fires the best-effort Mattermost
//! notification and exits non-zero.

use thiserror::Error;

/// Errors that can abort a discovery run.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// A required environment variable is missing or empty.
    #[error("{name} environment variable is not set")]
    MissingEnvVar {
        /// Name of the missing variable
        name: &'static str,
    },

    /// A Route53 `ListResourceRecordSets` call failed.
    ///
    /// Transport and authentication failures abort the whole zone listing
    /// immediately; pages fetched so far are discarded.
    #[error("failed to list records for hosted zone '{zone_id}': {source}")]
    Transport {
        /// The hosted zone being enumerated when the call failed
        zone_id: String,
        /// Underlying AWS SDK error
        #[source]
        source: anyhow::Error,
    },

    /// The Kubernetes client could not be constructed.
    #[error("failed to build Kubernetes client: {source}")]
    ClientInit {
        /// Underlying kube configuration or client error
        #[source]
        source: anyhow::Error,
    },

    /// The scrape config template could not be read from disk.
    #[error("failed to read scrape config template '{path}': {source}")]
    TemplateIo {
        /// Path of the template file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The scrape config template is not valid YAML for the expected schema.
    #[error("failed to parse scrape config template: {source}")]
    TemplateParse {
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// The merged scrape config could not be serialized back to YAML.
    #[error("failed to serialize merged scrape config: {source}")]
    TemplateSerialize {
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// The template has fewer jobs than the merge requires.
    ///
    /// The template must provide one job for the derived probe targets plus
    /// one per configured bind server. The original positional merge would
    /// index out of bounds here; this is the declared replacement.
    #[error("scrape config template has {available} jobs but {required} are required (1 probe job + {bind_servers} bind server jobs)")]
    MergeMissingJob {
        /// Jobs required by the merge
        required: usize,
        /// Jobs present in the template
        available: usize,
        /// Number of configured bind servers
        bind_servers: usize,
    },

    /// A job designated to receive targets has no static config entry.
    #[error("scrape config job '{job_name}' has no static_configs entry to receive targets")]
    MergeMissingStaticConfig {
        /// Name of the offending job
        job_name: String,
    },

    /// The Secret lookup, create or update failed.
    #[error("failed to reconcile secret '{namespace}/{name}': {source}")]
    Reconcile {
        /// Namespace of the Secret
        namespace: String,
        /// Name of the Secret
        name: String,
        /// Underlying Kubernetes API error
        #[source]
        source: kube::Error,
    },
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
