// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Prometheus scrape configuration template: model, parsing and merge.
//!
//! The template is an ordered list of scrape job definitions shipped
//! alongside the binary as `scrapeconfig.yml`. The merge overwrites the
//! static target list of designated jobs and passes every other field
//! through untouched:
//!
//! - job 0 receives the full derived probe target list
//! - job `i + 1` receives the single-element list `[bind_servers[i]]`
//!
//! The binding is positional because the shipped template carries no stable
//! job identifier the binary could match on. A template with fewer jobs than
//! `1 + bind_servers.len()`, or a designated job without a static config
//! entry, yields a declared merge error instead of an index panic.

use crate::errors::DiscoveryError;
use serde::{Deserialize, Serialize};

/// One scrape job definition from the template.
///
/// Field set mirrors the Prometheus scrape config schema subset the template
/// uses; everything except `static_configs[0].targets` is pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeJob {
    /// Whether Prometheus honors timestamps exposed by the target
    pub honor_timestamps: bool,
    /// Job identifier, informational only for the merge
    pub job_name: String,
    /// Metrics path on the exporter (e.g. `/probe`)
    pub metrics_path: String,
    /// Probe module parameters
    pub params: JobParams,
    /// Relabeling rules, passed through unchanged
    pub relabel_configs: Vec<RelabelConfig>,
    /// Scrape scheme (http/https)
    pub scheme: String,
    /// Scrape interval (e.g. `30s`)
    pub scrape_interval: String,
    /// Scrape timeout (e.g. `10s`)
    pub scrape_timeout: String,
    /// Static target lists; the first entry receives the merged targets
    pub static_configs: Vec<StaticConfig>,
}

/// Probe module parameters of a scrape job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobParams {
    /// Blackbox exporter modules to probe with
    pub module: Vec<String>,
}

/// One relabeling rule. All fields are optional in the template and are
/// omitted from the serialized output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelabelConfig {
    /// Labels the rule reads from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_labels: Option<Vec<String>>,
    /// Label the rule writes to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_label: Option<String>,
    /// Replacement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

/// One static config block of a scrape job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticConfig {
    /// Probe targets; overwritten by the merge for designated jobs
    pub targets: Vec<String>,
    /// Labels attached to every target in this block
    pub labels: StaticLabels,
}

/// Labels of a static config block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticLabels {
    /// Probe module label
    pub module: String,
}

/// Read and parse the scrape config template from disk.
///
/// # Errors
///
/// Returns [`DiscoveryError::TemplateIo`] if the file cannot be read and
/// [`DiscoveryError::TemplateParse`] if it is not valid YAML for the
/// expected schema.
pub fn load_template(path: &str) -> Result<Vec<ScrapeJob>, DiscoveryError> {
    let raw = std::fs::read_to_string(path).map_err(|e| DiscoveryError::TemplateIo {
        path: path.to_string(),
        source: e,
    })?;
    parse_template(&raw)
}

/// Parse a scrape config template from its YAML text.
///
/// # Errors
///
/// Returns [`DiscoveryError::TemplateParse`] on malformed input.
pub fn parse_template(raw: &str) -> Result<Vec<ScrapeJob>, DiscoveryError> {
    serde_yaml::from_str(raw).map_err(|e| DiscoveryError::TemplateParse { source: e })
}

/// Serialize the merged job list back to the template's YAML representation.
///
/// # Errors
///
/// Returns [`DiscoveryError::TemplateSerialize`] if serialization fails.
pub fn serialize_jobs(jobs: &[ScrapeJob]) -> Result<Vec<u8>, DiscoveryError> {
    serde_yaml::to_string(jobs)
        .map(String::into_bytes)
        .map_err(|e| DiscoveryError::TemplateSerialize { source: e })
}

/// Inject derived targets and bind server targets into the template jobs.
///
/// Deterministic and side-effect-free: consumes the parsed template, writes
/// the target lists into the designated job slots and returns the merged
/// list. All other job fields pass through unchanged.
///
/// # Errors
///
/// Returns [`DiscoveryError::MergeMissingJob`] if the template has fewer
/// jobs than `1 + bind_servers.len()`, and
/// [`DiscoveryError::MergeMissingStaticConfig`] if a designated job has no
/// static config block to receive its targets.
pub fn merge_targets(
    mut jobs: Vec<ScrapeJob>,
    targets: Vec<String>,
    bind_servers: &[String],
) -> Result<Vec<ScrapeJob>, DiscoveryError> {
    let required = 1 + bind_servers.len();
    if jobs.len() < required {
        return Err(DiscoveryError::MergeMissingJob {
            required,
            available: jobs.len(),
            bind_servers: bind_servers.len(),
        });
    }

    set_job_targets(&mut jobs[0], targets)?;
    for (i, bind_server) in bind_servers.iter().enumerate() {
        set_job_targets(&mut jobs[i + 1], vec![bind_server.clone()])?;
    }

    Ok(jobs)
}

/// Overwrite the first static config's target list of one job.
fn set_job_targets(job: &mut ScrapeJob, targets: Vec<String>) -> Result<(), DiscoveryError> {
    match job.static_configs.first_mut() {
        Some(static_config) => {
            static_config.targets = targets;
            Ok(())
        }
        None => Err(DiscoveryError::MergeMissingStaticConfig {
            job_name: job.job_name.clone(),
        }),
    }
}

#[cfg(test)]
#[path = "scrape_config_tests.rs"]
mod scrape_config_tests;
