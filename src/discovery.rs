// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The discovery pipeline: enumerate, derive, merge, publish.
//!
//! One invocation performs exactly one reconciliation pass, strictly in
//! order: list the public zone, list the private zone, derive probe targets,
//! short-circuit if nothing was derived, build the cluster client, load and
//! parse the template, merge, serialize and upsert the Secret. The first
//! failing stage aborts the run; no stage is retried and no partial result
//! is ever published.

use crate::cluster::cluster_client;
use crate::config::Config;
use crate::constants::SCRAPE_CONFIG_TEMPLATE_PATH;
use crate::errors::DiscoveryError;
use crate::route53::{list_all_records, RecordLister, ZoneVisibility};
use crate::scrape_config::{load_template, merge_targets, serialize_jobs};
use crate::secrets::{build_scrape_secret, upsert_secret};
use crate::targets::derive_targets;
use tracing::info;

/// How a successful discovery run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Targets were derived and the Secret was created or replaced
    Published,
    /// No targets were derived; the merge and upsert were skipped
    NoTargets,
}

/// Run one full reconciliation pass.
///
/// The empty-target short-circuit is an explicit success, not an error: a
/// run that derives nothing exits before the cluster client is built or the
/// template is read.
///
/// # Errors
///
/// Returns the first [`DiscoveryError`] any stage produces.
pub async fn run<L: RecordLister + ?Sized>(
    config: &Config,
    lister: &L,
) -> Result<RunOutcome, DiscoveryError> {
    info!(
        zone_id = %config.public_hosted_zone_id,
        visibility = %ZoneVisibility::Public,
        "Listing hosted zone records"
    );
    let public_records = list_all_records(lister, &config.public_hosted_zone_id).await?;

    info!(
        zone_id = %config.private_hosted_zone_id,
        visibility = %ZoneVisibility::Private,
        "Listing hosted zone records"
    );
    let private_records = list_all_records(lister, &config.private_hosted_zone_id).await?;

    let targets = derive_targets(
        &public_records,
        &private_records,
        &config.additional_targets,
        &config.excluded_targets,
    );
    if targets.is_empty() {
        info!("No targets to register, canceling run");
        return Ok(RunOutcome::NoTargets);
    }
    info!(count = targets.len(), "Derived probe targets");

    let client = cluster_client(config.developer_mode).await?;

    let jobs = load_template(SCRAPE_CONFIG_TEMPLATE_PATH)?;
    let merged = merge_targets(jobs, targets, &config.bind_servers)?;
    let payload = serialize_jobs(&merged)?;

    let secret = build_scrape_secret(&config.prometheus_secret_name, payload);
    upsert_secret(&client, &config.prometheus_namespace, secret).await?;

    info!(
        namespace = %config.prometheus_namespace,
        name = %config.prometheus_secret_name,
        "Successfully updated probe targets"
    );
    Ok(RunOutcome::Published)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod discovery_tests;
