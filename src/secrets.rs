// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Idempotent publication of the scrape config Secret.
//!
//! The merged scrape configuration is published as a namespaced Secret with
//! the YAML payload under a single data key. The upsert looks the Secret up
//! by name: a 404 leads to a create, any other lookup failure propagates
//! without writing, and an existing Secret is fully replaced. The full
//! overwrite is deliberate - the Secret is generated output, never
//! hand-edited, so there is nothing to field-merge. No resourceVersion
//! conflict handling; concurrent runs are last-writer-wins.

use crate::constants::SCRAPE_CONFIG_SECRET_KEY;
use crate::errors::DiscoveryError;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use kube::api::{Api, PostParams};
use kube::Client;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Build the scrape config Secret for a serialized configuration payload.
#[must_use]
pub fn build_scrape_secret(name: &str, payload: Vec<u8>) -> Secret {
    let mut data = BTreeMap::new();
    data.insert(SCRAPE_CONFIG_SECRET_KEY.to_string(), ByteString(payload));

    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        data: Some(data),
        ..Default::default()
    }
}

/// Create or fully replace the scrape config Secret.
///
/// Idempotent across repeated runs with identical inputs: the second run
/// performs a replace that leaves the Secret in the same final state.
///
/// # Errors
///
/// Returns [`DiscoveryError::Reconcile`] if the lookup fails with anything
/// other than not-found, or if the create/replace call fails.
pub async fn upsert_secret(
    client: &Client,
    namespace: &str,
    secret: Secret,
) -> Result<Secret, DiscoveryError> {
    let name = secret
        .metadata
        .name
        .clone()
        .unwrap_or_default();
    let api: Api<Secret> = Api::namespaced(client.clone(), namespace);

    debug!(
        namespace = %namespace,
        name = %name,
        "Looking up scrape config secret"
    );

    let reconcile_err = |source: kube::Error| DiscoveryError::Reconcile {
        namespace: namespace.to_string(),
        name: name.clone(),
        source,
    };

    match api.get(&name).await {
        Ok(_) => {
            info!("Replacing secret {}/{}", namespace, name);
            api.replace(&name, &PostParams::default(), &secret)
                .await
                .map_err(reconcile_err)
        }
        Err(kube::Error::Api(ae)) if ae.code == 404 => {
            info!("Creating secret {}/{}", namespace, name);
            api.create(&PostParams::default(), &secret)
                .await
                .map_err(reconcile_err)
        }
        Err(e) => Err(reconcile_err(e)),
    }
}

#[cfg(test)]
#[path = "secrets_tests.rs"]
mod secrets_tests;
