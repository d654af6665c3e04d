// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Kubernetes client construction.
//!
//! The client is only built after targets have been derived, so a run that
//! short-circuits on an empty target list never touches the cluster.
//! `DEVELOPER_MODE=true` selects the local kubeconfig for running the job
//! outside the cluster; the default is in-cluster service account
//! credentials.

use crate::errors::DiscoveryError;
use kube::config::KubeConfigOptions;
use kube::{Client, Config};
use tracing::debug;

/// Build the Kubernetes client for the secret upsert.
///
/// # Errors
///
/// Returns [`DiscoveryError::ClientInit`] if the selected configuration
/// cannot be loaded or the client cannot be constructed from it.
pub async fn cluster_client(developer_mode: bool) -> Result<Client, DiscoveryError> {
    let config = if developer_mode {
        debug!("Developer mode enabled, loading local kubeconfig");
        Config::from_kubeconfig(&KubeConfigOptions::default())
            .await
            .map_err(|e| DiscoveryError::ClientInit {
                source: anyhow::Error::new(e),
            })?
    } else {
        debug!("Loading in-cluster Kubernetes configuration");
        Config::incluster().map_err(|e| DiscoveryError::ClientInit {
            source: anyhow::Error::new(e),
        })?
    };

    Client::try_from(config).map_err(|e| DiscoveryError::ClientInit {
        source: anyhow::Error::new(e),
    })
}
