// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Probesync - Blackbox probe target discovery
//!
//! Probesync reconciles a Prometheus blackbox probe configuration against the
//! live set of DNS-registered service endpoints. Each invocation performs one
//! reconciliation pass and exits:
//!
//! 1. Enumerate all records of a public and a private Route53 hosted zone,
//!    following pagination to completion.
//! 2. Derive probe targets from naming conventions: public records become
//!    HTTP ping URLs, gRPC-marked private records become `host:port` pairs,
//!    operator-supplied additional targets are appended verbatim.
//! 3. Merge the derived targets into a templated scrape configuration.
//! 4. Idempotently create or replace the Kubernetes Secret Prometheus reads
//!    the scrape configuration from.
//!
//! ## Modules
//!
//! - [`config`] - environment-variable configuration
//! - [`route53`] - paginated hosted zone enumeration
//! - [`targets`] - probe target derivation rules
//! - [`scrape_config`] - template model, parsing and target merge
//! - [`secrets`] - idempotent Secret upsert
//! - [`cluster`] - Kubernetes client construction
//! - [`discovery`] - pipeline orchestration
//! - [`notify`] - best-effort Mattermost failure notifications
//! - [`errors`] - the `DiscoveryError` taxonomy

pub mod cluster;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod notify;
pub mod route53;
pub mod scrape_config;
pub mod secrets;
pub mod targets;
