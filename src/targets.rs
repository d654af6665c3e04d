// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Derivation of blackbox probe targets from zone records.
//!
//! Pure transform from the two enumerated record sets plus the operator's
//! include/exclude lists into an ordered list of probe target strings:
//!
//! - public records become HTTP probe URLs against the service ping endpoint
//! - private records become gRPC `host:port` targets, but only when their
//!   name carries the `-grpc.` marker; other private records are skipped
//! - operator-supplied additional targets are appended verbatim
//!
//! Records whose name starts with `_` (DNS-verification/meta records) never
//! produce a target. Exclusion is exact string equality against the raw
//! record name, trailing dot included.

use crate::constants::{GRPC_MARKER, GRPC_PORT, META_RECORD_PREFIX, PING_PATH};
use crate::route53::ZoneRecord;
use tracing::debug;

/// Derive the ordered probe target list for one discovery run.
///
/// Output ordering is: public targets in provider order, then qualifying
/// private targets in provider order, then `additional_targets` in the given
/// order. An empty result means the run has nothing to publish; the caller
/// short-circuits instead of writing an empty config.
#[must_use]
pub fn derive_targets(
    public_records: &[ZoneRecord],
    private_records: &[ZoneRecord],
    additional_targets: &[String],
    excluded_targets: &[String],
) -> Vec<String> {
    let mut targets = Vec::new();

    for record in public_records {
        if is_candidate(record, excluded_targets) {
            targets.push(format!("{}{}", record.name, PING_PATH));
        }
    }

    for record in private_records {
        if is_candidate(record, excluded_targets) && record.name.contains(GRPC_MARKER) {
            targets.push(format!("{}:{}", record.name, GRPC_PORT));
        }
    }

    for target in additional_targets {
        debug!(target = %target, "Adding additional target");
        targets.push(target.clone());
    }

    targets
}

/// A record qualifies unless it is excluded or is a meta record.
fn is_candidate(record: &ZoneRecord, excluded_targets: &[String]) -> bool {
    !is_excluded(excluded_targets, &record.name)
        && !record.name.starts_with(META_RECORD_PREFIX)
}

/// Exact-equality membership test against the exclusion list.
fn is_excluded(excluded_targets: &[String], name: &str) -> bool {
    excluded_targets.iter().any(|excluded| excluded == name)
}

#[cfg(test)]
#[path = "targets_tests.rs"]
mod targets_tests;
