// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for probesync.
//!
//! This module contains all numeric and string constants used throughout the
//! codebase. Constants are organized by category for easy maintenance.

// ============================================================================
// Target Derivation Constants
// ============================================================================

/// Health endpoint appended to every public record to form an HTTP probe URL
pub const PING_PATH: &str = "/api/v4/system/ping";

/// gRPC port appended to qualifying private records
pub const GRPC_PORT: u16 = 9090;

/// Substring that marks a private record as a gRPC endpoint
pub const GRPC_MARKER: &str = "-grpc.";

/// Prefix of DNS-verification/meta records that never become probe targets
pub const META_RECORD_PREFIX: &str = "_";

// ============================================================================
// Route53 Pagination Constants
// ============================================================================

/// Record name the first listing request starts at.
///
/// Listing begins past the zone apex SOA/NS block, matching the zones'
/// service-record naming layout.
pub const INITIAL_RECORD_NAME: &str = "c";

/// Record type the first listing request starts at
pub const INITIAL_RECORD_TYPE: &str = "CNAME";

// ============================================================================
// Scrape Configuration Constants
// ============================================================================

/// Path of the scrape config template, shipped alongside the binary
pub const SCRAPE_CONFIG_TEMPLATE_PATH: &str = "scrapeconfig.yml";

/// Data key under which the merged scrape config is stored in the Secret
pub const SCRAPE_CONFIG_SECRET_KEY: &str = "scrape_config_secret.yaml";
