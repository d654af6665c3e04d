// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Paginated enumeration of Route53 hosted zone records.
//!
//! This module provides the zone enumerator for the discovery pipeline. The
//! Route53 `ListResourceRecordSets` API returns records in pages; each page
//! carries a truncation flag and, when truncated, a continuation cursor
//! (next record name, type and identifier). [`list_all_records`] drives the
//! cursor to completion and returns the full record set for one zone.
//!
//! The actual AWS call is behind the [`RecordLister`] trait so the pagination
//! loop can be exercised in unit tests without AWS credentials.

use crate::constants::{INITIAL_RECORD_NAME, INITIAL_RECORD_TYPE};
use crate::errors::DiscoveryError;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_route53::types::RrType;
use aws_sdk_route53::Client as Route53Client;
use tracing::debug;

/// Which hosted zone a record set was enumerated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneVisibility {
    /// The public hosted zone
    Public,
    /// The private hosted zone
    Private,
}

impl std::fmt::Display for ZoneVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// One DNS record as returned by the provider.
///
/// The name is kept raw, including any trailing dot Route53 appends; the
/// exclusion list matches against it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    /// Fully qualified record name
    pub name: String,
    /// Record type (CNAME, A, TXT, ...)
    pub record_type: String,
}

/// Continuation cursor for a truncated listing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Record name to resume the listing at
    pub record_name: String,
    /// Record type to resume the listing at
    pub record_type: String,
    /// Record identifier, set when the zone uses weighted/latency records
    pub record_identifier: Option<String>,
}

impl PageCursor {
    /// Cursor for the first listing request of a zone.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            record_name: INITIAL_RECORD_NAME.to_string(),
            record_type: INITIAL_RECORD_TYPE.to_string(),
            record_identifier: None,
        }
    }
}

/// One page of a record listing.
#[derive(Debug, Clone)]
pub struct RecordPage {
    /// Records in this page, in provider order
    pub records: Vec<ZoneRecord>,
    /// Whether more pages follow
    pub is_truncated: bool,
    /// Cursor for the next page; expected when `is_truncated` is true
    pub next_cursor: Option<PageCursor>,
}

/// A source of record listing pages for one hosted zone.
///
/// Production code uses [`Route53Lister`]; tests substitute a scripted
/// implementation to verify the pagination loop.
#[async_trait]
pub trait RecordLister {
    /// Fetch one page of records, starting at `cursor`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Transport`] if the provider call fails.
    async fn list_page(
        &self,
        zone_id: &str,
        cursor: &PageCursor,
    ) -> Result<RecordPage, DiscoveryError>;
}

/// List every record in a hosted zone, following pagination to completion.
///
/// Issues one request per page, re-issuing with the response's continuation
/// cursor until the truncation flag clears, and concatenates all pages in
/// order. Records are returned exactly as the provider sent them; nothing is
/// pruned or rewritten here. The first failing call aborts the whole listing
/// with no retry.
///
/// # Errors
///
/// Returns [`DiscoveryError::Transport`] if any page request fails.
pub async fn list_all_records<L: RecordLister + ?Sized>(
    lister: &L,
    zone_id: &str,
) -> Result<Vec<ZoneRecord>, DiscoveryError> {
    let mut cursor = PageCursor::initial();
    let mut all_records = Vec::new();
    let mut page_count = 0;

    loop {
        page_count += 1;
        let page = lister.list_page(zone_id, &cursor).await?;

        let records_in_page = page.records.len();
        all_records.extend(page.records);

        debug!(
            zone_id = %zone_id,
            page = page_count,
            records_in_page = records_in_page,
            total_records = all_records.len(),
            "Fetched page from Route53"
        );

        if !page.is_truncated {
            break;
        }
        match page.next_cursor {
            Some(next) => cursor = next,
            // Truncated response without a cursor cannot be resumed
            None => break,
        }
    }

    debug!(
        zone_id = %zone_id,
        total_pages = page_count,
        total_records = all_records.len(),
        "Completed paginated record listing"
    );

    Ok(all_records)
}

/// [`RecordLister`] backed by the AWS Route53 SDK.
#[derive(Debug, Clone)]
pub struct Route53Lister {
    client: Route53Client,
}

impl Route53Lister {
    /// Build a lister from the default AWS credential chain.
    pub async fn new() -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            client: Route53Client::new(&sdk_config),
        }
    }

    /// Build a lister around an existing SDK client.
    #[must_use]
    pub fn from_client(client: Route53Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordLister for Route53Lister {
    async fn list_page(
        &self,
        zone_id: &str,
        cursor: &PageCursor,
    ) -> Result<RecordPage, DiscoveryError> {
        let mut request = self
            .client
            .list_resource_record_sets()
            .hosted_zone_id(zone_id)
            .start_record_name(&cursor.record_name)
            .start_record_type(RrType::from(cursor.record_type.as_str()));

        if let Some(identifier) = &cursor.record_identifier {
            request = request.start_record_identifier(identifier);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DiscoveryError::Transport {
                zone_id: zone_id.to_string(),
                source: anyhow::Error::new(e),
            })?;

        let records = response
            .resource_record_sets()
            .iter()
            .map(|rrset| ZoneRecord {
                name: rrset.name().to_string(),
                record_type: rrset.r#type().as_str().to_string(),
            })
            .collect();

        let next_cursor = response.next_record_name().map(|name| PageCursor {
            record_name: name.to_string(),
            record_type: response
                .next_record_type()
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| INITIAL_RECORD_TYPE.to_string()),
            record_identifier: response.next_record_identifier().map(str::to_string),
        });

        Ok(RecordPage {
            records,
            is_truncated: response.is_truncated(),
            next_cursor,
        })
    }
}

#[cfg(test)]
#[path = "route53_tests.rs"]
mod route53_tests;
