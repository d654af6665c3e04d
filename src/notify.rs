// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Best-effort failure notifications to a Mattermost webhook.
//!
//! When a run fails, a short message describing the error is posted to the
//! configured incoming webhook. Delivery is best-effort only: the caller
//! logs a delivery failure and moves on - it never masks the original error
//! or changes the process exit code.

use anyhow::{anyhow, Context, Result};
use serde_json::json;
use tracing::debug;

/// Post a failure notification to the Mattermost webhook.
///
/// The message body is `"<summary>: <error>"`, sent as the standard
/// incoming-webhook `text` payload.
///
/// # Errors
///
/// Returns an error if the POST fails or the webhook answers with a
/// non-success status. Callers treat this as log-only.
pub async fn send_failure_notification(
    http: &reqwest::Client,
    hook_url: &str,
    summary: &str,
    error: &dyn std::fmt::Display,
) -> Result<()> {
    let payload = json!({ "text": format!("{summary}: {error}") });

    debug!(hook = %hook_url, "Sending Mattermost failure notification");

    let response = http
        .post(hook_url)
        .json(&payload)
        .send()
        .await
        .context("Failed to send Mattermost notification")?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!(
            "Mattermost webhook returned HTTP {status} for failure notification"
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod notify_tests;
