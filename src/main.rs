// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use probesync::config::Config;
use probesync::discovery::{run, RunOutcome};
use probesync::errors::DiscoveryError;
use probesync::notify::send_failure_notification;
use probesync::route53::Route53Lister;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    // Build Tokio runtime with custom thread names
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("probesync")
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to build Tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async_main())
}

async fn async_main() -> ExitCode {
    // Initialize logging with custom format
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to INFO level
    // Example: RUST_LOG=debug probesync
    //
    // Respects RUST_LOG_FORMAT environment variable for output format
    // Example: RUST_LOG_FORMAT=json probesync
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    info!("Starting blackbox probe target discovery");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Environment variable validation failed");
            // The hook itself may be the missing variable; notify only if it
            // can be read directly.
            if let Ok(hook) = std::env::var("MATTERMOST_ALERTS_HOOK") {
                if !hook.is_empty() {
                    notify_failure(&hook, "Environment variable validation failed", &e).await;
                }
            }
            return ExitCode::FAILURE;
        }
    };

    let lister = Route53Lister::new().await;

    match run(&config, &lister).await {
        Ok(RunOutcome::Published) => {
            info!("Discovery run completed, scrape config published");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoTargets) => {
            info!("Discovery run completed with no targets, nothing published");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Blackbox target discovery failed");
            notify_failure(
                &config.mattermost_alerts_hook,
                "The blackbox target discovery failed",
                &e,
            )
            .await;
            ExitCode::FAILURE
        }
    }
}

/// Fire the Mattermost notification, logging (only) a delivery failure.
async fn notify_failure(hook: &str, summary: &str, error: &DiscoveryError) {
    let http = reqwest::Client::new();
    if let Err(notify_err) = send_failure_notification(&http, hook, summary, error).await {
        error!(error = %notify_err, "Failed to send Mattermost error notification");
    }
}
