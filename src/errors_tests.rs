// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `errors.rs`

#[cfg(test)]
mod tests {
    use crate::errors::DiscoveryError;
    use std::error::Error;

    #[test]
    fn test_missing_env_var_names_the_variable() {
        let err = DiscoveryError::MissingEnvVar {
            name: "PROMETHEUS_NAMESPACE",
        };
        assert_eq!(
            err.to_string(),
            "PROMETHEUS_NAMESPACE environment variable is not set"
        );
    }

    #[test]
    fn test_transport_error_carries_zone_and_source() {
        let err = DiscoveryError::Transport {
            zone_id: "Z1TESTZONE".to_string(),
            source: anyhow::anyhow!("connection reset"),
        };

        assert!(err.to_string().contains("Z1TESTZONE"));
        assert!(err.source().is_some(), "source chain should be preserved");
    }

    #[test]
    fn test_merge_missing_job_spells_out_the_arithmetic() {
        let err = DiscoveryError::MergeMissingJob {
            required: 3,
            available: 2,
            bind_servers: 2,
        };

        let message = err.to_string();
        assert!(message.contains("2 jobs"));
        assert!(message.contains("3 are required"));
        assert!(message.contains("2 bind server jobs"));
    }

    #[test]
    fn test_template_io_error_names_the_path() {
        let err = DiscoveryError::TemplateIo {
            path: "scrapeconfig.yml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("scrapeconfig.yml"));
    }
}
