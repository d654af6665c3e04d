// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `targets.rs`

#[cfg(test)]
mod tests {
    use crate::route53::ZoneRecord;
    use crate::targets::derive_targets;

    fn record(name: &str) -> ZoneRecord {
        ZoneRecord {
            name: name.to_string(),
            record_type: "CNAME".to_string(),
        }
    }

    #[test]
    fn test_public_record_becomes_ping_url() {
        let targets = derive_targets(&[record("foo.example.com")], &[], &[], &[]);
        assert_eq!(targets, vec!["foo.example.com/api/v4/system/ping"]);
    }

    #[test]
    fn test_private_grpc_record_becomes_host_port() {
        let targets = derive_targets(&[], &[record("foo-grpc.example.com")], &[], &[]);
        assert_eq!(targets, vec!["foo-grpc.example.com:9090"]);
    }

    #[test]
    fn test_private_record_without_grpc_marker_is_skipped() {
        let targets = derive_targets(&[], &[record("foo.example.com")], &[], &[]);
        assert!(targets.is_empty());
    }

    #[test]
    fn test_meta_records_never_produce_targets() {
        let public = vec![record("_acme-challenge.example.com."), record("a.example.com.")];
        let private = vec![record("_dmarc-grpc.example.com.")];

        let targets = derive_targets(&public, &private, &[], &[]);

        assert_eq!(targets, vec!["a.example.com./api/v4/system/ping"]);
    }

    #[test]
    fn test_excluded_record_never_appears_regardless_of_zone() {
        let excluded = vec![
            "skip.example.com.".to_string(),
            "skip-grpc.example.com.".to_string(),
        ];
        let public = vec![record("skip.example.com."), record("keep.example.com.")];
        let private = vec![record("skip-grpc.example.com."), record("keep-grpc.example.com.")];

        let targets = derive_targets(&public, &private, &[], &excluded);

        assert_eq!(
            targets,
            vec![
                "keep.example.com./api/v4/system/ping",
                "keep-grpc.example.com.:9090",
            ]
        );
    }

    #[test]
    fn test_exclusion_is_exact_match_not_suffix_match() {
        // The excluded name lacks the trailing dot the provider returns, so
        // it must not match.
        let excluded = vec!["app.example.com".to_string()];
        let public = vec![record("app.example.com.")];

        let targets = derive_targets(&public, &[], &[], &excluded);

        assert_eq!(targets, vec!["app.example.com./api/v4/system/ping"]);
    }

    #[test]
    fn test_additional_targets_are_appended_verbatim() {
        let additional = vec![
            "custom.example.com:8443".to_string(),
            "https://status.example.com".to_string(),
        ];

        let targets = derive_targets(&[record("a.example.com.")], &[], &additional, &[]);

        assert_eq!(
            targets,
            vec![
                "a.example.com./api/v4/system/ping",
                "custom.example.com:8443",
                "https://status.example.com",
            ]
        );
    }

    #[test]
    fn test_ordering_is_public_then_private_then_additional() {
        let public = vec![record("p1.example.com."), record("p2.example.com.")];
        let private = vec![
            record("q1-grpc.example.com."),
            record("plain.example.com."),
            record("q2-grpc.example.com."),
        ];
        let additional = vec!["extra:1234".to_string()];

        let targets = derive_targets(&public, &private, &additional, &[]);

        assert_eq!(
            targets,
            vec![
                "p1.example.com./api/v4/system/ping",
                "p2.example.com./api/v4/system/ping",
                "q1-grpc.example.com.:9090",
                "q2-grpc.example.com.:9090",
                "extra:1234",
            ]
        );
    }

    #[test]
    fn test_no_input_yields_empty_target_list() {
        let targets = derive_targets(&[], &[], &[], &[]);
        assert!(targets.is_empty());
    }
}
