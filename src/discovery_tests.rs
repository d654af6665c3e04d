// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `discovery.rs`

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::discovery::{run, RunOutcome};
    use crate::errors::DiscoveryError;
    use crate::route53::{PageCursor, RecordLister, RecordPage, ZoneRecord};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const PUBLIC_ZONE: &str = "Z1PUBLIC";
    const PRIVATE_ZONE: &str = "Z2PRIVATE";

    fn record(name: &str) -> ZoneRecord {
        ZoneRecord {
            name: name.to_string(),
            record_type: "CNAME".to_string(),
        }
    }

    fn test_config() -> Config {
        let vars = HashMap::from([
            ("PUBLIC_HOSTED_ZONE_ID", PUBLIC_ZONE),
            ("PRIVATE_HOSTED_ZONE_ID", PRIVATE_ZONE),
            ("PROMETHEUS_NAMESPACE", "monitoring"),
            ("PROMETHEUS_SECRET_NAME", "blackbox-scrape-config"),
            ("MATTERMOST_ALERTS_HOOK", "https://chat.example.com/hooks/xyz"),
        ]);
        Config::from_lookup(|name| vars.get(name).map(ToString::to_string))
            .expect("test config should build")
    }

    /// Lister serving one single-page record set per zone, recording the
    /// order zones were listed in.
    struct ZoneMapLister {
        zones: HashMap<String, Result<Vec<ZoneRecord>, String>>,
        listed_zones: Mutex<Vec<String>>,
    }

    impl ZoneMapLister {
        fn new(zones: Vec<(&str, Result<Vec<ZoneRecord>, String>)>) -> Self {
            Self {
                zones: zones
                    .into_iter()
                    .map(|(id, records)| (id.to_string(), records))
                    .collect(),
                listed_zones: Mutex::new(Vec::new()),
            }
        }

        fn listed(&self) -> Vec<String> {
            self.listed_zones.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecordLister for ZoneMapLister {
        async fn list_page(
            &self,
            zone_id: &str,
            _cursor: &PageCursor,
        ) -> Result<RecordPage, DiscoveryError> {
            self.listed_zones.lock().unwrap().push(zone_id.to_string());

            match self.zones.get(zone_id) {
                Some(Ok(records)) => Ok(RecordPage {
                    records: records.clone(),
                    is_truncated: false,
                    next_cursor: None,
                }),
                Some(Err(message)) => Err(DiscoveryError::Transport {
                    zone_id: zone_id.to_string(),
                    source: anyhow::anyhow!(message.clone()),
                }),
                None => panic!("unexpected zone listed: {zone_id}"),
            }
        }
    }

    #[tokio::test]
    async fn test_empty_derivation_short_circuits_as_success() {
        // Meta records and non-gRPC private records derive nothing; the run
        // must succeed without building a cluster client or touching the
        // template (neither is available in this test environment).
        let lister = ZoneMapLister::new(vec![
            (PUBLIC_ZONE, Ok(vec![record("_acme-challenge.example.com.")])),
            (PRIVATE_ZONE, Ok(vec![record("db.internal.example.com.")])),
        ]);

        let outcome = run(&test_config(), &lister).await.unwrap();

        assert_eq!(outcome, RunOutcome::NoTargets);
        assert_eq!(lister.listed(), vec![PUBLIC_ZONE, PRIVATE_ZONE]);
    }

    #[tokio::test]
    async fn test_excluding_every_record_also_short_circuits() {
        let mut config = test_config();
        config.excluded_targets = vec!["app.example.com.".to_string()];

        let lister = ZoneMapLister::new(vec![
            (PUBLIC_ZONE, Ok(vec![record("app.example.com.")])),
            (PRIVATE_ZONE, Ok(vec![])),
        ]);

        let outcome = run(&config, &lister).await.unwrap();
        assert_eq!(outcome, RunOutcome::NoTargets);
    }

    #[tokio::test]
    async fn test_public_zone_failure_aborts_before_private_listing() {
        let lister = ZoneMapLister::new(vec![
            (PUBLIC_ZONE, Err("access denied".to_string())),
            (PRIVATE_ZONE, Ok(vec![record("a-grpc.example.com.")])),
        ]);

        let result = run(&test_config(), &lister).await;

        match result {
            Err(DiscoveryError::Transport { zone_id, .. }) => {
                assert_eq!(zone_id, PUBLIC_ZONE);
            }
            other => panic!("expected Transport error, got {other:?}"),
        }
        assert_eq!(lister.listed(), vec![PUBLIC_ZONE]);
    }

    #[tokio::test]
    async fn test_private_zone_failure_aborts_the_run() {
        let lister = ZoneMapLister::new(vec![
            (PUBLIC_ZONE, Ok(vec![record("app.example.com.")])),
            (PRIVATE_ZONE, Err("throttled".to_string())),
        ]);

        let result = run(&test_config(), &lister).await;

        match result {
            Err(DiscoveryError::Transport { zone_id, .. }) => {
                assert_eq!(zone_id, PRIVATE_ZONE);
            }
            other => panic!("expected Transport error, got {other:?}"),
        }
        assert_eq!(lister.listed(), vec![PUBLIC_ZONE, PRIVATE_ZONE]);
    }

    #[tokio::test]
    async fn test_additional_targets_alone_prevent_the_short_circuit() {
        // With no records at all but one additional target, the run must
        // proceed past derivation. It then fails at cluster client
        // construction in this environment, which proves the short-circuit
        // was not taken.
        let mut config = test_config();
        config.additional_targets = vec!["extra:1234".to_string()];
        // Point developer mode at a kubeconfig that cannot exist
        config.developer_mode = true;

        let lister = ZoneMapLister::new(vec![
            (PUBLIC_ZONE, Ok(vec![])),
            (PRIVATE_ZONE, Ok(vec![])),
        ]);

        let previous_home = std::env::var_os("KUBECONFIG");
        std::env::set_var("KUBECONFIG", "/nonexistent/kubeconfig-for-test");
        let result = run(&config, &lister).await;
        match previous_home {
            Some(value) => std::env::set_var("KUBECONFIG", value),
            None => std::env::remove_var("KUBECONFIG"),
        }

        assert!(
            matches!(result, Err(DiscoveryError::ClientInit { .. })),
            "expected ClientInit error, got {result:?}"
        );
    }
}
