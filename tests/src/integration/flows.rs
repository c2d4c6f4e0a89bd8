//! # Integration Test Flows
//!
//! End-to-end lifecycles across the record store, access gate, and workflow
//! engine, over one shared in-memory ledger:
//!
//! 1. **Submit → list → decrypt → verify**: the full happy path with the
//!    audit trail a caller's session accumulates along the way
//! 2. **Degraded ledger**: reads collapse to empty views, writes fail loudly
//! 3. **Legacy content**: records written by older clients (no status field,
//!    unencoded numeric values) stay listable and decodable

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use insider_store::adapters::{InMemoryLedger, ScriptedSigner};
    use insider_store::ports::outbound::{FixedTimeSource, SequentialIdGenerator};
    use insider_store::{
        AccessGate, AccessGateApi, Base64Codec, ChallengeConfig, RecordStoreApi,
        RecordStoreDependencies, RecordStoreService, SessionContext, StoreConfig, StoreError,
        WorkflowApi,
    };
    use shared_types::{DataCategory, Identity, RecordStatus};

    type Service = RecordStoreService<
        InMemoryLedger,
        Base64Codec,
        Arc<FixedTimeSource>,
        SequentialIdGenerator,
    >;

    struct World {
        ledger: Arc<InMemoryLedger>,
        time: Arc<FixedTimeSource>,
        signer: Arc<ScriptedSigner>,
        service: Service,
        gate: AccessGate<Arc<ScriptedSigner>, Base64Codec, Arc<FixedTimeSource>>,
    }

    fn world() -> World {
        crate::init_tracing();

        let ledger = Arc::new(InMemoryLedger::new());
        let time = Arc::new(FixedTimeSource::new(1_700_000_000));
        let signer = Arc::new(ScriptedSigner::new());

        let service = RecordStoreService::new(
            RecordStoreDependencies {
                ledger: Arc::clone(&ledger),
                codec: Base64Codec,
                time_source: Arc::clone(&time),
                ids: SequentialIdGenerator::new(),
            },
            StoreConfig::default(),
        );

        let gate = AccessGate::new(
            Arc::clone(&signer),
            Base64Codec,
            Arc::clone(&time),
            ChallengeConfig {
                public_key: "0xfeedface".to_string(),
                contract_address: "0x2222".to_string(),
                chain_id: 31_337,
                duration_days: 30,
            },
        );

        World {
            ledger,
            time,
            signer,
            service,
            gate,
        }
    }

    #[tokio::test]
    async fn test_submit_list_decrypt_verify_lifecycle() {
        let w = world();
        let owner = Identity::new("0xOwner");
        let mut session = SessionContext::new();

        // Submit
        let id = w
            .service
            .create(owner.clone(), "ACME".to_string(), DataCategory::Earnings, 42.5)
            .await
            .unwrap();
        session.note_submission(DataCategory::Earnings, "ACME");

        // List: payload hidden, metadata visible
        session.records = w.service.list().await.unwrap();
        assert_eq!(session.records.len(), 1);
        let record = session.records[0].clone();
        assert_eq!(record.status, RecordStatus::Pending);
        assert!(record.encoded_value.starts_with("FHE-"));
        assert_eq!(session.stats().pending, 1);

        // Decrypt: signature over the canonical challenge, then plaintext
        let plaintext = w
            .gate
            .request_decryption(&record, &mut session)
            .await
            .unwrap();
        assert_eq!(plaintext, 42.5);
        let signed = w.signer.signed_messages();
        assert_eq!(signed.len(), 1);
        assert!(signed[0].starts_with("publickey:0xfeedface\n"));
        assert!(signed[0].ends_with("\ndurationDays:30"));

        // Verify: status lands in the ledger and the session cache follows
        let updated = w.service.verify(&id, &owner, &mut session).await.unwrap();
        assert_eq!(updated.status, RecordStatus::Verified);
        assert_eq!(session.stats().verified, 1);
        assert_eq!(session.stats().pending, 0);

        // The session audit trail tells the whole story, newest last
        let lines: Vec<_> = session.activity.iter().cloned().collect();
        assert_eq!(
            lines,
            vec![
                "Submitted earnings data for ACME".to_string(),
                "Decrypted insider information".to_string(),
                "Verified data rec-1".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_two_callers_see_each_others_records() {
        let w = world();
        let alice = Identity::new("0xAlice");
        let bob = Identity::new("0xBob");

        w.service
            .create(alice.clone(), "ACME".to_string(), DataCategory::Merger, 1.0)
            .await
            .unwrap();
        w.time.set(1_700_000_100);
        w.service
            .create(bob.clone(), "Globex".to_string(), DataCategory::Product, 2.0)
            .await
            .unwrap();

        let records = w.service.list().await.unwrap();
        assert_eq!(records.len(), 2);
        // Bob's later record lists first
        assert_eq!(records[0].company, "Globex");
        assert_eq!(records[1].company, "ACME");
    }

    #[tokio::test]
    async fn test_non_owner_cannot_transition_anothers_record() {
        let w = world();
        let alice = Identity::new("0xAlice");
        let bob = Identity::new("0xBob");
        let mut session = SessionContext::new();

        let id = w
            .service
            .create(alice, "ACME".to_string(), DataCategory::Merger, 1.0)
            .await
            .unwrap();

        let err = w.service.verify(&id, &bob, &mut session).await.unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized { .. }));

        let record = w.service.get(&id).await.unwrap().unwrap();
        assert_eq!(record.status, RecordStatus::Pending);
    }

    #[tokio::test]
    async fn test_degraded_ledger_flows() {
        let w = world();
        let owner = Identity::new("0xOwner");

        w.service
            .create(owner.clone(), "ACME".to_string(), DataCategory::Earnings, 9.0)
            .await
            .unwrap();

        // Unavailable ledger: the list view collapses to empty, no error
        w.ledger.set_available(false);
        assert!(w.service.list().await.unwrap().is_empty());

        // Back online: nothing was lost
        w.ledger.set_available(true);
        assert_eq!(w.service.list().await.unwrap().len(), 1);

        // Failing writes make creation fail loudly
        w.ledger.set_fail_writes(true);
        let err = w
            .service
            .create(owner, "Globex".to_string(), DataCategory::Product, 3.0)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::LedgerUnavailable(_)));
    }

    #[tokio::test]
    async fn test_legacy_records_interoperate() {
        let w = world();

        // A record written before the workflow existed: no status field and
        // an unencoded numeric value
        w.ledger.insert_raw(
            "insider_1690000000000-legacy1",
            br#"{"value":"123.45","timestamp":1690000000,"owner":"0xOld","company":"Old Co","dataType":"regulation"}"#.to_vec(),
        );
        w.service
            .index()
            .append_id("1690000000000-legacy1")
            .await
            .unwrap();

        let records = w.service.list().await.unwrap();
        assert_eq!(records.len(), 1);
        let legacy = &records[0];
        assert_eq!(legacy.status, RecordStatus::Pending);

        // Decode falls back to a plain numeric parse for unencoded values
        let mut session = SessionContext::new();
        let plaintext = w
            .gate
            .request_decryption(legacy, &mut session)
            .await
            .unwrap();
        assert_eq!(plaintext, 123.45);
    }

    #[tokio::test]
    async fn test_gate_with_generated_key_material() {
        use insider_store::adapters::{generate_public_key, PUBLIC_KEY_HEX_DIGITS};

        let w = world();
        let public_key = generate_public_key(PUBLIC_KEY_HEX_DIGITS);
        let gate = AccessGate::new(
            Arc::clone(&w.signer),
            Base64Codec,
            Arc::clone(&w.time),
            ChallengeConfig {
                public_key: public_key.clone(),
                contract_address: "0x2222".to_string(),
                chain_id: 31_337,
                duration_days: 30,
            },
        );

        let id = w
            .service
            .create(Identity::new("0xOwner"), "ACME".to_string(), DataCategory::Earnings, 8.25)
            .await
            .unwrap();
        let record = w.service.get(&id).await.unwrap().unwrap();

        let mut session = SessionContext::new();
        let plaintext = gate.request_decryption(&record, &mut session).await.unwrap();
        assert_eq!(plaintext, 8.25);

        // The fabricated key rides the challenge verbatim
        let signed = w.signer.signed_messages();
        assert!(signed[0].starts_with(&format!("publickey:{public_key}\n")));
    }

    #[tokio::test]
    async fn test_session_filtering_over_live_data() {
        let w = world();
        let owner = Identity::new("0xOwner");
        let mut session = SessionContext::new();

        for (company, category) in [
            ("ACME Corp", DataCategory::Earnings),
            ("Globex", DataCategory::Merger),
            ("Acme Labs", DataCategory::Earnings),
        ] {
            w.service
                .create(owner.clone(), company.to_string(), category, 1.0)
                .await
                .unwrap();
        }
        session.records = w.service.list().await.unwrap();

        assert_eq!(session.filter("acme", None).len(), 2);
        assert_eq!(session.filter("", Some(DataCategory::Merger)).len(), 1);
        assert_eq!(session.filter("acme", Some(DataCategory::Merger)).len(), 0);
        assert_eq!(session.filter("", None).len(), 3);
    }
}
