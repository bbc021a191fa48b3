//! Integration specifications for the bio-analysis and recommendation flow.
//!
//! Scenarios drive the public service facade and HTTP router end to end:
//! score a bio, persist the profile, and turn the vector into ranked vault
//! suggestions without reaching into private modules.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use remit_ai::workflows::domain::UserId;
    use remit_ai::workflows::emotion::{
        analysis_router, AnalysisService, EmotionAnalyzer, ProfileRecord, ProfileRepository,
        ProfileRepositoryError,
    };
    use remit_ai::workflows::vaults::{Vault, VaultId};

    #[derive(Default, Clone)]
    pub(super) struct MemoryProfiles {
        records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
    }

    impl ProfileRepository for MemoryProfiles {
        fn upsert(&self, record: ProfileRecord) -> Result<ProfileRecord, ProfileRepositoryError> {
            let mut guard = self.records.lock().expect("profile mutex poisoned");
            guard.insert(record.user_id.clone(), record.clone());
            Ok(record)
        }

        fn fetch(
            &self,
            user_id: &UserId,
        ) -> Result<Option<ProfileRecord>, ProfileRepositoryError> {
            let guard = self.records.lock().expect("profile mutex poisoned");
            Ok(guard.get(user_id).cloned())
        }
    }

    pub(super) fn build_service() -> (AnalysisService<MemoryProfiles>, Arc<MemoryProfiles>) {
        let profiles = Arc::new(MemoryProfiles::default());
        let service = AnalysisService::new(EmotionAnalyzer::local_only(), profiles.clone());
        (service, profiles)
    }

    pub(super) fn build_router() -> axum::Router {
        let (service, _) = build_service();
        analysis_router(Arc::new(service))
    }

    pub(super) fn catalog() -> Vec<Vault> {
        [
            ("vault-education", "education"),
            ("vault-healthcare", "healthcare"),
            ("vault-water", "water"),
            ("vault-solar", "solar_energy"),
            ("vault-livelihood", "livelihood"),
            ("vault-relief", "disaster_relief"),
        ]
        .into_iter()
        .map(|(id, kind)| Vault {
            id: VaultId(id.to_string()),
            kind: kind.to_string(),
            description: format!("{kind} projects"),
        })
        .collect()
    }

    pub(super) const HOPEFUL_BIO: &str = "I hope my children achieve a better future. \
        Education will improve their tomorrow. I believe in their potential.";
}

mod analysis {
    use super::common::*;
    use remit_ai::workflows::domain::UserId;
    use remit_ai::workflows::emotion::{AnalyzerModel, EmotionVector};

    #[tokio::test]
    async fn hopeful_bio_scores_hope_dominant() {
        let (service, _) = build_service();

        let outcome = service.analyze(HOPEFUL_BIO).await.expect("analysis succeeds");

        assert_eq!(outcome.model, AnalyzerModel::Keyword);
        let (dominant, score) = outcome.emotions.dominant();
        assert_eq!(dominant.label(), "hope");
        assert!(score > 0.0);
    }

    #[tokio::test]
    async fn unmatched_bio_falls_back_to_neutral_default() {
        let (service, _) = build_service();

        let outcome = service
            .analyze("Attached is the invoice for last quarter")
            .await
            .expect("analysis succeeds");

        assert_eq!(outcome.emotions, EmotionVector::NEUTRAL_DEFAULT);
    }

    #[tokio::test]
    async fn profile_persists_the_latest_vector() {
        let (service, profiles) = build_service();
        let user_id = UserId("sender-42".to_string());

        let outcome = service.analyze(HOPEFUL_BIO).await.expect("analysis succeeds");
        service
            .save_profile(user_id.clone(), HOPEFUL_BIO.to_string(), outcome.emotions)
            .expect("profile stored");

        use remit_ai::workflows::emotion::ProfileRepository;
        let stored = profiles
            .fetch(&user_id)
            .expect("repo fetch")
            .expect("record present");
        assert_eq!(stored.emotions, outcome.emotions);
    }
}

mod recommendation {
    use super::common::*;
    use remit_ai::workflows::vaults::{recommend, DiasporaLocation};

    #[tokio::test]
    async fn hope_dominant_analysis_ranks_solar_for_us_senders() {
        let (service, _) = build_service();
        let outcome = service.analyze(HOPEFUL_BIO).await.expect("analysis succeeds");

        let set = recommend(
            &outcome.emotions,
            DiasporaLocation::UnitedStates,
            &catalog(),
        );

        assert!(set
            .ranked
            .iter()
            .any(|entry| entry.vault.kind == "solar_energy" && entry.score > 0.0));
        assert!(set.ranked.len() <= 3);
        let suggestion = set.suggestion.expect("suggestion present");
        assert!(suggestion.starts_with("Hope detected!"));
    }

    #[tokio::test]
    async fn neutral_default_still_produces_recommendations() {
        let (service, _) = build_service();
        let outcome = service
            .analyze("Attached is the invoice for last quarter")
            .await
            .expect("analysis succeeds");

        let set = recommend(&outcome.emotions, DiasporaLocation::Other, &catalog());

        // The neutral baseline keeps every category positive, so the
        // recommender always has something to offer.
        assert_eq!(set.ranked.len(), 3);
        assert!(set.suggestion.is_some());
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[tokio::test]
    async fn analyze_endpoint_roundtrip() {
        let router = build_router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({ "text": HOPEFUL_BIO })).expect("serialize"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("success"), Some(&json!(true)));
        assert_eq!(payload.get("model"), Some(&json!("keyword")));
    }

    #[tokio::test]
    async fn analyze_endpoint_rejects_oversized_bio() {
        let router = build_router();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({ "text": "a".repeat(5001) })).expect("serialize"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
