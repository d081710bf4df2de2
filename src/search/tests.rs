//! Search Module Tests
//!
//! ## Test Scopes
//! - **Suggestion scoring**: tier ordering, length bonus, tie-breaks, cap.
//! - **Highlighting**: segment boundaries for suggestion rendering.
//! - **Ranking**: provider matching and relevance ordering shared by both tiers.
//! - **Remote / Pipeline**: error classification and fallback behavior.
//! - **Handlers**: HTTP endpoints called directly with extractors.
//!
//! *Time-dependent tests run on a paused clock.*

#[cfg(test)]
mod tests {
    use crate::catalog::defaults::static_services;
    use crate::catalog::service_catalog::{CatalogHandle, ServiceCatalog};
    use crate::catalog::types::{Provider, ProviderSnapshot};
    use crate::config::SearchConfig;
    use crate::search::engine::{EXACT_MATCH_SCORE, MATCH_COUNT_SCORE, rank_matches};
    use crate::search::handlers::{SearchParams, handle_search, handle_suggest};
    use crate::search::highlight::{HighlightSegment, highlight};
    use crate::search::local::local_search;
    use crate::search::pipeline::SearchPipeline;
    use crate::search::remote::RemoteLookup;
    use crate::search::suggest::{score_candidate, scored_suggestions, suggest};
    use crate::search::tokenizer::{normalize, query_words};
    use crate::search::types::{
        NO_MATCHES_MESSAGE, ResultSource, SearchError, SearchOutcome, degraded_message,
    };
    use crate::store::testing::{ScriptedStore, Step, provider_doc};
    use crate::store::types::ProviderStore;

    use axum::extract::Query;
    use axum::{Extension, Json};
    use std::sync::Arc;
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn scored(query: &str, candidate: &str) -> f64 {
        let query = normalize(query);
        let words = query_words(&query);
        score_candidate(&query, &words, &normalize(candidate))
    }

    fn providers(docs: &[crate::catalog::types::ProviderDocument]) -> Vec<Provider> {
        docs.iter().filter_map(Provider::from_document).collect()
    }

    fn pipeline_over(store: Arc<ScriptedStore>) -> SearchPipeline {
        let remote = RemoteLookup::new(store as Arc<dyn ProviderStore>, TIMEOUT);
        SearchPipeline::new(Arc::new(remote), CatalogHandle::with_defaults())
    }

    fn names(results: &[crate::search::types::SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.provider.name.as_str()).collect()
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  PlUmBiNg \t"), "plumbing");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_query_words_discard_empty_tokens() {
        assert_eq!(query_words("car   repair"), vec!["car", "repair"]);
        assert!(query_words("").is_empty());
    }

    // ============================================================
    // SUGGESTION SCORING TESTS
    // ============================================================

    #[test]
    fn test_match_tiers_are_strictly_ordered() {
        let exact = scored("paint", "paint");
        let prefix = scored("paint", "painting");
        let substring = scored("paint", "house painting");
        let overlap = scored("house paint", "painting house");
        let none = scored("paint", "plumbing");

        assert_eq!(exact, 100.0 + 15.0);
        assert_eq!(prefix, 80.0 + 12.0);
        assert_eq!(substring, 60.0 + 6.0);
        assert_eq!(overlap, 40.0 + 6.0);
        assert_eq!(none, 0.0);
        assert!(exact > prefix && prefix > substring && substring > overlap && overlap > none);
    }

    #[test]
    fn test_partial_word_overlap() {
        // One of two words found: half the overlap weight plus the length bonus.
        assert_eq!(scored("car wash", "car repair"), 20.0 + 10.0);
    }

    #[test]
    fn test_length_bonus_never_negative() {
        let long = "emergency generator repair and maintenance";
        assert_eq!(scored("generator", long), 60.0);
    }

    #[test]
    fn test_plumb_suggests_plumbing_first() {
        let catalog = ServiceCatalog::from_services(static_services());

        let suggestions = suggest("plumb", &catalog, 8);

        assert_eq!(suggestions.first().map(String::as_str), Some("plumbing"));
    }

    #[test]
    fn test_plumb_over_small_catalog() {
        let catalog = ServiceCatalog::from_services(["plumbing", "plumbing repair", "electrical"]);

        let suggestions = scored_suggestions("plumb", &catalog, 8);

        let order: Vec<&str> = suggestions.iter().map(|s| s.service.as_str()).collect();
        assert_eq!(order, vec!["plumbing", "plumbing repair"]);
        assert_eq!(suggestions[0].score, 92.0);
        assert_eq!(suggestions[1].score, 85.0);
    }

    #[test]
    fn test_suggestions_ignore_case_and_whitespace() {
        let catalog = ServiceCatalog::from_services(static_services());

        let plain = scored_suggestions("tutor", &catalog, 8);
        let noisy = scored_suggestions("  TuToR ", &catalog, 8);

        assert!(!plain.is_empty());
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_suggestions_capped_at_limit() {
        let services: Vec<String> = (0..30).map(|i| format!("repair {}", i)).collect();
        let catalog = ServiceCatalog::from_services(&services);

        let suggestions = suggest("repair", &catalog, 8);

        assert_eq!(suggestions.len(), 8);
        assert!(suggest("repair", &catalog, 0).is_empty());
    }

    #[test]
    fn test_blank_query_has_no_suggestions() {
        let catalog = ServiceCatalog::from_services(static_services());
        assert!(suggest("", &catalog, 8).is_empty());
        assert!(suggest("    ", &catalog, 8).is_empty());
    }

    #[test]
    fn test_ties_prefer_shorter_then_alphabetical() {
        // All long enough to earn no length bonus, so each scores exactly 60.
        let catalog = ServiceCatalog::from_services([
            "computer repair services and more",
            "generator repair service x",
            "boat repair service zzzzzz",
        ]);

        let suggestions = scored_suggestions("repair", &catalog, 8);

        assert!(suggestions.iter().all(|s| s.score == 60.0));
        let order: Vec<&str> = suggestions.iter().map(|s| s.service.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "boat repair service zzzzzz",
                "generator repair service x",
                "computer repair services and more",
            ]
        );
    }

    #[test]
    fn test_suggestions_keep_display_casing() {
        let catalog = ServiceCatalog::from_services(["Arabic Tutoring"]);
        assert_eq!(suggest("arabic", &catalog, 8), vec!["Arabic Tutoring"]);
    }

    // ============================================================
    // HIGHLIGHT TESTS
    // ============================================================

    #[test]
    fn test_highlight_marks_match() {
        let segments = highlight("Plumbing", "plumb");

        assert_eq!(
            segments,
            vec![
                HighlightSegment { text: "Plumb".into(), matched: true },
                HighlightSegment { text: "ing".into(), matched: false },
            ]
        );
    }

    #[test]
    fn test_highlight_every_occurrence() {
        let segments = highlight("repair car repair", "REPAIR");

        let matched: Vec<&str> = segments
            .iter()
            .filter(|s| s.matched)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(matched, vec!["repair", "repair"]);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "repair car repair");
    }

    #[test]
    fn test_highlight_escapes_pattern_characters() {
        let segments = highlight("c++ tutoring", "c++");
        assert_eq!(segments[0], HighlightSegment { text: "c++".into(), matched: true });
    }

    #[test]
    fn test_highlight_degenerate_inputs() {
        assert!(highlight("", "x").is_empty());
        assert_eq!(
            highlight("cooking", "  "),
            vec![HighlightSegment { text: "cooking".into(), matched: false }]
        );
    }

    // ============================================================
    // RANKING TESTS
    // ============================================================

    #[test]
    fn test_rank_matches_whole_service_only() {
        let providers = providers(&[
            provider_doc("p1", "Ahmed", &["plumbing", "electrical"]),
            provider_doc("p2", "Sara", &["emergency plumbing"]),
        ]);

        let results = rank_matches("plumbing", &providers);

        assert_eq!(names(&results), vec!["Ahmed"]);
        assert_eq!(results[0].matching_services, vec!["plumbing"]);
    }

    #[test]
    fn test_exact_casing_ranks_first() {
        let providers = providers(&[
            provider_doc("p1", "Lower", &["tutoring"]),
            provider_doc("p2", "Typed", &["Tutoring"]),
        ]);

        let results = rank_matches(" Tutoring ", &providers);

        assert_eq!(names(&results), vec!["Typed", "Lower"]);
        assert_eq!(results[0].relevance_score, EXACT_MATCH_SCORE + MATCH_COUNT_SCORE);
        assert_eq!(results[1].relevance_score, MATCH_COUNT_SCORE);
    }

    #[test]
    fn test_more_matching_services_rank_higher() {
        let providers = providers(&[
            provider_doc("p1", "Once", &["cleaning"]),
            provider_doc("p2", "Twice", &["Cleaning", "CLEANING"]),
        ]);

        let results = rank_matches("CLEANING ", &providers);

        assert_eq!(names(&results), vec!["Twice", "Once"]);
        assert_eq!(results[0].matching_services, vec!["Cleaning", "CLEANING"]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let providers = providers(&[
            provider_doc("p1", "First", &["cooking"]),
            provider_doc("p2", "Second", &["cooking"]),
            provider_doc("p3", "Third", &["cooking"]),
        ]);

        let results = rank_matches("cooking", &providers);

        assert_eq!(names(&results), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_local_search_without_snapshot() {
        assert!(local_search("plumbing", None).is_empty());

        let snapshot = ProviderSnapshot::default();
        assert!(local_search("plumbing", Some(&snapshot)).is_empty());
    }

    // ============================================================
    // REMOTE LOOKUP TESTS
    // ============================================================

    #[tokio::test]
    async fn test_remote_finds_tutoring_provider() {
        let store = ScriptedStore::returning(vec![
            provider_doc("p1", "Ahmed", &["plumbing"]),
            provider_doc("p2", "Fatima", &["tutoring", "translation"]),
        ]);
        let remote = RemoteLookup::new(store as Arc<dyn ProviderStore>, TIMEOUT);

        let results = remote.search("tutoring").await.unwrap();

        assert_eq!(names(&results), vec!["Fatima"]);
        assert_eq!(results[0].matching_services, vec!["tutoring"]);
    }

    #[tokio::test]
    async fn test_remote_empty_collection_is_an_error() {
        let remote = RemoteLookup::new(ScriptedStore::returning(Vec::new()), TIMEOUT);

        let result = remote.search("plumbing").await;

        assert_eq!(result, Err(SearchError::CollectionEmpty));
    }

    #[tokio::test]
    async fn test_remote_zero_matches_is_not_an_error() {
        let store = ScriptedStore::returning(vec![provider_doc("p1", "A", &["plumbing"])]);
        let remote = RemoteLookup::new(store, TIMEOUT);

        let results = remote.search("astrology").await.unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_remote_fetch_failure_is_transient() {
        let store = ScriptedStore::scripted(
            vec![Step::Fail {
                delay: Duration::ZERO,
                message: "connection refused".into(),
            }],
            Vec::new(),
        );
        let remote = RemoteLookup::new(store, TIMEOUT);

        let result = remote.search("plumbing").await;

        assert!(matches!(result, Err(SearchError::TransientFetch(ref m)) if m.contains("refused")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_times_out() {
        let store = ScriptedStore::scripted(
            vec![Step::Respond {
                delay: Duration::from_secs(30),
                docs: vec![provider_doc("p1", "Late", &["plumbing"])],
            }],
            Vec::new(),
        );
        let remote = RemoteLookup::new(store, TIMEOUT);

        let started = tokio::time::Instant::now();
        let result = remote.search("plumbing").await;

        assert_eq!(result, Err(SearchError::Timeout(TIMEOUT)));
        assert!(started.elapsed() >= TIMEOUT);
        assert!(started.elapsed() < Duration::from_secs(30));
    }

    // ============================================================
    // PIPELINE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_blank_term_skips_lookup() {
        let store = ScriptedStore::returning(vec![provider_doc("p1", "A", &["plumbing"])]);
        let pipeline = pipeline_over(store.clone());

        assert_eq!(pipeline.run("   ").await, SearchOutcome::Empty);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_hit_is_resolved_remotely() {
        let store = ScriptedStore::returning(vec![provider_doc("p7", "Remote Fatima", &["tutoring"])]);
        let pipeline = pipeline_over(store);

        let outcome = pipeline.run("Tutoring").await;

        assert_eq!(outcome.source(), Some(ResultSource::Remote));
        assert_eq!(outcome.term(), Some("tutoring"));
        assert_eq!(names(outcome.results()), vec!["Remote Fatima"]);
        assert_eq!(outcome.message(), None);
    }

    #[tokio::test]
    async fn test_remote_miss_falls_through_to_cache() {
        // Remote answers but nobody there offers catering; the bundled cache does.
        let store = ScriptedStore::returning(vec![provider_doc("p1", "A", &["plumbing"])]);
        let pipeline = pipeline_over(store);

        let outcome = pipeline.run("catering").await;

        assert_eq!(outcome.source(), Some(ResultSource::LocalCache));
        assert_eq!(names(outcome.results()), vec!["Omar Abdullah"]);
        assert_eq!(outcome.message(), None);
    }

    #[tokio::test]
    async fn test_no_match_anywhere() {
        let store = ScriptedStore::returning(vec![provider_doc("p1", "A", &["plumbing"])]);
        let pipeline = pipeline_over(store);

        let outcome = pipeline.run("astrology").await;

        assert_eq!(outcome, SearchOutcome::NoMatches { term: "astrology".into() });
        assert_eq!(outcome.message().as_deref(), Some(NO_MATCHES_MESSAGE));
    }

    #[tokio::test]
    async fn test_empty_collection_falls_back_to_local_results() {
        let store = ScriptedStore::returning(Vec::new());
        let pipeline = pipeline_over(store);
        let fallback = pipeline.catalog().fallback();
        let expected = local_search("catering", Some(&*fallback));

        let outcome = pipeline.run("catering").await;

        match &outcome {
            SearchOutcome::FallenBack { results, cause, .. } => {
                assert_eq!(*cause, SearchError::CollectionEmpty);
                assert_eq!(results, &expected);
            }
            other => panic!("expected fallback, got {:?}", other),
        }
        assert_eq!(names(outcome.results()), vec!["Omar Abdullah"]);
        assert_eq!(
            outcome.message().as_deref(),
            Some("Search service unavailable, showing 1 offline result")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back() {
        let store = ScriptedStore::scripted(
            vec![Step::Respond {
                delay: Duration::from_secs(60),
                docs: vec![provider_doc("p1", "Late", &["plumbing"])],
            }],
            Vec::new(),
        );
        let pipeline = pipeline_over(store);

        let outcome = pipeline.run("plumbing").await;

        assert!(matches!(
            outcome,
            SearchOutcome::FallenBack { cause: SearchError::Timeout(_), .. }
        ));
        assert_eq!(names(outcome.results()), vec!["Ahmed Hassan"]);
    }

    #[tokio::test]
    async fn test_fallback_with_nothing_cached_keeps_degraded_wording() {
        let store = ScriptedStore::returning(Vec::new());
        let pipeline = pipeline_over(store);

        let outcome = pipeline.run("astrology").await;

        assert!(outcome.results().is_empty());
        let message = outcome.message().unwrap();
        assert_ne!(message, NO_MATCHES_MESSAGE);
        assert!(message.contains("0 offline results"));
    }

    #[test]
    fn test_degraded_message_pluralization() {
        assert_eq!(degraded_message(1), "Search service unavailable, showing 1 offline result");
        assert_eq!(degraded_message(3), "Search service unavailable, showing 3 offline results");
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_search_applies_limit() {
        let store = ScriptedStore::returning(vec![
            provider_doc("p1", "A", &["cleaning"]),
            provider_doc("p2", "B", &["cleaning"]),
            provider_doc("p3", "C", &["cleaning"]),
        ]);
        let pipeline = Arc::new(pipeline_over(store));

        let Json(response) = handle_search(
            Query(SearchParams { q: "cleaning".into(), limit: Some(2) }),
            Extension(pipeline),
        )
        .await;

        assert_eq!(response.total_count, 3);
        assert_eq!(response.count, 2);
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.source, Some(ResultSource::Remote));
        assert!(response.message.is_none());
    }

    #[tokio::test]
    async fn test_handle_search_reports_degraded_mode() {
        let pipeline = Arc::new(pipeline_over(ScriptedStore::returning(Vec::new())));

        let Json(response) = handle_search(
            Query(SearchParams { q: "plumbing".into(), limit: None }),
            Extension(pipeline),
        )
        .await;

        assert_eq!(response.source, Some(ResultSource::LocalCache));
        assert_eq!(response.count, 1);
        assert!(response.message.unwrap().contains("offline"));
    }

    #[tokio::test]
    async fn test_handle_suggest_caps_and_highlights() {
        let pipeline = Arc::new(pipeline_over(ScriptedStore::returning(Vec::new())));
        let config = Arc::new(SearchConfig::default());

        let Json(response) = handle_suggest(
            Query(SearchParams { q: "repair".into(), limit: Some(100) }),
            Extension(pipeline),
            Extension(config.clone()),
        )
        .await;

        assert!(!response.suggestions.is_empty());
        assert!(response.suggestions.len() <= config.max_suggestions);
        for item in &response.suggestions {
            assert!(item.segments.iter().any(|s| s.matched), "{} not highlighted", item.service);
        }
    }
}
