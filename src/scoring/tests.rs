use std::sync::Arc;

use super::*;
use crate::embedding::{EmbedderHandle, MiniLmConfig, MockEmbedder};

fn scorer_with(mock: Arc<MockEmbedder>) -> SimilarityScorer {
    SimilarityScorer::new(EmbedderHandle::from_arc(mock))
}

fn stub_scorer() -> SimilarityScorer {
    SimilarityScorer::new(EmbedderHandle::load_eager(MiniLmConfig::stub()).expect("stub loads"))
}

mod cosine_tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let v = [0.3, -0.2, 0.9];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orthogonal_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_opposite_vectors() {
        assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_invariant() {
        let a = [1.0, 2.0, 3.0];
        let b = [10.0, 20.0, 30.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_exact_three_four_five() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[3.0, 4.0]), 0.6);
    }

    #[test]
    fn test_exact_seven_tenths() {
        assert_eq!(
            cosine_similarity(&[1.0, 1.0, 1.0, 1.0], &[4.0, 3.0, 0.0, 0.0]),
            0.7
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}

mod score_tests {
    use super::*;

    #[test]
    fn test_empty_side_scores_zero_without_embedding() {
        let mock = Arc::new(MockEmbedder::new(2).with_fallback(vec![1.0, 0.0]));
        let scorer = scorer_with(Arc::clone(&mock));

        assert_eq!(scorer.score("", "anything at all").expect("score"), 0.0);
        assert_eq!(scorer.score("anything at all", "").expect("score"), 0.0);
        assert_eq!(scorer.score("", "").expect("score"), 0.0);
        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn test_self_similarity_with_stub() {
        let scorer = stub_scorer();
        for text in [
            "A man fights crime in a dark city.",
            "Here's looking at you, kid.",
            "No. I am your father.",
        ] {
            let score = scorer.score(text, text).expect("score");
            assert!((score - 1.0).abs() < 1e-4, "{text}: {score}");
        }
    }

    #[test]
    fn test_score_uses_both_embeddings() {
        let mock = Arc::new(
            MockEmbedder::new(2)
                .with_vector("a", vec![1.0, 0.0])
                .with_vector("b", vec![3.0, 4.0]),
        );
        let scorer = scorer_with(Arc::clone(&mock));

        assert_eq!(scorer.score("a", "b").expect("score"), 0.6);
        assert_eq!(mock.calls(), 2);
    }

    #[test]
    fn test_embedding_failure_propagates() {
        let mock = Arc::new(MockEmbedder::new(2).failing_on("broken"));
        let scorer = scorer_with(mock);

        let err = scorer.score("fine", "broken").expect_err("must fail");
        assert!(matches!(err, ScoringError::Embedding(_)));
    }
}

mod best_match_tests {
    use super::*;

    fn three_way_mock() -> Arc<MockEmbedder> {
        Arc::new(
            MockEmbedder::new(2)
                .with_vector("query", vec![1.0, 0.0])
                .with_vector("weak", vec![1.0, 1.0])
                .with_vector("strong", vec![1.0, 0.1])
                .with_vector("strong twin", vec![1.0, 0.1])
                .with_vector("opposite", vec![-1.0, 0.0]),
        )
    }

    #[test]
    fn test_empty_candidates() {
        let mock = three_way_mock();
        let scorer = scorer_with(Arc::clone(&mock));
        let candidates: Vec<String> = vec![];

        let result = scorer.best_match("query", &candidates).expect("scan");
        assert_eq!(result.best_score, 0.0);
        assert!(result.best_candidate.is_none());
        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let mock = three_way_mock();
        let scorer = scorer_with(Arc::clone(&mock));

        let result = scorer.best_match("", &["strong", "weak"]).expect("scan");
        assert_eq!(result, MatchResult::empty());
        assert_eq!(mock.calls(), 0);
    }

    #[test]
    fn test_picks_maximum() {
        let scorer = scorer_with(three_way_mock());
        let candidates = ["weak", "strong", "opposite"];

        let result = scorer.best_match("query", &candidates).expect("scan");
        assert_eq!(result.best_candidate, Some(&"strong"));
        assert!(result.best_score > 0.99);
    }

    #[test]
    fn test_query_embedded_once() {
        let mock = three_way_mock();
        let scorer = scorer_with(Arc::clone(&mock));
        let candidates = ["weak", "strong", "opposite", "strong twin"];

        scorer.best_match("query", &candidates).expect("scan");

        let seen = mock.seen();
        assert_eq!(seen.iter().filter(|t| *t == "query").count(), 1);
        assert_eq!(seen[0], "query");
        assert_eq!(mock.calls(), 1 + candidates.len());
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let scorer = scorer_with(three_way_mock());

        let result = scorer
            .best_match("query", &["strong twin", "strong"])
            .expect("scan");
        assert_eq!(result.best_candidate, Some(&"strong twin"));

        let result = scorer
            .best_match("query", &["strong", "strong twin"])
            .expect("scan");
        assert_eq!(result.best_candidate, Some(&"strong"));
    }

    #[test]
    fn test_best_score_order_independent() {
        let scorer = scorer_with(three_way_mock());

        let forward = scorer
            .best_match("query", &["weak", "strong", "opposite"])
            .expect("scan");
        let reverse = scorer
            .best_match("query", &["opposite", "strong", "weak"])
            .expect("scan");
        assert_eq!(forward.best_score, reverse.best_score);
    }

    #[test]
    fn test_skips_empty_and_missing_candidates() {
        let mock = three_way_mock();
        let scorer = scorer_with(Arc::clone(&mock));
        let candidates = vec![None, Some(String::new()), Some("weak".to_string())];

        let result = scorer.best_match("query", &candidates).expect("scan");
        assert_eq!(result.best_candidate, Some(&Some("weak".to_string())));
        // query + "weak" only
        assert_eq!(mock.calls(), 2);
    }

    #[test]
    fn test_non_positive_scores_never_match() {
        let scorer = scorer_with(three_way_mock());

        let result = scorer
            .best_match("query", &["opposite", "unknown text"])
            .expect("scan");
        assert_eq!(result.best_score, 0.0);
        assert!(!result.has_match());
    }

    #[test]
    fn test_embedding_failure_aborts_scan() {
        let mock = Arc::new(
            MockEmbedder::new(2)
                .with_vector("query", vec![1.0, 0.0])
                .failing_on("broken"),
        );
        let scorer = scorer_with(mock);

        let result = scorer.best_match("query", &["broken"]);
        assert!(matches!(result, Err(ScoringError::Embedding(_))));
    }

    #[test]
    fn test_score_candidates_reports_skips() {
        let scorer = scorer_with(three_way_mock());
        let candidates = vec![Some("strong".to_string()), None];

        let scores = scorer
            .score_candidates("query", &candidates)
            .expect("scores");
        assert_eq!(scores.len(), 2);
        assert!(!scores[0].was_skipped());
        assert!(scores[1].was_skipped());
        assert_eq!(scores[1].value(), 0.0);
        assert_eq!(scores[1].index, 1);
    }

    #[test]
    fn test_match_result_map() {
        let result = MatchResult {
            best_score: 0.8,
            best_candidate: Some("text"),
        };
        let mapped = result.map(str::len);
        assert_eq!(mapped.best_candidate, Some(4));
        assert_eq!(mapped.best_score, 0.8);
    }
}
