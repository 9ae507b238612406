use std::sync::Arc;

use super::*;
use crate::embedding::{EmbedderHandle, MiniLmConfig, MockEmbedder};

const CANDIDATE: &str = "A man fights crime in a dark city.";

fn stub_checker() -> OriginalityChecker {
    let handle = EmbedderHandle::load_eager(MiniLmConfig::stub()).expect("stub loads");
    OriginalityChecker::new(SimilarityScorer::new(handle))
}

fn boundary_checker() -> (OriginalityChecker, Arc<MockEmbedder>) {
    let mock = Arc::new(
        MockEmbedder::new(4)
            .with_vector("synopsis", vec![1.0, 1.0, 1.0, 1.0])
            .with_vector("seven tenths", vec![4.0, 3.0, 0.0, 0.0])
            .with_vector("identical", vec![1.0, 1.0, 1.0, 1.0]),
    );
    let scorer = SimilarityScorer::new(EmbedderHandle::from_arc(mock.clone()));
    (OriginalityChecker::new(scorer), mock)
}

#[test]
fn test_default_threshold() {
    assert_eq!(stub_checker().threshold(), 0.7);
}

#[test]
fn test_with_threshold_validates() {
    assert!(stub_checker().with_threshold(0.5).is_ok());
    assert!(matches!(
        stub_checker().with_threshold(1.2),
        Err(ScoringError::InvalidThreshold(_))
    ));
}

#[test]
fn test_near_paraphrase_is_blocked() {
    let checker = stub_checker();
    let verdict = checker
        .check_originality("A lone man fights crime in a dark city.", &[CANDIDATE])
        .expect("check");

    assert!(verdict.score > 0.7, "score {}", verdict.score);
    assert_eq!(verdict.matched_text, CANDIDATE);
    assert!(checker.is_blocked(&verdict));
}

#[test]
fn test_unrelated_synopsis_not_blocked() {
    let checker = stub_checker();
    let verdict = checker
        .check_originality("Two sisters open a bakery by the seaside.", &[CANDIDATE])
        .expect("check");

    assert!(verdict.score < 0.5, "score {}", verdict.score);
    assert!(!checker.is_blocked(&verdict));
}

#[test]
fn test_empty_candidates_not_blocked() {
    let checker = stub_checker();
    let overviews: Vec<String> = Vec::new();
    let verdict = checker
        .check_originality("Anything at all", &overviews)
        .expect("check");

    assert_eq!(verdict.score, 0.0);
    assert_eq!(verdict.matched_text, "");
    assert!(!checker.is_blocked(&verdict));
}

#[test]
fn test_exactly_threshold_is_not_blocked() {
    let (checker, _) = boundary_checker();
    let verdict = checker
        .check_originality("synopsis", &["seven tenths"])
        .expect("check");

    assert_eq!(verdict.score, 0.7);
    assert!(!checker.is_blocked(&verdict));
}

#[test]
fn test_above_threshold_is_blocked() {
    let (checker, _) = boundary_checker();
    let verdict = checker
        .check_originality("synopsis", &["seven tenths", "identical"])
        .expect("check");

    assert!((verdict.score - 1.0).abs() < 1e-6);
    assert_eq!(verdict.matched_text, "identical");
    assert!(checker.is_blocked(&verdict));
}

#[test]
fn test_lower_threshold_blocks_boundary_score() {
    let (checker, _) = boundary_checker();
    let checker = checker.with_threshold(0.69).expect("valid threshold");
    let verdict = checker
        .check_originality("synopsis", &["seven tenths"])
        .expect("check");

    assert!(checker.is_blocked(&verdict));
}

#[test]
fn test_missing_overviews_skipped() {
    let (checker, mock) = boundary_checker();
    let overviews = vec![None, Some(String::new()), Some("seven tenths".to_string())];
    let verdict = checker
        .check_originality("synopsis", &overviews)
        .expect("check");

    assert_eq!(verdict.matched_text, "seven tenths");
    assert_eq!(mock.calls(), 2);
}

#[test]
fn test_verdict_rule_is_strict() {
    let verdict = OriginalityVerdict {
        score: 0.7,
        matched_text: String::new(),
    };
    assert!(!verdict.is_blocked(0.7));
    assert!(verdict.is_blocked(0.699));
}
