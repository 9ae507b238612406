//! Cross-cutting, shared constants.
//!
//! Thresholds live here so the HTTP layer, the policies and the tests agree on the same
//! boundary values. Note the comparison direction differs between the two policies:
//! originality blocks on `score > threshold`, scene matching reports on `score >= threshold`.

/// Output dimension of all-MiniLM-L6-v2 (the stub embedder uses the same size).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token budget per text; longer inputs are truncated by the tokenizer.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Name reported for the default sentence-embedding checkpoint.
pub const DEFAULT_MODEL_NAME: &str = "all-MiniLM-L6-v2";

/// A synopsis scoring strictly above this is blocked as unoriginal.
pub const DEFAULT_ORIGINALITY_THRESHOLD: f32 = 0.70;

/// A scene excerpt scoring at or above this is reported as a quotation.
pub const DEFAULT_SCENE_THRESHOLD: f32 = 0.60;

/// Scene queries shorter than this (in characters) are never compared.
pub const MIN_SCENE_QUERY_CHARS: usize = 20;

/// Validates that a threshold is a finite value in `[0.0, 1.0]`.
pub fn validate_threshold(threshold: f32) -> Result<(), ThresholdError> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(ThresholdError::OutOfRange { value: threshold });
    }
    Ok(())
}

/// Threshold validation failure.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    /// Threshold is NaN, infinite, or outside `[0.0, 1.0]`.
    #[error("threshold must be between 0.0 and 1.0, got {value}")]
    OutOfRange {
        /// The rejected value.
        value: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_are_valid() {
        assert!(validate_threshold(DEFAULT_ORIGINALITY_THRESHOLD).is_ok());
        assert!(validate_threshold(DEFAULT_SCENE_THRESHOLD).is_ok());
    }

    #[test]
    fn test_threshold_bounds_inclusive() {
        assert!(validate_threshold(0.0).is_ok());
        assert!(validate_threshold(1.0).is_ok());
    }

    #[test]
    fn test_threshold_rejects_out_of_range() {
        assert_eq!(
            validate_threshold(1.5),
            Err(ThresholdError::OutOfRange { value: 1.5 })
        );
        assert!(validate_threshold(-0.1).is_err());
        assert!(validate_threshold(f32::NAN).is_err());
        assert!(validate_threshold(f32::INFINITY).is_err());
    }
}
