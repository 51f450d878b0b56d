use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimilarityError {
    #[error("Vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Cosine similarity: `dot(a, b) / (|a| * |b|)`.
///
/// Both slices must have the same length. A zero-magnitude input is not
/// special-cased: the division yields `NaN`, which propagates to the caller.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    Ok(dot / (norm_a * norm_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_vectors_score_zero() {
        let score = cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]).unwrap();
        assert!(score.abs() < 1e-6);
    }

    #[test]
    fn opposite_vectors_score_negative_one() {
        let score = cosine_similarity(&[1.0, 2.0], &[-2.0, -4.0]).unwrap();
        assert!((score + 1.0).abs() < 1e-6);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0]).unwrap_err();
        assert_eq!(err, SimilarityError::LengthMismatch { left: 3, right: 1 });
    }

    #[test]
    fn zero_vector_propagates_nan() {
        let score = cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
        assert!(score.is_nan());
    }
}
