//! Cosine-similarity scoring and the brute-force best-match scan.

use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;
use std::sync::Arc;

/// cos(a, b) = dot(a,b) / (‖a‖·‖b‖). Requires equal lengths. A zero-norm
/// vector scores 0.0 against anything, including another zero vector, so the
/// function stays total instead of propagating NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / denom)
}

/// Winner of a best-match scan.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BestMatch {
    pub question: String,
    pub similarity: f64,
}

/// Exact nearest-neighbor search: every candidate vector is fetched from the
/// record store and scored against the query. O(N·D) per query, no index.
pub struct SimilarityEngine {
    store: Arc<dyn RecordStore>,
}

impl SimilarityEngine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Scan `candidates` and return the first one reaching the maximal
    /// similarity to `query` (ties keep the earlier candidate). The running
    /// maximum is seeded from the first scored candidate, so a corpus whose
    /// best similarity is -1 still produces a winner.
    ///
    /// Candidates whose vector cannot be fetched or decoded are skipped; when
    /// none survives, the last failure comes back as `NoVectorsDecodable`.
    /// A stored vector whose width differs from the query breaks the shared
    /// dimensionality invariant and aborts the whole scan instead.
    pub async fn find_best_match(
        &self,
        query: &[f64],
        candidates: &[String],
    ) -> Result<BestMatch, DomainError> {
        if candidates.is_empty() {
            return Err(DomainError::EmptyCorpus);
        }

        let mut best: Option<BestMatch> = None;
        let mut last_failure: Option<DomainError> = None;

        for question in candidates {
            let vector = match self.store.fetch_vector(question).await {
                Ok(vector) => vector,
                Err(err) => {
                    last_failure = Some(err);
                    continue;
                }
            };

            let similarity = cosine_similarity(query, &vector)?;
            let improved = match &best {
                None => true,
                Some(current) => similarity > current.similarity,
            };
            if improved {
                best = Some(BestMatch {
                    question: question.clone(),
                    similarity,
                });
            }
        }

        best.ok_or_else(|| match last_failure {
            Some(cause) => DomainError::NoVectorsDecodable {
                cause: Box::new(cause),
            },
            None => DomainError::EmptyCorpus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        let v = vec![0.3, -1.2, 4.5];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-0.5, 0.25, 8.0];
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_scores_zero_against_anything() {
        let zero = vec![0.0, 0.0, 0.0];
        let other = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&zero, &other).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&other, &zero).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero).unwrap(), 0.0);
    }

    #[test]
    fn test_unequal_lengths_are_rejected() {
        match cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0]) {
            Err(DomainError::DimensionMismatch { left: 3, right: 2 }) => {}
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_opposite_vectors_score_minus_one() {
        let sim = cosine_similarity(&[2.0, 0.0], &[-5.0, 0.0]).unwrap();
        assert!((sim + 1.0).abs() < 1e-12);
    }
}
