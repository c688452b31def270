use crate::domain::error::DomainError;

/// Maps text to fixed-width vectors. Implementations are immutable word→vector
/// tables after load, so lookups are plain in-memory reads and the trait is
/// safe to share across threads.
pub trait Embedder: Send + Sync {
    /// Width of every vector this embedder produces.
    fn dimension(&self) -> usize;

    /// The stored vector for a single word (exact match).
    fn vector_for(&self, word: &str) -> Result<Vec<f64>, DomainError>;

    /// Embed free text: whitespace-tokenize, sum the vectors of known words
    /// component-wise, then divide every component by the total token count.
    /// Unknown words contribute zero but still count toward the divisor, so a
    /// text of only unknown words embeds to the zero vector. Zero tokens fail
    /// with `EmptyText` rather than dividing by zero.
    fn embed_text(&self, text: &str) -> Result<Vec<f64>, DomainError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Err(DomainError::EmptyText);
        }

        let mut vector = vec![0.0; self.dimension()];
        for word in &words {
            if let Ok(word_vector) = self.vector_for(word) {
                for (acc, component) in vector.iter_mut().zip(word_vector) {
                    *acc += component;
                }
            }
        }

        let count = words.len() as f64;
        for component in &mut vector {
            *component /= count;
        }
        Ok(vector)
    }
}
