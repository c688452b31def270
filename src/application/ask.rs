use crate::domain::error::DomainError;
use crate::domain::ports::embedder::Embedder;
use crate::domain::ports::record_store::RecordStore;
use crate::domain::similarity::SimilarityEngine;
use std::sync::Arc;

/// Result of a query: the stored question that won the scan, its answer, and
/// the cosine similarity of the match.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AskResult {
    pub question: String,
    pub answer: String,
    pub similarity: f64,
}

pub struct AskUseCase {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn RecordStore>,
    engine: SimilarityEngine,
}

impl AskUseCase {
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<dyn RecordStore>) -> Self {
        let engine = SimilarityEngine::new(store.clone());
        Self {
            embedder,
            store,
            engine,
        }
    }

    /// Embed the query, scan every stored vector, and return the answer of
    /// the closest stored question.
    pub async fn execute(&self, question: &str) -> Result<AskResult, DomainError> {
        let query = self.embedder.embed_text(question)?;
        let candidates = self.store.list_questions().await?;
        let best = self.engine.find_best_match(&query, &candidates).await?;
        let answer = self.store.fetch_answer(&best.question).await?;
        Ok(AskResult {
            question: best.question,
            answer,
            similarity: best.similarity,
        })
    }
}
