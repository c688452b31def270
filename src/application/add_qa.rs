use crate::domain::entities::record::QaRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::embedder::Embedder;
use crate::domain::ports::record_store::RecordStore;
use std::sync::Arc;

pub struct AddQaUseCase {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn RecordStore>,
}

impl AddQaUseCase {
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<dyn RecordStore>) -> Self {
        Self { embedder, store }
    }

    /// Embed the question and persist the record. Re-adding a question
    /// replaces its answer and vector.
    pub async fn execute(&self, question: String, answer: String) -> Result<QaRecord, DomainError> {
        let vector = self.embedder.embed_text(&question)?;
        let record = QaRecord::new(question, answer, vector);
        self.store.put(&record).await?;
        Ok(record)
    }
}
