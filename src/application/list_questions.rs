use crate::domain::error::DomainError;
use crate::domain::ports::record_store::RecordStore;
use std::sync::Arc;

pub struct ListQuestionsUseCase {
    store: Arc<dyn RecordStore>,
}

impl ListQuestionsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Every stored question, sorted. Vector keys never appear here.
    pub async fn execute(&self) -> Result<Vec<String>, DomainError> {
        self.store.list_questions().await
    }
}
