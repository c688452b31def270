pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::add_qa::AddQaUseCase;
use crate::application::ask::{AskResult, AskUseCase};
use crate::application::list_questions::ListQuestionsUseCase;
use crate::domain::entities::record::QaRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::embedder::Embedder;
use crate::domain::ports::hash_store::HashStore;
use crate::domain::ports::record_store::RecordStore;
use crate::infrastructure::embeddings::word_table::WordTableEmbedder;
use crate::infrastructure::redis::hash_store::RedisHashStore;
use crate::infrastructure::store::record_store::HashRecordStore;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Qavec {
    add_uc: AddQaUseCase,
    ask_uc: AskUseCase,
    list_uc: ListQuestionsUseCase,
}

impl Qavec {
    /// Wire everything from the environment: `QAVEC_REDIS_URL` picks the
    /// server (default `redis://127.0.0.1:6379`) and `QAVEC_EMBEDDINGS` must
    /// point to the word-vector table file.
    pub async fn connect() -> Result<Self, DomainError> {
        let url = std::env::var("QAVEC_REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.into());
        let table_path = std::env::var("QAVEC_EMBEDDINGS").map_err(|_| {
            DomainError::Config("QAVEC_EMBEDDINGS must point to a word-vector table".into())
        })?;

        let embedder: Arc<dyn Embedder> = Arc::new(WordTableEmbedder::load(&table_path)?);
        let hash_store: Arc<dyn HashStore> =
            Arc::new(RedisHashStore::connect(&url, RESPONSE_TIMEOUT, CONNECT_TIMEOUT).await?);
        Ok(Self::with_providers(embedder, hash_store))
    }

    pub fn with_providers(embedder: Arc<dyn Embedder>, hash_store: Arc<dyn HashStore>) -> Self {
        let store: Arc<dyn RecordStore> = Arc::new(HashRecordStore::new(hash_store));
        Self {
            add_uc: AddQaUseCase::new(embedder.clone(), store.clone()),
            ask_uc: AskUseCase::new(embedder, store.clone()),
            list_uc: ListQuestionsUseCase::new(store),
        }
    }

    // Delegating methods
    pub async fn add_qa(&self, question: String, answer: String) -> Result<QaRecord, DomainError> {
        self.add_uc.execute(question, answer).await
    }

    pub async fn ask(&self, question: &str) -> Result<AskResult, DomainError> {
        self.ask_uc.execute(question).await
    }

    pub async fn questions(&self) -> Result<Vec<String>, DomainError> {
        self.list_uc.execute().await
    }
}
