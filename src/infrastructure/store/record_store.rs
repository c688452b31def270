use crate::domain::codec;
use crate::domain::entities::record::QaRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::hash_store::HashStore;
use crate::domain::ports::record_store::RecordStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Namespace for record keys.
const KEY_PREFIX: &str = "qa:";
/// Suffix deriving a record's vector sub-key from its payload key.
const VECTOR_SUFFIX: &str = ":vector";
/// Field holding the payload on the record key.
const ANSWER_FIELD: &str = "answer";

/// `RecordStore` over any `HashStore` handle. This is the single place that
/// knows the `qa:<question>` / `qa:<question>:vector` / `dim{i}` layout.
pub struct HashRecordStore {
    store: Arc<dyn HashStore>,
}

impl HashRecordStore {
    pub fn new(store: Arc<dyn HashStore>) -> Self {
        Self { store }
    }

    fn record_key(question: &str) -> String {
        format!("{KEY_PREFIX}{question}")
    }

    fn vector_key(question: &str) -> String {
        format!("{KEY_PREFIX}{question}{VECTOR_SUFFIX}")
    }

    /// Replace, not merge: stale `dim{i}` fields from a wider previous vector
    /// would survive a plain overwrite and poison decoding.
    async fn replace_vector(&self, question: &str, vector: &[f64]) -> Result<(), DomainError> {
        let key = Self::vector_key(question);
        self.store.delete(&key).await?;
        self.store.set_fields(&key, &codec::encode(vector)).await
    }
}

#[async_trait]
impl RecordStore for HashRecordStore {
    async fn put(&self, record: &QaRecord) -> Result<(), DomainError> {
        // A question ending in the vector suffix would collide with another
        // record's vector sub-key and be invisible to `list_questions`.
        if record.question.ends_with(VECTOR_SUFFIX) {
            return Err(DomainError::ReservedQuestion(record.question.clone()));
        }

        self.store
            .set_fields(
                &Self::record_key(&record.question),
                &[(ANSWER_FIELD.to_string(), record.answer.clone())],
            )
            .await?;

        self.replace_vector(&record.question, &record.vector)
            .await
            .map_err(|cause| DomainError::StoreWriteFailed {
                question: record.question.clone(),
                cause: Box::new(cause),
            })
    }

    async fn list_questions(&self) -> Result<Vec<String>, DomainError> {
        let keys = self.store.keys(&format!("{KEY_PREFIX}*")).await?;
        let mut questions: Vec<String> = keys
            .into_iter()
            .filter(|key| !key.ends_with(VECTOR_SUFFIX))
            .filter_map(|key| key.strip_prefix(KEY_PREFIX).map(str::to_string))
            .collect();
        questions.sort_unstable();
        Ok(questions)
    }

    async fn fetch_vector(&self, question: &str) -> Result<Vec<f64>, DomainError> {
        let fields = self.store.fields(&Self::vector_key(question)).await?;
        if fields.is_empty() {
            return Err(DomainError::VectorNotFound(question.to_string()));
        }
        codec::decode(&fields).map_err(|cause| DomainError::CorruptRecord {
            question: question.to_string(),
            cause: Box::new(cause),
        })
    }

    async fn fetch_answer(&self, question: &str) -> Result<String, DomainError> {
        self.store
            .field(&Self::record_key(question), ANSWER_FIELD)
            .await?
            .ok_or_else(|| DomainError::AnswerNotFound(question.to_string()))
    }
}
