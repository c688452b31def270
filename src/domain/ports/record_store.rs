use crate::domain::entities::record::QaRecord;
use crate::domain::error::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a record, overwriting any previous record for the same
    /// question (last write wins). Questions ending in `:vector` are rejected
    /// with `ReservedQuestion`; that suffix names the internal vector
    /// sub-keys. The payload and the vector are written in two steps; when
    /// the payload lands but the vector write fails this reports
    /// `StoreWriteFailed` and the stored state is inconsistent, with no
    /// rollback.
    async fn put(&self, record: &QaRecord) -> Result<(), DomainError>;

    /// All stored question identifiers, sorted so repeated enumerations are
    /// reproducible. Vector sub-keys are internal and never surface here.
    async fn list_questions(&self) -> Result<Vec<String>, DomainError>;

    /// Fetch and decode the stored vector for a question. `VectorNotFound`
    /// when nothing is stored, `CorruptRecord` when decoding fails.
    async fn fetch_vector(&self, question: &str) -> Result<Vec<f64>, DomainError>;

    /// Fetch the stored answer for a question; `AnswerNotFound` when absent.
    async fn fetch_answer(&self, question: &str) -> Result<String, DomainError>;
}
