use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("configuration: {0}")]
    Config(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("missing dimension {0}")]
    MissingDimension(usize),

    #[error("malformed value in field {field}: {value:?}")]
    MalformedValue { field: String, value: String },

    #[error("corrupt record {question:?}: {cause}")]
    CorruptRecord {
        question: String,
        #[source]
        cause: Box<DomainError>,
    },

    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("no vector stored for question {0:?}")]
    VectorNotFound(String),

    #[error("no answer stored for question {0:?}")]
    AnswerNotFound(String),

    #[error("question {0:?} ends with the reserved suffix \":vector\"")]
    ReservedQuestion(String),

    #[error("word not in embedding table: {0:?}")]
    UnknownWord(String),

    #[error("cannot embed empty text")]
    EmptyText,

    #[error("no stored questions to search")]
    EmptyCorpus,

    #[error("no candidate vector could be decoded: {cause}")]
    NoVectorsDecodable {
        #[source]
        cause: Box<DomainError>,
    },

    #[error("answer for {question:?} was stored but its vector write failed: {cause}")]
    StoreWriteFailed {
        question: String,
        #[source]
        cause: Box<DomainError>,
    },

    #[error("embedding table line {line}: {reason}")]
    EmbeddingTable { line: usize, reason: String },
}
