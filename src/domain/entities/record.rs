use serde::{Deserialize, Serialize};

/// The persisted unit: a question (the store key), its answer, and the
/// embedding of the question text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
    pub vector: Vec<f64>,
}

impl QaRecord {
    pub fn new(question: String, answer: String, vector: Vec<f64>) -> Self {
        Self {
            question,
            answer,
            vector,
        }
    }
}
