use crate::domain::error::DomainError;
use crate::domain::ports::embedder::Embedder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Embedder backed by a pretrained word-vector table in the plain text format
/// `word v1 v2 ... vD`, one word per line, whitespace-separated (the GloVe
/// distribution format). The table is loaded once; dimensionality is fixed by
/// the first line and every later line must agree.
#[derive(Debug)]
pub struct WordTableEmbedder {
    table: HashMap<String, Vec<f64>>,
    dimension: usize,
}

impl WordTableEmbedder {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DomainError::EmbeddingTable {
            line: 0,
            reason: format!("cannot open {}: {e}", path.display()),
        })?;

        let mut table = HashMap::new();
        let mut dimension = 0;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| DomainError::EmbeddingTable {
                line: line_no,
                reason: e.to_string(),
            })?;

            let mut parts = line.split_whitespace();
            let word = match parts.next() {
                Some(word) => word,
                None => continue, // blank line
            };
            let vector = parts
                .map(|part| {
                    part.parse::<f64>().map_err(|_| DomainError::EmbeddingTable {
                        line: line_no,
                        reason: format!("non-numeric component {part:?}"),
                    })
                })
                .collect::<Result<Vec<f64>, DomainError>>()?;

            if vector.is_empty() {
                return Err(DomainError::EmbeddingTable {
                    line: line_no,
                    reason: format!("word {word:?} has no components"),
                });
            }
            if table.is_empty() {
                dimension = vector.len();
            } else if vector.len() != dimension {
                return Err(DomainError::EmbeddingTable {
                    line: line_no,
                    reason: format!("expected {dimension} components, found {}", vector.len()),
                });
            }
            table.insert(word.to_string(), vector);
        }

        if table.is_empty() {
            return Err(DomainError::EmbeddingTable {
                line: 0,
                reason: format!("{} contains no word vectors", path.display()),
            });
        }
        Ok(Self { table, dimension })
    }

    /// Build directly from word/vector pairs. Used by tests and callers that
    /// assemble small tables programmatically.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (String, Vec<f64>)>,
        dimension: usize,
    ) -> Result<Self, DomainError> {
        let mut table = HashMap::new();
        for (word, vector) in pairs {
            if vector.len() != dimension {
                return Err(DomainError::DimensionMismatch {
                    left: dimension,
                    right: vector.len(),
                });
            }
            table.insert(word, vector);
        }
        Ok(Self { table, dimension })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Embedder for WordTableEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn vector_for(&self, word: &str) -> Result<Vec<f64>, DomainError> {
        self.table
            .get(word)
            .cloned()
            .ok_or_else(|| DomainError::UnknownWord(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn two_word_table() -> WordTableEmbedder {
        WordTableEmbedder::from_pairs(
            [
                ("cat".to_string(), vec![2.0, 0.0]),
                ("dog".to_string(), vec![0.0, 2.0]),
            ],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_vector_for_known_and_unknown_word() {
        let table = two_word_table();
        assert_eq!(table.vector_for("cat").unwrap(), vec![2.0, 0.0]);
        match table.vector_for("ferret") {
            Err(DomainError::UnknownWord(word)) => assert_eq!(word, "ferret"),
            other => panic!("expected UnknownWord, got {other:?}"),
        }
    }

    #[test]
    fn test_embed_text_averages_over_all_tokens() {
        let table = two_word_table();
        assert_eq!(table.embed_text("cat dog").unwrap(), vec![1.0, 1.0]);
        // The unknown token contributes zero but still counts in the divisor.
        assert_eq!(table.embed_text("cat ferret").unwrap(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_embed_text_of_only_unknown_tokens_is_zero_vector() {
        let table = two_word_table();
        assert_eq!(table.embed_text("ferret stoat").unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_embed_empty_text_fails() {
        let table = two_word_table();
        assert!(matches!(table.embed_text(""), Err(DomainError::EmptyText)));
        assert!(matches!(
            table.embed_text("   \t  "),
            Err(DomainError::EmptyText)
        ));
    }

    #[test]
    fn test_from_pairs_rejects_wrong_width() {
        let result = WordTableEmbedder::from_pairs([("cat".to_string(), vec![1.0])], 2);
        assert!(matches!(
            result,
            Err(DomainError::DimensionMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn test_load_table_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the 0.1 0.2 0.3").unwrap();
        writeln!(file, "cat 0.4 0.5 0.6").unwrap();
        writeln!(file).unwrap();
        file.flush().unwrap();

        let table = WordTableEmbedder::load(file.path()).unwrap();
        assert_eq!(table.dimension(), 3);
        assert_eq!(table.len(), 2);
        assert_eq!(table.vector_for("cat").unwrap(), vec![0.4, 0.5, 0.6]);
    }

    #[test]
    fn test_load_rejects_ragged_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the 0.1 0.2").unwrap();
        writeln!(file, "cat 0.4").unwrap();
        file.flush().unwrap();

        match WordTableEmbedder::load(file.path()) {
            Err(DomainError::EmbeddingTable { line: 2, .. }) => {}
            other => panic!("expected line-2 table error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_non_numeric_component() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the 0.1 oops").unwrap();
        file.flush().unwrap();

        match WordTableEmbedder::load(file.path()) {
            Err(DomainError::EmbeddingTable { line: 1, reason }) => {
                assert!(reason.contains("oops"));
            }
            other => panic!("expected line-1 table error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            WordTableEmbedder::load(file.path()),
            Err(DomainError::EmbeddingTable { .. })
        ));
    }
}
