//! Question Corpus
//!
//! Previously generated security questions, loaded once from a JSON array
//! of strings and read-only afterwards. The corpus is an explicit value:
//! build it at startup and hand a reference to whatever needs it.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::{CorpusError, CorpusResult};

/// Default corpus location, relative to the working directory
pub const DEFAULT_CORPUS_PATH: &str = "all_questions.json";

/// Ordered, immutable sequence of security questions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionCorpus {
    questions: Vec<String>,
}

impl QuestionCorpus {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Load from `path`, reporting why acquisition failed.
    ///
    /// The file handle is dropped before returning on every path.
    pub fn load(path: impl AsRef<Path>) -> CorpusResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| open_error(path, err))?;
        Self::from_reader_at(BufReader::new(file), path)
    }

    /// Load from `path`, degrading any failure to an empty corpus
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(corpus) => {
                tracing::debug!(
                    path = %path.display(),
                    questions = corpus.len(),
                    "loaded question corpus"
                );
                corpus
            }
            Err(err) if err.is_not_found() => {
                tracing::debug!(path = %path.display(), "no question corpus, starting empty");
                Self::empty()
            }
            Err(err) => {
                tracing::warn!(error = %err, "question corpus unusable, starting empty");
                Self::empty()
            }
        }
    }

    /// Parse a JSON array of strings
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<String>>(input).map(Self::new)
    }

    /// Parse a JSON array of strings from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader::<_, Vec<String>>(reader).map(Self::new)
    }

    fn from_reader_at<R: Read>(reader: R, path: &Path) -> CorpusResult<Self> {
        Self::from_reader(reader).map_err(|source| {
            // serde_json wraps read failures in its own error type
            if source.is_io() {
                CorpusError::Unreadable {
                    path: path.to_path_buf(),
                    source: io::Error::from(source),
                }
            } else {
                CorpusError::Malformed {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionCorpus {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

impl From<Vec<String>> for QuestionCorpus {
    fn from(questions: Vec<String>) -> Self {
        Self::new(questions)
    }
}

fn open_error(path: &Path, err: io::Error) -> CorpusError {
    let path = PathBuf::from(path);
    if err.kind() == io::ErrorKind::NotFound {
        CorpusError::NotFound { path }
    } else {
        CorpusError::Unreadable { path, source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_preserves_order() {
        let corpus = QuestionCorpus::from_json_str(r#"["b", "a", "c"]"#).unwrap();
        let questions: Vec<&str> = corpus.iter().collect();
        assert_eq!(questions, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_json_rejects_objects() {
        assert!(QuestionCorpus::from_json_str(r#"[{"q": "x"}]"#).is_err());
        assert!(QuestionCorpus::from_json_str(r#"{"questions": []}"#).is_err());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = QuestionCorpus::load("definitely/not/here.json").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_file_degrades() {
        let corpus = QuestionCorpus::load_or_empty("definitely/not/here.json");
        assert!(corpus.is_empty());
        assert_eq!(corpus.get(0), None);
    }

    #[test]
    fn test_serializes_as_array() {
        let corpus = QuestionCorpus::new(vec!["one".to_string()]);
        assert_eq!(serde_json::to_string(&corpus).unwrap(), r#"["one"]"#);
    }
}
