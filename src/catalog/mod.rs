mod builtin;

use crate::error::CatalogLoadError;
use crate::models::{Category, Question, QuestionOption};
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

// On-disk shape. Category tags stay strings so an unknown tag can be reported by name.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    question: String,
    #[serde(default)]
    multi_select: bool,
    options: Vec<OptionEntry>,
}

#[derive(Debug, Deserialize)]
struct OptionEntry {
    text: String,
    category: String,
}

/// Ordered, validated list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Validates and wraps a list of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogLoadError> {
        if questions.is_empty() {
            return Err(CatalogLoadError::Empty);
        }

        let mut seen_questions = HashSet::new();
        for question in &questions {
            if !seen_questions.insert(question.text.as_str()) {
                return Err(CatalogLoadError::DuplicateQuestion {
                    question: question.text.clone(),
                });
            }
            if question.options.is_empty() {
                return Err(CatalogLoadError::NoOptions {
                    question: question.text.clone(),
                });
            }
            let mut seen_options = HashSet::new();
            for option in &question.options {
                if !seen_options.insert(option.text.as_str()) {
                    return Err(CatalogLoadError::DuplicateOption {
                        question: question.text.clone(),
                        option: option.text.clone(),
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&raw).map_err(|source| CatalogLoadError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let mut questions = Vec::with_capacity(file.questions.len());
        for entry in file.questions {
            let mut options = Vec::with_capacity(entry.options.len());
            for option in entry.options {
                let category = option.category.parse::<Category>().map_err(|tag| {
                    CatalogLoadError::UnknownCategory {
                        question: entry.question.clone(),
                        option: option.text.clone(),
                        tag,
                    }
                })?;
                options.push(QuestionOption {
                    text: option.text,
                    category,
                });
            }
            questions.push(Question {
                text: entry.question,
                options,
                multi_select: entry.multi_select,
            });
        }

        let catalog = Self::new(questions)?;
        info!("Loaded {} question(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The German VAK questionnaire shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            questions: builtin::questions(),
        }
    }

    /// Uses the file at `path` if given, otherwise the built-in questions.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CatalogLoadError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No catalog path configured, using built-in questions");
                Ok(Self::builtin())
            }
        }
    }

    /// Keeps the first `limit` questions. Zero keeps everything.
    pub fn truncated(mut self, limit: usize) -> Self {
        if limit > 0 && limit < self.questions.len() {
            self.questions.truncate(limit);
        }
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_catalog() {
        let file = write_catalog(
            r#"{"questions": [
                {"question": "Q1", "options": [
                    {"text": "see", "category": "visual"},
                    {"text": "hear", "category": "Auditory"}
                ]},
                {"question": "Q2", "multi_select": true, "options": [
                    {"text": "do", "category": "kinesthetic"}
                ]}
            ]}"#,
        );

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.questions()[0].options[1].category, Category::Auditory);
        assert!(!catalog.questions()[0].multi_select);
        assert!(catalog.questions()[1].multi_select);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Unreadable { .. }));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let file = write_catalog("{\"questions\": [");
        assert!(matches!(
            Catalog::load(file.path()).unwrap_err(),
            CatalogLoadError::Malformed { .. }
        ));
    }

    #[test]
    fn question_without_options_is_rejected() {
        let file = write_catalog(r#"{"questions": [{"question": "Q1", "options": []}]}"#);
        match Catalog::load(file.path()).unwrap_err() {
            CatalogLoadError::NoOptions { question } => assert_eq!(question, "Q1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let file = write_catalog(
            r#"{"questions": [
                {"question": "Q1", "options": [{"text": "smell", "category": "olfactory"}]}
            ]}"#,
        );
        match Catalog::load(file.path()).unwrap_err() {
            CatalogLoadError::UnknownCategory { option, tag, .. } => {
                assert_eq!(option, "smell");
                assert_eq!(tag, "olfactory");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_and_duplicate_catalogs_are_rejected() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogLoadError::Empty)));

        let q = Question::new("Q", vec![("a", Category::Visual)]);
        assert!(matches!(
            Catalog::new(vec![q.clone(), q]),
            Err(CatalogLoadError::DuplicateQuestion { .. })
        ));

        let q = Question::new("Q", vec![("a", Category::Visual), ("a", Category::Auditory)]);
        assert!(matches!(
            Catalog::new(vec![q]),
            Err(CatalogLoadError::DuplicateOption { .. })
        ));
    }

    #[test]
    fn builtin_catalog_is_valid_and_truncates_to_twenty() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 21);
        assert!(Catalog::new(builtin.questions().to_vec()).is_ok());
        for question in builtin.questions() {
            let categories: Vec<_> = question.options.iter().map(|o| o.category).collect();
            assert_eq!(categories, Category::ALL.to_vec());
        }

        assert_eq!(builtin.clone().truncated(20).len(), 20);
        assert_eq!(builtin.clone().truncated(0).len(), 21);
        assert_eq!(builtin.truncated(50).len(), 21);
    }
}
