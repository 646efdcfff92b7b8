use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Question;

/// Question dataset compiled into the binary.
const BUNDLED_QUESTIONS: &str = include_str!("questions.json");

/// Error loading the question dataset.
#[derive(Debug)]
pub enum LoadError {
    /// Error reading the file.
    Io(io::Error),
    /// Error parsing the JSON.
    Parse(serde_json::Error),
    /// No usable question survived validation.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read questions: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse questions: {}", e),
            LoadError::Empty => write!(f, "no valid questions in dataset"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Empty => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

/// Load the dataset shipped with the application.
pub fn load_bundled() -> Result<Vec<Question>, LoadError> {
    parse_questions(BUNDLED_QUESTIONS)
}

/// Load a question dataset from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_questions(&json)
}

/// Parse and validate. Malformed records (blank count mismatched with the
/// answer key, answers missing from the options, duplicate options) are
/// dropped here so the session never has to cope with them.
fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    let questions: Vec<Question> = questions.into_iter().filter(Question::is_well_formed).collect();
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_is_valid() {
        let questions = load_bundled().unwrap();
        assert!(questions.len() >= 20);
        for q in &questions {
            assert!(q.is_well_formed());
            assert!(q.options.len() <= 4);
        }
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let json = r#"[{
            "questionId": "q1",
            "question": "The capital of France is _____________.",
            "options": ["Paris", "Lyon", "Nice", "Lille"],
            "correctAnswer": ["Paris"]
        }]"#;
        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_id, "q1");
        assert_eq!(questions[0].blank_count(), 1);
    }

    #[test]
    fn test_malformed_records_are_dropped() {
        let json = r#"[{
            "questionId": "ok",
            "question": "Water is made of hydrogen and _____________.",
            "options": ["oxygen", "carbon", "helium", "iron"],
            "correctAnswer": ["oxygen"]
        }, {
            "questionId": "answer-count-mismatch",
            "question": "One blank _____________ here.",
            "options": ["a", "b"],
            "correctAnswer": ["a", "b"]
        }, {
            "questionId": "answer-not-an-option",
            "question": "Another _____________ here.",
            "options": ["a", "b"],
            "correctAnswer": ["c"]
        }]"#;
        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_id, "ok");
    }

    #[test]
    fn test_all_malformed_is_empty_error() {
        let json = r#"[{
            "questionId": "no-blanks",
            "question": "No blanks at all.",
            "options": ["a", "b"],
            "correctAnswer": ["a"]
        }]"#;
        assert!(matches!(parse_questions(json), Err(LoadError::Empty)));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_questions("not json"), Err(LoadError::Parse(_))));
    }
}
