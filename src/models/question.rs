use serde::Deserialize;

/// Marker substring standing in for a blank inside a question's text.
/// One occurrence per blank.
pub const BLANK_MARKER: &str = "_____________";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: Vec<String>,
}

impl Question {
    /// Number of blanks, derived from the marker count in the text.
    pub fn blank_count(&self) -> usize {
        self.text.matches(BLANK_MARKER).count()
    }

    /// Text fragments around the blanks, for rendering.
    /// Always yields `blank_count() + 1` fragments.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.text.split(BLANK_MARKER)
    }

    /// A record is well-formed when every blank has exactly one correct
    /// answer, every correct answer is one of the options, and no option
    /// is listed twice. Anything else is a dataset authoring defect.
    pub fn is_well_formed(&self) -> bool {
        let blanks = self.blank_count();
        if blanks == 0 || self.correct_answer.len() != blanks {
            return false;
        }
        if self.options.len() < blanks {
            return false;
        }
        let mut seen: Vec<&str> = Vec::with_capacity(self.options.len());
        for option in &self.options {
            if seen.contains(&option.as_str()) {
                return false;
            }
            seen.push(option);
        }
        self.correct_answer
            .iter()
            .all(|ans| self.options.contains(ans))
    }

    /// Per-slot grading. An unfilled slot ("") never matches, and a
    /// missing correct-answer slot (malformed data) counts as a miss
    /// rather than an index panic.
    pub fn grade(&self, answers: &[String]) -> bool {
        let blanks = self.blank_count();
        (0..blanks).all(|i| match (answers.get(i), self.correct_answer.get(i)) {
            (Some(given), Some(expected)) => !given.is_empty() && given == expected,
            _ => false,
        })
    }
}

/// Immutable outcome logged for one answered question.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub question_id: String,
    /// One slot per blank, "" = unfilled.
    pub answers: Vec<String>,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(question: &Question, answers: Vec<String>) -> Self {
        let is_correct = question.grade(&answers);
        Self {
            question_id: question.question_id.clone(),
            answers,
            is_correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blank_question() -> Question {
        Question {
            question_id: "q1".to_string(),
            text: format!("The {BLANK_MARKER} orbits the {BLANK_MARKER}."),
            options: vec![
                "Moon".to_string(),
                "Sun".to_string(),
                "Earth".to_string(),
                "Mars".to_string(),
            ],
            correct_answer: vec!["Moon".to_string(), "Earth".to_string()],
        }
    }

    #[test]
    fn test_blank_count_from_marker() {
        let q = two_blank_question();
        assert_eq!(q.blank_count(), 2);
        assert_eq!(q.parts().count(), 3);
    }

    #[test]
    fn test_grade_all_slots_must_match() {
        let q = two_blank_question();
        assert!(q.grade(&["Moon".to_string(), "Earth".to_string()]));
        assert!(!q.grade(&["Moon".to_string(), "Sun".to_string()]));
        assert!(!q.grade(&["Earth".to_string(), "Moon".to_string()]));
    }

    #[test]
    fn test_grade_unfilled_slot_is_incorrect() {
        let q = two_blank_question();
        assert!(!q.grade(&["Moon".to_string(), String::new()]));
        assert!(!q.grade(&[String::new(), String::new()]));
        assert!(!q.grade(&["Moon".to_string()]));
    }

    #[test]
    fn test_well_formed() {
        assert!(two_blank_question().is_well_formed());

        let mut no_blanks = two_blank_question();
        no_blanks.text = "No blanks here.".to_string();
        assert!(!no_blanks.is_well_formed());

        let mut length_mismatch = two_blank_question();
        length_mismatch.correct_answer.pop();
        assert!(!length_mismatch.is_well_formed());

        let mut answer_not_an_option = two_blank_question();
        answer_not_an_option.correct_answer[0] = "Venus".to_string();
        assert!(!answer_not_an_option.is_well_formed());

        let mut duplicate_option = two_blank_question();
        duplicate_option.options[1] = "Moon".to_string();
        assert!(!duplicate_option.is_well_formed());
    }

    #[test]
    fn test_answer_record_grading() {
        let q = two_blank_question();
        let record = AnswerRecord::new(&q, vec!["Moon".to_string(), "Earth".to_string()]);
        assert!(record.is_correct);
        assert_eq!(record.question_id, "q1");

        let record = AnswerRecord::new(&q, vec!["Moon".to_string(), String::new()]);
        assert!(!record.is_correct);
    }
}
