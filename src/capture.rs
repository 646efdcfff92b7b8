//! Per-question blank assignment.
//!
//! Tracks which option fills which blank for the question currently on
//! screen. Rebuilt from scratch whenever the active question changes, so
//! partial input never leaks across questions.

/// Assignment of options to the blanks of the active question.
#[derive(Debug, Clone)]
pub struct BlankAssignment {
    /// One slot per blank, "" = unfilled.
    answers: Vec<String>,
    /// Blank the next selection targets.
    active: usize,
}

impl BlankAssignment {
    pub fn new(blank_count: usize) -> Self {
        Self {
            answers: vec![String::new(); blank_count],
            active: 0,
        }
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn active_blank(&self) -> usize {
        self.active
    }

    pub fn blank_count(&self) -> usize {
        self.answers.len()
    }

    pub fn filled_count(&self) -> usize {
        self.answers.iter().filter(|a| !a.is_empty()).count()
    }

    pub fn is_complete(&self) -> bool {
        !self.answers.is_empty() && self.answers.iter().all(|a| !a.is_empty())
    }

    /// Assign `option` to the active blank. Each option is usable at most
    /// once per question, so an option already sitting in any blank is a
    /// no-op. After a successful assignment the active blank moves to the
    /// first unfilled blank after the current one, if any (no wrap).
    pub fn select(&mut self, option: &str) {
        if option.is_empty() || self.answers.iter().any(|a| a == option) {
            return;
        }
        let Some(slot) = self.answers.get_mut(self.active) else {
            return;
        };
        *slot = option.to_string();

        let next = (self.active + 1..self.answers.len()).find(|&i| self.answers[i].is_empty());
        if let Some(index) = next {
            self.active = index;
        }
    }

    /// Clear one blank and make it the active one.
    pub fn unselect(&mut self, index: usize) {
        if let Some(slot) = self.answers.get_mut(index) {
            slot.clear();
            self.active = index;
        }
    }

    /// Clear every blank. Callers are expected to confirm with the user
    /// first; this type does not prompt.
    pub fn clear_all(&mut self) {
        for slot in &mut self.answers {
            slot.clear();
        }
        self.active = 0;
    }

    pub fn set_active(&mut self, index: usize) {
        if index < self.answers.len() {
            self.active = index;
        }
    }

    /// Move focus to the next blank, wrapping past the last one.
    pub fn cycle_active(&mut self) {
        if !self.answers.is_empty() {
            self.active = (self.active + 1) % self.answers.len();
        }
    }

    /// Hand the slots over for committing; the assignment is done after this.
    pub fn into_answers(self) -> Vec<String> {
        self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_fills_active_and_advances() {
        let mut capture = BlankAssignment::new(3);
        capture.select("A");
        assert_eq!(capture.answers(), &["A", "", ""]);
        assert_eq!(capture.active_blank(), 1);

        capture.select("B");
        assert_eq!(capture.answers(), &["A", "B", ""]);
        assert_eq!(capture.active_blank(), 2);
    }

    #[test]
    fn test_duplicate_option_is_noop() {
        let mut capture = BlankAssignment::new(2);
        capture.select("B");
        assert_eq!(capture.active_blank(), 1);

        capture.select("B");
        assert_eq!(capture.answers(), &["B", ""]);
        assert_eq!(capture.active_blank(), 1);
    }

    #[test]
    fn test_advance_skips_filled_no_wrap() {
        let mut capture = BlankAssignment::new(3);
        capture.set_active(1);
        capture.select("A");
        // Blank 2 is the first unfilled one after blank 1.
        assert_eq!(capture.active_blank(), 2);

        capture.select("B");
        // Blank 0 is still empty but lies before the current blank; the
        // active index stays put instead of wrapping back.
        assert_eq!(capture.answers(), &["", "A", "B"]);
        assert_eq!(capture.active_blank(), 2);
    }

    #[test]
    fn test_unselect_refocuses_cleared_blank() {
        let mut capture = BlankAssignment::new(2);
        capture.select("A");
        capture.select("B");
        assert!(capture.is_complete());

        capture.unselect(0);
        assert_eq!(capture.answers(), &["", "B"]);
        assert_eq!(capture.active_blank(), 0);
        assert!(!capture.is_complete());
    }

    #[test]
    fn test_clear_all() {
        let mut capture = BlankAssignment::new(2);
        capture.select("A");
        capture.select("B");
        capture.clear_all();
        assert_eq!(capture.answers(), &["", ""]);
        assert_eq!(capture.active_blank(), 0);
        assert!(!capture.is_complete());
        assert_eq!(capture.filled_count(), 0);
    }

    #[test]
    fn test_set_active_out_of_range_ignored() {
        let mut capture = BlankAssignment::new(2);
        capture.set_active(5);
        assert_eq!(capture.active_blank(), 0);
    }

    #[test]
    fn test_cycle_active_wraps() {
        let mut capture = BlankAssignment::new(2);
        capture.cycle_active();
        assert_eq!(capture.active_blank(), 1);
        capture.cycle_active();
        assert_eq!(capture.active_blank(), 0);
    }

    #[test]
    fn test_zero_blanks_never_complete() {
        let mut capture = BlankAssignment::new(0);
        capture.select("A");
        capture.cycle_active();
        assert!(!capture.is_complete());
        assert_eq!(capture.filled_count(), 0);
    }
}
