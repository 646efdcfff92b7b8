use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::capture::BlankAssignment;
use crate::models::{AnswerRecord, AppState, Question};
use crate::timer::{QuestionTimer, QUESTION_TIME};

/// Session lengths offered on the welcome screen.
pub const QUESTION_COUNT_CHOICES: [usize; 4] = [5, 10, 15, 20];

/// At most this many options are reachable from the keyboard (keys 1-4).
pub const NUM_OPTION_KEYS: usize = 4;

/// Draw `count` distinct questions from the bank, uniformly at random,
/// without replacement. A count above the bank size clamps to the bank.
fn draw_questions<R: Rng + ?Sized>(bank: &[Question], count: usize, rng: &mut R) -> Vec<Question> {
    let mut indices: Vec<usize> = (0..bank.len()).collect();
    indices.shuffle(rng);
    indices.truncate(count.min(bank.len()));
    indices.into_iter().map(|i| bank[i].clone()).collect()
}

pub struct App {
    pub state: AppState,
    /// Every question available; read-only after load.
    bank: Vec<Question>,
    /// This session's draw, fixed at start_quiz.
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<AnswerRecord>,
    capture: BlankAssignment,
    timer: QuestionTimer,
    question_time: Duration,
    count_choice: usize,
    confirm_clear: bool,
    result_scroll: usize,
}

impl App {
    pub fn with_questions(bank: Vec<Question>) -> Self {
        Self {
            state: AppState::Welcome,
            bank,
            questions: Vec::new(),
            current_index: 0,
            answers: Vec::new(),
            capture: BlankAssignment::new(0),
            timer: QuestionTimer::start(QUESTION_TIME),
            question_time: QUESTION_TIME,
            count_choice: 0,
            confirm_clear: false,
            result_scroll: 0,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn capture(&self) -> &BlankAssignment {
        &self.capture
    }

    pub fn timer(&self) -> &QuestionTimer {
        &self.timer
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.confirm_clear
    }

    // --- Welcome ---

    pub fn chosen_count(&self) -> usize {
        QUESTION_COUNT_CHOICES[self.count_choice]
    }

    pub fn count_choice_index(&self) -> usize {
        self.count_choice
    }

    pub fn next_count_choice(&mut self) {
        self.count_choice = (self.count_choice + 1) % QUESTION_COUNT_CHOICES.len();
    }

    pub fn previous_count_choice(&mut self) {
        self.count_choice =
            (self.count_choice + QUESTION_COUNT_CHOICES.len() - 1) % QUESTION_COUNT_CHOICES.len();
    }

    /// Welcome -> Quiz. Draws a fresh question set; a no-op outside the
    /// welcome screen or with an empty bank.
    pub fn start_quiz(&mut self) {
        if self.state != AppState::Welcome || self.bank.is_empty() {
            return;
        }
        self.questions = draw_questions(&self.bank, self.chosen_count(), &mut rand::thread_rng());
        self.current_index = 0;
        self.answers.clear();
        self.capture = BlankAssignment::new(self.questions[0].blank_count());
        self.timer = QuestionTimer::start(self.question_time);
        self.confirm_clear = false;
        self.result_scroll = 0;
        self.state = AppState::Quiz;
    }

    // --- Quiz ---

    /// Fill the active blank with the option behind key `1 + index`.
    pub fn select_option(&mut self, index: usize) {
        if self.state != AppState::Quiz || self.confirm_clear {
            return;
        }
        if index >= NUM_OPTION_KEYS {
            return;
        }
        let option = self.current_question().options.get(index).cloned();
        if let Some(option) = option {
            self.capture.select(&option);
        }
    }

    pub fn cycle_blank(&mut self) {
        if self.state == AppState::Quiz && !self.confirm_clear {
            self.capture.cycle_active();
        }
    }

    pub fn unselect_active(&mut self) {
        if self.state == AppState::Quiz && !self.confirm_clear {
            let active = self.capture.active_blank();
            self.capture.unselect(active);
        }
    }

    /// Manual submit; only commits once every blank is filled.
    pub fn submit_answer(&mut self) {
        if self.state == AppState::Quiz && !self.confirm_clear && self.capture.is_complete() {
            self.commit(self.current_index);
        }
    }

    /// Clearing every blank is destructive, so it runs in two steps:
    /// request flips into a confirmation prompt, confirm executes.
    pub fn request_clear_all(&mut self) {
        if self.state == AppState::Quiz {
            self.confirm_clear = true;
        }
    }

    pub fn confirm_clear_all(&mut self) {
        if self.confirm_clear {
            self.capture.clear_all();
            self.confirm_clear = false;
        }
    }

    pub fn cancel_clear_all(&mut self) {
        self.confirm_clear = false;
    }

    /// Advance the countdown; on expiry the current question is committed
    /// as it stands, unfilled blanks and all.
    pub fn handle_tick(&mut self) {
        if self.state == AppState::Quiz && self.timer.is_expired() {
            self.commit(self.current_index);
        }
    }

    /// One-shot commit point for a question. The index guard makes a
    /// second attempt for an index that has already advanced (manual
    /// submit racing timer expiry) a no-op.
    fn commit(&mut self, index: usize) {
        if self.state != AppState::Quiz || index != self.current_index {
            return;
        }
        let question = &self.questions[self.current_index];
        let blanks = question.blank_count();
        let capture = std::mem::replace(&mut self.capture, BlankAssignment::new(0));
        let mut answers = capture.into_answers();
        answers.resize(blanks, String::new());
        self.answers.push(AnswerRecord::new(question, answers));
        self.confirm_clear = false;

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.capture = BlankAssignment::new(self.current_question().blank_count());
            self.timer.restart();
        } else {
            self.state = AppState::Result;
        }
    }

    // --- Result ---

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }

    /// Final score as (correct, total, rounded percentage).
    pub fn score(&self) -> (usize, usize, u32) {
        let correct = self.correct_count();
        let total = self.questions.len();
        let percentage = if total > 0 {
            ((correct * 100) as f64 / total as f64).round() as u32
        } else {
            0
        };
        (correct, total, percentage)
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll < self.max_result_scroll() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Matches the review layout: a header line, one line per blank and a
    /// separator for each question.
    fn max_result_scroll(&self) -> usize {
        self.answers
            .iter()
            .map(|record| record.answers.len() + 2)
            .sum::<usize>()
            .saturating_sub(1)
    }

    /// Back to the welcome screen, forgetting the session. Safe both from
    /// the result view and mid-quiz.
    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.questions.clear();
        self.current_index = 0;
        self.answers.clear();
        self.capture = BlankAssignment::new(0);
        self.confirm_clear = false;
        self.result_scroll = 0;
    }
}
