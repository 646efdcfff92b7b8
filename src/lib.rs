//! # blank-quiz
//!
//! A terminal fill-in-the-blank quiz. Questions carry one or more blanks;
//! each blank is filled from a small set of options under a 30-second
//! countdown, and the session ends with a scored per-blank review.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blank_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Play the bundled question set
//!     let quiz = Quiz::bundled()?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod capture;
mod data;
mod models;
pub mod terminal;
mod timer;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, QUESTION_COUNT_CHOICES};
pub use capture::BlankAssignment;
pub use data::{load_bundled, load_questions_from_json, LoadError};
pub use models::{AnswerRecord, AppState, Question, BLANK_MARKER};
pub use timer::{QuestionTimer, QUESTION_TIME};

/// How long the event loop waits for a key before advancing the countdown.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Create a quiz from the question set compiled into the binary.
    pub fn bundled() -> Result<Self, QuizError> {
        Ok(Self::new(load_bundled()?))
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use blank_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Ok(Self::new(load_questions_from_json(path)?))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll with a timeout so the countdown keeps moving while idle;
        // keys and timer expiry are serialized through this single loop.
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_input(app, key.code) {
                    break;
                }
            }
        }

        app.handle_tick();
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_count_choice();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_count_choice();
            false
        }
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    // The clear-all prompt swallows everything: y executes, anything
    // else cancels.
    if app.is_confirming_clear() {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear_all(),
            _ => app.cancel_clear_all(),
        }
        return false;
    }

    match key {
        KeyCode::Char(c @ '1'..='4') => {
            app.select_option(c as usize - '1' as usize);
            false
        }
        KeyCode::Tab => {
            app.cycle_blank();
            false
        }
        KeyCode::Backspace | KeyCode::Delete => {
            app.unselect_active();
            false
        }
        KeyCode::Enter => {
            app.submit_answer();
            false
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.request_clear_all();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
