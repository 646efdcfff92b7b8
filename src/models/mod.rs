mod question;
mod state;

pub use question::{AnswerRecord, Question, BLANK_MARKER};
pub use state::AppState;
