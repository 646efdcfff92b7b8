/// Top-level view of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Start screen, choosing how many questions to play.
    Welcome,
    /// Answering questions.
    Quiz,
    /// Reviewing the scored session.
    Result,
}
