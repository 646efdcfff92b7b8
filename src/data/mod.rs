mod loader;

pub use loader::{load_bundled, load_questions_from_json, LoadError};
