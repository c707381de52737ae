pub mod config;
pub mod dictionaries;
pub mod difficulty;
pub mod error;
pub mod explanation;
pub mod phrase;
pub mod pipeline;
pub mod sentence;
pub mod substitution;

#[cfg(test)]
mod testing;

// Re-export the pipeline surface for convenience
pub use config::ClearTextConfig;
pub use dictionaries::{PhraseRule, SubstitutionDictionaries};
pub use difficulty::{DifficultyClassifier, DifficultyPolicy};
pub use error::{ClearTextError, ConfigError};
pub use explanation::explain_sentence;
pub use phrase::rewrite_phrases;
pub use pipeline::{cleartext, ClearText};
pub use sentence::{simplify_sentence, SimplifiedSentence};
pub use substitution::{substitute, Substitution, SubstitutionRule};
