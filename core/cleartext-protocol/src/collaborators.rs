//! Contracts of the services the simplifier consumes.
//!
//! All three are treated as pure, deterministic functions of their input for
//! a fixed model or corpus version, so implementations must be shareable
//! across threads.

use thiserror::Error;

use crate::model::{Language, Sentence};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error("cannot analyze empty or whitespace-only text")]
    EmptyInput,

    #[error("text of length {len} exceeds analyzer maximum of {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("analysis produced no sentences for {text:?}")]
    NoSentences { text: String },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OracleError {
    #[error("no frequency corpus loaded for language '{0}'")]
    UnsupportedLanguage(Language),

    #[error("cannot score readability of text without words: {text:?}")]
    NoWords { text: String },

    #[error("malformed frequency list at line {line}: {message}")]
    Lexicon { line: usize, message: String },

    #[error("invalid compiled lexicon: {0}")]
    Archive(String),
}

/// Segments text into sentences of tagged, entity-labelled tokens.
pub trait LinguisticAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>, AnalyzerError>;
}

/// Grade-level readability estimate for a span of text.
pub trait ReadabilityScorer: Send + Sync {
    fn grade(&self, text: &str) -> Result<f64, OracleError>;
}

/// Normalized frequency rank of a word form; lower means rarer.
pub trait FrequencyOracle: Send + Sync {
    fn zipf_frequency(&self, word: &str, language: Language) -> Result<f64, OracleError>;
}
