use core::fmt;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

use crate::morphology::{DependencyRole, EntityLabel, FineTag, PartOfSpeech};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Byte range into the text a token or sentence was analyzed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One analyzed token. Immutable once produced: substitution builds a new
/// surface string and never edits the token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub tag: FineTag,
    pub dep: DependencyRole,
    pub entity: Option<EntityLabel>,
    pub span: Span,
}

impl Token {
    /// True when every character is alphabetic (and there is at least one).
    pub fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    /// True when the token belongs to a protected entity type.
    pub fn is_protected(&self) -> bool {
        self.entity.map_or(false, EntityLabel::is_protected)
    }
}

/// A contiguous span of a document with its own token sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Sentence {
    pub text: String,
    pub span: Span,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Any token carries the passive-auxiliary role.
    pub fn is_passive(&self) -> bool {
        self.tokens.iter().any(|t| t.dep.is_passive_marker())
    }

    pub fn has_alphabetic_token(&self) -> bool {
        self.tokens.iter().any(Token::is_alpha)
    }
}

/// Languages a frequency corpus may be keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum Language {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    #[cfg_attr(feature = "serde", serde(rename = "fr"))]
    French,
    #[cfg_attr(feature = "serde", serde(rename = "es"))]
    Spanish,
    #[cfg_attr(feature = "serde", serde(rename = "de"))]
    German,
    #[cfg_attr(feature = "serde", serde(rename = "hi"))]
    Hindi,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
            Language::Hindi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "fr" | "french" => Ok(Language::French),
            "es" | "spanish" => Ok(Language::Spanish),
            "de" | "german" => Ok(Language::German),
            "hi" | "hindi" => Ok(Language::Hindi),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Per-sentence output record. Field names are part of the produced interface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SimplificationResult {
    pub original: String,
    pub simple: String,
    pub explanation: String,
}

/// The plain-text export artifact: every simplified sentence, one per line.
pub fn export_text(results: &[SimplificationResult]) -> String {
    results
        .iter()
        .map(|r| r.simple.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct FrequencyEntry {
    pub word: String,
    /// Zipf scale: log10 of occurrences per billion words.
    pub zipf: f32,
}

/// Word-frequency corpus for one language, compiled to an rkyv archive by
/// the lexicon compiler and loaded back by the frequency oracle.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct FrequencyTable {
    pub version: u32,
    /// ISO 639-1 code, see [`Language::code`].
    pub language: String,
    pub entries: Vec<FrequencyEntry>,
}
