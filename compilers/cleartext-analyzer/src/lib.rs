pub mod entities;
pub mod frequency;
pub mod lexicon;
pub mod morphology;
pub mod parser;
pub mod readability;
pub mod segment;
pub mod syntax;
pub mod token;

use cleartext_protocol::{AnalyzerError, LinguisticAnalyzer, Sentence, Span, Token};

pub use frequency::{parse_tsv, ZipfLexicon};
pub use readability::FleschKincaid;

use crate::parser::parse_with_spans;
use crate::token::RawToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Longest input accepted, in characters.
    pub max_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { max_length: 1_000_000 }
    }
}

/// English analyzer built from the tokenizer, tagger, role marker and entity
/// rules in this crate. Stateless apart from its configuration.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnalyzer {
    config: AnalyzerConfig,
}

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    fn build_sentence(input: &str, raw: &[RawToken<'_>]) -> Sentence {
        let tagged = morphology::tag_sentence(raw);
        let roles = syntax::assign_roles(&tagged);
        let labels = entities::recognize(raw, &tagged);

        let span = Span::new(raw[0].span.start, raw[raw.len() - 1].span.end);
        let tokens = raw
            .iter()
            .zip(tagged)
            .zip(roles)
            .zip(labels)
            .map(|(((token, tagged), dep), entity)| Token {
                text: token.text.to_string(),
                lemma: tagged.lemma,
                pos: tagged.pos,
                tag: tagged.tag,
                dep,
                entity,
                span: token.span,
            })
            .collect();

        Sentence {
            text: input[span.start..span.end].to_string(),
            span,
            tokens,
        }
    }
}

impl LinguisticAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>, AnalyzerError> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }
        let len = text.chars().count();
        if len > self.config.max_length {
            return Err(AnalyzerError::InputTooLong {
                len,
                max: self.config.max_length,
            });
        }

        let raw = parse_with_spans(text);
        let sentences = segment::split_sentences(text, &raw)
            .into_iter()
            .filter(|range| !range.is_empty())
            .map(|range| Self::build_sentence(text, &raw[range]))
            .collect();
        Ok(sentences)
    }
}
