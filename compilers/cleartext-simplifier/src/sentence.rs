use tracing::{trace, warn};

use cleartext_protocol::{AnalyzerError, LinguisticAnalyzer, Sentence};

use crate::difficulty::DifficultyClassifier;
use crate::dictionaries::SubstitutionDictionaries;
use crate::error::ClearTextError;
use crate::phrase::rewrite_phrases;
use crate::substitution::substitute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedSentence {
    pub text: String,
    /// Some token came out different from the re-analyzed token's text.
    pub changed: bool,
}

/// Rewrites one sentence: phrase rules on the lowercased text, then a
/// re-analysis, then per-token substitution joined by single spaces.
///
/// Difficulty is judged against `classifier`, which is bound to the original
/// sentence. If the rewritten text re-analyzes into several sentences only
/// the first is kept.
pub fn simplify_sentence(
    sentence: &Sentence,
    analyzer: &dyn LinguisticAnalyzer,
    dictionaries: &SubstitutionDictionaries,
    classifier: &DifficultyClassifier<'_>,
) -> Result<SimplifiedSentence, ClearTextError> {
    let rewritten = rewrite_phrases(&sentence.text, &dictionaries.phrases);

    let reanalyzed = analyzer.analyze(&rewritten)?;
    if reanalyzed.len() > 1 {
        warn!(
            sentences = reanalyzed.len(),
            text = %rewritten,
            "rewritten sentence split on re-analysis; keeping the first"
        );
    }
    let first = reanalyzed
        .into_iter()
        .next()
        .ok_or(AnalyzerError::NoSentences { text: rewritten })?;

    let mut changed = false;
    let mut words = Vec::with_capacity(first.tokens.len());
    for token in &first.tokens {
        let substitution = substitute(token, dictionaries, classifier)?;
        if substitution.text != token.text {
            trace!(from = %token.text, to = %substitution.text, rule = ?substitution.rule, "substituted");
            changed = true;
        }
        words.push(substitution.text);
    }

    Ok(SimplifiedSentence {
        text: words.join(" "),
        changed,
    })
}
