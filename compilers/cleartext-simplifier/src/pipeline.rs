use tracing::{debug, info};

use cleartext_protocol::{
    FrequencyOracle, Language, LinguisticAnalyzer, ReadabilityScorer, Sentence, SimplificationResult,
};

use crate::config::ClearTextConfig;
use crate::difficulty::{DifficultyClassifier, DifficultyPolicy};
use crate::dictionaries::SubstitutionDictionaries;
use crate::error::ClearTextError;
use crate::explanation::{explain_sentence, NO_EXPLANATION};
use crate::sentence::simplify_sentence;

/// The document-level simplifier. Borrows its collaborators and tables, so
/// one set can be shared by any number of pipelines and threads.
#[derive(Clone, Copy)]
pub struct ClearText<'a> {
    analyzer: &'a dyn LinguisticAnalyzer,
    scorer: &'a dyn ReadabilityScorer,
    oracle: &'a dyn FrequencyOracle,
    dictionaries: &'a SubstitutionDictionaries,
    policy: DifficultyPolicy,
    language: Language,
}

impl<'a> ClearText<'a> {
    /// English with the default difficulty policy.
    pub fn new(
        analyzer: &'a dyn LinguisticAnalyzer,
        scorer: &'a dyn ReadabilityScorer,
        oracle: &'a dyn FrequencyOracle,
        dictionaries: &'a SubstitutionDictionaries,
    ) -> Self {
        Self {
            analyzer,
            scorer,
            oracle,
            dictionaries,
            policy: DifficultyPolicy::default(),
            language: Language::English,
        }
    }

    pub fn from_config(
        config: &'a ClearTextConfig,
        analyzer: &'a dyn LinguisticAnalyzer,
        scorer: &'a dyn ReadabilityScorer,
        oracle: &'a dyn FrequencyOracle,
    ) -> Self {
        Self::new(analyzer, scorer, oracle, config.dictionaries())
            .with_policy(config.difficulty)
            .with_language(config.language)
    }

    pub fn with_policy(mut self, policy: DifficultyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Simplifies every sentence of `text`, in document order.
    ///
    /// Blank input yields no records and touches no collaborator. Any
    /// collaborator failure aborts the whole document.
    #[tracing::instrument(skip_all, fields(len = text.len(), language = %self.language))]
    pub fn run(&self, text: &str) -> Result<Vec<SimplificationResult>, ClearTextError> {
        if text.trim().is_empty() {
            debug!("blank input, nothing to simplify");
            return Ok(Vec::new());
        }

        let sentences = self.analyzer.analyze(text)?;
        let mut results = Vec::with_capacity(sentences.len());
        let mut changed_count = 0;

        for (index, sentence) in sentences.iter().enumerate() {
            let (result, changed) = self.process(index, sentence)?;
            if changed {
                changed_count += 1;
            }
            results.push(result);
        }

        info!(sentences = results.len(), changed = changed_count, "document simplified");
        Ok(results)
    }

    fn process(&self, index: usize, sentence: &Sentence) -> Result<(SimplificationResult, bool), ClearTextError> {
        let classifier = DifficultyClassifier::new(sentence, self.scorer, self.oracle, self.policy, self.language);

        // 1. Rewrite, re-analyze and substitute.
        let simplified = simplify_sentence(sentence, self.analyzer, self.dictionaries, &classifier)?;

        // 2. Explain against the original sentence.
        let passive = sentence.is_passive();
        let explanation = if simplified.changed || passive {
            explain_sentence(&classifier)?
        } else {
            NO_EXPLANATION.to_string()
        };

        debug!(
            index,
            changed = simplified.changed,
            passive,
            threshold = ?classifier.cached_threshold(),
            "sentence simplified"
        );

        Ok((
            SimplificationResult {
                original: sentence.text.clone(),
                simple: simplified.text,
                explanation,
            },
            simplified.changed,
        ))
    }
}

/// One-shot form of [`ClearText::run`] with the default policy and English.
pub fn cleartext(
    text: &str,
    analyzer: &dyn LinguisticAnalyzer,
    scorer: &dyn ReadabilityScorer,
    oracle: &dyn FrequencyOracle,
    dictionaries: &SubstitutionDictionaries,
) -> Result<Vec<SimplificationResult>, ClearTextError> {
    ClearText::new(analyzer, scorer, oracle, dictionaries).run(text)
}
