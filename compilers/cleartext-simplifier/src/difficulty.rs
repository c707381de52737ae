use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};

use cleartext_protocol::{FrequencyOracle, Language, OracleError, ReadabilityScorer, Sentence, Token};

/// Zipf thresholds chosen by the readability grade of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyPolicy {
    /// Sentences graded strictly above this use `hard_threshold`.
    pub grade_cutoff: f64,
    pub hard_threshold: f64,
    pub base_threshold: f64,
}

impl Default for DifficultyPolicy {
    fn default() -> Self {
        Self {
            grade_cutoff: 12.0,
            hard_threshold: 4.2,
            base_threshold: 4.0,
        }
    }
}

impl DifficultyPolicy {
    pub fn threshold_for(&self, grade: f64) -> f64 {
        if grade > self.grade_cutoff {
            self.hard_threshold
        } else {
            self.base_threshold
        }
    }
}

/// Decides which tokens are difficult relative to one original sentence.
///
/// The threshold comes from the readability grade of that sentence and is
/// computed at most once, on the first alphabetic unprotected token asked
/// about. Tokens from a re-analysis of the sentence are judged against the
/// same threshold.
pub struct DifficultyClassifier<'a> {
    sentence: &'a Sentence,
    scorer: &'a dyn ReadabilityScorer,
    oracle: &'a dyn FrequencyOracle,
    policy: DifficultyPolicy,
    language: Language,
    threshold: OnceCell<f64>,
}

impl<'a> DifficultyClassifier<'a> {
    pub fn new(
        sentence: &'a Sentence,
        scorer: &'a dyn ReadabilityScorer,
        oracle: &'a dyn FrequencyOracle,
        policy: DifficultyPolicy,
        language: Language,
    ) -> Self {
        Self {
            sentence,
            scorer,
            oracle,
            policy,
            language,
            threshold: OnceCell::new(),
        }
    }

    pub fn sentence(&self) -> &'a Sentence {
        self.sentence
    }

    pub fn threshold(&self) -> Result<f64, OracleError> {
        self.threshold
            .get_or_try_init(|| {
                let grade = self.scorer.grade(&self.sentence.text)?;
                Ok(self.policy.threshold_for(grade))
            })
            .copied()
    }

    /// The threshold if it has been computed already.
    pub fn cached_threshold(&self) -> Option<f64> {
        self.threshold.get().copied()
    }

    pub fn is_difficult(&self, token: &Token) -> Result<bool, OracleError> {
        if !token.is_alpha() || token.is_protected() {
            return Ok(false);
        }
        let zipf = self.oracle.zipf_frequency(&token.text.to_lowercase(), self.language)?;
        Ok(zipf < self.threshold()?)
    }
}
