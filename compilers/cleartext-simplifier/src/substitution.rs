use cleartext_morph::inflect;
use cleartext_protocol::{OracleError, Token};

use crate::difficulty::DifficultyClassifier;
use crate::dictionaries::SubstitutionDictionaries;

/// Which rule produced a token's output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionRule {
    Protected,
    Modal,
    Lemma,
    BaseForm,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub rule: SubstitutionRule,
}

impl Substitution {
    fn new(text: impl Into<String>, rule: SubstitutionRule) -> Self {
        Self { text: text.into(), rule }
    }
}

/// Output text for one token. The first matching rule wins:
///
/// 1. protected entities keep their text
/// 2. modal forms map verbatim, keyed by lowercase surface
/// 3. lemma-table words are re-inflected to the token's tag
/// 4. difficult words fall back to their lemma
/// 5. anything else keeps its text
pub fn substitute(
    token: &Token,
    dictionaries: &SubstitutionDictionaries,
    classifier: &DifficultyClassifier<'_>,
) -> Result<Substitution, OracleError> {
    if token.is_protected() {
        return Ok(Substitution::new(token.text.as_str(), SubstitutionRule::Protected));
    }

    if let Some(modal) = dictionaries.modal_replacement(&token.text.to_lowercase()) {
        return Ok(Substitution::new(modal, SubstitutionRule::Modal));
    }

    if let Some(base) = dictionaries.lemma_replacement(&token.lemma.to_lowercase()) {
        return Ok(Substitution::new(inflect(base, token.pos, token.tag), SubstitutionRule::Lemma));
    }

    if classifier.is_difficult(token)? {
        return Ok(Substitution::new(token.lemma.as_str(), SubstitutionRule::BaseForm));
    }

    Ok(Substitution::new(token.text.as_str(), SubstitutionRule::Unchanged))
}
