//! Substitution tables: modal verbs, lemma-keyed simpler words, and ordered
//! multi-word phrase rewrites.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A literal lowercase phrase and its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRule {
    pub phrase: String,
    pub replacement: String,
}

impl PhraseRule {
    pub fn new(phrase: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            replacement: replacement.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionDictionaries {
    /// Lowercase surface form -> replacement, inserted verbatim.
    #[serde(default)]
    pub modal: HashMap<String, String>,
    /// Lowercase lemma -> simpler base word, re-inflected on use.
    #[serde(default)]
    pub lemma: HashMap<String, String>,
    /// Applied in order; a later rule sees the output of earlier ones.
    #[serde(default)]
    pub phrases: Vec<PhraseRule>,
}

const MODAL: &[(&str, &str)] = &[
    ("shall", "will"),
    ("may", "can"),
    ("must", "has to"),
    ("should", "ought to"),
];

const LEMMA: &[(&str, &str)] = &[
    // Verbs
    ("commence", "start"),
    ("initiate", "start"),
    ("terminate", "end"),
    ("utilize", "use"),
    ("demonstrate", "show"),
    ("illustrate", "show"),
    ("indicate", "show"),
    ("facilitate", "help"),
    ("constitute", "form"),
    ("obtain", "get"),
    ("retain", "keep"),
    ("require", "need"),
    ("endeavor", "try"),
    // Nouns
    ("adherence", "following"),
    ("compliance", "following"),
    ("assistance", "help"),
    ("objective", "goal"),
    ("methodology", "method"),
    ("framework", "structure"),
    ("parameter", "limit"),
    ("constraint", "limit"),
    ("aspect", "part"),
    ("concept", "idea"),
    ("notion", "idea"),
    // Adjectives and adverbs
    ("substantial", "large"),
    ("considerable", "large"),
    ("significant", "important"),
    ("frequently", "often"),
    ("initially", "at first"),
    ("ultimately", "in the end"),
    ("predominantly", "mostly"),
    ("numerous", "many"),
    ("sufficient", "enough"),
    ("approximately", "about"),
    ("subsequent", "later"),
    ("prior", "earlier"),
];

const PHRASES: &[(&str, &str)] = &[
    ("pursuant to", "under"),
    ("in accordance with", "under"),
    ("with respect to", "about"),
    ("for the purpose of", "to"),
    ("in the event that", "if"),
    ("prior to", "before"),
    ("subsequent to", "after"),
    ("as a result of", "because of"),
    ("in order to", "to"),
    ("on the basis of", "based on"),
    ("with regard to", "about"),
];

static ENGLISH: Lazy<SubstitutionDictionaries> = Lazy::new(|| SubstitutionDictionaries {
    modal: MODAL.iter().map(|&(k, v)| (k.to_string(), v.to_string())).collect(),
    lemma: LEMMA.iter().map(|&(k, v)| (k.to_string(), v.to_string())).collect(),
    phrases: PHRASES.iter().map(|&(p, r)| PhraseRule::new(p, r)).collect(),
});

impl SubstitutionDictionaries {
    /// The built-in English tables, shared for the life of the process.
    pub fn english() -> &'static SubstitutionDictionaries {
        &ENGLISH
    }

    pub fn modal_replacement(&self, lower_surface: &str) -> Option<&str> {
        self.modal.get(lower_surface).map(String::as_str)
    }

    pub fn lemma_replacement(&self, lower_lemma: &str) -> Option<&str> {
        self.lemma.get(lower_lemma).map(String::as_str)
    }

    /// Lowercases every key and phrase, since lookups and phrase matching
    /// only ever see lowercase text. Empty keys or phrases are rejected.
    pub fn normalized(self) -> Result<Self, String> {
        let lower_keys = |map: HashMap<String, String>, kind: &str| {
            map.into_iter()
                .map(|(key, value)| {
                    let key = key.trim().to_lowercase();
                    if key.is_empty() {
                        Err(format!("empty {} key (replacement {:?})", kind, value))
                    } else {
                        Ok((key, value))
                    }
                })
                .collect::<Result<HashMap<_, _>, _>>()
        };

        let modal = lower_keys(self.modal, "modal")?;
        let lemma = lower_keys(self.lemma, "lemma")?;
        let phrases = self
            .phrases
            .into_iter()
            .map(|rule| {
                let phrase = rule.phrase.to_lowercase();
                if phrase.trim().is_empty() {
                    Err(format!("empty phrase (replacement {:?})", rule.replacement))
                } else {
                    Ok(PhraseRule::new(phrase, rule.replacement))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { modal, lemma, phrases })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let dict = SubstitutionDictionaries::english();
        assert_eq!(dict.modal.len(), 4);
        assert_eq!(dict.lemma.len(), 36);
        assert_eq!(dict.phrases.len(), 11);

        assert_eq!(dict.modal_replacement("must"), Some("has to"));
        assert_eq!(dict.lemma_replacement("utilize"), Some("use"));
        assert_eq!(dict.lemma_replacement("ultimately"), Some("in the end"));
        assert_eq!(dict.lemma_replacement("use"), None);
        assert_eq!(dict.phrases[0], PhraseRule::new("pursuant to", "under"));
        assert_eq!(dict.phrases[10], PhraseRule::new("with regard to", "about"));
    }

    #[test]
    fn test_prior_to_precedes_prior() {
        let dict = SubstitutionDictionaries::english();
        let prior_to = dict.phrases.iter().position(|r| r.phrase == "prior to");
        assert_eq!(prior_to, Some(5));
        assert_eq!(dict.lemma_replacement("prior"), Some("earlier"));
    }

    #[test]
    fn test_normalization() {
        let mut dict = SubstitutionDictionaries::default();
        dict.modal.insert("Shall".to_string(), "will".to_string());
        dict.phrases.push(PhraseRule::new("In Order To", "to"));
        let dict = dict.normalized().unwrap();
        assert_eq!(dict.modal_replacement("shall"), Some("will"));
        assert_eq!(dict.phrases[0].phrase, "in order to");

        let mut empty = SubstitutionDictionaries::default();
        empty.phrases.push(PhraseRule::new("  ", "x"));
        assert!(empty.normalized().is_err());
    }
}
