use std::collections::BTreeSet;

use cleartext_protocol::OracleError;

use crate::difficulty::DifficultyClassifier;

pub const PASSIVE_NOTICE: &str = "This sentence uses passive voice, focusing on the action rather than who did it.";
pub const COMPLEX_WORDS_PREFIX: &str = "Some complex words are used: ";
pub const ALREADY_CLEAR: &str = "This sentence is already clear.";
/// Used by the pipeline for sentences that were neither changed nor passive.
pub const NO_EXPLANATION: &str = "No explanation needed.";

/// Explains what makes the classifier's sentence hard to read: passive voice,
/// then the distinct difficult surface forms in sorted order.
pub fn explain_sentence(classifier: &DifficultyClassifier<'_>) -> Result<String, OracleError> {
    let sentence = classifier.sentence();
    let mut notices = Vec::new();

    if sentence.is_passive() {
        notices.push(PASSIVE_NOTICE.to_string());
    }

    let mut difficult = BTreeSet::new();
    for token in &sentence.tokens {
        if classifier.is_difficult(token)? {
            difficult.insert(token.text.as_str());
        }
    }
    if !difficult.is_empty() {
        let words: Vec<&str> = difficult.into_iter().collect();
        notices.push(format!("{}{}", COMPLEX_WORDS_PREFIX, words.join(", ")));
    }

    if notices.is_empty() {
        return Ok(ALREADY_CLEAR.to_string());
    }
    Ok(notices.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::DifficultyPolicy;
    use crate::testing::{sentence, FixedGrade, TableOracle, TokenSpec};
    use cleartext_protocol::{EntityLabel, FineTag, Language, Sentence};

    fn explain(s: &Sentence, oracle: &TableOracle) -> String {
        let scorer = FixedGrade::new(5.0);
        let classifier = DifficultyClassifier::new(s, &scorer, oracle, DifficultyPolicy::default(), Language::English);
        explain_sentence(&classifier).unwrap()
    }

    #[test]
    fn test_passive_notice() {
        let s = sentence(
            "The report was submitted.",
            &[
                ("was", TokenSpec::passive_aux("be")),
                ("submitted", TokenSpec::verb("submit", FineTag::PastParticiple)),
            ],
        );
        assert_eq!(explain(&s, &TableOracle::new(&[])), PASSIVE_NOTICE);
    }

    #[test]
    fn test_complex_words_are_sorted_and_deduplicated() {
        let s = sentence("Zeal and Ardor need zeal and ardor and Zeal.", &[]);
        let oracle = TableOracle::new(&[("zeal", 2.0), ("ardor", 2.0)]);
        assert_eq!(
            explain(&s, &oracle),
            "Some complex words are used: Ardor, Zeal, ardor, zeal"
        );
    }

    #[test]
    fn test_passive_and_complex_words_together() {
        let s = sentence(
            "The lease was terminated.",
            &[
                ("was", TokenSpec::passive_aux("be")),
                ("terminated", TokenSpec::verb("terminate", FineTag::PastParticiple)),
            ],
        );
        let oracle = TableOracle::new(&[("terminated", 3.0)]);
        assert_eq!(
            explain(&s, &oracle),
            format!("{} {}terminated", PASSIVE_NOTICE, COMPLEX_WORDS_PREFIX)
        );
    }

    #[test]
    fn test_protected_rare_words_are_not_listed() {
        let s = sentence("Zanzibar is far.", &[("zanzibar", TokenSpec::proper().entity(EntityLabel::Gpe))]);
        let oracle = TableOracle::new(&[("zanzibar", 1.0)]);
        assert_eq!(explain(&s, &oracle), ALREADY_CLEAR);
    }
}
