use crate::dictionaries::PhraseRule;

/// Lowercases `text` and applies every phrase rule in order.
///
/// Matching is plain substring replacement of every occurrence; a rule sees
/// the output of the rules before it.
pub fn rewrite_phrases(text: &str, rules: &[PhraseRule]) -> String {
    let mut rewritten = text.to_lowercase();
    for rule in rules {
        if rewritten.contains(rule.phrase.as_str()) {
            rewritten = rewritten.replace(rule.phrase.as_str(), &rule.replacement);
        }
    }
    rewritten
}
