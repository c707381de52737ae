use cleartext_protocol::{DependencyRole, FineTag, PartOfSpeech};

use crate::morphology::Tagged;

fn is_nominal(t: &Tagged) -> bool {
    match t.pos {
        PartOfSpeech::Noun | PartOfSpeech::ProperNoun => true,
        PartOfSpeech::Pronoun => !crate::lexicon::POSSESSIVES.contains(t.lemma.as_str()),
        _ => false,
    }
}

fn is_be(t: &Tagged) -> bool {
    t.pos == PartOfSpeech::Auxiliary && t.lemma == "be"
}

/// Index of the next token after `i` that is not an adverb.
fn next_content(tagged: &[Tagged], i: usize) -> Option<usize> {
    (i + 1..tagged.len()).find(|&j| tagged[j].pos != PartOfSpeech::Adverb)
}

/// Greedy role assignment over a tagged sentence.
///
/// Handles:
/// - passive auxiliaries ("was" + past participle) and their "by" agent
/// - tense/modal auxiliaries
/// - root (first lexical verb, else the copula, else the first word)
/// - subject before the root, first object after it
pub fn assign_roles(tagged: &[Tagged]) -> Vec<DependencyRole> {
    let mut roles = vec![DependencyRole::Dep; tagged.len()];
    let mut passive_participles = Vec::new();

    // 1. Closed-class roles and auxiliaries
    for (i, token) in tagged.iter().enumerate() {
        roles[i] = match token.pos {
            PartOfSpeech::Punctuation => DependencyRole::Punct,
            PartOfSpeech::Determiner => DependencyRole::Determiner,
            PartOfSpeech::Adjective | PartOfSpeech::Adverb | PartOfSpeech::Numeral => DependencyRole::Modifier,
            PartOfSpeech::Auxiliary => {
                let next = next_content(tagged, i).map(|j| (j, &tagged[j]));
                match next {
                    Some((j, verb)) if is_be(token) && verb.pos == PartOfSpeech::Verb && verb.tag == FineTag::PastParticiple => {
                        passive_participles.push(j);
                        DependencyRole::AuxPass
                    }
                    Some((_, verb)) if matches!(verb.pos, PartOfSpeech::Verb | PartOfSpeech::Auxiliary) => {
                        DependencyRole::Aux
                    }
                    // A lone form of "be" is the copula; it may become the root below.
                    _ if is_be(token) => DependencyRole::Dep,
                    _ => DependencyRole::Aux,
                }
            }
            _ => DependencyRole::Dep,
        };
    }

    // 2. "by" after a passive participle introduces the agent
    for &participle in &passive_participles {
        let agent = tagged[participle + 1..]
            .iter()
            .take_while(|t| t.pos != PartOfSpeech::Verb)
            .position(|t| t.pos == PartOfSpeech::Adposition && t.lemma == "by");
        if let Some(offset) = agent {
            roles[participle + 1 + offset] = DependencyRole::Agent;
        }
    }

    // 3. Root: first lexical verb, then copula, then first non-punctuation
    let root = tagged
        .iter()
        .position(|t| t.pos == PartOfSpeech::Verb)
        .or_else(|| (0..tagged.len()).find(|&i| is_be(&tagged[i]) && roles[i] == DependencyRole::Dep))
        .or_else(|| tagged.iter().position(|t| t.pos != PartOfSpeech::Punctuation));

    let root = match root {
        Some(root) => root,
        None => return roles,
    };
    roles[root] = DependencyRole::Root;

    // 4. Subject: nearest nominal left of the root
    if let Some(subject) = (0..root).rev().find(|&i| is_nominal(&tagged[i]) && roles[i] == DependencyRole::Dep) {
        roles[subject] = DependencyRole::Subject;
    }

    // 5. Object: first nominal right of the root, unless a preposition claims it first
    for i in root + 1..tagged.len() {
        let token = &tagged[i];
        if token.pos == PartOfSpeech::Adposition || token.pos == PartOfSpeech::Punctuation {
            break;
        }
        if is_nominal(token) {
            roles[i] = DependencyRole::Object;
            break;
        }
    }

    // 6. Leftover nominals inside noun phrases act as modifiers of the next head
    for i in 0..tagged.len().saturating_sub(1) {
        if roles[i] == DependencyRole::Dep
            && matches!(tagged[i].pos, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
            && matches!(tagged[i + 1].pos, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
        {
            roles[i] = DependencyRole::Modifier;
        }
    }

    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::tag_sentence;
    use crate::parser::parse_with_spans;

    fn roles(text: &str) -> Vec<(String, DependencyRole)> {
        let raw = parse_with_spans(text);
        let tagged = tag_sentence(&raw);
        raw.iter()
            .map(|t| t.text.to_string())
            .zip(assign_roles(&tagged))
            .collect()
    }

    fn role_of(roles: &[(String, DependencyRole)], word: &str) -> DependencyRole {
        roles.iter().find(|(w, _)| w == word).map(|(_, r)| *r).unwrap()
    }

    #[test]
    fn test_passive_auxiliary_and_agent() {
        let r = roles("The report was submitted by the team.");
        assert_eq!(role_of(&r, "was"), DependencyRole::AuxPass);
        assert_eq!(role_of(&r, "submitted"), DependencyRole::Root);
        assert_eq!(role_of(&r, "by"), DependencyRole::Agent);
        assert_eq!(role_of(&r, "report"), DependencyRole::Subject);
        assert_eq!(role_of(&r, "."), DependencyRole::Punct);
    }

    #[test]
    fn test_passive_through_adverb_and_perfect() {
        let r = roles("The fee has been quickly approved.");
        assert_eq!(role_of(&r, "has"), DependencyRole::Aux);
        assert_eq!(role_of(&r, "been"), DependencyRole::AuxPass);
    }

    #[test]
    fn test_active_sentence_has_no_passive_marker() {
        let r = roles("The parties utilized the framework.");
        assert!(r.iter().all(|(_, role)| !role.is_passive_marker()));
        assert_eq!(role_of(&r, "utilized"), DependencyRole::Root);
        assert_eq!(role_of(&r, "parties"), DependencyRole::Subject);
        assert_eq!(role_of(&r, "framework"), DependencyRole::Object);
        assert_eq!(role_of(&r, "The"), DependencyRole::Determiner);
    }

    #[test]
    fn test_modal_and_copula() {
        let r = roles("This agreement shall commence.");
        assert_eq!(role_of(&r, "shall"), DependencyRole::Aux);
        assert_eq!(role_of(&r, "commence"), DependencyRole::Root);

        let r = roles("The fee is high.");
        assert_eq!(role_of(&r, "is"), DependencyRole::Root);
        assert_eq!(role_of(&r, "fee"), DependencyRole::Subject);
    }

    #[test]
    fn test_progressive_is_not_passive() {
        let r = roles("Staff are facilitating change.");
        assert_eq!(role_of(&r, "are"), DependencyRole::Aux);
        assert_eq!(role_of(&r, "facilitating"), DependencyRole::Root);
    }
}
