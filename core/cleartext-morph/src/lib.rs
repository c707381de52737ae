//! Suffix-based re-inflection of replacement words.
//!
//! Given a simpler base word and the tag of the token it replaces, produce a
//! surface form that carries the same number or tense. Irregular forms are
//! not generated: "go" re-inflected as past tense becomes "goed". The only
//! spelling adjustment is that a base ending in "e" takes "d" for the past
//! ("use" -> "used"); "ing" and "s" are appended as-is.

use cleartext_protocol::{FineTag, MorphFlags, PartOfSpeech};

/// The inflectional slot a replacement word has to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inflection {
    /// Leave the base word untouched.
    Bare,
    Plural,
    Past,
    ThirdPerson,
    Progressive,
}

impl Inflection {
    pub fn suffix(self) -> &'static str {
        match self {
            Inflection::Bare => "",
            Inflection::Plural => "s",
            Inflection::Past => "ed",
            Inflection::ThirdPerson => "s",
            Inflection::Progressive => "ing",
        }
    }
}

/// Picks the inflection a token of `pos`/`tag` implies.
///
/// Only common nouns and lexical verbs inflect; proper nouns, auxiliaries and
/// every other class keep the base word.
pub fn inflection_for(pos: PartOfSpeech, tag: FineTag) -> Inflection {
    let flags = tag.features();
    match pos {
        PartOfSpeech::Noun => {
            if flags.contains(MorphFlags::PLURAL) {
                Inflection::Plural
            } else {
                Inflection::Bare
            }
        }
        PartOfSpeech::Verb => {
            if flags.contains(MorphFlags::PAST) {
                // VBD and VBN share the regular "-ed" form.
                Inflection::Past
            } else if flags.contains(MorphFlags::THIRD_PERSON) {
                Inflection::ThirdPerson
            } else if flags.contains(MorphFlags::PROGRESSIVE) {
                Inflection::Progressive
            } else {
                Inflection::Bare
            }
        }
        PartOfSpeech::ProperNoun
        | PartOfSpeech::Auxiliary
        | PartOfSpeech::Adjective
        | PartOfSpeech::Adverb
        | PartOfSpeech::Pronoun
        | PartOfSpeech::Determiner
        | PartOfSpeech::Adposition
        | PartOfSpeech::Conjunction
        | PartOfSpeech::Particle
        | PartOfSpeech::Numeral
        | PartOfSpeech::Punctuation
        | PartOfSpeech::Symbol
        | PartOfSpeech::Other => Inflection::Bare,
    }
}

/// Re-inflects `base` to match a token tagged `pos`/`tag`.
pub fn inflect(base: &str, pos: PartOfSpeech, tag: FineTag) -> String {
    let inflection = inflection_for(pos, tag);
    let suffix = match inflection {
        Inflection::Past if base.ends_with('e') => "d",
        _ => inflection.suffix(),
    };
    let mut out = String::with_capacity(base.len() + suffix.len());
    out.push_str(base);
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_noun_number() {
        assert_eq!(inflect("structure", PartOfSpeech::Noun, FineTag::SingularNoun), "structure");
        assert_eq!(inflect("goal", PartOfSpeech::Noun, FineTag::PluralNoun), "goals");
        assert_eq!(inflect("idea", PartOfSpeech::Noun, FineTag::ProperPlural), "ideas");
    }

    #[test]
    fn test_verb_tense() {
        assert_eq!(inflect("use", PartOfSpeech::Verb, FineTag::PastTense), "used");
        assert_eq!(inflect("use", PartOfSpeech::Verb, FineTag::Gerund), "useing");
        assert_eq!(inflect("start", PartOfSpeech::Verb, FineTag::PastParticiple), "started");
        assert_eq!(inflect("show", PartOfSpeech::Verb, FineTag::ThirdPersonPresent), "shows");
        assert_eq!(inflect("help", PartOfSpeech::Verb, FineTag::Gerund), "helping");
        assert_eq!(inflect("start", PartOfSpeech::Verb, FineTag::BaseVerb), "start");
        assert_eq!(inflect("need", PartOfSpeech::Verb, FineTag::NonThirdPresent), "need");
    }

    #[test]
    fn test_other_classes_untouched() {
        assert_eq!(inflect("large", PartOfSpeech::Adjective, FineTag::Adjective), "large");
        assert_eq!(inflect("at first", PartOfSpeech::Adverb, FineTag::Adverb), "at first");
        // A proper noun tagged plural keeps its base form.
        assert_eq!(inflect("Smith", PartOfSpeech::ProperNoun, FineTag::ProperPlural), "Smith");
        // A plural tag on a verb does not pluralize it.
        assert_eq!(inflect("form", PartOfSpeech::Verb, FineTag::PluralNoun), "form");
    }

    proptest! {
        #[test]
        fn test_suffix_laws(base in "[a-z]{1,12}") {
            let past = inflect(&base, PartOfSpeech::Verb, FineTag::PastTense);
            prop_assert!(past.starts_with(&base) && past.ends_with("ed"));
            prop_assert!(past.len() <= base.len() + 2);

            let plural = inflect(&base, PartOfSpeech::Noun, FineTag::PluralNoun);
            prop_assert_eq!(plural, format!("{}s", base));

            let gerund = inflect(&base, PartOfSpeech::Verb, FineTag::Gerund);
            prop_assert!(gerund.starts_with(&base) && gerund.ends_with("ing"));

            let adjective = inflect(&base, PartOfSpeech::Adjective, FineTag::Adjective);
            prop_assert_eq!(adjective, base);
        }
    }
}
