//! Part-of-speech tagging and lemmatization.
//!
//! Each token gets a lexical guess (closed-class lexicon, irregular forms,
//! suffixes) that is then settled by its left context: the nearest preceding
//! non-adverb and whether the sentence already has a finite verb.

use cleartext_protocol::{FineTag, MorphFlags, PartOfSpeech};

use crate::lexicon::{self, IrregularForm};
use crate::token::{RawKind, RawToken};

#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub pos: PartOfSpeech,
    pub tag: FineTag,
    pub lemma: String,
}

impl Tagged {
    fn new(pos: PartOfSpeech, tag: FineTag, lemma: impl Into<String>) -> Self {
        Self {
            pos,
            tag,
            lemma: lemma.into(),
        }
    }

    fn noun(lemma: impl Into<String>) -> Self {
        Self::new(PartOfSpeech::Noun, FineTag::SingularNoun, lemma)
    }

    fn verb(tag: FineTag, lemma: impl Into<String>) -> Self {
        Self::new(PartOfSpeech::Verb, tag, lemma)
    }

    fn is_finite(&self) -> bool {
        matches!(self.pos, PartOfSpeech::Verb | PartOfSpeech::Auxiliary)
            && matches!(
                self.tag,
                FineTag::PastTense | FineTag::ThirdPersonPresent | FineTag::NonThirdPresent | FineTag::Modal
            )
    }

    fn is_auxiliary_of(&self, lemma: &str) -> bool {
        let base = clitic_host(&self.lemma).unwrap_or(self.lemma.as_str());
        self.pos == PartOfSpeech::Auxiliary && self.tag != FineTag::Modal && base == lemma
    }

    fn is_possessive(&self) -> bool {
        self.pos == PartOfSpeech::Pronoun && lexicon::POSSESSIVES.contains(self.lemma.as_str())
    }

    /// A word that a following noun would attach to as a modifier.
    fn opens_noun_phrase(&self) -> bool {
        matches!(
            self.pos,
            PartOfSpeech::Determiner | PartOfSpeech::Adjective | PartOfSpeech::Adposition | PartOfSpeech::Numeral
        ) || self.is_possessive()
    }

    fn is_singular_subject(&self) -> bool {
        match self.pos {
            PartOfSpeech::Noun => self.tag == FineTag::SingularNoun,
            PartOfSpeech::ProperNoun => true,
            PartOfSpeech::Pronoun => lexicon::THIRD_PERSON_SUBJECTS.contains(self.lemma.as_str()),
            _ => false,
        }
    }

    fn is_plural_subject(&self) -> bool {
        match self.pos {
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun => self.tag.features().contains(MorphFlags::PLURAL),
            PartOfSpeech::Pronoun => lexicon::SUBJECT_PRONOUNS.contains(self.lemma.as_str()),
            _ => false,
        }
    }
}

struct Context<'a, 't> {
    /// Nearest preceding token that is not an adverb.
    prev: Option<&'t Tagged>,
    next: Option<&'a RawToken<'a>>,
    at_start: bool,
    finite_seen: bool,
}

impl Context<'_, '_> {
    fn after_be_or_have(&self) -> bool {
        self.prev
            .map_or(false, |p| p.is_auxiliary_of("be") || p.is_auxiliary_of("have"))
    }

    fn after_infinitive_marker(&self) -> bool {
        self.prev.map_or(false, |p| {
            matches!(p.tag, FineTag::Modal | FineTag::To) || p.is_auxiliary_of("do")
        })
    }

    fn after_noun_phrase_opener(&self) -> bool {
        self.prev.map_or(false, Tagged::opens_noun_phrase)
    }

    fn next_is_auxiliary(&self) -> bool {
        self.next.map_or(false, |t| {
            t.kind == RawKind::Word
                && lexicon::CLOSED_CLASS
                    .get(t.text.to_lowercase().as_str())
                    .map_or(false, |e| e.pos == PartOfSpeech::Auxiliary)
        })
    }

    fn next_is_open_word(&self) -> bool {
        self.next.map_or(false, |t| {
            t.kind == RawKind::Word && !lexicon::CLOSED_CLASS.contains_key(t.text.to_lowercase().as_str())
        })
    }

    fn next_is_capitalized(&self) -> bool {
        self.next.map_or(false, |t| {
            matches!(t.kind, RawKind::Word | RawKind::Abbreviation) && starts_uppercase(t.text)
        })
    }
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().map_or(false, char::is_uppercase)
}

/// Tags one sentence worth of raw tokens.
pub fn tag_sentence<'a>(tokens: &'a [RawToken<'a>]) -> Vec<Tagged> {
    let mut tagged: Vec<Tagged> = Vec::with_capacity(tokens.len());
    let mut finite_seen = false;

    for (i, token) in tokens.iter().enumerate() {
        let ctx = Context {
            prev: tagged.iter().rev().find(|t| t.pos != PartOfSpeech::Adverb),
            next: tokens.get(i + 1),
            at_start: tokens[..i].iter().all(|t| matches!(t.kind, RawKind::Punct | RawKind::Symbol)),
            finite_seen,
        };
        let t = tag_token(token, &ctx);
        finite_seen |= t.is_finite();
        tagged.push(t);
    }

    promote_main_verbs(&mut tagged);
    tagged
}

fn tag_token(token: &RawToken<'_>, ctx: &Context<'_, '_>) -> Tagged {
    match token.kind {
        RawKind::Punct => Tagged::new(PartOfSpeech::Punctuation, FineTag::Punctuation, token.text),
        RawKind::Symbol => Tagged::new(PartOfSpeech::Symbol, FineTag::Symbol, token.text),
        RawKind::Number => Tagged::new(PartOfSpeech::Numeral, FineTag::Cardinal, token.text),
        RawKind::Abbreviation => tag_abbreviation(token.text),
        RawKind::Word => tag_word(token.text, ctx),
    }
}

fn tag_abbreviation(text: &str) -> Tagged {
    let lower = text.to_lowercase();
    let all_caps = text.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase);

    if all_caps
        || lexicon::TITLES.contains(lower.as_str())
        || lexicon::ORG_HEADS.contains(lower.as_str())
        || lexicon::MONTHS.contains(lower.as_str())
    {
        return Tagged::new(PartOfSpeech::ProperNoun, FineTag::ProperSingular, text);
    }
    match lower.as_str() {
        "e.g." | "i.e." | "approx." => Tagged::new(PartOfSpeech::Adverb, FineTag::Adverb, lower),
        "vs." => Tagged::new(PartOfSpeech::Adposition, FineTag::Preposition, lower),
        _ => Tagged::noun(lower),
    }
}

/// Host word of a contraction or possessive: "don't" -> "do", "company's" -> "company".
fn clitic_host(lower: &str) -> Option<&str> {
    let cut = lower.find(|c: char| c == '\'' || c == '’')?;
    let host = &lower[..cut];
    let negated = lower[cut..].starts_with("'t") || lower[cut..].starts_with("’t");
    if !negated {
        return Some(host);
    }
    Some(match host {
        "won" => "will",
        "shan" => "shall",
        "ca" => "can",
        _ => host.strip_suffix('n').unwrap_or(host),
    })
}

fn tag_word(text: &str, ctx: &Context<'_, '_>) -> Tagged {
    let lower = text.to_lowercase();

    // Contractions keep their full lowercase text as lemma so a possessive
    // or negation never disappears in substitution.
    if let Some(host) = clitic_host(&lower) {
        if !host.is_empty() {
            let Tagged { pos, tag, .. } = tag_plain(text, host, ctx);
            return Tagged::new(pos, tag, lower.clone());
        }
    }

    tag_plain(text, &lower, ctx)
}

fn tag_plain(text: &str, lower: &str, ctx: &Context<'_, '_>) -> Tagged {
    // 1. Closed class
    if let Some(entry) = lexicon::CLOSED_CLASS.get(lower) {
        return Tagged::new(entry.pos, entry.tag, entry.lemma);
    }

    // 2. Proper nouns keep their surface form as lemma
    if is_proper(text, lower, ctx) {
        return Tagged::new(PartOfSpeech::ProperNoun, FineTag::ProperSingular, text);
    }

    // 3. Irregular forms
    if let Some(&(lemma, form)) = lexicon::IRREGULAR_VERBS.get(lower) {
        let tag = match form {
            IrregularForm::Past => FineTag::PastTense,
            IrregularForm::Participle => FineTag::PastParticiple,
            IrregularForm::PastOrParticiple => participle_or_past(ctx),
        };
        return Tagged::verb(tag, lemma);
    }
    if let Some(&lemma) = lexicon::IRREGULAR_PLURALS.get(lower) {
        return Tagged::new(PartOfSpeech::Noun, FineTag::PluralNoun, lemma);
    }

    // 4. Known base forms
    if lexicon::BASE_VERBS.contains(lower) {
        return tag_base_verb(lower, ctx);
    }
    if lexicon::ADJECTIVES.contains(lower) {
        return Tagged::new(PartOfSpeech::Adjective, FineTag::Adjective, lower);
    }

    // 5. Suffixes
    if let Some(t) = tag_past(lower, ctx) {
        return t;
    }
    if let Some(t) = tag_progressive(lower, ctx) {
        return t;
    }
    if let Some(t) = tag_plural_or_third_person(lower, ctx) {
        return t;
    }
    if lower.chars().count() > 4 && lower.ends_with("ly") && !lexicon::LY_NON_ADVERBS.contains(lower) {
        return Tagged::new(PartOfSpeech::Adverb, FineTag::Adverb, lower);
    }
    if lexicon::has_suffix(lower, lexicon::NOUN_SUFFIXES) {
        return Tagged::noun(lower);
    }
    if lexicon::has_suffix(lower, lexicon::ADJECTIVE_SUFFIXES)
        && (ctx.after_be_or_have() || ctx.next_is_open_word())
    {
        return Tagged::new(PartOfSpeech::Adjective, FineTag::Adjective, lower);
    }

    Tagged::noun(lower)
}

fn is_proper(text: &str, lower: &str, ctx: &Context<'_, '_>) -> bool {
    if !starts_uppercase(text) {
        return false;
    }
    let all_caps = text.chars().count() > 1 && text.chars().all(|c| !c.is_alphabetic() || c.is_uppercase());
    if all_caps || !ctx.at_start {
        return true;
    }
    // Sentence-initial capitals only count for known names or the head of a
    // capitalized run ("Acme Corp.").
    lexicon::GIVEN_NAMES.contains(lower)
        || lexicon::GPE_NAMES.contains(lower)
        || (ctx.next_is_capitalized() && !lexicon::BASE_VERBS.contains(lower) && !lexicon::ADJECTIVES.contains(lower))
}

fn participle_or_past(ctx: &Context<'_, '_>) -> FineTag {
    if ctx.after_be_or_have() || ctx.finite_seen || ctx.after_noun_phrase_opener() {
        FineTag::PastParticiple
    } else {
        FineTag::PastTense
    }
}

fn tag_base_verb(lower: &str, ctx: &Context<'_, '_>) -> Tagged {
    if ctx.after_infinitive_marker() {
        return Tagged::verb(FineTag::BaseVerb, lower);
    }
    if ctx.at_start {
        // Imperative, unless the word is the subject of a following auxiliary.
        if lexicon::NOUN_PREFERRED.contains(lower) && ctx.next_is_auxiliary() {
            return Tagged::noun(lower);
        }
        return Tagged::verb(FineTag::BaseVerb, lower);
    }

    match ctx.prev {
        Some(p) if p.opens_noun_phrase() => Tagged::noun(lower),
        Some(p) if !ctx.finite_seen && p.is_plural_subject() => Tagged::verb(FineTag::NonThirdPresent, lower),
        _ if lexicon::NOUN_PREFERRED.contains(lower) => Tagged::noun(lower),
        _ => Tagged::verb(FineTag::BaseVerb, lower),
    }
}

fn tag_past(lower: &str, ctx: &Context<'_, '_>) -> Option<Tagged> {
    let stem = lower.strip_suffix("ed")?;
    if stem.chars().count() < 2 {
        return None;
    }
    let known = known_verb_stem(stem, true);
    if known.is_none() && (lower.ends_with("eed") || lower.chars().count() < 5) {
        return None;
    }
    let lemma = known.unwrap_or_else(|| guess_verb_stem(stem));
    Some(Tagged::verb(participle_or_past(ctx), lemma))
}

fn tag_progressive(lower: &str, ctx: &Context<'_, '_>) -> Option<Tagged> {
    let stem = lower.strip_suffix("ing")?;
    if stem.chars().count() < 2 || lexicon::ING_NOUNS.contains(lower) {
        return None;
    }
    let nominal = ctx.prev.map_or(false, |p| {
        matches!(p.pos, PartOfSpeech::Determiner | PartOfSpeech::Adjective) || p.is_possessive()
    });
    if nominal && !ctx.after_be_or_have() {
        return Some(Tagged::noun(lower));
    }
    let lemma = known_verb_stem(stem, false).unwrap_or_else(|| guess_verb_stem(stem));
    Some(Tagged::verb(FineTag::Gerund, lemma))
}

fn tag_plural_or_third_person(lower: &str, ctx: &Context<'_, '_>) -> Option<Tagged> {
    if !lower.ends_with('s')
        || lower.ends_with("ss")
        || lower.ends_with("us")
        || lower.ends_with("is")
        || lower.chars().count() < 3
        || lexicon::NON_PLURAL_S.contains(lower)
    {
        return None;
    }

    if let Some(lemma) = third_person_stem(lower) {
        let subject = ctx.prev.map_or(false, Tagged::is_singular_subject);
        if subject && !ctx.finite_seen {
            return Some(Tagged::verb(FineTag::ThirdPersonPresent, lemma));
        }
    }
    let singular = singularize(lower);
    if !is_known_noun(lower, &singular) {
        // Out-of-vocabulary "-s" words are usually names ("hughes", "athens").
        return Some(Tagged::noun(lower));
    }
    Some(Tagged::new(PartOfSpeech::Noun, FineTag::PluralNoun, singular))
}

fn is_known_noun(plural: &str, singular: &str) -> bool {
    lexicon::is_attested(plural)
        || lexicon::is_attested(singular)
        || lexicon::BASE_VERBS.contains(singular)
        || lexicon::NOUN_PREFERRED.contains(singular)
        || lexicon::has_suffix(singular, lexicon::NOUN_SUFFIXES)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// "plann" -> "plan". Doubled l, s and z are usually part of the base.
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    if last == before && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

/// First reconstruction of a stripped "-ed"/"-ing" stem that is a known verb.
fn known_verb_stem(stem: &str, past: bool) -> Option<String> {
    let mut candidates = vec![stem.to_string(), format!("{}e", stem)];
    if let Some(base) = undouble(stem) {
        candidates.push(base.to_string());
    }
    if past {
        if let Some(base) = stem.strip_suffix('i') {
            candidates.push(format!("{}y", base));
        }
    }
    candidates.into_iter().find(|c| lexicon::BASE_VERBS.contains(c.as_str()))
}

fn guess_verb_stem(stem: &str) -> String {
    if let Some(base) = undouble(stem) {
        return base.to_string();
    }
    if let Some(base) = stem.strip_suffix('i') {
        return format!("{}y", base);
    }
    if lexicon::SILENT_E_STEMS.iter().any(|end| stem.ends_with(end)) {
        return format!("{}e", stem);
    }
    stem.to_string()
}

fn third_person_stem(lower: &str) -> Option<String> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(base) = lower.strip_suffix("ies") {
        candidates.push(format!("{}y", base));
    }
    if let Some(base) = lower.strip_suffix('s') {
        candidates.push(base.to_string());
    }
    if let Some(base) = lower.strip_suffix("es") {
        candidates.push(base.to_string());
    }
    candidates.into_iter().find(|c| lexicon::BASE_VERBS.contains(c.as_str()))
}

fn singularize(lower: &str) -> String {
    if lower.chars().count() > 4 {
        if let Some(base) = lower.strip_suffix("ies") {
            return format!("{}y", base);
        }
    }
    for ending in ["sses", "ches", "shes", "xes", "zzes"] {
        if lower.ends_with(ending) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    lower[..lower.len() - 1].to_string()
}

/// "have" and "do" only stay auxiliaries when a verb follows.
fn promote_main_verbs(tagged: &mut [Tagged]) {
    for i in 0..tagged.len() {
        if !(tagged[i].is_auxiliary_of("have") || tagged[i].is_auxiliary_of("do")) {
            continue;
        }
        let next = tagged[i + 1..].iter().find(|t| t.pos != PartOfSpeech::Adverb);
        let supports_verb =
            next.map_or(false, |t| matches!(t.pos, PartOfSpeech::Verb | PartOfSpeech::Auxiliary));
        if !supports_verb {
            tagged[i].pos = PartOfSpeech::Verb;
        }
    }
}
