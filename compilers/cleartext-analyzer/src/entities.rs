//! Rule and gazetteer based named-entity recognition.
//!
//! Matchers run left to right; at each position the first matcher that fires
//! claims its tokens. Numeric, temporal and name-gazetteer rules work on
//! lowercase text as well, since simplification re-analyzes lowercased
//! sentences.

use cleartext_protocol::{EntityLabel, PartOfSpeech};

use crate::lexicon;
use crate::morphology::Tagged;
use crate::token::{RawKind, RawToken};

struct Scanner<'s, 'a> {
    raw: &'s [RawToken<'a>],
    tagged: &'s [Tagged],
    lower: Vec<String>,
    first_word: Option<usize>,
}

impl<'s, 'a> Scanner<'s, 'a> {
    fn new(raw: &'s [RawToken<'a>], tagged: &'s [Tagged]) -> Self {
        Self {
            raw,
            tagged,
            lower: raw.iter().map(|t| t.text.to_lowercase()).collect(),
            first_word: raw.iter().position(|t| t.kind == RawKind::Word),
        }
    }

    fn text(&self, i: usize) -> &str {
        self.raw.get(i).map_or("", |t| t.text)
    }

    fn lower(&self, i: usize) -> &str {
        self.lower.get(i).map_or("", String::as_str)
    }

    fn kind(&self, i: usize) -> Option<RawKind> {
        self.raw.get(i).map(|t| t.kind)
    }

    fn pos(&self, i: usize) -> Option<PartOfSpeech> {
        self.tagged.get(i).map(|t| t.pos)
    }

    fn is_ordinal_number(&self, i: usize) -> bool {
        self.kind(i) == Some(RawKind::Number) && self.text(i).ends_with(|c: char| c.is_alphabetic())
    }

    fn is_number(&self, i: usize) -> bool {
        self.kind(i) == Some(RawKind::Number) && !self.is_ordinal_number(i)
    }

    /// Digits or a number word.
    fn is_count(&self, i: usize) -> bool {
        self.is_number(i) || (self.kind(i) == Some(RawKind::Word) && self.pos(i) == Some(PartOfSpeech::Numeral))
    }

    /// Integer value of a plain or ordinal number without separators.
    fn value(&self, i: usize) -> Option<u32> {
        if self.kind(i) != Some(RawKind::Number) {
            return None;
        }
        let digits = self.text(i).trim_end_matches(|c: char| c.is_alphabetic());
        digits.parse().ok()
    }

    fn is_year(&self, i: usize) -> bool {
        self.is_number(i) && self.text(i).len() == 4 && self.value(i).map_or(false, |v| (1500..=2100).contains(&v))
    }

    fn is_day(&self, i: usize) -> bool {
        self.value(i).map_or(false, |v| (1..=31).contains(&v))
    }

    fn is_open_word(&self, i: usize) -> bool {
        self.kind(i) == Some(RawKind::Word) && !lexicon::CLOSED_CLASS.contains_key(self.lower(i))
    }

    /// Capitalized, not a function word, and not merely capitalized because
    /// it opens the sentence.
    fn is_name_like(&self, i: usize) -> bool {
        let capitalized = matches!(self.kind(i), Some(RawKind::Word | RawKind::Abbreviation))
            && self.text(i).starts_with(char::is_uppercase)
            && !lexicon::CLOSED_CLASS.contains_key(self.lower(i));
        capitalized && (Some(i) != self.first_word || self.pos(i) == Some(PartOfSpeech::ProperNoun))
    }

    fn capitalized_run(&self, i: usize) -> usize {
        (i..self.raw.len()).take_while(|&j| self.is_name_like(j)).count()
    }

    fn scale_at(&self, i: usize) -> usize {
        usize::from(lexicon::SCALE_WORDS.contains(self.lower(i)))
    }

    fn is_month(&self, i: usize) -> bool {
        let word = self.lower(i);
        if !lexicon::MONTHS.contains(word) {
            return false;
        }
        if !matches!(word, "may" | "march") {
            return true;
        }
        // Modal "may" and verb "march" need numeric or prepositional support.
        let numeric = self.is_number(i + 1) || (i > 0 && self.is_number(i - 1)) || self.is_ordinal_number(i + 1);
        let after_preposition = i > 0
            && self.text(i).starts_with(char::is_uppercase)
            && matches!(
                self.lower(i - 1),
                "in" | "of" | "since" | "until" | "by" | "during" | "from" | "before" | "after"
            );
        numeric || after_preposition
    }

    /// First rule that fires at `i`, with the number of tokens it claims.
    fn match_at(&self, i: usize) -> Option<(EntityLabel, usize)> {
        let rules: [(EntityLabel, fn(&Self, usize) -> Option<usize>); 11] = [
            (EntityLabel::Money, Self::money),
            (EntityLabel::Percent, Self::percent),
            (EntityLabel::Time, Self::time),
            (EntityLabel::Date, Self::date),
            (EntityLabel::Quantity, Self::quantity),
            (EntityLabel::Ordinal, Self::ordinal),
            (EntityLabel::Cardinal, Self::cardinal),
            (EntityLabel::Law, Self::law),
            (EntityLabel::Org, Self::org),
            (EntityLabel::Gpe, Self::gpe),
            (EntityLabel::Person, Self::person),
        ];
        rules
            .iter()
            .find_map(|(label, rule)| rule(self, i).map(|len| (*label, len)))
    }

    fn money(&self, i: usize) -> Option<usize> {
        if lexicon::CURRENCY_SYMBOLS.contains(self.text(i)) && self.is_number(i + 1) {
            return Some(2 + self.scale_at(i + 2));
        }
        if self.is_count(i) {
            let scale = self.scale_at(i + 1);
            if lexicon::CURRENCY_WORDS.contains(self.lower(i + 1 + scale)) {
                return Some(2 + scale);
            }
        }
        None
    }

    fn percent(&self, i: usize) -> Option<usize> {
        if !self.is_count(i) {
            return None;
        }
        match (self.lower(i + 1), self.lower(i + 2)) {
            ("%", _) | ("percent", _) => Some(2),
            ("per", "cent") => Some(3),
            _ => None,
        }
    }

    fn time(&self, i: usize) -> Option<usize> {
        if matches!(self.lower(i), "noon" | "midnight") {
            return Some(1);
        }
        if !self.is_number(i) {
            return None;
        }
        let clock = self.text(i + 1) == ":" && self.is_number(i + 2);
        let len = if clock { 3 } else { 1 };
        if lexicon::TIME_MARKERS.contains(self.lower(i + len)) {
            Some(len + 1)
        } else if clock {
            Some(len)
        } else {
            None
        }
    }

    fn date(&self, i: usize) -> Option<usize> {
        let word = self.lower(i);

        // "January 1, 2024", "March 2024", "Jan."
        if self.is_month(i) {
            if self.is_day(i + 1) {
                if self.text(i + 2) == "," && self.is_year(i + 3) {
                    return Some(4);
                }
                return Some(if self.is_year(i + 2) { 3 } else { 2 });
            }
            return Some(if self.is_year(i + 1) { 2 } else { 1 });
        }
        // "1 January 2024"
        if self.is_day(i) && self.is_month(i + 1) {
            return Some(if self.is_year(i + 2) { 3 } else { 2 });
        }
        if lexicon::WEEKDAYS.contains(word) || lexicon::RELATIVE_DATES.contains(word) {
            return Some(1);
        }
        if matches!(word, "next" | "last" | "this" | "previous" | "following" | "coming")
            && lexicon::DATE_UNITS.contains(self.lower(i + 1))
        {
            return Some(2);
        }
        // "30 days", "thirty days ago"
        if self.is_count(i) && lexicon::DATE_UNITS.contains(self.lower(i + 1)) {
            return Some(if self.lower(i + 2) == "ago" { 3 } else { 2 });
        }
        // "01/02/2024"
        if self.is_number(i)
            && self.text(i + 1) == "/"
            && self.is_number(i + 2)
            && self.text(i + 3) == "/"
            && self.is_number(i + 4)
        {
            return Some(5);
        }
        if self.is_year(i) {
            return Some(1);
        }
        None
    }

    fn quantity(&self, i: usize) -> Option<usize> {
        (self.is_count(i) && lexicon::UNITS.contains(self.lower(i + 1))).then_some(2)
    }

    fn ordinal(&self, i: usize) -> Option<usize> {
        (self.is_ordinal_number(i) || lexicon::ORDINAL_WORDS.contains(self.lower(i))).then_some(1)
    }

    fn cardinal(&self, i: usize) -> Option<usize> {
        if self.is_number(i) {
            return Some(1);
        }
        let run = (i..self.raw.len())
            .take_while(|&j| self.kind(j) == Some(RawKind::Word) && self.pos(j) == Some(PartOfSpeech::Numeral))
            .count();
        (run > 0).then_some(run)
    }

    fn law(&self, i: usize) -> Option<usize> {
        // "section 5", "article 12"
        if lexicon::LAW_REFERENCES.contains(self.lower(i)) && self.kind(i + 1) == Some(RawKind::Number) {
            return Some(2);
        }
        // "Data Protection Act", "U.S. Code"
        let run = self.capitalized_run(i);
        (run >= 2 && lexicon::LAW_HEADS.contains(self.lower(i + run - 1))).then_some(run)
    }

    fn org(&self, i: usize) -> Option<usize> {
        if let Some(len) = self.gazetteer_run(i, lexicon::MULTIWORD_ORG) {
            return Some(len);
        }
        let run = self.capitalized_run(i);
        if run >= 2 && lexicon::ORG_HEADS.contains(self.lower(i + run - 1)) {
            return Some(run);
        }
        if self.is_open_word(i) && lexicon::CORPORATE_SUFFIXES.contains(&self.lower(i + 1)) {
            return Some(2);
        }
        // Acronyms ("NASA", "WHO")
        let text = self.text(i);
        let acronym = self.is_open_word(i)
            && (2..=6).contains(&text.chars().count())
            && text.chars().all(char::is_uppercase)
            && !lexicon::GPE_NAMES.contains(self.lower(i));
        acronym.then_some(1)
    }

    fn gpe(&self, i: usize) -> Option<usize> {
        self.gazetteer_run(i, lexicon::MULTIWORD_GPE)
            .or_else(|| lexicon::GPE_NAMES.contains(self.lower(i)).then_some(1))
    }

    fn gazetteer_run(&self, i: usize, entries: &[&[&str]]) -> Option<usize> {
        entries
            .iter()
            .find(|names| names.iter().enumerate().all(|(k, name)| self.lower(i + k) == *name))
            .map(|names| names.len())
    }

    fn person(&self, i: usize) -> Option<usize> {
        let word = self.lower(i);

        // "Mr. Smith", "Judge Jane Doe"
        if lexicon::TITLES.contains(word) {
            let dotted = word.ends_with('.');
            let names = (1..=2)
                .take_while(|&k| {
                    if dotted && k == 1 {
                        self.is_open_word(i + k)
                    } else {
                        self.is_name_like(i + k)
                    }
                })
                .count();
            return (names > 0).then_some(1 + names);
        }

        // "John Smith", "john smith", "John"
        if self.kind(i) == Some(RawKind::Word) && lexicon::GIVEN_NAMES.contains(word) {
            let surname = self.is_name_like(i + 1)
                || lexicon::SURNAMES.contains(self.lower(i + 1))
                || (self.is_open_word(i + 1) && self.pos(i + 1) == Some(PartOfSpeech::Noun));
            return Some(1 + usize::from(surname));
        }

        // "Hughes", "hughes"
        if self.kind(i) == Some(RawKind::Word) && lexicon::SURNAMES.contains(word) {
            return Some(1);
        }

        // Runs of proper nouns
        let run = (i..self.raw.len())
            .take(3)
            .take_while(|&j| {
                self.kind(j) == Some(RawKind::Word)
                    && self.pos(j) == Some(PartOfSpeech::ProperNoun)
                    && self.is_name_like(j)
            })
            .count();
        (run > 0).then_some(run)
    }
}

/// Labels every token of one sentence with its entity type, if any.
pub fn recognize(raw: &[RawToken<'_>], tagged: &[Tagged]) -> Vec<Option<EntityLabel>> {
    let scanner = Scanner::new(raw, tagged);
    let mut labels = vec![None; raw.len()];
    let mut i = 0;

    while i < raw.len() {
        match scanner.match_at(i) {
            Some((label, len)) => {
                let end = (i + len).min(raw.len());
                for slot in &mut labels[i..end] {
                    *slot = Some(label);
                }
                i = end;
            }
            None => i += 1,
        }
    }

    labels
}
