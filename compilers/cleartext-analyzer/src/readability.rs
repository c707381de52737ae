use cleartext_protocol::{OracleError, ReadabilityScorer};

use crate::{lexicon, parser};

/// Flesch–Kincaid grade level.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschKincaid;

impl FleschKincaid {
    pub fn new() -> Self {
        Self
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

/// "Mr.", "e.g.", "U.S." end in a dot without ending a sentence.
fn is_abbreviation(chunk: &str) -> bool {
    let word = chunk.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
    matches!(parser::initialism(&word), Ok(("", _)))
        || word.strip_suffix('.').map_or(false, lexicon::is_abbreviation)
}

/// Runs of terminal punctuation that end a whitespace-separated chunk.
fn sentence_count(text: &str) -> usize {
    let count = text
        .split_whitespace()
        .filter(|chunk| {
            let trimmed = chunk.trim_end_matches(|c: char| matches!(c, '"' | '\'' | '”' | '’' | ')' | ']'));
            trimmed.ends_with(is_terminal) && !is_abbreviation(trimmed)
        })
        .count();
    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel groups, minus a silent final "e" or "-ed"; never less than one.
pub fn syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    let mut count = 0;
    let mut in_group = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            count += 1;
        }
        in_group = vowel;
    }

    let n = letters.len();
    if count > 1 && n > 2 {
        let last = letters[n - 1];
        let before = letters[n - 2];
        let silent_e = last == 'e' && !(before == 'l' && n > 3 && !is_vowel(letters[n - 3]));
        let silent_ed = last == 'd' && before == 'e' && n > 3 && !matches!(letters[n - 3], 't' | 'd');
        if silent_e || silent_ed {
            count -= 1;
        }
    }

    count.max(1)
}

impl ReadabilityScorer for FleschKincaid {
    fn grade(&self, text: &str) -> Result<f64, OracleError> {
        let (word_count, syllable_count) = words(text).fold((0usize, 0usize), |(w, s), word| (w + 1, s + syllables(word)));
        if word_count == 0 {
            return Err(OracleError::NoWords { text: text.to_string() });
        }

        let words = word_count as f64;
        let sentences = sentence_count(text) as f64;
        let grade = 0.39 * (words / sentences) + 11.8 * (syllable_count as f64 / words) - 15.59;
        Ok((grade * 10.0).round() / 10.0)
    }
}
