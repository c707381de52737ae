use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while, take_while1},
    character::complete::{char, digit1, one_of, satisfy},
    combinator::{map, opt, recognize},
    multi::{many0, many1},
    sequence::{pair, tuple},
    IResult,
};

use cleartext_protocol::Span;

use crate::lexicon;
use crate::token::{RawKind, RawToken};

const PUNCTUATION: &str = ".,;:!?()[]{}\"'“”‘’—–-…/";

fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// "e.g.", "U.S.", "a.m.": two or more single letters each followed by a dot.
pub(crate) fn initialism(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        pair(satisfy(char::is_alphabetic), char('.')),
        many1(pair(satisfy(char::is_alphabetic), char('.'))),
    ))(input)
}

/// "500", "1,200.50", "3rd".
fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        digit1,
        many0(pair(one_of(",."), digit1)),
        opt(alt((tag_no_case("st"), tag_no_case("nd"), tag_no_case("rd"), tag_no_case("th")))),
    )))(input)
}

/// "agreement", "don't", "long-term".
fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(is_word_char),
        many0(pair(one_of("'’-"), take_while1(is_word_char))),
    ))(input)
}

fn punctuation(input: &str) -> IResult<&str, &str> {
    alt((tag("..."), tag("--"), recognize(one_of(PUNCTUATION))))(input)
}

fn raw_token(input: &str) -> IResult<&str, (&str, RawKind)> {
    alt((
        map(initialism, |s| (s, RawKind::Abbreviation)),
        map(number, |s| (s, RawKind::Number)),
        map(word, |s| (s, RawKind::Word)),
        map(punctuation, |s| (s, RawKind::Punct)),
    ))(input)
}

/// Splits `original_input` into tokens with byte spans. Never fails: a
/// character no rule recognizes becomes a one-character symbol.
pub fn parse_with_spans(original_input: &str) -> Vec<RawToken<'_>> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace (Unicode aware, so NBSP never becomes a token)
        let (next_input, _) = match take_while::<_, &str, nom::error::Error<&str>>(char::is_whitespace)(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        let start = original_input.len() - input.len();

        // 2. Try to match a token
        let (mut len, mut kind) = match raw_token(input) {
            Ok((_, (text, kind))) => (text.len(), kind),
            Err(_) => {
                // Unknown char: keep it as a symbol so spans stay contiguous.
                match input.chars().next() {
                    Some(c) => (c.len_utf8(), RawKind::Symbol),
                    None => break,
                }
            }
        };

        // 3. "Mr." and friends keep their dot
        if kind == RawKind::Word
            && input[len..].starts_with('.')
            && lexicon::is_abbreviation(&input[..len].to_lowercase())
        {
            len += 1;
            kind = RawKind::Abbreviation;
        }

        result.push(RawToken {
            span: Span::new(start, start + len),
            text: &original_input[start..start + len],
            kind,
        });
        input = &input[len..];
    }

    result
}
