use std::ops::Range;

use crate::token::RawToken;

fn paragraph_break(gap: &str) -> bool {
    gap.chars().filter(|&c| c == '\n').count() >= 2
}

/// Groups tokens into sentences, returned as index ranges into `tokens`.
///
/// A sentence ends after a run of terminal punctuation plus any closing
/// quotes or brackets, or where a blank line separates two tokens.
pub fn split_sentences(input: &str, tokens: &[RawToken<'_>]) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        if i > start && paragraph_break(&input[tokens[i - 1].span.end..tokens[i].span.start]) {
            sentences.push(start..i);
            start = i;
        }

        if tokens[i].is_sentence_terminal() {
            i += 1;
            while i < tokens.len() && (tokens[i].is_sentence_terminal() || tokens[i].is_closing()) {
                i += 1;
            }
            sentences.push(start..i);
            start = i;
            continue;
        }
        i += 1;
    }

    if start < tokens.len() {
        sentences.push(start..tokens.len());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_with_spans;

    fn sentences(input: &str) -> Vec<&str> {
        let tokens = parse_with_spans(input);
        split_sentences(input, &tokens)
            .into_iter()
            .map(|r| &input[tokens[r.start].span.start..tokens[r.end - 1].span.end])
            .collect()
    }

    #[test]
    fn test_terminal_punctuation() {
        assert_eq!(
            sentences("The report was late. Was it? Yes!"),
            vec!["The report was late.", "Was it?", "Yes!"]
        );
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            sentences("Mr. Smith signed, e.g. at noon. Done."),
            vec!["Mr. Smith signed, e.g. at noon.", "Done."]
        );
    }

    #[test]
    fn test_closing_quotes_stay_attached() {
        assert_eq!(
            sentences("He said \"stop.\" Then he left..."),
            vec!["He said \"stop.\"", "Then he left..."]
        );
    }

    #[test]
    fn test_blank_line_and_trailing_fragment() {
        assert_eq!(
            sentences("Heading\n\nBody text without a stop"),
            vec!["Heading", "Body text without a stop"]
        );
        assert!(sentences("   ").is_empty());
    }
}
