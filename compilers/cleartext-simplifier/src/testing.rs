//! Scripted collaborators for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use cleartext_protocol::{
    AnalyzerError, DependencyRole, EntityLabel, FineTag, FrequencyOracle, Language, LinguisticAnalyzer, OracleError,
    PartOfSpeech, ReadabilityScorer, Sentence, Span, Token,
};

/// The same grade for every text.
pub struct FixedGrade {
    grade: f64,
    calls: AtomicUsize,
}

impl FixedGrade {
    pub fn new(grade: f64) -> Self {
        Self {
            grade,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReadabilityScorer for FixedGrade {
    fn grade(&self, _text: &str) -> Result<f64, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.grade)
    }
}

/// English-only frequency table; unlisted words are common (6.0).
pub struct TableOracle {
    zipf: HashMap<String, f64>,
    last_query: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl TableOracle {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            zipf: entries.iter().map(|&(w, z)| (w.to_string(), z)).collect(),
            last_query: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FrequencyOracle for TableOracle {
    fn zipf_frequency(&self, word: &str, language: Language) -> Result<f64, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if language != Language::English {
            return Err(OracleError::UnsupportedLanguage(language));
        }
        *self.last_query.lock().unwrap() = Some(word.to_string());
        Ok(self.zipf.get(word).copied().unwrap_or(6.0))
    }
}

/// Annotation for one word form. Unlisted words become singular nouns
/// whose lemma is their lowercase text.
#[derive(Debug, Clone)]
pub struct TokenSpec {
    lemma: Option<String>,
    pos: PartOfSpeech,
    tag: FineTag,
    dep: DependencyRole,
    entity: Option<EntityLabel>,
}

impl TokenSpec {
    pub fn noun() -> Self {
        Self {
            lemma: None,
            pos: PartOfSpeech::Noun,
            tag: FineTag::SingularNoun,
            dep: DependencyRole::Dep,
            entity: None,
        }
    }

    pub fn plural(lemma: &str) -> Self {
        Self::noun().tag(FineTag::PluralNoun).lemma(lemma)
    }

    pub fn proper() -> Self {
        Self {
            pos: PartOfSpeech::ProperNoun,
            tag: FineTag::ProperSingular,
            ..Self::noun()
        }
    }

    pub fn verb(lemma: &str, tag: FineTag) -> Self {
        Self {
            pos: PartOfSpeech::Verb,
            tag,
            ..Self::noun()
        }
        .lemma(lemma)
    }

    pub fn modal() -> Self {
        Self {
            pos: PartOfSpeech::Auxiliary,
            tag: FineTag::Modal,
            dep: DependencyRole::Aux,
            ..Self::noun()
        }
    }

    pub fn passive_aux(lemma: &str) -> Self {
        Self {
            pos: PartOfSpeech::Auxiliary,
            tag: FineTag::PastTense,
            dep: DependencyRole::AuxPass,
            ..Self::noun()
        }
        .lemma(lemma)
    }

    pub fn lemma(mut self, lemma: &str) -> Self {
        self.lemma = Some(lemma.to_string());
        self
    }

    pub fn tag(mut self, tag: FineTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn entity(mut self, label: EntityLabel) -> Self {
        self.entity = Some(label);
        self
    }

    fn build(&self, text: &str, span: Span) -> Token {
        Token {
            text: text.to_string(),
            lemma: self.lemma.clone().unwrap_or_else(|| text.to_lowercase()),
            pos: self.pos,
            tag: self.tag,
            dep: self.dep,
            entity: self.entity,
            span,
        }
    }
}

fn is_punct(c: char) -> bool {
    matches!(c, '.' | ',' | '?' | '!' | ';' | ':')
}

/// Whitespace tokens with trailing punctuation split off, as byte spans.
fn pieces(text: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for chunk in text.split_whitespace() {
        let start = cursor + text[cursor..].find(chunk).unwrap_or(0);
        let end = start + chunk.len();
        cursor = end;

        let word_end = start + chunk.trim_end_matches(is_punct).len();
        if word_end > start {
            out.push((start, word_end));
        }
        for (offset, c) in text[word_end..end].char_indices() {
            out.push((word_end + offset, word_end + offset + c.len_utf8()));
        }
    }
    out
}

fn annotate(text: &str, (start, end): (usize, usize), specs: &HashMap<String, TokenSpec>) -> Token {
    let piece = &text[start..end];
    let span = Span::new(start, end);
    if let Some(spec) = specs.get(&piece.to_lowercase()) {
        return spec.build(piece, span);
    }
    if piece.chars().all(is_punct) {
        return Token {
            pos: PartOfSpeech::Punctuation,
            tag: FineTag::Punctuation,
            dep: DependencyRole::Punct,
            ..TokenSpec::noun().build(piece, span)
        };
    }
    if piece.chars().all(|c| c.is_ascii_digit()) {
        return Token {
            pos: PartOfSpeech::Numeral,
            tag: FineTag::Cardinal,
            ..TokenSpec::noun().build(piece, span)
        };
    }
    TokenSpec::noun().build(piece, span)
}

/// Splits on whitespace and after ".", "?" or "!", annotating words from a
/// lowercase-keyed table. Records every text it is asked to analyze.
pub struct FakeAnalyzer {
    specs: HashMap<String, TokenSpec>,
    silent: HashSet<String>,
    inputs: Mutex<Vec<String>>,
}

impl FakeAnalyzer {
    pub fn new(specs: &[(&str, TokenSpec)]) -> Self {
        Self {
            specs: specs.iter().map(|(w, s)| (w.to_string(), s.clone())).collect(),
            silent: HashSet::new(),
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// Makes `text` analyze to zero sentences.
    pub fn silent_on(mut self, text: &str) -> Self {
        self.silent.insert(text.to_string());
        self
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

impl LinguisticAnalyzer for FakeAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Sentence>, AnalyzerError> {
        self.inputs.lock().unwrap().push(text.to_string());
        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }
        if self.silent.contains(text) {
            return Ok(Vec::new());
        }

        let mut sentences = Vec::new();
        let mut tokens: Vec<Token> = Vec::new();
        let mut flush = |tokens: &mut Vec<Token>| {
            if let (Some(first), Some(last)) = (tokens.first(), tokens.last()) {
                let span = Span::new(first.span.start, last.span.end);
                sentences.push(Sentence {
                    text: text[span.start..span.end].to_string(),
                    span,
                    tokens: std::mem::take(tokens),
                });
            }
        };
        for piece in pieces(text) {
            let token = annotate(text, piece, &self.specs);
            let terminal = matches!(token.text.as_str(), "." | "?" | "!");
            tokens.push(token);
            if terminal {
                flush(&mut tokens);
            }
        }
        flush(&mut tokens);
        Ok(sentences)
    }
}

/// One sentence of `text` as the fake analyzer would produce it.
pub fn sentence(text: &str, specs: &[(&str, TokenSpec)]) -> Sentence {
    let mut sentences = FakeAnalyzer::new(specs).analyze(text).unwrap();
    assert_eq!(sentences.len(), 1, "expected one sentence in {:?}", text);
    sentences.remove(0)
}
