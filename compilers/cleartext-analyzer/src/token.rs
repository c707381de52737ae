use cleartext_protocol::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKind {
    /// Letters, optionally joined by apostrophes or hyphens.
    Word,
    /// Digits, optionally with internal separators or an ordinal suffix.
    Number,
    /// Dotted initialism or known abbreviation ("e.g.", "U.S.", "Mr.").
    Abbreviation,
    /// Sentence and clause punctuation.
    Punct,
    /// Anything else that is not whitespace ("$", "%", "&").
    Symbol,
}

#[derive(Debug, Clone, Copy)]
pub struct RawToken<'a> {
    pub span: Span,
    pub text: &'a str,
    pub kind: RawKind,
}

impl<'a> RawToken<'a> {
    pub fn is_sentence_terminal(&self) -> bool {
        self.kind == RawKind::Punct && matches!(self.text, "." | "!" | "?" | "..." | "…")
    }

    pub fn is_closing(&self) -> bool {
        self.kind == RawKind::Punct && matches!(self.text, "\"" | "'" | "”" | "’" | ")" | "]" | "}")
    }
}
