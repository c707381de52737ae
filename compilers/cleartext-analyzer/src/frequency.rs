//! Word-frequency oracle backed by Zipf-scale tables.

use std::collections::HashMap;

use rkyv::AlignedVec;
use tracing::debug;

use cleartext_protocol::{FrequencyEntry, FrequencyOracle, FrequencyTable, Language, OracleError};

use crate::lexicon;

/// Parses a `word<TAB>zipf` list. Blank lines and `#` comments are skipped.
pub fn parse_tsv(text: &str) -> Result<Vec<FrequencyEntry>, OracleError> {
    let mut entries = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let malformed = |message: String| OracleError::Lexicon {
            line: index + 1,
            message,
        };

        let mut fields = line.split('\t');
        let (word, value) = match (fields.next(), fields.next(), fields.next()) {
            (Some(word), Some(value), None) => (word.trim(), value.trim()),
            _ => return Err(malformed(format!("expected word<TAB>zipf, got {:?}", line))),
        };
        if word.is_empty() {
            return Err(malformed("empty word".to_string()));
        }
        let zipf: f32 = value
            .parse()
            .map_err(|e| malformed(format!("invalid zipf value {:?}: {}", value, e)))?;
        if !zipf.is_finite() || zipf < 0.0 {
            return Err(malformed(format!("zipf value out of range: {}", zipf)));
        }

        entries.push(FrequencyEntry {
            word: word.to_lowercase(),
            zipf,
        });
    }

    Ok(entries)
}

#[derive(Debug, Clone, Default)]
pub struct ZipfLexicon {
    tables: HashMap<Language, HashMap<String, f32>>,
}

impl ZipfLexicon {
    /// A lexicon with no languages loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English table.
    pub fn english() -> Result<Self, OracleError> {
        Self::from_tsv(Language::English, lexicon::ENGLISH_FREQUENCIES)
    }

    pub fn from_tsv(language: Language, text: &str) -> Result<Self, OracleError> {
        let mut lexicon = Self::new();
        lexicon.insert_entries(language, parse_tsv(text)?);
        Ok(lexicon)
    }

    /// Adds entries to a language table. Later entries replace earlier ones.
    pub fn insert_entries(&mut self, language: Language, entries: impl IntoIterator<Item = FrequencyEntry>) {
        let table = self.tables.entry(language).or_default();
        for entry in entries {
            table.insert(entry.word.to_lowercase(), entry.zipf);
        }
    }

    /// Validates a compiled [`FrequencyTable`] archive and merges it in.
    /// Returns the language the archive was compiled for.
    pub fn load_archive(&mut self, bytes: &[u8]) -> Result<Language, OracleError> {
        // rkyv needs the root aligned; a byte slice from a file or JS gives no such guarantee.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let archived = rkyv::check_archived_root::<FrequencyTable>(&aligned)
            .map_err(|e| OracleError::Archive(e.to_string()))?;
        let language: Language = archived
            .language
            .as_str()
            .parse()
            .map_err(|e: cleartext_protocol::UnknownLanguage| OracleError::Archive(e.to_string()))?;

        let table = self.tables.entry(language).or_default();
        for entry in archived.entries.iter() {
            table.insert(entry.word.as_str().to_lowercase(), f32::from(entry.zipf));
        }
        debug!(
            language = %language,
            version = archived.version,
            entries = archived.entries.len(),
            "loaded compiled lexicon"
        );
        Ok(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.tables.keys().copied()
    }

    pub fn word_count(&self, language: Language) -> usize {
        self.tables.get(&language).map_or(0, HashMap::len)
    }
}

impl FrequencyOracle for ZipfLexicon {
    fn zipf_frequency(&self, word: &str, language: Language) -> Result<f64, OracleError> {
        let table = self
            .tables
            .get(&language)
            .ok_or(OracleError::UnsupportedLanguage(language))?;
        // Unattested words sit at the bottom of the scale.
        Ok(table.get(&word.to_lowercase()).map_or(0.0, |&z| f64::from(z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::to_bytes;

    #[test]
    fn test_builtin_english_values() {
        let lexicon = ZipfLexicon::english().unwrap();
        let zipf = |w: &str| lexicon.zipf_frequency(w, Language::English).unwrap();

        assert!(zipf("the") > 7.0);
        assert!(zipf("team") >= 4.2);
        assert!(zipf("utilized") < 4.0);
        assert!(zipf("hereinafter") < zipf("commence"));
        assert_eq!(zipf("The"), zipf("the"));
        assert_eq!(zipf("qwzxv"), 0.0);
    }

    #[test]
    fn test_unsupported_language() {
        let lexicon = ZipfLexicon::english().unwrap();
        assert_eq!(
            lexicon.zipf_frequency("le", Language::French),
            Err(OracleError::UnsupportedLanguage(Language::French))
        );
    }

    #[test]
    fn test_malformed_tsv_reports_line() {
        let err = ZipfLexicon::from_tsv(Language::English, "# header\nthe\t7.7\nbroken line\n").unwrap_err();
        assert!(matches!(err, OracleError::Lexicon { line: 3, .. }));

        let err = parse_tsv("word\tnot-a-number").unwrap_err();
        assert!(matches!(err, OracleError::Lexicon { line: 1, .. }));

        let err = parse_tsv("word\t-1.0").unwrap_err();
        assert!(matches!(err, OracleError::Lexicon { line: 1, .. }));
    }

    #[test]
    fn test_archive_round_trip() {
        let table = FrequencyTable {
            version: 1,
            language: "fr".to_string(),
            entries: vec![
                FrequencyEntry { word: "le".to_string(), zipf: 7.5 },
                FrequencyEntry { word: "Nonobstant".to_string(), zipf: 2.5 },
            ],
        };
        let bytes = to_bytes::<_, 256>(&table).unwrap();

        let mut lexicon = ZipfLexicon::english().unwrap();
        assert_eq!(lexicon.load_archive(&bytes).unwrap(), Language::French);
        assert_eq!(lexicon.zipf_frequency("le", Language::French).unwrap(), 7.5);
        assert_eq!(lexicon.zipf_frequency("nonobstant", Language::French).unwrap(), 2.5);
        assert_eq!(lexicon.word_count(Language::French), 2);
        assert!(lexicon.word_count(Language::English) > 1000);
    }

    #[test]
    fn test_invalid_archive_is_rejected() {
        let mut lexicon = ZipfLexicon::new();
        let err = lexicon.load_archive(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, OracleError::Archive(_)));
    }
}
