pub mod collaborators;
pub mod model;
pub mod morphology;

// Re-export core types for convenience
pub use collaborators::{AnalyzerError, FrequencyOracle, LinguisticAnalyzer, OracleError, ReadabilityScorer};
pub use model::*;
pub use morphology::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::{check_archived_root, to_bytes, Deserialize as _};

    fn token(text: &str, entity: Option<EntityLabel>, dep: DependencyRole) -> Token {
        Token {
            text: text.to_string(),
            lemma: text.to_lowercase(),
            pos: PartOfSpeech::Noun,
            tag: FineTag::SingularNoun,
            dep,
            entity,
            span: Span::default(),
        }
    }

    #[test]
    fn test_protected_labels() {
        let protected = [
            "PERSON", "ORG", "GPE", "LAW", "DATE", "TIME", "PERCENT", "MONEY", "QUANTITY", "ORDINAL", "CARDINAL",
        ];
        for label in protected {
            let parsed: EntityLabel = label.parse().unwrap();
            assert!(parsed.is_protected(), "{} should be protected", label);
            assert_eq!(parsed.label(), label);
        }

        for label in ["NORP", "LOC", "PRODUCT", "EVENT", "WORK_OF_ART", "LANGUAGE", "FAC"] {
            let parsed: EntityLabel = label.parse().unwrap();
            assert!(!parsed.is_protected(), "{} should not be protected", label);
        }

        assert!("SPECIES".parse::<EntityLabel>().is_err());
    }

    #[test]
    fn test_penn_round_trip_for_inflection_tags() {
        for code in ["NN", "NNS", "NNP", "NNPS", "VB", "VBD", "VBN", "VBZ", "VBP", "VBG", "MD"] {
            assert_eq!(FineTag::from_penn(code).penn(), code);
        }
        assert_eq!(FineTag::from_penn("JJR"), FineTag::Adjective);
        assert_eq!(FineTag::from_penn("???"), FineTag::Other);
    }

    #[test]
    fn test_tag_features() {
        assert!(FineTag::PluralNoun.features().contains(MorphFlags::PLURAL));
        assert!(FineTag::ProperPlural.features().contains(MorphFlags::PLURAL | MorphFlags::PROPER));
        assert!(FineTag::PastParticiple.features().contains(MorphFlags::PAST | MorphFlags::PARTICIPLE));
        assert!(FineTag::ThirdPersonPresent.features().contains(MorphFlags::THIRD_PERSON));
        assert!(FineTag::Gerund.features().contains(MorphFlags::PROGRESSIVE));
        assert!(FineTag::Adjective.features().is_empty());
    }

    #[test]
    fn test_sentence_passive_and_alpha() {
        let sentence = Sentence {
            text: "It was done .".to_string(),
            span: Span::new(0, 13),
            tokens: vec![
                token("It", None, DependencyRole::Subject),
                token("was", None, DependencyRole::AuxPass),
                token("done", None, DependencyRole::Root),
                token(".", None, DependencyRole::Punct),
            ],
        };
        assert!(sentence.is_passive());
        assert!(sentence.has_alphabetic_token());
        assert!(!sentence.tokens[3].is_alpha());

        let dateless = token("2024", Some(EntityLabel::Date), DependencyRole::Dep);
        assert!(dateless.is_protected());
        assert!(!dateless.is_alpha());
        assert!(!token("idea", Some(EntityLabel::Norp), DependencyRole::Dep).is_protected());
    }

    #[test]
    fn test_export_text_joins_simple_fields() {
        let results = vec![
            SimplificationResult {
                original: "A.".into(),
                simple: "a .".into(),
                explanation: "No explanation needed.".into(),
            },
            SimplificationResult {
                original: "B.".into(),
                simple: "b .".into(),
                explanation: "No explanation needed.".into(),
            },
        ];
        assert_eq!(export_text(&results), "a .\nb .");
        assert_eq!(export_text(&[]), "");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Hindi".parse::<Language>().unwrap(), Language::Hindi);
        assert!("xx".parse::<Language>().is_err());
        assert_eq!(Language::default().code(), "en");
    }

    #[test]
    fn test_frequency_table_archive() {
        let original = FrequencyTable {
            version: 1,
            language: "en".to_string(),
            entries: vec![FrequencyEntry { word: "the".to_string(), zipf: 7.73 }],
        };

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize FrequencyTable");
        let archived = check_archived_root::<FrequencyTable>(&bytes).expect("archive should validate");
        assert_eq!(archived.entries[0].word.as_str(), "the");

        let deserialized: FrequencyTable = archived.deserialize(&mut rkyv::Infallible).unwrap();
        assert_eq!(original, deserialized);
    }
}
