use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use cleartext_protocol::Language;

use crate::difficulty::DifficultyPolicy;
use crate::dictionaries::SubstitutionDictionaries;
use crate::error::ConfigError;

/// Run configuration, usually read from a TOML file:
///
/// ```toml
/// language = "en"
///
/// [difficulty]
/// grade_cutoff = 12.0
/// hard_threshold = 4.2
/// base_threshold = 4.0
///
/// [dictionaries.modal]
/// shall = "will"
///
/// [[dictionaries.phrases]]
/// phrase = "in order to"
/// replacement = "to"
/// ```
///
/// A `[dictionaries]` table replaces the built-in English tables entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearTextConfig {
    pub language: Language,
    pub difficulty: DifficultyPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionaries: Option<SubstitutionDictionaries>,
}

impl ClearTextConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: ClearTextConfig = toml::from_str(text)?;
        if let Some(dictionaries) = config.dictionaries.take() {
            config.dictionaries = Some(dictionaries.normalized().map_err(ConfigError::Dictionary)?);
        }
        Ok(config)
    }

    /// Like [`ClearTextConfig::from_toml_str`], but a document without a
    /// `language` key keeps `language` instead of falling back to English.
    pub fn from_toml_str_with_language(text: &str, language: Language) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(text)?;
        let mut config = Self::from_toml_str(text)?;
        if !table.contains_key("language") {
            config.language = language;
        }
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Configured tables, or the built-in English ones.
    pub fn dictionaries(&self) -> &SubstitutionDictionaries {
        self.dictionaries
            .as_ref()
            .unwrap_or(SubstitutionDictionaries::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionaries::PhraseRule;

    #[test]
    fn test_empty_config_is_default() {
        let config = ClearTextConfig::from_toml_str("").unwrap();
        assert_eq!(config, ClearTextConfig::default());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.difficulty.hard_threshold, 4.2);
        assert_eq!(config.dictionaries(), SubstitutionDictionaries::english());
    }

    #[test]
    fn test_missing_language_keeps_the_given_one() {
        let text = "[difficulty]\ngrade_cutoff = 10.0\n";
        let config = ClearTextConfig::from_toml_str_with_language(text, Language::French).unwrap();
        assert_eq!(config.language, Language::French);
        assert_eq!(config.difficulty.grade_cutoff, 10.0);

        let config = ClearTextConfig::from_toml_str_with_language("language = \"en\"", Language::French).unwrap();
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_partial_difficulty_table() {
        let config = ClearTextConfig::from_toml_str("language = \"fr\"\n[difficulty]\ngrade_cutoff = 10.0\n").unwrap();
        assert_eq!(config.language, Language::French);
        assert_eq!(config.difficulty.grade_cutoff, 10.0);
        assert_eq!(config.difficulty.base_threshold, 4.0);
    }

    #[test]
    fn test_dictionaries_replace_builtins() {
        let text = r#"
            [dictionaries.modal]
            Shall = "will"

            [[dictionaries.phrases]]
            phrase = "In Lieu Of"
            replacement = "instead of"

            [[dictionaries.phrases]]
            phrase = "inter alia"
            replacement = "among others"
        "#;
        let config = ClearTextConfig::from_toml_str(text).unwrap();
        let dict = config.dictionaries();
        assert_eq!(dict.modal_replacement("shall"), Some("will"));
        assert_eq!(dict.modal_replacement("must"), None);
        assert!(dict.lemma.is_empty());
        assert_eq!(
            dict.phrases,
            vec![
                PhraseRule::new("in lieu of", "instead of"),
                PhraseRule::new("inter alia", "among others"),
            ]
        );
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            ClearTextConfig::from_toml_str("language = \"xx\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ClearTextConfig::from_toml_str("[[dictionaries.phrases]]\nphrase = \"\"\nreplacement = \"x\""),
            Err(ConfigError::Dictionary(_))
        ));
        assert!(matches!(
            ClearTextConfig::from_path("/nonexistent/cleartext.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
