use wasm_bindgen::prelude::*;

use cleartext_analyzer::{FleschKincaid, RuleBasedAnalyzer, ZipfLexicon};
use cleartext_protocol::{export_text, SimplificationResult};
use cleartext_simplifier::{ClearText, ClearTextConfig, ClearTextError, ConfigError};

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Collaborators and configuration owned by one browser session.
struct Session {
    analyzer: RuleBasedAnalyzer,
    readability: FleschKincaid,
    frequencies: ZipfLexicon,
    config: ClearTextConfig,
}

impl Session {
    fn english() -> Result<Self, ClearTextError> {
        Ok(Self {
            analyzer: RuleBasedAnalyzer::new(),
            readability: FleschKincaid::new(),
            frequencies: ZipfLexicon::english()?,
            config: ClearTextConfig::default(),
        })
    }

    fn configure(&mut self, toml: &str) -> Result<(), ConfigError> {
        self.config = ClearTextConfig::from_toml_str_with_language(toml, self.config.language)?;
        Ok(())
    }

    fn simplify(&self, text: &str) -> Result<Vec<SimplificationResult>, ClearTextError> {
        ClearText::from_config(&self.config, &self.analyzer, &self.readability, &self.frequencies).run(text)
    }
}

/// The simplifier as seen from JavaScript.
#[wasm_bindgen]
pub struct ClearTextEngine {
    session: Session,
}

#[wasm_bindgen]
impl ClearTextEngine {
    /// Engine with the built-in English tables.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ClearTextEngine, JsError> {
        Ok(Self {
            session: Session::english()?,
        })
    }

    /// Engine with a compiled lexicon (fetched by the page) on top of the
    /// English tables. The lexicon's language becomes the active one.
    #[wasm_bindgen(js_name = withLexicon)]
    pub fn with_lexicon(bytes: &[u8]) -> Result<ClearTextEngine, JsError> {
        let mut session = Session::english()?;
        session.config.language = session.frequencies.load_archive(bytes)?;
        Ok(Self { session })
    }

    /// Replaces the run configuration with a TOML document. Without a
    /// `language` key the current language stays active.
    pub fn configure(&mut self, toml: &str) -> Result<(), JsError> {
        self.session.configure(toml)?;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.session.config.language.code().to_string()
    }

    /// `{ original, simple, explanation }` records, one per sentence.
    pub fn simplify(&self, text: &str) -> Result<JsValue, JsError> {
        let results = self.session.simplify(text)?;
        serde_wasm_bindgen::to_value(&results).map_err(|e| JsError::new(&e.to_string()))
    }

    /// The downloadable text: simplified sentences, one per line.
    #[wasm_bindgen(js_name = exportText)]
    pub fn export_text(&self, text: &str) -> Result<String, JsError> {
        Ok(export_text(&self.session.simplify(text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleartext_protocol::Language;

    #[test]
    fn test_session_simplifies_and_exports() {
        let session = Session::english().unwrap();
        let results = session.simplify("The parties utilized the framework. The cat sat.").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(export_text(&results), "the parties used the structure .\nthe cat sat .");
    }

    #[test]
    fn test_blank_text_gives_no_records() {
        let session = Session::english().unwrap();
        assert!(session.simplify("  ").unwrap().is_empty());
    }

    #[test]
    fn test_session_language_follows_config() {
        let mut session = Session::english().unwrap();
        session.configure("language = \"fr\"").unwrap();
        assert!(matches!(session.simplify("Bonjour."), Err(ClearTextError::Oracle(_))));
    }

    #[test]
    fn test_configure_without_language_keeps_the_lexicon_language() {
        let mut session = Session::english().unwrap();
        session.config.language = Language::French;
        session.configure("[difficulty]\ngrade_cutoff = 10.0\n").unwrap();
        assert_eq!(session.config.language, Language::French);
        assert_eq!(session.config.difficulty.grade_cutoff, 10.0);
    }
}
