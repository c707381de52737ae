use anyhow::{anyhow, bail, Result};
use rkyv::ser::serializers::AllocSerializer;
use rkyv::ser::Serializer;
use rkyv::AlignedVec;
use tracing::warn;

use cleartext_analyzer::parse_tsv;
use cleartext_protocol::{FrequencyTable, Language};

pub const LEXICON_VERSION: u32 = 1;

/// Reads a JSON `FrequencyTable` (anything starting with `{`) or a
/// `word<TAB>zipf` list for `language`.
pub fn read_table(source: &str, language: Language) -> Result<FrequencyTable> {
    if source.trim_start().starts_with('{') {
        let table: FrequencyTable = serde_json::from_str(source)?;
        let declared: Language = table.language.parse()?;
        if declared != language {
            warn!(%declared, requested = %language, "JSON table declares its own language");
        }
        if table.entries.is_empty() {
            bail!("frequency table has no entries");
        }
        return Ok(table);
    }

    let entries = parse_tsv(source)?;
    if entries.is_empty() {
        bail!("frequency list has no entries");
    }
    Ok(FrequencyTable {
        version: LEXICON_VERSION,
        language: language.code().to_string(),
        entries,
    })
}

pub fn compile(table: &FrequencyTable) -> Result<AlignedVec> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(table)
        .map_err(|e| anyhow!("failed to serialize frequency table: {:?}", e))?;
    Ok(serializer.into_serializer().into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleartext_analyzer::ZipfLexicon;
    use cleartext_protocol::FrequencyOracle;

    #[test]
    fn test_tsv_compiles_to_loadable_archive() {
        let table = read_table("# spanish sample\nel\t7.4\nsin embargo\t4.9\nno obstante\t3.1\n", Language::Spanish).unwrap();
        assert_eq!(table.version, LEXICON_VERSION);
        assert_eq!(table.language, "es");

        let bytes = compile(&table).unwrap();
        let mut lexicon = ZipfLexicon::new();
        assert_eq!(lexicon.load_archive(&bytes).unwrap(), Language::Spanish);
        assert_eq!(lexicon.word_count(Language::Spanish), 3);
        assert_eq!(lexicon.zipf_frequency("no obstante", Language::Spanish).unwrap(), 3.1_f32 as f64);
    }

    #[test]
    fn test_json_table_keeps_its_language() {
        let json = r#"{"version": 3, "language": "hi", "entries": [{"word": "aur", "zipf": 6.5}]}"#;
        let table = read_table(json, Language::English).unwrap();
        assert_eq!(table.version, 3);
        assert_eq!(table.language, "hi");

        let mut lexicon = ZipfLexicon::new();
        assert_eq!(lexicon.load_archive(&compile(&table).unwrap()).unwrap(), Language::Hindi);
    }

    #[test]
    fn test_rejects_bad_sources() {
        assert!(read_table("# only a comment\n", Language::English).is_err());
        assert!(read_table("word\tseven", Language::English).is_err());
        assert!(read_table(r#"{"version": 1, "language": "xx", "entries": []}"#, Language::English).is_err());
    }
}
