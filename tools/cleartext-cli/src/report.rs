use anyhow::Result;
use clap::ValueEnum;

use cleartext_protocol::{export_text, SimplificationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The result records as a JSON array
    Json,
    /// Simplified sentences only, one per line
    Text,
    /// Original, simplified and explanation for each sentence
    Report,
}

pub fn render(results: &[SimplificationResult], format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(results)?,
        OutputFormat::Text => export_text(results),
        OutputFormat::Report => report(results),
    };
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn report(results: &[SimplificationResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            format!(
                "Sentence {}\n  Original:    {}\n  Simplified:  {}\n  Explanation: {}\n",
                index + 1,
                result.original,
                result.simple,
                result.explanation
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<SimplificationResult> {
        vec![
            SimplificationResult {
                original: "The parties utilized the framework.".to_string(),
                simple: "the parties used the structure .".to_string(),
                explanation: "Some complex words are used: utilized".to_string(),
            },
            SimplificationResult {
                original: "The cat sat.".to_string(),
                simple: "the cat sat .".to_string(),
                explanation: "No explanation needed.".to_string(),
            },
        ]
    }

    #[test]
    fn test_text_format_is_the_export_artifact() {
        let out = render(&results(), OutputFormat::Text).unwrap();
        assert_eq!(out, "the parties used the structure .\nthe cat sat .\n");
    }

    #[test]
    fn test_report_format() {
        let out = render(&results(), OutputFormat::Report).unwrap();
        let expected = "Sentence 1\n\
                        \x20 Original:    The parties utilized the framework.\n\
                        \x20 Simplified:  the parties used the structure .\n\
                        \x20 Explanation: Some complex words are used: utilized\n\
                        \n\
                        Sentence 2\n\
                        \x20 Original:    The cat sat.\n\
                        \x20 Simplified:  the cat sat .\n\
                        \x20 Explanation: No explanation needed.\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_json_keeps_field_names() {
        let out = render(&results(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["original"], "The cat sat.");
        assert_eq!(value[1]["simple"], "the cat sat .");
        assert_eq!(value[1]["explanation"], "No explanation needed.");
    }

    #[test]
    fn test_no_results() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render(&[], OutputFormat::Report).unwrap(), "");
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]\n");
    }
}
