use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use cleartext_analyzer::{FleschKincaid, RuleBasedAnalyzer, ZipfLexicon};
use cleartext_protocol::{export_text, Language};
use cleartext_simplifier::{ClearText, ClearTextConfig};

mod lexicon;
mod report;

use report::OutputFormat;

const DEFAULT_EXPORT: &str = "cleartext_simplified.txt";

#[derive(Parser)]
#[command(name = "cleartext", author, version, about = "Deterministic plain-language rewriting of dense text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simplify a document sentence by sentence
    Simplify(SimplifyArgs),
    /// Compile a word-frequency list into a binary lexicon
    CompileLexicon(CompileArgs),
}

#[derive(Args)]
struct SimplifyArgs {
    /// Text file to simplify; stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Report)]
    format: OutputFormat,

    /// Also write the simplified sentences, one per line
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_EXPORT)]
    export: Option<PathBuf>,

    /// TOML run configuration
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Compiled lexicon loaded on top of the built-in English table
    #[arg(short, long, value_name = "PATH")]
    lexicon: Option<PathBuf>,
}

#[derive(Args)]
struct CompileArgs {
    /// word<TAB>zipf list, or a JSON frequency table
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Language of a TSV list; JSON tables carry their own
    #[arg(short, long, default_value_t = Language::English)]
    language: Language,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cleartext=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match Cli::parse().command {
        Command::Simplify(args) => simplify(args),
        Command::CompileLexicon(args) => compile_lexicon(args),
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn simplify(args: SimplifyArgs) -> Result<()> {
    let text = read_input(args.input.as_ref())?;
    if text.trim().is_empty() {
        warn!("input is empty, nothing to simplify");
        return Ok(());
    }

    // 1. Configuration and collaborators
    let config = match &args.config {
        Some(path) => ClearTextConfig::from_path(path)?,
        None => ClearTextConfig::default(),
    };
    let mut frequencies = ZipfLexicon::english().context("built-in English lexicon is malformed")?;
    if let Some(path) = &args.lexicon {
        let bytes = fs::read(path).with_context(|| format!("failed to read lexicon {}", path.display()))?;
        let language = frequencies
            .load_archive(&bytes)
            .with_context(|| format!("failed to load lexicon {}", path.display()))?;
        info!(%language, words = frequencies.word_count(language), "lexicon loaded");
    }
    let analyzer = RuleBasedAnalyzer::new();
    let readability = FleschKincaid::new();

    // 2. Run
    let pipeline = ClearText::from_config(&config, &analyzer, &readability, &frequencies);
    let results = pipeline.run(&text).context("simplification failed")?;

    // 3. Output
    print!("{}", report::render(&results, args.format)?);
    if let Some(path) = &args.export {
        fs::write(path, export_text(&results)).with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "simplified text exported");
    }
    Ok(())
}

fn compile_lexicon(args: CompileArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input).with_context(|| format!("failed to read {}", args.input.display()))?;
    let table = lexicon::read_table(&source, args.language)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    info!(language = %table.language, entries = table.entries.len(), "compiling lexicon");

    let bytes = lexicon::compile(&table)?;
    fs::write(&args.output, &bytes).with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(path = %args.output.display(), bytes = bytes.len(), "lexicon written");
    Ok(())
}
