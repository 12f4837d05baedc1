//! Command-line entry point for declension.
//!
//! # Responsibility
//! - Validate boundary input and open the lexicon before serving a request.
//! - Keep stdout machine-readable; diagnostics go to stderr and log files.

use clap::{Parser, Subcommand, ValueEnum};
use declension_core::db::{open_db, open_db_read_only};
use declension_core::{
    default_log_level, health, import_lexicon_file, init_logging, parse_case_tag, CaseTag,
    DeclensionQuery, InflectionResult, InflectionService, SqliteMorphAnalyzer,
};
use log::info;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "declension", version)]
#[command(about = "Decline Russian words and phrases into the six grammatical cases")]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "DECLENSION_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotated log files; logging is off when unset
    #[arg(long, env = "DECLENSION_LOG_DIR", global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the case forms of TEXT
    Decline {
        /// Word or short phrase (1-128 characters)
        text: String,

        /// Lexicon database path
        #[arg(long, env = "DECLENSION_LEXICON")]
        lexicon: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print only this case (nomn|gent|datv|accs|ablt|loct)
        #[arg(long = "case", value_parser = parse_case_tag)]
        case: Option<CaseTag>,
    },
    /// Import a tab-separated paradigm file into the lexicon database
    Import {
        /// Paradigm file: six case columns plus optional rank
        file: PathBuf,

        /// Lexicon database path (created when missing)
        #[arg(long, env = "DECLENSION_LEXICON")]
        lexicon: PathBuf,
    },
    /// Print liveness status
    Health,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Table,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    match cli.command {
        Command::Decline {
            text,
            lexicon,
            format,
            case,
        } => decline(&text, &lexicon, format, case),
        Command::Import { file, lexicon } => import(&file, &lexicon),
        Command::Health => {
            println!("{}", serde_json::to_string(&health())?);
            Ok(())
        }
    }
}

fn decline(
    text: &str,
    lexicon: &Path,
    format: OutputFormat,
    case: Option<CaseTag>,
) -> Result<(), Box<dyn Error>> {
    // Analyzer setup failures abort before any input is processed.
    let conn = open_db_read_only(lexicon)?;
    let service = InflectionService::new(SqliteMorphAnalyzer::try_new(&conn)?);

    let query = DeclensionQuery::parse(text)?;
    let result = service.declension(query.text());
    println!("{}", render(&result, format, case)?);
    Ok(())
}

fn import(file: &Path, lexicon: &Path) -> Result<(), Box<dyn Error>> {
    let mut conn = open_db(lexicon)?;
    let summary = import_lexicon_file(&mut conn, file)?;
    info!(
        "event=cli_import module=cli status=ok lexemes={} forms={}",
        summary.lexemes, summary.forms
    );
    println!(
        "imported {} lexemes ({} forms) into {}",
        summary.lexemes,
        summary.forms,
        lexicon.display()
    );
    Ok(())
}

fn render(
    result: &InflectionResult,
    format: OutputFormat,
    only: Option<CaseTag>,
) -> Result<String, serde_json::Error> {
    match (format, only) {
        (OutputFormat::Json, None) => serde_json::to_string(result),
        (OutputFormat::Json, Some(case)) => {
            let mut object = serde_json::Map::new();
            object.insert(case.as_str().to_string(), result.get(case).into());
            serde_json::to_string(&object)
        }
        (OutputFormat::Table, _) => Ok(result
            .iter()
            .filter(|(case, _)| only.map_or(true, |only| only == *case))
            .map(|(case, form)| format!("{}\t{}\t{}", case.as_str(), case.label(), form))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
