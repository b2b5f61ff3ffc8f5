#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use oejts::{
    build_report, load_variant_from_path, render_report_markdown, Answers, Locale, QuestionBank,
    ReportOptions, Scorer, VariantConfig,
};

#[derive(Parser)]
#[command(name = "oejts", version, about = "Score OEJTS-style type tests")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Json,
    Md,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answers file (JSON object of question id -> 1..5)
    Score {
        #[arg(long)]
        answers: PathBuf,
        /// Built-in variant: full, quick, feline, dimension-ei, ...
        #[arg(long, default_value = "full")]
        variant: String,
        /// Custom variant definition (JSON); takes precedence over --variant
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Fail on out-of-range or foreign answers instead of warning
        #[arg(long)]
        strict: bool,
        #[arg(long)]
        include_answers: bool,
    },
    /// Print a built-in variant's questions as JSON lines
    Questions {
        #[arg(long, default_value = "full")]
        variant: String,
        #[arg(long, default_value = "en")]
        locale: String,
    },
    /// List built-in variants and their score ranges
    Variants,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Score {
            answers,
            variant,
            config,
            format,
            out,
            strict,
            include_answers,
        } => {
            let config = match config {
                Some(path) => load_variant_from_path(path)?,
                None => VariantConfig::by_name(&variant)?,
            };
            let answers: Answers = read_json(&answers)?;
            if let Err(err) = answers.validate(&config) {
                if strict {
                    return Err(err.into());
                }
                warn!(error = %err, "answers failed validation; scoring as given");
            }

            let scorer = Scorer::new(config);
            let opts = ReportOptions {
                include_answers,
                ..ReportOptions::default()
            };
            let report = build_report(&scorer, &answers, &opts);
            let rendered = match format {
                ReportFormat::Json => serde_json::to_string_pretty(&report)?,
                ReportFormat::Md => render_report_markdown(&report),
            };
            match out {
                Some(path) => {
                    let mut file = File::create(path)?;
                    writeln!(file, "{rendered}")?;
                }
                None => println!("{rendered}"),
            }
        }
        Commands::Questions { variant, locale } => {
            let config = VariantConfig::by_name(&variant)?;
            let locale: Locale = locale.parse()?;
            let bank = bank_for(&config);
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            for q in bank.for_variant(&config) {
                let line = serde_json::json!({
                    "id": q.id,
                    "dimension": q.dimension,
                    "title": q.title.map(|t| t.get(locale)),
                    "left": q.left_trait.get(locale),
                    "right": q.right_trait.get(locale),
                });
                writeln!(handle, "{line}")?;
            }
        }
        Commands::Variants => {
            for v in VariantConfig::builtins() {
                println!(
                    "{}\tk={}\ttotal={}\trange={}..={}\tthreshold={}",
                    v.name,
                    v.per_dimension(),
                    v.total_questions(),
                    v.score_min(),
                    v.score_max(),
                    v.threshold()
                );
            }
        }
    }

    Ok(())
}

fn bank_for(config: &VariantConfig) -> QuestionBank {
    if config.name == "feline" {
        QuestionBank::feline()
    } else {
        QuestionBank::oejts()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<T, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
