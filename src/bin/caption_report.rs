use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;

use caption_align::{
    aggregate_reports, compute_sentence_report, CaptionAligner, CaptionAlignerBuilder,
    CaptionConfig, Meta, MergeStrategy, Report, SentenceReport, Token,
};

const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MergeChoice {
    Short,
    Natural,
    None,
}

impl MergeChoice {
    fn as_strategy(self) -> MergeStrategy {
        match self {
            Self::Short => MergeStrategy::Short,
            Self::Natural => MergeStrategy::Natural,
            Self::None => MergeStrategy::None,
        }
    }
}

/// Run caption alignment over a JSON case file and write a structural report.
#[derive(Debug, Parser)]
#[command(name = "caption_report")]
struct Args {
    /// JSON file: array of {id, sentence, tokens: [{text, start, end}]}.
    #[arg(long)]
    cases: PathBuf,

    /// Optional caption config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Merge strategy override.
    #[arg(long, value_enum)]
    merge: Option<MergeChoice>,

    /// Output path for the report JSON (stdout when omitted).
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct Case {
    id: String,
    sentence: String,
    tokens: Vec<Token>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("caption_report: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let mut config = match &args.config {
        Some(path) => CaptionConfig::load(path).map_err(|e| e.to_string())?,
        None => CaptionConfig::default(),
    };
    if let Some(merge) = args.merge {
        config.merge_strategy = merge.as_strategy();
    }
    let merge_strategy = match config.merge_strategy {
        MergeStrategy::Short => "short",
        MergeStrategy::Natural => "natural",
        MergeStrategy::None => "none",
    }
    .to_string();

    let aligner = CaptionAlignerBuilder::new(config)
        .build()
        .map_err(|e| e.to_string())?;

    let cases = load_cases(&args.cases)?;
    let sentences = run_cases(&aligner, &cases);

    let report = Report {
        schema_version: REPORT_SCHEMA_VERSION,
        meta: Meta {
            generated_at: Utc::now().to_rfc3339(),
            merge_strategy,
            case_count: sentences.len(),
        },
        aggregates: aggregate_reports(&sentences),
        sentences,
    };

    let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|e| format!("write report to {}: {e}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn load_cases(path: &PathBuf) -> Result<Vec<Case>, String> {
    let data =
        fs::read_to_string(path).map_err(|e| format!("read cases from {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("parse cases from {}: {e}", path.display()))
}

fn run_cases(aligner: &CaptionAligner, cases: &[Case]) -> Vec<SentenceReport> {
    let bar = ProgressBar::new(cases.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut sentences = Vec::with_capacity(cases.len());
    for case in cases {
        bar.set_message(case.id.clone());
        let captions = aligner.caption_sentence(&case.sentence, &case.tokens);
        sentences.push(compute_sentence_report(&case.id, &case.sentence, &captions));
        bar.inc(1);
    }
    bar.finish_and_clear();
    sentences
}
