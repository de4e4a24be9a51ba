use std::path::PathBuf;

use baremo_core::models::{BodyPart, EntityKind, Metric, MetricKind};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "baremo")]
#[command(about = "Disability valuation under RD 888/2022 from plain-text reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log as JSON lines instead of human-readable text
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyse plain-text documents and print one JSON record per file
    Analyze(AnalyzeArgs),
    /// Print the entities recognized in one document, in text order
    Entities(EntitiesArgs),
    /// Classify a single diagnosis
    Classify(ClassifyArgs),
    /// Validate a rubric and print its summary
    Rubric(RubricArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Plain-text files to analyse
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Document type label (clinical, judicial, administrative)
    #[arg(long = "doc-type")]
    pub document_type: Option<String>,

    /// Treat every file as a proven-facts excerpt
    #[arg(long)]
    pub proven_facts: bool,

    /// Body part of a diagnosis, as TEXT=PART (repeatable)
    #[arg(long = "hint", value_parser = parse_hint)]
    pub hints: Vec<(String, String)>,

    /// Rubric JSON file to use instead of the embedded one
    #[arg(long)]
    pub rubric: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct EntitiesArgs {
    /// Plain-text file to read
    pub file: PathBuf,

    /// Document type label (clinical, judicial, administrative)
    #[arg(long = "doc-type")]
    pub document_type: Option<String>,

    /// Treat the file as a proven-facts excerpt
    #[arg(long)]
    pub proven_facts: bool,

    /// Only print entities of this kind (repeatable)
    #[arg(long = "kind", value_parser = parse_entity_kind)]
    pub kinds: Vec<EntityKind>,

    /// Rubric JSON file to use instead of the embedded one
    #[arg(long)]
    pub rubric: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Diagnosis text
    #[arg(long)]
    pub diagnosis: String,

    /// Measurement as KIND=VALUE, e.g. abducción=90 (repeatable)
    #[arg(long = "metric", value_parser = parse_metric)]
    pub metrics: Vec<Metric>,

    /// Body part, overriding the one derived from the text
    #[arg(long, value_parser = parse_body_part)]
    pub body_part: Option<BodyPart>,

    /// Rubric JSON file to use instead of the embedded one
    #[arg(long)]
    pub rubric: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RubricArgs {
    /// Rubric JSON file to validate instead of the embedded one
    #[arg(long)]
    pub rubric: Option<PathBuf>,
}

fn split_pair(raw: &str) -> Result<(&str, &str), String> {
    let (key, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return Err(format!("expected KEY=VALUE, got `{raw}`"));
    }
    Ok((key, value))
}

pub fn parse_hint(raw: &str) -> Result<(String, String), String> {
    let (text, part) = split_pair(raw)?;
    parse_body_part(part)?;
    Ok((text.to_string(), part.to_string()))
}

pub fn parse_metric(raw: &str) -> Result<Metric, String> {
    let (kind, value) = split_pair(raw)?;
    let kind: MetricKind = kind.parse().map_err(|e| format!("{e}"))?;
    let value: f64 = value
        .replace(',', ".")
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    Metric::new(kind, value)
        .ok_or_else(|| format!("{value} is outside the range of {kind} (0-{})", kind.upper_bound()))
}

pub fn parse_body_part(raw: &str) -> Result<BodyPart, String> {
    raw.parse().map_err(|e| format!("{e}"))
}

pub fn parse_entity_kind(raw: &str) -> Result<EntityKind, String> {
    raw.parse().map_err(|e| format!("{e}"))
}
