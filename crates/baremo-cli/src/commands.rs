use std::ops::Deref;
use std::path::{Path, PathBuf};

use baremo_core::models::{Analysis, AnalysisRequest, EntityKind, MetricMap, RawEntity};
use baremo_engine::{Engine, standard};
use baremo_rubric::Rubric;
use eyre::{Result, WrapErr, eyre};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::args::{AnalyzeArgs, ClassifyArgs, EntitiesArgs, RubricArgs};

/// The embedded engine, or one compiled from a rubric file.
enum LoadedEngine {
    Standard(&'static Engine),
    Custom(Box<Engine>),
}

impl Deref for LoadedEngine {
    type Target = Engine;

    fn deref(&self) -> &Engine {
        match self {
            LoadedEngine::Standard(engine) => engine,
            LoadedEngine::Custom(engine) => engine,
        }
    }
}

fn load_rubric(path: Option<&Path>) -> Result<Rubric> {
    match path {
        Some(path) => Rubric::from_path(path)
            .wrap_err_with(|| format!("loading rubric {}", path.display())),
        None => Rubric::embedded().wrap_err("loading embedded rubric"),
    }
}

fn load_engine(path: Option<&Path>) -> Result<LoadedEngine> {
    match path {
        Some(_) => {
            let engine = Engine::new(load_rubric(path)?).wrap_err("compiling rubric")?;
            Ok(LoadedEngine::Custom(Box::new(engine)))
        }
        None => standard()
            .map(LoadedEngine::Standard)
            .map_err(|e| eyre!("embedded rubric: {e}")),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum FileOutcome {
    Analysed { file: PathBuf, analysis: Box<Analysis> },
    Failed { file: PathBuf, error: String },
}

fn analyze_file(engine: &Engine, file: &Path, args: &AnalyzeArgs) -> FileOutcome {
    let failed = |error: String| {
        warn!(file = %file.display(), error = %error, "file not analysed");
        FileOutcome::Failed {
            file: file.to_path_buf(),
            error,
        }
    };
    let text = match std::fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) => return failed(format!("reading file: {e}")),
    };
    let request = AnalysisRequest {
        text,
        document_type: args.document_type.clone(),
        proven_facts: args.proven_facts,
        body_part_hints: args.hints.iter().cloned().collect(),
    };
    match engine.analyze(&request) {
        Ok(analysis) => FileOutcome::Analysed {
            file: file.to_path_buf(),
            analysis: Box::new(analysis),
        },
        Err(e) => failed(e.to_string()),
    }
}

pub fn analyze(args: AnalyzeArgs, pretty: bool) -> Result<()> {
    let engine = load_engine(args.rubric.as_deref())?;
    let outcomes: Vec<FileOutcome> = args
        .files
        .par_iter()
        .map(|file| analyze_file(&engine, file, &args))
        .collect();

    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, FileOutcome::Failed { .. }))
        .count();
    info!(files = outcomes.len(), failed, "analysis finished");
    print_json(&outcomes, pretty)
}

pub fn entities(args: EntitiesArgs, pretty: bool) -> Result<()> {
    let engine = load_engine(args.rubric.as_deref())?;
    let text = std::fs::read_to_string(&args.file)
        .wrap_err_with(|| format!("reading {}", args.file.display()))?;
    let recognized = engine.recognizer().recognize_document(
        &text,
        args.document_type.as_deref(),
        args.proven_facts,
    );

    let entities: Vec<RawEntity> = recognized
        .to_raw()
        .into_iter()
        .filter(|e| args.kinds.is_empty() || args.kinds.contains(&e.kind()))
        .collect();
    let count = |kind: EntityKind| entities.iter().filter(|e| e.kind() == kind).count();
    info!(
        file = %args.file.display(),
        diagnoses = count(EntityKind::Diagnosis),
        metrics = count(EntityKind::Metric),
        codes = count(EntityKind::Code),
        ratings = count(EntityKind::Rating),
        "entities recognized"
    );
    print_json(&entities, pretty)
}

pub fn classify(args: ClassifyArgs, pretty: bool) -> Result<()> {
    let engine = load_engine(args.rubric.as_deref())?;
    let metrics: MetricMap = args.metrics.iter().copied().collect();
    let valuation = engine.classify_text(&args.diagnosis, &metrics, args.body_part);
    if valuation.is_none() {
        info!(diagnosis = %args.diagnosis, "diagnosis maps to no chapter");
    }
    print_json(&valuation, pretty)
}

pub fn rubric(args: RubricArgs, pretty: bool) -> Result<()> {
    let rubric = load_rubric(args.rubric.as_deref())?;
    // Compiling catches patterns that parse as JSON but not as regexes.
    let engine = Engine::new(rubric).wrap_err("compiling rubric")?;
    let rubric = engine.rubric();

    let summary = json!({
        "version": rubric.version,
        "legal_reference": rubric.legal_reference,
        "chapter_priority": rubric.chapter_priority().collect::<Vec<_>>(),
        "classes": rubric.classes,
        "rom_tables": rubric.rom.iter().map(|t| t.body_part).collect::<Vec<_>>(),
        "groups": rubric.groups.iter().map(|g| &g.name).collect::<Vec<_>>(),
    });
    print_json(&summary, pretty)
}
