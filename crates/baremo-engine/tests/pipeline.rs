use baremo_core::models::{AnalysisRequest, BodyPart, EntitySource, SeverityClass};
use baremo_engine::{Engine, EngineError, standard};

fn engine() -> &'static Engine {
    standard().expect("standard engine must build")
}

const SHOULDER_REPORT: &str = "INFORME MÉDICO\n\
    Diagnóstico: Rotura del manguito rotador.\n\
    Omalgia crónica.\n\
    Exploración: abducción de 90°.\n";

#[test]
fn clinical_report_end_to_end() {
    let analysis = engine()
        .analyze(&AnalysisRequest::new(SHOULDER_REPORT).with_document_type("clinical"))
        .expect("analysis");

    assert_eq!(analysis.document_type.as_deref(), Some("clinical"));
    assert_eq!(analysis.rubric_version, engine().rubric().version);

    assert_eq!(analysis.diagnoses.len(), 1);
    let unit = &analysis.diagnoses[0];
    assert_eq!(unit.text, "Rotura del manguito rotador");
    assert_eq!(
        unit.related_diagnoses,
        vec!["Rotura del manguito rotador", "Omalgia crónica"]
    );
    assert!(unit.is_grouped);
    assert_eq!(unit.body_part, BodyPart::Shoulder);

    assert_eq!(analysis.chapter_valuations.len(), 1);
    let valuation = &analysis.chapter_valuations[0];
    assert_eq!(valuation.class, SeverityClass::Moderate);
    assert_eq!(valuation.percentage, 37);
    assert_eq!(valuation.confidence, 0.8);

    let final_valuation = analysis.final_valuation.as_ref().expect("final valuation");
    assert_eq!(final_valuation.percentage, 37.0);
    assert_eq!(final_valuation.class, SeverityClass::Moderate);

    let suggested = analysis
        .suggested_classification
        .as_ref()
        .expect("suggested classification");
    assert_eq!(suggested.suggested_percentage, 37.0);
    assert_eq!(suggested.class, SeverityClass::Moderate);
}

#[test]
fn empty_text_is_the_only_failure() {
    let err = engine()
        .analyze(&AnalysisRequest::new("  \n\t"))
        .expect_err("empty text");
    assert!(matches!(err, EngineError::EmptyText));
}

#[test]
fn nothing_classified_means_no_valuation() {
    let analysis = engine()
        .analyze(&AnalysisRequest::new("Se cita al interesado para el próximo lunes."))
        .expect("analysis");
    assert!(analysis.diagnoses.is_empty());
    assert!(analysis.chapter_valuations.is_empty());
    assert!(analysis.final_valuation.is_none());
    assert!(analysis.suggested_classification.is_none());
}

#[test]
fn body_part_hints_select_the_rom_table() {
    let text = "Juicio clínico: Bursitis subacromial.\nFlexión de 50°.\n";

    let plain = engine().analyze(&AnalysisRequest::new(text)).expect("analysis");
    let valuation = &plain.chapter_valuations[0];
    assert_eq!(valuation.body_part, BodyPart::General);
    assert_eq!(valuation.class, SeverityClass::Mild);

    let hinted = engine()
        .analyze(&AnalysisRequest::new(text).with_body_part_hint("bursitis subacromial", "hombro"))
        .expect("analysis");
    let valuation = &hinted.chapter_valuations[0];
    assert_eq!(valuation.body_part, BodyPart::Shoulder);
    assert_eq!(valuation.class, SeverityClass::Severe);
    assert_eq!(valuation.percentage, 60);
}

#[test]
fn unknown_hint_labels_are_ignored() {
    let text = "Juicio clínico: Bursitis subacromial.";
    let analysis = engine()
        .analyze(&AnalysisRequest::new(text).with_body_part_hint("bursitis", "oreja"))
        .expect("analysis");
    assert_eq!(analysis.diagnoses[0].body_part, BodyPart::General);
}

const JUDGMENT: &str = "SENTENCIA\n\
    HECHOS PROBADOS\n\
    PRIMERO.- La actora padece:\n\
    - Fibromialgia con dolor generalizado\n\
    FUNDAMENTOS DE DERECHO\n\
    Se cita la lumbalgia como antecedente.\n\
    FALLO\n";

#[test]
fn judicial_proven_facts_keep_provenance() {
    let analysis = engine()
        .analyze(&AnalysisRequest::new(JUDGMENT).with_document_type("Judicial"))
        .expect("analysis");
    let mentions = &analysis.entities.diagnoses;

    let fibromyalgia = mentions
        .iter()
        .find(|d| d.text == "Fibromialgia")
        .expect("fibromyalgia");
    assert!(fibromyalgia.proven_fact);
    assert_eq!(fibromyalgia.source, EntitySource::Whitelist);
    assert_eq!(
        &JUDGMENT[fibromyalgia.span.start..fibromyalgia.span.end],
        "Fibromialgia"
    );

    let item = mentions
        .iter()
        .find(|d| d.source == EntitySource::ListItem)
        .expect("list item");
    assert_eq!(item.text, "Fibromialgia con dolor generalizado");
    assert!(item.proven_fact);

    let lumbago = mentions
        .iter()
        .find(|d| d.text == "lumbalgia")
        .expect("lumbalgia");
    assert!(!lumbago.proven_fact);
}

#[test]
fn other_document_types_are_read_whole() {
    let analysis = engine()
        .analyze(&AnalysisRequest::new(JUDGMENT).with_document_type("administrative"))
        .expect("analysis");
    assert!(analysis.entities.diagnoses.iter().all(|d| !d.proven_fact));

    let excerpt = engine()
        .analyze(&AnalysisRequest::new(JUDGMENT).as_proven_facts())
        .expect("analysis");
    assert!(excerpt.entities.diagnoses.iter().all(|d| d.proven_fact));
}

#[test]
fn analysis_serializes_with_snake_case_names() {
    let analysis = engine()
        .analyze(&AnalysisRequest::new(SHOULDER_REPORT))
        .expect("analysis");
    let json = serde_json::to_value(&analysis).expect("serialize");

    assert_eq!(json["chapter_valuations"][0]["chapter"], "musculoskeletal");
    assert_eq!(json["chapter_valuations"][0]["class"], "moderate");
    assert_eq!(json["diagnoses"][0]["body_part"], "shoulder");
    assert_eq!(json["metrics"]["abduction"], 90.0);
    assert_eq!(json["final_valuation"]["percentage"], 37.0);
}

#[test]
fn repeated_analysis_is_identical() {
    let request = AnalysisRequest::new(JUDGMENT).with_document_type("judicial");
    let first = engine().analyze(&request).expect("analysis");
    let second = engine().analyze(&request).expect("analysis");
    assert_eq!(first, second);
}
