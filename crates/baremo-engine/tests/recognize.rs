use baremo_core::models::{AnalysisRequest, EntitySource, MetricKind, MetricMap, RatingKind, SeverityClass};
use baremo_engine::recognize::Rejection;
use baremo_engine::{Engine, standard};

fn engine() -> &'static Engine {
    standard().expect("standard engine must build")
}

#[test]
fn whitelist_mentions_keep_their_span() {
    let text = "Diagnóstico: Rotura del manguito rotador derecho.";
    let entities = engine().recognizer().recognize(text, false);

    let whitelisted = entities
        .diagnoses
        .iter()
        .find(|d| d.source == EntitySource::Whitelist)
        .expect("whitelist mention");
    assert_eq!(whitelisted.text, "Rotura del manguito rotador");
    assert_eq!(&text[whitelisted.span.start..whitelisted.span.end], "Rotura del manguito rotador");
    assert!(!whitelisted.proven_fact);

    assert!(
        entities
            .diagnoses
            .iter()
            .any(|d| d.source == EntitySource::Pattern && d.text == "Rotura del manguito rotador derecho")
    );
}

#[test]
fn abbreviations_are_expanded() {
    let entities = engine()
        .recognizer()
        .recognize("Antecedentes de HTA en tratamiento.", false);
    assert!(entities.diagnoses.iter().any(|d| d.text == "hipertensión arterial"));
}

#[test]
fn single_vague_word_is_rejected() {
    let validator = engine().recognizer().validator();
    assert_eq!(validator.check("cervical"), Err(Rejection::VagueWord));
    assert_eq!(validator.check("Cervical"), Err(Rejection::VagueWord));

    let entities = engine().recognizer().recognize("Diagnóstico: Cervical.", false);
    assert!(entities.diagnoses.is_empty());
}

#[test]
fn validator_rejections() {
    let validator = engine().recognizer().validator();
    assert_eq!(validator.check("Mal"), Err(Rejection::Length));
    assert_eq!(validator.check(&"artrosis ".repeat(20)), Err(Rejection::Length));
    assert_eq!(
        validator.check("El paciente refiere molestias"),
        Err(Rejection::InvalidLead)
    );
    assert_eq!(
        validator.check("Compatible con artrosis"),
        Err(Rejection::InvalidLead)
    );
    assert_eq!(
        validator.check("Artrosis pendiente de valoración"),
        Err(Rejection::Blacklisted)
    );
    assert_eq!(validator.check("Molestias inespecíficas"), Err(Rejection::NoMedicalTerm));

    assert!(validator.is_valid("Gonartrosis con artrosis tricompartimental"));
    assert!(validator.is_valid("Dolor en el hombro derecho"));
}

#[test]
fn blacklisted_abbreviation_ending_in_a_dot() {
    let validator = engine().recognizer().validator();
    assert_eq!(
        validator.check("Tendinitis valorada por el dr. Pérez"),
        Err(Rejection::Blacklisted)
    );
    assert_eq!(
        validator.check("Tendinitis revisada por la Dra. Gómez"),
        Err(Rejection::Blacklisted)
    );
    assert!(validator.is_valid("Tendinitis del supraespinoso"));
}

#[test]
fn compound_structural_match_is_split() {
    let text = "Diagnóstico: Cervicalgia crónica y epicondilitis lateral.";
    let entities = engine().recognizer().recognize(text, false);

    let part = entities
        .diagnoses
        .iter()
        .find(|d| d.text == "epicondilitis lateral")
        .expect("split part");
    assert_eq!(part.source, EntitySource::PatternSplit);
    assert_eq!(&text[part.span.start..part.span.end], "epicondilitis lateral");
    assert!(
        !entities
            .diagnoses
            .iter()
            .any(|d| d.text == "Cervicalgia crónica y epicondilitis lateral")
    );
}

#[test]
fn list_items_are_recovered() {
    let text = "Presenta:\n- Tendinopatía del supraespinoso (ecografía)\n- Cita el martes en el centro\n";
    let entities = engine().recognizer().recognize(text, false);

    let item = entities
        .diagnoses
        .iter()
        .find(|d| d.source == EntitySource::ListItem)
        .expect("list item");
    assert_eq!(item.text, "Tendinopatía del supraespinoso");
    assert_eq!(
        entities
            .diagnoses
            .iter()
            .filter(|d| d.source == EntitySource::ListItem)
            .count(),
        1
    );
}

#[test]
fn metrics_are_recognized_and_bounded() {
    let text = "Abducción de 90° y flexión 100°. Fuerza 3/5. Rotación de 200°. \
                Pérdida: 25% de limitación funcional.";
    let entities = engine().recognizer().recognize(text, false);
    let metrics: MetricMap = entities.metrics.iter().map(|r| r.metric).collect();

    assert_eq!(metrics.get(MetricKind::Abduction), Some(90.0));
    assert_eq!(metrics.get(MetricKind::Flexion), Some(100.0));
    assert_eq!(metrics.get(MetricKind::Strength), Some(3.0));
    assert_eq!(metrics.get(MetricKind::FunctionalLoss), Some(25.0));
    assert_eq!(metrics.get(MetricKind::Rotation), None);
}

#[test]
fn metric_map_keeps_the_worst_angle() {
    let text = "Abducción de 120°. En la revisión, abducción de 80,5°.";
    let entities = engine().recognizer().recognize(text, false);
    let metrics: MetricMap = entities.metrics.iter().map(|r| r.metric).collect();
    assert_eq!(metrics.get(MetricKind::Abduction), Some(80.5));
    assert_eq!(entities.metrics.len(), 2);
}

#[test]
fn multi_digit_strength_is_out_of_domain() {
    let text = "Diagnóstico: Epicondilitis.\nFuerza: 12 kg en dinamometría.";
    let entities = engine().recognizer().recognize(text, false);
    assert!(
        entities
            .metrics
            .iter()
            .all(|r| r.metric.kind != MetricKind::Strength)
    );

    let analysis = engine()
        .analyze(&AnalysisRequest::new(text))
        .expect("analysis");
    assert_eq!(analysis.metrics.get(MetricKind::Strength), None);
    let valuation = analysis
        .chapter_valuations
        .iter()
        .find(|v| v.diagnosis == "Epicondilitis")
        .expect("epicondilitis valuation");
    assert_eq!(valuation.class, SeverityClass::Mild);
    assert_eq!(valuation.confidence, 0.5);
}

#[test]
fn decimal_strength_keeps_its_fraction() {
    let entities = engine()
        .recognizer()
        .recognize("Balance muscular de 4,5/5 en deltoides.", false);
    let metrics: MetricMap = entities.metrics.iter().map(|r| r.metric).collect();
    assert_eq!(metrics.get(MetricKind::Strength), Some(4.5));
}

#[test]
fn codes_and_ratings() {
    let text = "Código CIE-10: M75.1. Tiene reconocido un grado de discapacidad del 33%. \
                Grado de dependencia II.";
    let entities = engine().recognizer().recognize(text, false);

    assert_eq!(entities.codes.len(), 1);
    assert_eq!(entities.codes[0].text, "M75.1");

    let degree = entities
        .ratings
        .iter()
        .find(|r| r.kind == RatingKind::DisabilityDegree)
        .expect("disability degree");
    assert_eq!(degree.value, 33.0);

    let dependency = entities
        .ratings
        .iter()
        .find(|r| r.kind == RatingKind::DependencyGrade)
        .expect("dependency grade");
    assert_eq!(dependency.value, 2.0);
}

#[test]
fn text_without_matches_yields_nothing() {
    let entities = engine()
        .recognizer()
        .recognize("Se cita al interesado para el próximo lunes.", false);
    assert!(entities.is_empty());
}

#[test]
fn proven_facts_excerpt_runs_to_the_next_heading() {
    let text = "ANTECEDENTES\nHECHOS PROBADOS\nPrimero.\nFUNDAMENTOS DE DERECHO\nFALLO\n";
    let excerpt = engine()
        .recognizer()
        .proven_facts_excerpt(text)
        .expect("excerpt");
    assert_eq!(excerpt.offset, text.find("HECHOS").expect("heading"));
    assert_eq!(excerpt.text, "HECHOS PROBADOS\nPrimero.\n");

    assert!(engine().recognizer().proven_facts_excerpt("Informe clínico").is_none());
}
