use baremo_core::models::{BodyPart, Chapter, DiagnosisMention, EntitySource, Span};
use baremo_engine::dedup::same_condition;
use baremo_engine::{Engine, standard};

fn engine() -> &'static Engine {
    standard().expect("standard engine must build")
}

fn mention(text: &str) -> DiagnosisMention {
    DiagnosisMention {
        text: text.to_string(),
        span: Span::new(0, text.len()),
        source: EntitySource::Pattern,
        proven_fact: false,
    }
}

fn kept_texts(mentions: &[DiagnosisMention]) -> Vec<String> {
    engine()
        .deduplicate(mentions)
        .into_iter()
        .map(|d| d.text)
        .collect()
}

#[test]
fn synonyms_collapse_into_one_diagnosis() {
    let kept = kept_texts(&[
        mention("rotura del manguito rotador"),
        mention("lesión del manguito rotador"),
    ]);
    assert_eq!(kept, vec!["rotura del manguito rotador"]);
}

#[test]
fn longer_mention_is_the_representative() {
    let kept = kept_texts(&[
        mention("Hernia discal"),
        mention("Hernia discal con compresión radicular severa"),
    ]);
    assert_eq!(kept, vec!["Hernia discal con compresión radicular severa"]);
}

#[test]
fn single_word_containment_is_not_a_duplicate() {
    let kept = kept_texts(&[mention("Lumbalgia"), mention("Lumbalgia mecánica")]);
    assert_eq!(kept, vec!["Lumbalgia mecánica", "Lumbalgia"]);
}

#[test]
fn stop_words_and_laterality_are_ignored() {
    let kept = kept_texts(&[
        mention("Artrosis de rodilla derecha"),
        mention("artrosis rodilla"),
    ]);
    assert_eq!(kept, vec!["Artrosis de rodilla derecha"]);
}

#[test]
fn mentions_without_content_are_skipped() {
    let kept = kept_texts(&[mention("de la"), mention("  ")]);
    assert!(kept.is_empty());
}

#[test]
fn survivors_are_annotated() {
    let mut lumbar = mention("Hernia discal lumbar");
    lumbar.source = EntitySource::Whitelist;
    lumbar.proven_fact = true;
    lumbar.span = Span::new(10, 30);

    let diagnoses = engine().deduplicate(&[lumbar]);
    assert_eq!(diagnoses.len(), 1);
    let diagnosis = &diagnoses[0];
    assert_eq!(diagnosis.normalized_text, "hernia discal lumbar");
    assert_eq!(diagnosis.body_part, BodyPart::Spine);
    assert_eq!(diagnosis.chapter, Chapter::Musculoskeletal);
    assert_eq!(diagnosis.source, Some(EntitySource::Whitelist));
    assert_eq!(diagnosis.span, Some(Span::new(10, 30)));
    assert!(diagnosis.proven_fact);
    assert!(!diagnosis.is_grouped);
    assert!(diagnosis.related_diagnoses.is_empty());
}

#[test]
fn same_condition_checks() {
    let engine = engine();
    let threshold = engine.rubric().text.similarity_threshold;
    let normalizer = engine.normalizer();

    assert!(same_condition(
        "Tendinitis del supraespinoso",
        "Tendinopatía del supraespinoso",
        normalizer,
        threshold
    ));
    assert!(!same_condition("Gonartrosis", "Coxartrosis", normalizer, threshold));
    assert!(!same_condition("de", "de", normalizer, threshold));
}

#[test]
fn normalization_keeps_accented_letters() {
    let normalizer = engine().normalizer();
    assert_eq!(normalizer.normalize("Lesión del Tendón, crónica."), "lesión tendón");
    assert_ne!(normalizer.normalize("Lesión"), normalizer.normalize("Lesion"));
}
