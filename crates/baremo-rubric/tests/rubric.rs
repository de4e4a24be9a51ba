use baremo_core::models::{BodyPart, Chapter, MetricKind, SeverityClass};
use baremo_rubric::{EMBEDDED_JSON, Rubric, RubricError};

fn embedded() -> Rubric {
    Rubric::embedded().expect("embedded rubric must load")
}

#[test]
fn embedded_rubric_is_valid() {
    let rubric = embedded();
    assert!(rubric.validate().is_empty());
    assert_eq!(rubric.legal_reference, "RD 888/2022");
}

#[test]
fn via_table_matches_class_midpoints() {
    let rubric = embedded();
    let vias: Vec<u8> = SeverityClass::ALL
        .iter()
        .filter_map(|c| rubric.via(*c))
        .collect();
    assert_eq!(vias, vec![0, 15, 37, 60, 85]);
}

#[test]
fn class_for_percentage_uses_lower_bounds() {
    let rubric = embedded();
    assert_eq!(rubric.class_for_percentage(0.0), SeverityClass::None);
    assert_eq!(rubric.class_for_percentage(4.5), SeverityClass::None);
    assert_eq!(rubric.class_for_percentage(24.5), SeverityClass::Mild);
    assert_eq!(rubric.class_for_percentage(46.45), SeverityClass::Moderate);
    assert_eq!(rubric.class_for_percentage(70.9), SeverityClass::Severe);
    assert_eq!(rubric.class_for_percentage(99.0), SeverityClass::VerySevere);
}

#[test]
fn shoulder_rom_tiers() {
    let rubric = embedded();
    let shoulder = rubric.rom_table(BodyPart::Shoulder).expect("shoulder table");
    assert_eq!(shoulder.movements, vec![MetricKind::Flexion, MetricKind::Abduction]);
    assert_eq!(shoulder.tier_for(90.0), Some(SeverityClass::Moderate));
    assert_eq!(shoulder.tier_for(120.4), Some(SeverityClass::Moderate));
    assert_eq!(shoulder.tier_for(120.6), Some(SeverityClass::Mild));
    assert_eq!(shoulder.tier_for(15.0), Some(SeverityClass::VerySevere));
    assert_eq!(shoulder.tier_for(180.0), None);
}

#[test]
fn spine_has_no_rom_table() {
    assert!(embedded().rom_table(BodyPart::Spine).is_none());
}

#[test]
fn chapter_priority_is_most_specific_first() {
    let rubric = embedded();
    let order: Vec<Chapter> = rubric.chapter_priority().collect();
    assert_eq!(
        order,
        vec![
            Chapter::MentalHealth,
            Chapter::Hematologic,
            Chapter::Digestive,
            Chapter::Cardiovascular,
            Chapter::Respiratory,
            Chapter::Endocrine,
            Chapter::Genitourinary,
            Chapter::Neurological,
            Chapter::Musculoskeletal,
        ]
    );
}

#[test]
fn groups_target_musculoskeletal_chapter() {
    let rubric = embedded();
    assert_eq!(rubric.groups.len(), 3);
    assert!(rubric.groups.iter().all(|g| g.chapter == Chapter::Musculoskeletal));
    let shoulder = rubric
        .group("Patología traumática y/o degenerativa del hombro")
        .expect("shoulder group");
    assert_eq!(shoulder.body_part, BodyPart::Shoulder);
    assert!(shoulder.secondary.iter().any(|k| k == "omalgia"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Rubric::from_json("{ not json").unwrap_err();
    assert!(matches!(err, RubricError::Parse(_)));
}

#[test]
fn overlapping_rom_tiers_are_reported() {
    let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_JSON).unwrap();
    value["rom"][0]["tiers"][1]["max"] = serde_json::json!(130);

    let err = Rubric::from_json(&value.to_string()).unwrap_err();
    let RubricError::Invalid(issues) = err else {
        panic!("expected validation failure");
    };
    assert!(issues.iter().any(|i| i.table == "rom.shoulder" && i.message.contains("overlap")));
}

#[test]
fn via_outside_band_is_reported() {
    let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_JSON).unwrap();
    value["classes"][2]["via"] = serde_json::json!(50);

    let rubric: Rubric = serde_json::from_value(value).unwrap();
    let issues = rubric.validate();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("VIA 50"));
}

#[test]
fn gap_between_bands_is_reported() {
    let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_JSON).unwrap();
    value["classes"][1]["max"] = serde_json::json!(20);

    let rubric: Rubric = serde_json::from_value(value).unwrap();
    assert!(rubric.validate().iter().any(|i| i.message.contains("starts at 25")));
}

#[test]
fn unknown_chapter_in_priority_list_is_reported() {
    let mut value: serde_json::Value = serde_json::from_str(EMBEDDED_JSON).unwrap();
    value["chapters"][0]["chapter"] = serde_json::json!("unknown");

    let rubric: Rubric = serde_json::from_value(value).unwrap();
    assert!(rubric.validate().iter().any(|i| i.table == "chapters"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Rubric::from_path("/nonexistent/rubric.json").unwrap_err();
    assert!(matches!(err, RubricError::Io { .. }));
}
