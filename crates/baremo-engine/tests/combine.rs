use baremo_core::models::{ChapterValuation, MetricMap, SeverityClass};
use baremo_engine::combine::{combine_percentages, round2};
use baremo_engine::{Engine, standard};

fn engine() -> &'static Engine {
    standard().expect("standard engine must build")
}

fn valued(text: &str) -> ChapterValuation {
    engine()
        .classify_text(text, &MetricMap::new(), None)
        .expect("valuation")
}

#[test]
fn two_components_combine() {
    assert_eq!(combine_percentages(&[37.0, 15.0], 99.0), 46.45);
    assert_eq!(combine_percentages(&[15.0, 37.0], 99.0), 46.45);

    let moderate = valued("Trastorno depresivo mayor");
    let mild = valued("Gastritis");
    assert_eq!((moderate.percentage, mild.percentage), (37, 15));

    let final_valuation = engine().combine(&[mild, moderate]).expect("final valuation");
    assert_eq!(final_valuation.percentage, 46.45);
    assert_eq!(final_valuation.class, SeverityClass::Moderate);
    assert_eq!(final_valuation.description, "Deficiencia moderada");
    assert_eq!(final_valuation.components_count, 2);
    assert_eq!(final_valuation.confidence, 0.6);
    assert_eq!(
        final_valuation.formula_trace,
        "Combinación (Art. 4.2): 37% + 15% = 46.45%"
    );
    assert!(final_valuation.legal_basis.contains("Art. 4.2"));
}

#[test]
fn single_component_keeps_its_via() {
    let final_valuation = engine()
        .combine(&[valued("Trastorno depresivo mayor")])
        .expect("final valuation");
    assert_eq!(final_valuation.percentage, 37.0);
    assert_eq!(final_valuation.formula_trace, "BDGP (Capítulo único): 37%");
    assert_eq!(final_valuation.confidence, 0.6);
}

#[test]
fn nothing_to_combine() {
    assert!(engine().combine(&[]).is_none());
    assert_eq!(combine_percentages(&[], 99.0), 0.0);
}

#[test]
fn many_components_are_capped_and_penalised() {
    let severe = {
        let mut v = valued("Trastorno depresivo mayor");
        v.percentage = 85;
        v.class = SeverityClass::VerySevere;
        v
    };
    let components = vec![severe.clone(), severe.clone(), severe.clone(), severe];
    let final_valuation = engine().combine(&components).expect("final valuation");

    assert_eq!(final_valuation.percentage, 99.0);
    assert_eq!(final_valuation.class, SeverityClass::VerySevere);
    assert_eq!(final_valuation.confidence, round2(0.6 * 0.9));
    assert_eq!(
        final_valuation.formula_trace,
        "Combinación (Art. 4.2): 85% + 85% + 85% + ... = 99%"
    );
}

#[test]
fn zero_components_do_not_change_the_result() {
    assert_eq!(combine_percentages(&[0.0, 15.0, 0.0], 99.0), 15.0);
    let final_valuation = engine()
        .combine(&[valued("Hipertensión arterial")])
        .expect("final valuation");
    assert_eq!(final_valuation.percentage, 0.0);
    assert_eq!(final_valuation.class, SeverityClass::None);
}
