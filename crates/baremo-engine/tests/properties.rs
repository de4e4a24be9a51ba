use baremo_core::models::{DiagnosisMention, EntitySource, Metric, MetricKind, MetricMap, Span};
use baremo_engine::combine::combine_percentages;
use baremo_engine::text::jaccard;
use baremo_engine::{Engine, standard};
use proptest::prelude::*;

fn engine() -> &'static Engine {
    standard().expect("standard engine must build")
}

const WORDS: &[&str] = &[
    "rotura", "lesión", "desgarro", "manguito", "rotador", "hombro", "de", "del", "la",
    "tendinitis", "tendinopatía", "supraespinoso", "artrosis", "rodilla", "derecha",
    "hernia", "discal", "lumbar", "crónica", "omalgia", "dolor", "en", "el", "trastorno",
    "depresivo", "mayor", "hipertensión", "arterial", "gastritis",
];

fn diagnosis_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..5).prop_map(|w| w.join(" "))
}

fn mention(text: String) -> DiagnosisMention {
    DiagnosisMention {
        span: Span::new(0, text.len()),
        text,
        source: EntitySource::Pattern,
        proven_fact: false,
    }
}

proptest! {
    #[test]
    fn normalization_is_idempotent(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑ0-9 ,.;:()/-]{0,80}") {
        let normalizer = engine().normalizer();
        let once = normalizer.normalize(&text);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn recognition_never_panics(text in "[a-zA-ZáéíóúñÁÉÍÓÚÑ0-9 \n,.;:()°%/-]{0,200}") {
        let entities = engine().recognizer().recognize(&text, false);
        for mention in &entities.diagnoses {
            prop_assert!(mention.span.start <= mention.span.end);
            prop_assert!(mention.span.end <= text.len());
        }
    }

    #[test]
    fn near_duplicates_never_both_survive(texts in prop::collection::vec(diagnosis_text(), 1..8)) {
        let engine = engine();
        let normalizer = engine.normalizer();
        let threshold = engine.rubric().text.similarity_threshold;
        let mentions: Vec<DiagnosisMention> = texts.into_iter().map(mention).collect();
        let kept = engine.deduplicate(&mentions);

        for (i, a) in kept.iter().enumerate() {
            prop_assert_eq!(&a.normalized_text, &normalizer.normalize(&a.text));
            for b in &kept[i + 1..] {
                prop_assert_ne!(&a.normalized_text, &b.normalized_text);
                prop_assert!(jaccard(&a.normalized_text, &b.normalized_text) < threshold);
                let (ca, cb) = (normalizer.canonical(&a.text), normalizer.canonical(&b.text));
                prop_assert!(jaccard(&ca, &cb) < threshold);
            }
        }
    }

    #[test]
    fn combination_ignores_order(
        (original, shuffled) in prop::collection::vec(0u8..=100, 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a: Vec<f64> = original.into_iter().map(f64::from).collect();
        let b: Vec<f64> = shuffled.into_iter().map(f64::from).collect();
        prop_assert_eq!(combine_percentages(&a, 99.0), combine_percentages(&b, 99.0));
    }

    #[test]
    fn combination_matches_closed_form(percentages in prop::collection::vec(0u8..=100, 1..8)) {
        let values: Vec<f64> = percentages.into_iter().map(f64::from).collect();
        let remaining: f64 = values.iter().map(|p| 1.0 - p / 100.0).product();
        let closed = 100.0 * (1.0 - remaining);
        let combined = combine_percentages(&values, 99.0);
        prop_assert!((combined - closed.min(99.0)).abs() <= 0.011, "{combined} vs {closed}");
    }

    #[test]
    fn combination_is_bounded_and_monotonic(
        percentages in prop::collection::vec(0u8..=100, 0..8),
        extra in 1u8..=100,
    ) {
        let mut values: Vec<f64> = percentages.into_iter().map(f64::from).collect();
        let before = combine_percentages(&values, 99.0);
        values.push(f64::from(extra));
        let after = combine_percentages(&values, 99.0);

        prop_assert!((0.0..=99.0).contains(&before));
        prop_assert!((0.0..=99.0).contains(&after));
        prop_assert!(after >= before);
    }

    #[test]
    fn percentages_follow_the_class_table(
        texts in prop::collection::vec(diagnosis_text(), 1..6),
        abduction in 0.0f64..=180.0,
        strength in 0.0f64..=5.0,
    ) {
        let engine = engine();
        let rubric = engine.rubric();
        let metrics: MetricMap = [
            Metric::new(MetricKind::Abduction, abduction),
            Metric::new(MetricKind::Strength, strength),
        ]
        .into_iter()
        .flatten()
        .collect();

        let valuations: Vec<_> = texts
            .iter()
            .filter_map(|t| engine.classify_text(t, &metrics, None))
            .collect();
        for valuation in &valuations {
            prop_assert_eq!(Some(valuation.percentage), rubric.via(valuation.class));
            prop_assert!((0.0..=1.0).contains(&valuation.confidence));
        }

        match engine.combine(&valuations) {
            Some(final_valuation) => {
                prop_assert!(final_valuation.percentage <= 99.0);
                prop_assert_eq!(
                    final_valuation.class,
                    rubric.class_for_percentage(final_valuation.percentage)
                );
                prop_assert_eq!(final_valuation.components_count, valuations.len());
            }
            None => prop_assert!(valuations.is_empty()),
        }
    }
}
