//! Combination of chapter valuations into the whole-person deficiency
//! (BDGP) with the diminishing-returns formula of Art. 4.2:
//! `A + B·(100 − A)/100`, applied from the largest percentage down.

use baremo_core::models::{ChapterValuation, FinalValuation};
use baremo_rubric::Rubric;
use tracing::debug;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Combined percentage of `percentages`, rounded to two decimals and capped
/// at `ceiling`. Zero for no components.
pub fn combine_percentages(percentages: &[f64], ceiling: f64) -> f64 {
    let mut sorted = percentages.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    let combined = iter.fold(first, |acc, p| acc + p * (100.0 - acc) / 100.0);
    round2(combined).min(ceiling)
}

fn trace(percentages: &[f64], result: f64, rubric: &Rubric) -> String {
    let rule = &rubric.combination;
    if let [only] = percentages {
        return format!("BDGP (Capítulo único): {only}%");
    }
    let mut parts: Vec<String> = percentages
        .iter()
        .take(rule.trace_components)
        .map(|p| format!("{p}%"))
        .collect();
    if percentages.len() > rule.trace_components {
        parts.push("...".to_string());
    }
    format!("Combinación (Art. 4.2): {} = {result}%", parts.join(" + "))
}

/// The final valuation of a document, `None` when nothing was classified.
pub fn combine(valuations: &[ChapterValuation], rubric: &Rubric) -> Option<FinalValuation> {
    if valuations.is_empty() {
        return None;
    }
    let rule = &rubric.combination;

    let mut percentages: Vec<f64> = valuations.iter().map(|v| f64::from(v.percentage)).collect();
    percentages.sort_by(|a, b| b.total_cmp(a));
    let percentage = combine_percentages(&percentages, rule.ceiling);

    let class = rubric.class_for_percentage(percentage);
    let description = rubric
        .band(class)
        .map(|b| b.description.clone())
        .unwrap_or_default();

    let count = valuations.len();
    let mut confidence = valuations.iter().map(|v| v.confidence).sum::<f64>() / count as f64;
    if count > rule.penalty_after {
        confidence *= rule.confidence_penalty;
    }

    debug!(components = count, percentage, class = class.number(), "valuations combined");
    Some(FinalValuation {
        percentage,
        class,
        description,
        components_count: count,
        formula_trace: trace(&percentages, percentage, rubric),
        confidence: round2(confidence),
        legal_basis: rule.legal_basis.clone(),
    })
}
