use baremo_core::models::{Diagnosis, DiagnosisMention};
use tracing::{debug, trace};

use crate::Engine;
use crate::text::{TextNormalizer, jaccard};

/// Comparison forms of one diagnosis text.
#[derive(Debug, Clone)]
struct Forms {
    normalized: String,
    canonical: String,
    words: usize,
}

impl Forms {
    fn of(text: &str, normalizer: &TextNormalizer) -> Self {
        let normalized = normalizer.normalize(text);
        let canonical = normalizer.canonicalize(&normalized);
        let words = normalized.split_whitespace().count();
        Self {
            normalized,
            canonical,
            words,
        }
    }

    fn duplicates(&self, kept: &Forms, threshold: f64) -> bool {
        if self.normalized == kept.normalized || self.canonical == kept.canonical {
            return true;
        }
        let contained = self.normalized.contains(kept.normalized.as_str())
            || kept.normalized.contains(self.normalized.as_str());
        if contained && self.words > 1 && kept.words > 1 {
            return true;
        }
        jaccard(&self.normalized, &kept.normalized) >= threshold
            || jaccard(&self.canonical, &kept.canonical) >= threshold
    }
}

/// Whether two diagnosis texts denote the same condition.
pub fn same_condition(a: &str, b: &str, normalizer: &TextNormalizer, threshold: f64) -> bool {
    let (a, b) = (Forms::of(a, normalizer), Forms::of(b, normalizer));
    if a.normalized.is_empty() || b.normalized.is_empty() {
        return false;
    }
    a.duplicates(&b, threshold)
}

impl Engine {
    /// Collapse mentions that denote the same condition, keeping the longest
    /// wording, and annotate the survivors with body part and chapter.
    pub fn deduplicate(&self, mentions: &[DiagnosisMention]) -> Vec<Diagnosis> {
        let threshold = self.rubric().text.similarity_threshold;
        let mut ordered: Vec<&DiagnosisMention> = mentions.iter().collect();
        ordered.sort_by(|a, b| b.text.chars().count().cmp(&a.text.chars().count()));

        let mut kept_forms: Vec<Forms> = Vec::new();
        let mut unique = Vec::new();
        for mention in ordered {
            let text = mention.text.trim();
            let forms = Forms::of(text, self.normalizer());
            if forms.normalized.is_empty() {
                continue;
            }
            if let Some(kept) = kept_forms.iter().find(|k| forms.duplicates(k, threshold)) {
                trace!(text, kept = %kept.normalized, "duplicate diagnosis dropped");
                continue;
            }

            let mut diagnosis = Diagnosis::new(
                text,
                forms.normalized.clone(),
                self.body_part_of(text),
                self.detect_chapter(text),
            );
            diagnosis.span = Some(mention.span);
            diagnosis.source = Some(mention.source);
            diagnosis.proven_fact = mention.proven_fact;
            unique.push(diagnosis);
            kept_forms.push(forms);
        }
        debug!(mentions = mentions.len(), kept = unique.len(), "diagnoses deduplicated");
        unique
    }
}
