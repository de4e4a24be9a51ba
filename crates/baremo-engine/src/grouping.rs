//! Hierarchical grouping: an anatomical lesion absorbs the functional
//! consequences named elsewhere in the document, so the rubric values the
//! lesion once.

use baremo_core::models::{BodyPart, Chapter, Diagnosis};
use baremo_rubric::tables::GroupDefinition;
use tracing::debug;

use crate::text::TextNormalizer;

#[derive(Debug, Clone)]
struct CompiledGroup {
    name: String,
    chapter: Chapter,
    body_part: BodyPart,
    primary: Vec<String>,
    secondary: Vec<String>,
}

impl CompiledGroup {
    fn accepts(&self, diagnosis: &Diagnosis) -> bool {
        diagnosis.body_part.is_compatible_with(self.body_part)
    }

    fn is_primary(&self, diagnosis: &Diagnosis) -> bool {
        self.accepts(diagnosis) && contains_any(&diagnosis.normalized_text, &self.primary)
    }

    fn is_secondary(&self, diagnosis: &Diagnosis) -> bool {
        self.accepts(diagnosis) && contains_any(&diagnosis.normalized_text, &self.secondary)
    }
}

fn contains_any(normalized: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| normalized.contains(k.as_str()))
}

#[derive(Debug, Clone)]
pub struct Grouper {
    groups: Vec<CompiledGroup>,
}

impl Grouper {
    /// Keywords are normalized like diagnoses so they compare in the same
    /// form.
    pub fn new(groups: &[GroupDefinition], normalizer: &TextNormalizer) -> Self {
        let normalize_all = |keywords: &[String]| -> Vec<String> {
            keywords
                .iter()
                .map(|k| normalizer.normalize(k))
                .filter(|k| !k.is_empty())
                .collect()
        };
        let groups = groups
            .iter()
            .map(|g| CompiledGroup {
                name: g.name.clone(),
                chapter: g.chapter,
                body_part: g.body_part,
                primary: normalize_all(&g.primary),
                secondary: normalize_all(&g.secondary),
            })
            .collect();
        Self { groups }
    }

    /// Anchors (with everything they absorbed) first, in discovery order,
    /// then the diagnoses no anchor absorbed.
    pub fn group(&self, diagnoses: Vec<Diagnosis>) -> Vec<Diagnosis> {
        let mut processed = vec![false; diagnoses.len()];
        let mut grouped = Vec::with_capacity(diagnoses.len());

        for i in 0..diagnoses.len() {
            if processed[i] {
                continue;
            }
            let anchor = &diagnoses[i];
            let Some(group) = self.groups.iter().find(|g| g.is_primary(anchor)) else {
                continue;
            };
            processed[i] = true;

            let mut related = vec![anchor.text.clone()];
            for (j, other) in diagnoses.iter().enumerate() {
                if processed[j] {
                    continue;
                }
                if group.is_primary(other) || group.is_secondary(other) {
                    related.push(other.text.clone());
                    processed[j] = true;
                }
            }

            let mut unit = anchor.clone();
            unit.chapter = group.chapter;
            unit.body_part = group.body_part;
            unit.is_grouped = related.len() > 1;
            unit.related_diagnoses = related;
            unit.group_name = Some(group.name.clone());
            debug!(
                group = %group.name,
                anchor = %unit.text,
                members = unit.related_diagnoses.len(),
                "pathology group formed"
            );
            grouped.push(unit);
        }

        for (i, mut diagnosis) in diagnoses.into_iter().enumerate() {
            if processed[i] {
                continue;
            }
            if self.groups.iter().any(|g| g.is_secondary(&diagnosis)) {
                diagnosis.is_functional_only = true;
            }
            grouped.push(diagnosis);
        }
        grouped
    }
}
