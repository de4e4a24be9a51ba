use std::collections::BTreeMap;

use baremo_core::models::{
    Analysis, AnalysisRequest, BodyPart, ChapterValuation, Diagnosis, FinalValuation,
    MetricMap, SuggestedClassification,
};
use tracing::{debug, info, warn};

use crate::combine::combine;
use crate::error::EngineError;
use crate::Engine;

impl Engine {
    /// Run the whole pipeline over one document.
    ///
    /// Fails only when the request carries no text. Everything the pipeline
    /// cannot interpret is left out of the result instead.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis, EngineError> {
        if request.text.trim().is_empty() {
            return Err(EngineError::EmptyText);
        }

        let entities = self.recognizer().recognize_document(
            &request.text,
            request.document_type.as_deref(),
            request.proven_facts,
        );
        let metrics: MetricMap = entities.metrics.iter().map(|r| r.metric).collect();

        let mut diagnoses = self.deduplicate(&entities.diagnoses);
        self.apply_body_part_hints(&mut diagnoses, &request.body_part_hints);
        let diagnoses = self.group(diagnoses);

        let chapter_valuations: Vec<ChapterValuation> = diagnoses
            .iter()
            .filter_map(|d| self.classify(d, &metrics))
            .collect();
        debug!(
            units = diagnoses.len(),
            classified = chapter_valuations.len(),
            dropped = diagnoses.len() - chapter_valuations.len(),
            "diagnoses classified"
        );

        let final_valuation = self.combine(&chapter_valuations);
        match &final_valuation {
            Some(v) => info!(
                percentage = v.percentage,
                class = v.class.number(),
                components = v.components_count,
                "analysis complete"
            ),
            None => info!(diagnoses = diagnoses.len(), "analysis complete without valuation"),
        }

        Ok(Analysis {
            document_type: request.document_type.clone(),
            rubric_version: self.rubric().version.clone(),
            suggested_classification: final_valuation.as_ref().map(SuggestedClassification::from),
            entities,
            diagnoses,
            metrics,
            chapter_valuations,
            final_valuation,
        })
    }

    pub fn group(&self, diagnoses: Vec<Diagnosis>) -> Vec<Diagnosis> {
        self.grouper().group(diagnoses)
    }

    /// Value one diagnosis. `None` when its chapter cannot be resolved.
    pub fn classify(&self, diagnosis: &Diagnosis, metrics: &MetricMap) -> Option<ChapterValuation> {
        let valuation = self.classifier().classify(diagnosis, metrics);
        if valuation.is_none() {
            debug!(diagnosis = %diagnosis.text, chapter = %diagnosis.chapter, "diagnosis not valued");
        }
        valuation
    }

    pub fn combine(&self, valuations: &[ChapterValuation]) -> Option<FinalValuation> {
        combine(valuations, self.rubric())
    }

    /// Classify one free-text diagnosis against `metrics`. Chapter and body
    /// part are derived from the text unless `body_part` is given.
    pub fn classify_text(
        &self,
        text: &str,
        metrics: &MetricMap,
        body_part: Option<BodyPart>,
    ) -> Option<ChapterValuation> {
        let text = text.trim();
        let normalized = self.normalizer().normalize(text);
        if normalized.is_empty() {
            return None;
        }
        let diagnosis = Diagnosis::new(
            text,
            normalized,
            body_part.unwrap_or_else(|| self.body_part_of(text)),
            self.detect_chapter(text),
        );
        self.classify(&diagnosis, metrics)
    }

    /// Override body parts of diagnoses named by `hints`. A hint applies when
    /// its normalized key equals or occurs in the diagnosis's normalized text.
    pub fn apply_body_part_hints(&self, diagnoses: &mut [Diagnosis], hints: &BTreeMap<String, String>) {
        for (key, label) in hints {
            let Some(part) = BodyPart::from_label(label) else {
                warn!(hint = %key, label = %label, "unknown body part in hint");
                continue;
            };
            let key = self.normalizer().normalize(key);
            if key.is_empty() {
                continue;
            }
            for diagnosis in diagnoses
                .iter_mut()
                .filter(|d| d.normalized_text.contains(key.as_str()))
            {
                debug!(diagnosis = %diagnosis.text, body_part = %part, "body part hint applied");
                diagnosis.body_part = part;
            }
        }
    }
}
