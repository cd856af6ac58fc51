//! ExportDocumentHandler - Builds downloadable word-processor documents.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentForm, AssessmentResult};
use crate::domain::export::{
    assessment_document, assessment_filename, lesson_plan_document, lesson_plan_filename,
    worksheet_document, worksheet_filename,
};
use crate::domain::lesson::{LessonPlan, PlannerForm};
use crate::domain::reference::find_technique;
use crate::ports::{DocumentRenderer, ExportError, ExportedDocument};

/// Handler for every document download.
pub struct ExportDocumentHandler {
    renderer: Arc<dyn DocumentRenderer>,
}

impl ExportDocumentHandler {
    pub fn new(renderer: Arc<dyn DocumentRenderer>) -> Self {
        Self { renderer }
    }

    /// Exports a generated lesson plan, named after its title.
    pub fn export_lesson_plan(
        &self,
        plan: &LessonPlan,
        form: &PlannerForm,
    ) -> Result<ExportedDocument, ExportError> {
        let document = lesson_plan_document(plan, form);
        self.renderer
            .render(&document, &lesson_plan_filename(&plan.title))
    }

    /// Exports an assessment with its answer key, named after the unit.
    pub fn export_assessment(
        &self,
        assessment: &AssessmentResult,
        form: &AssessmentForm,
    ) -> Result<ExportedDocument, ExportError> {
        let document = assessment_document(assessment, form);
        self.renderer
            .render(&document, &assessment_filename(form.unit()))
    }

    /// Exports the printable worksheet of a technique.
    pub fn export_worksheet(&self, slug: &str) -> Result<ExportedDocument, ExportError> {
        let technique = find_technique(slug)
            .map_err(|e| ExportError::CatalogUnavailable(e.to_string()))?
            .ok_or_else(|| ExportError::UnknownTechnique(slug.to_string()))?;

        let document = worksheet_document(technique);
        self.renderer
            .render(&document, &worksheet_filename(&technique.title))
    }
}
