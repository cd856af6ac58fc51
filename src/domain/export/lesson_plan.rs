//! Lesson plan document.

use super::document::{Block, Document, Span, Stylesheet};
use crate::domain::lesson::{LessonPlan, PlannerForm};

/// Lays out a lesson plan with the planner's context at the top.
pub fn lesson_plan_document(plan: &LessonPlan, form: &PlannerForm) -> Document {
    let mut doc = Document::new(plan.title.clone(), Stylesheet::LessonPlan);

    doc.push(Block::heading(1, plan.title.clone())).extend([
        Block::labelled("Asignatura:", form.subject()),
        Block::labelled("Edad:", form.age()),
        Block::labelled("Unidad:", form.unit()),
        Block::labelled(
            "Duración:",
            format!("{} minutos", form.duration().minutes()),
        ),
    ]);

    doc.extend([
        Block::heading(2, "Estructura Conceptual"),
        Block::labelled("Macro-Concepto:", plan.macro_concept.clone()),
        Block::labelled("Micro-Conceptos:", plan.micro_concepts.join(", ")),
        Block::container(
            "highlight",
            vec![
                Block::heading(3, "Entendimiento Perdurable (Generalización)"),
                Block::classed_paragraph(
                    "generalization",
                    vec![Span::plain(format!("\"{}\"", plan.generalization))],
                ),
            ],
        ),
    ]);

    let questions = &plan.guiding_questions;
    doc.extend([
        Block::heading(2, "Preguntas Guía"),
        Block::heading(3, "Fácticas"),
        Block::bullets(questions.factual.clone()),
        Block::heading(3, "Conceptuales"),
        Block::bullets(questions.conceptual.clone()),
        Block::heading(3, "Debatibles"),
        Block::bullets(questions.debatable.clone()),
    ]);

    doc.push(Block::heading(2, "Secuencia de Aprendizaje"));
    doc.extend(plan.activities.iter().map(|act| {
        Block::container(
            "activity",
            vec![
                Block::paragraph(vec![
                    Span::phase(format!("[{} - {}]", act.phase, act.time)),
                    Span::plain(" "),
                    Span::strong(act.activity.clone()),
                ]),
                Block::paragraph(vec![Span::emphasis(format!("Propósito: {}", act.purpose))]),
            ],
        )
    }));

    doc.extend([
        Block::heading(2, "Evaluación Sugerida"),
        Block::text(plan.assessment_idea.clone()),
    ]);

    doc
}
