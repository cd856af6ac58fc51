//! Assessment document: student questionnaire, page break, teacher key.

use super::document::{Block, Document, Span, Stylesheet};
use crate::domain::assessment::{AssessmentForm, AssessmentQuestion, AssessmentResult, QuestionFormat};
use crate::domain::foundation::assessment_label;

/// Ruled lines left under an open-ended question.
const OPEN_ANSWER_LINES: usize = 3;

/// Lays out an assessment. Everything after the page break is for the teacher.
pub fn assessment_document(result: &AssessmentResult, form: &AssessmentForm) -> Document {
    let mut doc = Document::new(result.title.clone(), Stylesheet::Assessment);

    doc.extend([
        Block::heading(1, result.title.clone()),
        Block::labelled("Asignatura:", form.subject()),
        Block::labelled("Unidad:", form.unit()),
        Block::labelled("Edad/Nivel:", form.age()),
        Block::Rule,
        Block::paragraph(vec![Span::emphasis(result.instructions.clone())]),
        Block::Spacer,
        Block::heading(2, "Cuestionario"),
    ]);
    doc.extend(
        result
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| student_question(i + 1, q)),
    );

    doc.extend([
        Block::PageBreak,
        Block::heading(2, "Pauta de Corrección Docente"),
        Block::paragraph(vec![Span::emphasis(
            "Esta sección es para uso exclusivo del profesor.",
        )]),
    ]);
    doc.extend(
        result
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| answer_key_entry(i + 1, q)),
    );

    doc
}

fn student_question(number: usize, q: &AssessmentQuestion) -> Block {
    let mut blocks = vec![Block::paragraph(vec![
        Span::strong(format!("{}. {}", number, q.question)),
        Span::plain(" "),
        Span::muted(format!("[{}]", q.concept_focus.tag())),
    ])];

    match &q.format {
        QuestionFormat::MultipleChoice { options, .. } => {
            blocks.push(Block::unmarked(
                options
                    .iter()
                    .enumerate()
                    .map(|(idx, opt)| format!("{} {}", assessment_label(idx), opt))
                    .collect(),
            ));
        }
        QuestionFormat::OpenEnded => blocks.push(Block::WritingLines {
            count: OPEN_ANSWER_LINES,
        }),
    }

    Block::container("question", blocks)
}

fn answer_key_entry(number: usize, q: &AssessmentQuestion) -> Block {
    let heading = Block::paragraph(vec![Span::strong(format!(
        "Pregunta {} ({})",
        number,
        q.format.label()
    ))]);

    let answer = match &q.format {
        QuestionFormat::MultipleChoice {
            correct_option_index,
            ..
        } => Block::paragraph(vec![
            Span::strong("Opción Correcta:"),
            Span::plain(format!(" {}", assessment_label(*correct_option_index))),
            Span::line_break(),
            Span::emphasis(format!("Explicación: {}", q.answer_key_or_rubric)),
        ]),
        QuestionFormat::OpenEnded => Block::paragraph(vec![
            Span::strong("Criterios de Evaluación:"),
            Span::line_break(),
            Span::emphasis(q.answer_key_or_rubric.clone()),
        ]),
    };

    Block::container("answer", vec![heading, answer])
}
