//! Instruction text sent to the generative model, one builder per feature.
//!
//! Prompts are in Spanish, the language of the generated content.

use crate::domain::assessment::AssessmentForm;
use crate::domain::lesson::PlannerForm;
use crate::domain::quiz::QuizRequest;

/// Lesson design request following the inquiry cycle.
pub fn lesson_plan_prompt(form: &PlannerForm) -> String {
    let minutes = form.duration().minutes();
    format!(
        "Actúa como un consultor pedagógico experto en Aprendizaje Basado en Conceptos (modelo de Lynn Erickson y Lois Lanning).\n\
Diseña una estructura de clase para una sesión de {minutes} minutos para estudiantes de {age} años en la asignatura de {subject} sobre el tema \"{unit}\".\n\
\n\
El objetivo es mover el pensamiento de lo factual a lo conceptual.\n\
\n\
Debes generar:\n\
1. Un Título Creativo.\n\
2. Un Macro-concepto (Concepto amplio, ej: Sistema, Cambio, Poder).\n\
3. Micro-conceptos (Conceptos disciplinares específicos).\n\
4. Una Generalización (La \"Idea Grande\" o Entendimiento Perdurable que conecta los conceptos).\n\
5. Preguntas Guía divididas en Fácticas, Conceptuales y Debatibles.\n\
6. Una secuencia de actividades basada en el ciclo de indagación (Enganchar, Enfocar, Investigar, Generalizar, Transferir), asegurando que la suma de los tiempos se ajuste a {minutes} minutos.\n\
7. Una idea de evaluación auténtica.\n",
        minutes = minutes,
        age = form.age(),
        subject = form.subject(),
        unit = form.unit(),
    )
}

/// Formative assessment request with exact question counts.
pub fn assessment_prompt(form: &AssessmentForm) -> String {
    format!(
        "Crea una Evaluación Formativa rigurosa basada en el Aprendizaje Basado en Conceptos (Erickson/Lanning/IB).\n\
\n\
CONTEXTO:\n\
- Estudiantes: {age}\n\
- Asignatura: {subject}\n\
- Unidad/Tema: {unit}\n\
\n\
ESTRUCTURA DE LA EVALUACIÓN:\n\
Debes generar exactamente:\n\
- {mc} preguntas de Selección Múltiple (con 4 alternativas).\n\
- {open} preguntas Abiertas (Desarrollo breve o extenso).\n\
\n\
OBJETIVO PEDAGÓGICO:\n\
Evaluar la comprensión profunda y la transferencia, no solo la memoria.\n\
- Las preguntas deben requerir pensar, conectar conceptos y aplicar conocimiento, no solo recordar datos.\n\
- Para las preguntas de selección múltiple, los distractores deben ser plausibles.\n\
- Etiqueta cada pregunta según si evalúa principalmente conocimiento Fáctico (Hechos) o Comprensión Conceptual (Relaciones/Principios).\n\
- Provee una pauta de corrección clara o rúbrica resumida.\n",
        age = form.age(),
        subject = form.subject(),
        unit = form.unit(),
        mc = form.multiple_choice_count(),
        open = form.open_ended_count(),
    )
}

/// Practice questions for teachers on concept-based curriculum.
pub fn teacher_quiz_prompt(request: &QuizRequest) -> String {
    format!(
        "Genera un cuestionario de opción múltiple con {count} preguntas diseñado para evaluar y entrenar a PROFESORES en el \"Aprendizaje Basado en Conceptos\" (Concept-Based Curriculum and Instruction) según Lynn Erickson, Lois Lanning y el IB PAI.\n\
\n\
Las preguntas deben ser desafiantes y variadas entre:\n\
1. Definiciones Clave: (Ej: Sinergia Intelectual, Macro vs Micro conceptos, Generalizaciones vs Datos).\n\
2. Escenarios de Aula: (Ej: \"Un estudiante responde con un dato específico, ¿cuál es la mejor intervención conceptual del docente?\").\n\
3. Diseño Curricular: (Ej: Cómo redactar una generalización fuerte).\n\
\n\
Para cada pregunta:\n\
- Provee 4 opciones.\n\
- Indica la correcta.\n\
- Provee una retroalimentación pedagógica detallada (Feedback) explicando por qué es la correcta basándose en la teoría.\n",
        count = request.question_count(),
    )
}
