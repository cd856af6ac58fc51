//! Integration tests for the HTTP API.
//!
//! The full router is driven through `tower::ServiceExt::oneshot` with a
//! mock model provider, so no network is involved.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use concept_studio::adapters::{
    api_router, ApiDependencies, JsonSchemaValidator, MockAIProvider, WordHtmlRenderer,
};
use concept_studio::ports::AIError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(provider: &MockAIProvider) -> Router {
    api_router(ApiDependencies {
        provider: Arc::new(provider.clone()),
        validator: Arc::new(JsonSchemaValidator::new()),
        renderer: Arc::new(WordHtmlRenderer::new()),
        temperature: None,
    })
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

fn plan_reply() -> Value {
    json!({
        "title": "Energía en Movimiento",
        "macroConcept": "Cambio",
        "microConcepts": ["Energía cinética", "Transformación"],
        "generalization": "La energía se transforma pero se conserva.",
        "guidingQuestions": {
            "factual": ["¿Qué es la energía cinética?"],
            "conceptual": ["¿Cómo se transforma la energía?"],
            "debatable": []
        },
        "activities": [
            {"phase": "Enganchar", "activity": "Péndulo", "purpose": "Asombro", "time": "10 min"},
            {"phase": "Generalizar", "activity": "Redactar", "purpose": "Conectar", "time": "35 min"}
        ],
        "assessmentIdea": "Diseñar una montaña rusa."
    })
}

fn assessment_reply() -> Value {
    json!({
        "title": "Herencia",
        "instructions": "Responde todas las preguntas.",
        "questions": [
            {
                "id": 1,
                "type": "multiple-choice",
                "question": "¿Qué es un alelo?",
                "options": ["Una variante de un gen", "Un cromosoma", "Una célula", "Un tejido"],
                "correctOptionIndex": 0,
                "answerKeyOrRubric": "Un alelo es una variante de un gen.",
                "conceptFocus": "factual"
            },
            {
                "id": 2,
                "type": "open-ended",
                "question": "¿Por qué los hermanos no son idénticos?",
                "options": [],
                "answerKeyOrRubric": "Recombinación y segregación.",
                "conceptFocus": "conceptual"
            }
        ]
    })
}

fn quiz_reply(answers: &[i64]) -> Value {
    let questions: Vec<Value> = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            json!({
                "id": i + 1,
                "category": "Diseño Curricular",
                "question": format!("Pregunta {}", i + 1),
                "options": ["Uno", "Dos", "Tres", "Cuatro"],
                "correctOptionIndex": answer,
                "explanation": "Una generalización conecta conceptos."
            })
        })
        .collect();
    json!({ "questions": questions })
}

// =============================================================================
// Reference content
// =============================================================================

#[tokio::test]
async fn sections_list_navigation_in_order() {
    let app = app(&MockAIProvider::new());

    let response = send(&app, Method::GET, "/api/sections", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["default"], "learn");
    let ids: Vec<&str> = body["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["learn", "techniques", "assessment", "quiz", "create"]);
    assert_eq!(body["sections"][4]["label"], "Diseñador IA");
}

#[tokio::test]
async fn concepts_include_sixteen_key_concepts() {
    let app = app(&MockAIProvider::new());

    let body = send(&app, Method::GET, "/api/concepts", None).await.json();

    assert_eq!(body["key_concepts"].as_array().unwrap().len(), 16);
    assert_eq!(body["fundamentals"].as_array().unwrap().len(), 4);
    assert_eq!(body["key_concepts_heading"], "Los 16 Conceptos Clave (PAI)");
}

#[tokio::test]
async fn techniques_catalog_lists_ten_worksheets() {
    let app = app(&MockAIProvider::new());

    let body = send(&app, Method::GET, "/api/techniques", None).await.json();

    let techniques = body["techniques"].as_array().unwrap();
    assert_eq!(techniques.len(), 10);
    assert_eq!(techniques[0]["slug"], "pensamiento-hexagonal");
    assert!(body["tip"].as_str().unwrap().starts_with("Tip Pedagógico"));
}

#[tokio::test]
async fn worksheet_download_is_a_word_document() {
    let app = app(&MockAIProvider::new());

    let response = send(
        &app,
        Method::GET,
        "/api/techniques/modelo-frayer/template",
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "application/msword");
    let disposition = response.headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains("Plantilla_Modelo_Frayer.doc"));
    assert!(response.body.starts_with(&[0xEF, 0xBB, 0xBF]));
    assert!(response.text().contains("Recurso generado por Conceptos Clave App"));
}

#[tokio::test]
async fn unknown_worksheet_is_404() {
    let app = app(&MockAIProvider::new());

    let response = send(&app, Method::GET, "/api/techniques/no-existe/template", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["kind"], "not_found");
}

// =============================================================================
// Lesson plans
// =============================================================================

#[tokio::test]
async fn lesson_plan_generation_and_export() {
    let provider = MockAIProvider::new().with_json(plan_reply());
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/lesson-plans",
        Some(json!({"age": "13", "subject": "Física", "unit": "Energía"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["plan"]["title"], "Energía en Movimiento");
    assert_eq!(body["form"]["duration"], 45);
    assert!(provider.get_calls()[0].prompt.contains("sesión de 45 minutos"));

    let export = send(&app, Method::POST, "/api/lesson-plans/export", Some(body)).await;

    assert_eq!(export.status, StatusCode::OK);
    let disposition = export.headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("filename*=UTF-8''Plan_Clase_Energ%C3%ADa_en_Movimiento.doc"));
    assert!(export.text().contains("Energía en Movimiento"));
}

#[tokio::test]
async fn blank_field_is_rejected_before_the_model() {
    let provider = MockAIProvider::new();
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/lesson-plans",
        Some(json!({"age": "13", "subject": "Física", "unit": "   ", "duration": 90})),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json();
    assert_eq!(body["kind"], "validation");
    assert_eq!(body["message"], "El campo «Unidad» es obligatorio.");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn unsupported_duration_is_rejected() {
    let provider = MockAIProvider::new();
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/lesson-plans",
        Some(json!({"age": "13", "subject": "Física", "unit": "Energía", "duration": 60})),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn exporting_a_plan_without_activities_is_rejected() {
    let provider = MockAIProvider::new().with_json(plan_reply());
    let app = app(&provider);
    let mut body = send(
        &app,
        Method::POST,
        "/api/lesson-plans",
        Some(json!({"age": "13", "subject": "Física", "unit": "Energía"})),
    )
    .await
    .json();
    body["plan"]["activities"] = json!([]);

    let export = send(&app, Method::POST, "/api/lesson-plans/export", Some(body)).await;

    assert_eq!(export.status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Assessments
// =============================================================================

#[tokio::test]
async fn zero_questions_is_a_validation_error() {
    let provider = MockAIProvider::new();
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/assessments",
        Some(json!({
            "age": "15", "subject": "Biología", "unit": "Genética",
            "multiple_choice_count": 0, "open_ended_count": 0
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json()["message"], "Debes solicitar al menos una pregunta.");
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn assessment_generation_normalises_open_ended_options() {
    let provider = MockAIProvider::new().with_json(assessment_reply());
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/assessments",
        Some(json!({"age": "15", "subject": "Biología", "unit": "Genética y Herencia",
                    "multiple_choice_count": 1, "open_ended_count": 1})),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let open = &body["assessment"]["questions"][1];
    assert_eq!(open["type"], "open-ended");
    assert!(open.get("options").is_none());
    assert!(open.get("correctOptionIndex").is_none());

    let export = send(&app, Method::POST, "/api/assessments/export", Some(body)).await;

    assert_eq!(export.status, StatusCode::OK);
    let disposition = export.headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("Evaluacion_Gen%C3%A9tica_y_Herencia.doc"));
    let html = export.text();
    assert!(html.contains("a) Una variante de un gen"));
    assert!(html.contains("d) Un tejido"));
    assert!(html.contains("Pauta de Corrección Docente"));
}

#[tokio::test]
async fn whole_float_answer_index_is_accepted() {
    let mut reply = assessment_reply();
    reply["questions"][0]["correctOptionIndex"] = json!(1.0);
    let provider = MockAIProvider::new().with_json(reply);
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/assessments",
        Some(json!({"age": "15", "subject": "Biología", "unit": "Genética",
                    "multiple_choice_count": 1, "open_ended_count": 1})),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["assessment"]["questions"][0]["correctOptionIndex"], 1);
}

#[tokio::test]
async fn exporting_an_assessment_without_questions_is_rejected() {
    let provider = MockAIProvider::new().with_json(assessment_reply());
    let app = app(&provider);
    let mut body = send(
        &app,
        Method::POST,
        "/api/assessments",
        Some(json!({"age": "15", "subject": "Biología", "unit": "Genética",
                    "multiple_choice_count": 1, "open_ended_count": 1})),
    )
    .await
    .json();
    body["assessment"]["questions"] = json!([]);

    let export = send(&app, Method::POST, "/api/assessments/export", Some(body)).await;

    assert_eq!(export.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_reply_is_bad_gateway() {
    let provider = MockAIProvider::new().with_response("no es json");
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/assessments",
        Some(json!({"age": "15", "subject": "Biología", "unit": "Genética"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    let body = response.json();
    assert_eq!(body["kind"], "schema_violation");
    assert_eq!(body["message"], "Error al procesar la evaluación generada.");
}

#[tokio::test]
async fn rate_limited_model_is_service_unavailable() {
    let provider = MockAIProvider::new().with_error(AIError::rate_limited(30));
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/assessments",
        Some(json!({"age": "15", "subject": "Biología", "unit": "Genética"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json()["kind"], "transport");
}

// =============================================================================
// Teacher quiz
// =============================================================================

#[tokio::test]
async fn quiz_session_scores_and_restarts() {
    let provider = MockAIProvider::new().with_json(quiz_reply(&[1, 0, 2]));
    let app = app(&provider);

    let created = send(
        &app,
        Method::POST,
        "/api/teacher-quiz/sessions",
        Some(json!({"question_count": 3})),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let session = created.json();
    let id = session["id"].as_str().unwrap().to_string();
    assert_eq!(session["phase"], "in_progress");
    assert_eq!(session["current_question"]["options"][0]["label"], "A");
    assert!(session["current_question"].get("correct_option_index").is_none());

    let base = format!("/api/teacher-quiz/sessions/{}", id);
    for choice in [1, 0, 1] {
        let answered = send(
            &app,
            Method::POST,
            &format!("{}/answer", base),
            Some(json!({"option": choice})),
        )
        .await;
        assert_eq!(answered.status, StatusCode::OK);
        let next = send(&app, Method::POST, &format!("{}/next", base), None).await;
        assert_eq!(next.status, StatusCode::OK);
    }

    let results = send(&app, Method::GET, &base, None).await.json();
    assert_eq!(results["phase"], "results");
    assert_eq!(results["score"], 2);
    assert_eq!(results["total"], 3);
    assert_eq!(
        results["verdict"]["message"],
        "Buen trabajo. Sigue conectando los puntos."
    );

    let restarted = send(&app, Method::POST, &format!("{}/restart", base), None).await;
    assert_eq!(restarted.status, StatusCode::OK);
    let restarted = restarted.json();
    assert_eq!(restarted["phase"], "setup");
    assert_eq!(restarted["score"], 0);
    assert_eq!(restarted["total"], 0);

    let gone = send(&app, Method::GET, &base, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn answering_twice_is_a_conflict() {
    let provider = MockAIProvider::new().with_json(quiz_reply(&[3, 3]));
    let app = app(&provider);

    let session = send(
        &app,
        Method::POST,
        "/api/teacher-quiz/sessions",
        Some(json!({"question_count": 2})),
    )
    .await
    .json();
    let answer_uri = format!("/api/teacher-quiz/sessions/{}/answer", session["id"].as_str().unwrap());

    let first = send(&app, Method::POST, &answer_uri, Some(json!({"option": 3}))).await;
    let body = first.json();
    assert_eq!(body["feedback"]["isCorrect"], true);
    assert_eq!(body["session"]["next_label"], "Siguiente Pregunta");
    assert_eq!(body["session"]["current_question"]["correct_option_index"], 3);

    let second = send(&app, Method::POST, &answer_uri, Some(json!({"option": 0}))).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.json()["kind"], "quiz_state");
}

#[tokio::test]
async fn restart_before_results_is_a_conflict() {
    let provider = MockAIProvider::new().with_json(quiz_reply(&[0]));
    let app = app(&provider);

    let session = send(&app, Method::POST, "/api/teacher-quiz/sessions", Some(json!({})))
        .await
        .json();
    let uri = format!("/api/teacher-quiz/sessions/{}/restart", session["id"].as_str().unwrap());

    let response = send(&app, Method::POST, &uri, None).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(provider.get_calls()[0].prompt.contains("con 5 preguntas"));
}

#[tokio::test]
async fn quiz_count_out_of_range_is_rejected() {
    let provider = MockAIProvider::new();
    let app = app(&provider);

    let response = send(
        &app,
        Method::POST,
        "/api/teacher-quiz/sessions",
        Some(json!({"question_count": 11})),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn unknown_session_is_404() {
    let app = app(&MockAIProvider::new());

    let response = send(
        &app,
        Method::GET,
        "/api/teacher-quiz/sessions/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(&MockAIProvider::new());

    let response = send(&app, Method::GET, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}
