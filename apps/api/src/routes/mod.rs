pub mod credentials;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::progress::handlers as progress;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/credentials",
            get(credentials::handle_get_credentials).put(credentials::handle_set_credentials),
        )
        // Wizard
        .route("/api/v1/wizard/start", get(wizard::handle_start))
        .route("/api/v1/wizard/transition", post(wizard::handle_transition))
        .route("/api/v1/wizard/form", get(wizard::handle_form))
        // Roadmaps
        .route("/api/v1/roadmaps/generate", post(roadmap::handle_generate))
        .route(
            "/api/v1/roadmaps",
            get(roadmap::handle_list_roadmaps).post(roadmap::handle_save_roadmap),
        )
        .route("/api/v1/roadmaps/:id", get(roadmap::handle_get_roadmap))
        // Progress
        .route(
            "/api/v1/roadmaps/:id/progress",
            get(progress::handle_get_progress),
        )
        .route(
            "/api/v1/roadmaps/:id/progress/toggle",
            post(progress::handle_toggle_task),
        )
        .route("/api/v1/progress/preview", post(progress::handle_preview))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::state::test_support::{memory_state, unreadable_state};

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
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
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn profile() -> Value {
        json!({
            "name": "Ada",
            "currentRole": "Analyst",
            "experience": "2-3",
            "targetRole": "Data Scientist",
            "industry": "technology",
            "skills": ["Python"],
            "timeframe": "6-months",
            "learningStyle": "hands-on"
        })
    }

    fn model_roadmap() -> String {
        let milestones: Vec<Value> = (1..=4)
            .map(|id| {
                json!({
                    "id": id,
                    "title": format!("Stage {id}"),
                    "description": "Learn things",
                    "duration": "4 weeks",
                    "tasks": ["one", "two", "three"]
                })
            })
            .collect();
        json!({ "role": "Data Scientist", "timeline": "6 months", "milestones": milestones })
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(memory_state(None));
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "careerpath-api");
    }

    #[tokio::test]
    async fn test_credential_capture_flow() {
        let app = build_router(memory_state(None));

        let (_, body) = send(&app, Method::GET, "/api/v1/wizard/start", None).await;
        assert_eq!(body["step"], "credential_capture");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/credentials",
            Some(json!({ "apiKey": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/credentials",
            Some(json!({ "apiKey": "AIza-test" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, Method::GET, "/api/v1/credentials", None).await;
        assert_eq!(body, json!({ "configured": true }));

        let (_, body) = send(&app, Method::GET, "/api/v1/wizard/start", None).await;
        assert_eq!(body["step"], "assessment");
    }

    #[tokio::test]
    async fn test_wizard_transition() {
        let app = build_router(memory_state(None));

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/wizard/transition",
            Some(json!({ "step": "assessment", "event": "submit" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["step"], "loading");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/wizard/transition",
            Some(json!({ "step": "loading", "event": "back" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_wizard_form() {
        let app = build_router(memory_state(None));
        let (status, body) = send(&app, Method::GET, "/api/v1/wizard/form", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sections"].as_array().unwrap().len(), 3);
        assert_eq!(body["learningStyles"][1]["value"], "hands-on");
    }

    #[tokio::test]
    async fn test_generate_without_credential_falls_back() {
        let app = build_router(memory_state(Some(&model_roadmap())));
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/roadmaps/generate",
            Some(json!({ "profile": profile() })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["usedFallback"], true);
        assert_eq!(body["source"]["kind"], "fallback");
        assert_eq!(body["roadmap"]["role"], "Data Scientist");
        assert_eq!(body["roadmap"]["timeline"], "6 months");
        assert_eq!(body["roadmap"]["milestones"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_generate_with_credential_uses_model() {
        let app = build_router(memory_state(Some(&model_roadmap())));
        send(
            &app,
            Method::PUT,
            "/api/v1/credentials",
            Some(json!({ "apiKey": "AIza-test" })),
        )
        .await;

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/roadmaps/generate",
            Some(json!({ "profile": profile() })),
        )
        .await;
        assert_eq!(body["usedFallback"], false);
        assert!(body.get("fallbackReason").is_none());
        assert_eq!(body["roadmap"]["milestones"][0]["title"], "Stage 1");
    }

    #[tokio::test]
    async fn test_generate_with_failing_model_falls_back() {
        let app = build_router(memory_state(None));
        send(
            &app,
            Method::PUT,
            "/api/v1/credentials",
            Some(json!({ "apiKey": "AIza-test" })),
        )
        .await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/roadmaps/generate",
            Some(json!({ "profile": profile() })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["usedFallback"], true);
        assert!(body["fallbackReason"].as_str().unwrap().contains("empty content"));
    }

    #[tokio::test]
    async fn test_save_toggle_and_reload() {
        let app = build_router(memory_state(None));
        let (_, generated) = send(
            &app,
            Method::POST,
            "/api/v1/roadmaps/generate",
            Some(json!({ "profile": profile() })),
        )
        .await;

        let (status, saved) = send(
            &app,
            Method::POST,
            "/api/v1/roadmaps",
            Some(json!({ "roadmap": generated["roadmap"], "userProfile": profile() })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = saved["id"].as_str().unwrap().to_string();
        assert!(saved["createdAt"].is_string());
        assert_eq!(saved["userProfile"]["name"], "Ada");

        let (_, list) = send(&app, Method::GET, "/api/v1/roadmaps", None).await;
        assert_eq!(list["roadmaps"].as_array().unwrap().len(), 1);

        let toggle_uri = format!("/api/v1/roadmaps/{id}/progress/toggle");
        let (status, report) = send(
            &app,
            Method::POST,
            &toggle_uri,
            Some(json!({ "milestoneId": 1, "taskIndex": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["completedTasks"], json!(["1-0"]));
        assert_eq!(report["completedCount"], 1);

        let (_, report) = send(
            &app,
            Method::GET,
            &format!("/api/v1/roadmaps/{id}/progress"),
            None,
        )
        .await;
        assert_eq!(report["completedTasks"], json!(["1-0"]));

        let (_, detail) = send(&app, Method::GET, &format!("/api/v1/roadmaps/{id}"), None).await;
        assert_eq!(detail["roadmap"]["milestones"][0]["progress"], 33);
        assert_eq!(detail["progress"]["milestones"][0]["completedTasks"], 1);

        // toggling again clears the key
        let (_, report) = send(
            &app,
            Method::POST,
            &toggle_uri,
            Some(json!({ "milestoneId": 1, "taskIndex": 0 })),
        )
        .await;
        assert_eq!(report["completedTasks"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_roadmap_is_not_found() {
        let app = build_router(memory_state(None));
        let id = uuid::Uuid::new_v4();

        let (status, body) = send(&app, Method::GET, &format!("/api/v1/roadmaps/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/v1/roadmaps/{id}/progress/toggle"),
            Some(json!({ "milestoneId": 1, "taskIndex": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preview_counts_session_progress() {
        let app = build_router(memory_state(None));
        let roadmap: Value = serde_json::from_str(&model_roadmap()).unwrap();

        let (status, report) = send(
            &app,
            Method::POST,
            "/api/v1/progress/preview",
            Some(json!({ "roadmap": roadmap, "completedTasks": ["1-0", "1-1", "9-9"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["completedCount"], 2);
        assert_eq!(report["totalTasks"], 12);
        assert_eq!(report["milestones"][0]["progress"], 67);
    }

    #[tokio::test]
    async fn test_generate_with_unreadable_store_falls_back() {
        let app = build_router(unreadable_state(Some(&model_roadmap())));
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/roadmaps/generate",
            Some(json!({ "profile": profile() })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["usedFallback"], true);
        assert!(body["fallbackReason"]
            .as_str()
            .unwrap()
            .starts_with("API key could not be read"));
        assert_eq!(body["roadmap"]["milestones"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_milestone_ids() {
        let app = build_router(memory_state(None));
        let mut roadmap: Value = serde_json::from_str(&model_roadmap()).unwrap();
        roadmap["milestones"][1]["id"] = json!(1);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/roadmaps",
            Some(json!({ "roadmap": roadmap })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("duplicate milestone id 1"));

        let (_, list) = send(&app, Method::GET, "/api/v1/roadmaps", None).await;
        assert!(list["roadmaps"].as_array().unwrap().is_empty());
    }
}
