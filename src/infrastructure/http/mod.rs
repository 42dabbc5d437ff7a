//! HTTP REST API routes

mod form_routes;
mod theme_routes;

use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::domain::entities::{CharacterForm, LoreForm, StorylineForm};
use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/options", get(form_routes::get_options))
        // Theme routes
        .route("/api/theme", get(theme_routes::get_theme))
        .route("/api/theme/toggle", post(theme_routes::toggle_theme))
        // Storyline routes
        .route(
            "/api/forms/storyline",
            get(form_routes::get_form::<StorylineForm>),
        )
        .route(
            "/api/forms/storyline",
            patch(form_routes::update_storyline),
        )
        .route(
            "/api/forms/storyline/submit",
            post(form_routes::submit_form::<StorylineForm>),
        )
        .route(
            "/api/forms/storyline/reset",
            post(form_routes::reset_form::<StorylineForm>),
        )
        .route(
            "/api/forms/storyline/export",
            get(form_routes::export_story),
        )
        .route("/api/forms/storyline/save", post(form_routes::save_story))
        // Character routes
        .route(
            "/api/forms/character",
            get(form_routes::get_form::<CharacterForm>),
        )
        .route(
            "/api/forms/character",
            patch(form_routes::update_character),
        )
        .route(
            "/api/forms/character/submit",
            post(form_routes::submit_form::<CharacterForm>),
        )
        .route(
            "/api/forms/character/reset",
            post(form_routes::reset_form::<CharacterForm>),
        )
        .route(
            "/api/forms/character/traits/toggle",
            post(form_routes::toggle_trait),
        )
        .route(
            "/api/forms/character/traits/custom",
            post(form_routes::merge_custom_traits),
        )
        // Lore routes
        .route("/api/forms/lore", get(form_routes::get_form::<LoreForm>))
        .route("/api/forms/lore", patch(form_routes::update_lore))
        .route(
            "/api/forms/lore/submit",
            post(form_routes::submit_form::<LoreForm>),
        )
        .route(
            "/api/forms/lore/reset",
            post(form_routes::reset_form::<LoreForm>),
        )
        .route(
            "/api/forms/lore/themes/toggle",
            post(form_routes::toggle_lore_theme),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::ports::outbound::{
        FileSaveError, FileSavePort, GenerationError, GenerationPort,
    };
    use crate::infrastructure::config::AppConfig;

    /// Echoes a fixed text under whichever key the endpoint answers with
    struct FixedGeneration {
        bodies: Mutex<Vec<(String, String)>>,
        offline: AtomicBool,
    }

    #[async_trait::async_trait]
    impl GenerationPort for FixedGeneration {
        async fn post_json(&self, path: &str, body: String) -> Result<Value, GenerationError> {
            self.bodies.lock().unwrap().push((path.to_string(), body));
            if self.offline.load(Ordering::SeqCst) {
                return Err(GenerationError::Transport("connection refused".to_string()));
            }
            match path {
                "/generate_storyline" => Ok(json!({ "story": "The tide came in." })),
                "/generate_backstory" => Ok(json!({ "backstory": "Raised by wolves." })),
                _ => Err(GenerationError::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct MemorySaver {
        files: Mutex<Vec<(String, String)>>,
    }

    #[async_trait::async_trait]
    impl FileSavePort for MemorySaver {
        async fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, FileSaveError> {
            self.files
                .lock()
                .unwrap()
                .push((filename.to_string(), contents.to_string()));
            Ok(PathBuf::from("memory").join(filename))
        }
    }

    struct Harness {
        app: Router,
        generation: Arc<FixedGeneration>,
        saver: Arc<MemorySaver>,
    }

    fn harness() -> Harness {
        let config = AppConfig {
            service_base_url: "http://generation.invalid".to_string(),
            server_port: 0,
            export_dir: PathBuf::from("unused"),
            theme_preference: None,
        };
        let generation = Arc::new(FixedGeneration {
            bodies: Mutex::new(Vec::new()),
            offline: AtomicBool::new(false),
        });
        let saver = Arc::new(MemorySaver::default());
        let state = AppState::with_ports(config, generation.clone(), saver.clone());

        Harness {
            app: create_routes().with_state(Arc::new(state)),
            generation,
            saver,
        }
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_character_flow() {
        let h = harness();

        let (status, snapshot) = send_json(
            &h.app,
            Method::PATCH,
            "/api/forms/character",
            Some(json!({
                "characterName": "Kara",
                "race": "Human",
                "role": "Hero",
                "strengthsWeaknesses": "Fast but reckless"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(snapshot["canSubmit"], false);
        assert_eq!(snapshot["missingFields"], json!(["traits"]));

        for item in ["Brave", "Loyal"] {
            let (status, toggled) = send_json(
                &h.app,
                Method::POST,
                "/api/forms/character/traits/toggle",
                Some(json!({ "item": item })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(toggled["selected"], true);
        }

        let (status, result) =
            send_json(&h.app, Method::POST, "/api/forms/character/submit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result, json!({ "text": "Raised by wolves.", "isError": false }));

        let bodies = h.generation.bodies.lock().unwrap().clone();
        assert_eq!(
            bodies,
            vec![(
                "/generate_backstory".to_string(),
                r#"{"characterName":"Kara","race":"Human","role":"Hero","traits":["Brave","Loyal"],"strengthsWeaknesses":"Fast but reckless"}"#.to_string()
            )]
        );

        let (_, snapshot) = send_json(&h.app, Method::GET, "/api/forms/character", None).await;
        assert_eq!(snapshot["phase"], "completed");
        assert_eq!(snapshot["result"]["text"], "Raised by wolves.");
    }

    #[tokio::test]
    async fn test_submit_with_missing_fields_is_blocked() {
        let h = harness();

        let (status, body) = send(&h.app, Method::POST, "/api/forms/storyline/submit", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(String::from_utf8(body).unwrap(), "Please enter a story prompt!");
        assert!(h.generation.bodies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_option_is_rejected() {
        let h = harness();

        let (status, _) = send(
            &h.app,
            Method::PATCH,
            "/api/forms/lore",
            Some(json!({ "era": "Jurassic" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &h.app,
            Method::POST,
            "/api/forms/lore/themes/toggle",
            Some(json!({ "item": "Dragons" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_lore_service_failure_lands_as_error_result() {
        let h = harness();

        let (_, toggled) = send_json(
            &h.app,
            Method::POST,
            "/api/forms/lore/themes/toggle",
            Some(json!({ "item": "magic" })),
        )
        .await;
        assert_eq!(toggled, json!({ "item": "Magic", "selected": true }));

        let (status, result) =
            send_json(&h.app, Method::POST, "/api/forms/lore/submit", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            result,
            json!({ "text": "Failed to connect to the server.", "isError": true })
        );
        let (_, snapshot) = send_json(&h.app, Method::GET, "/api/forms/lore", None).await;
        assert_eq!(snapshot["phase"], "failed");
        assert_eq!(snapshot["submitting"], false);
    }

    #[tokio::test]
    async fn test_storyline_export_save_and_reset() {
        let h = harness();

        let (status, _) = send(&h.app, Method::GET, "/api/forms/storyline/export", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(
            &h.app,
            Method::PATCH,
            "/api/forms/storyline",
            Some(json!({ "storyPrompt": "A drowned bell tower", "storyLength": 900 })),
        )
        .await;
        send(&h.app, Method::POST, "/api/forms/storyline/submit", None).await;

        let response = h
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/forms/storyline/export")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Generated_Story.txt\""
        );
        let text = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&text[..], b"The tide came in.");

        let (status, saved) =
            send_json(&h.app, Method::POST, "/api/forms/storyline/save", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["path"], "memory/Generated_Story.txt");
        assert_eq!(h.saver.files.lock().unwrap().len(), 1);

        let (status, snapshot) =
            send_json(&h.app, Method::POST, "/api/forms/storyline/reset", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(snapshot["form"]["storyPrompt"], "");
        assert_eq!(snapshot["form"]["tone"], "Dark");
        assert_eq!(snapshot["form"]["storyLength"], 500);
        assert_eq!(snapshot["result"], json!({ "text": "", "isError": false }));
        assert_eq!(snapshot["phase"], "idle");
    }

    #[tokio::test]
    async fn test_failed_storyline_text_can_still_be_exported() {
        let h = harness();
        h.generation.offline.store(true, Ordering::SeqCst);

        send(
            &h.app,
            Method::PATCH,
            "/api/forms/storyline",
            Some(json!({ "storyPrompt": "A drowned bell tower" })),
        )
        .await;
        let (_, result) =
            send_json(&h.app, Method::POST, "/api/forms/storyline/submit", None).await;
        assert_eq!(
            result,
            json!({ "text": "An error occurred. Please try again.", "isError": true })
        );

        let (status, body) = send(&h.app, Method::GET, "/api/forms/storyline/export", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "An error occurred. Please try again."
        );

        let (status, _) = send(&h.app, Method::POST, "/api/forms/storyline/save", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            h.saver.files.lock().unwrap().as_slice(),
            &[(
                "Generated_Story.txt".to_string(),
                "An error occurred. Please try again.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_custom_traits_merge() {
        let h = harness();

        let (status, snapshot) = send_json(
            &h.app,
            Method::POST,
            "/api/forms/character/traits/custom",
            Some(json!({ "input": "Stubborn, Witty, ,Stubborn" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(snapshot["form"]["traits"], json!(["Stubborn", "Witty"]));
    }

    #[tokio::test]
    async fn test_theme_toggle_and_options() {
        let h = harness();

        let (_, theme) = send_json(&h.app, Method::GET, "/api/theme", None).await;
        assert_eq!(theme, json!({ "theme": "light", "isDark": false }));

        let (_, theme) = send_json(&h.app, Method::POST, "/api/theme/toggle", None).await;
        assert_eq!(theme, json!({ "theme": "dark", "isDark": true }));

        let (status, options) = send_json(&h.app, Method::GET, "/api/options", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(options["roles"][4], "Anti-hero");
        assert_eq!(options["storyLength"]["max"], 2000);
        assert_eq!(options["tools"][2]["endpoint"], "/generate_lore");
    }
}
