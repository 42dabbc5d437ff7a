//! Generation request dispatcher
//!
//! Serializes a validated form into its tool's wire body, sends exactly one
//! POST to the generation service and turns whatever comes back into a
//! [`GenerationResult`]. Failures never escape as errors: they become the
//! tool's fallback message, and the reason goes to the logs.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::generation_form::GenerationForm;
use crate::application::ports::outbound::GenerationPort;
use crate::domain::entities::GenerationResult;

pub struct GenerationDispatcher {
    port: Arc<dyn GenerationPort>,
}

impl GenerationDispatcher {
    pub fn new(port: Arc<dyn GenerationPort>) -> Self {
        Self { port }
    }

    /// Send the form to its tool's endpoint
    ///
    /// The form is not re-validated here; that is the caller's job.
    #[instrument(
        skip(self, form),
        fields(tool = F::SPEC.tool.as_str(), request_id = %Uuid::new_v4())
    )]
    pub async fn dispatch<F: GenerationForm>(&self, form: &F) -> GenerationResult {
        let spec = F::SPEC;

        let body = match serde_json::to_string(&form.to_body()) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to serialize generation request");
                return GenerationResult::failure(spec.transport_error_message);
            }
        };

        debug!(endpoint = spec.endpoint, "Dispatching generation request");

        match self.port.post_json(spec.endpoint, body).await {
            Ok(response) => match extract_text(&response, spec.response_key) {
                Some(text) => {
                    info!(chars = text.len(), "Generation succeeded");
                    GenerationResult::success(text)
                }
                None => {
                    warn!(key = spec.response_key, "Generation response has no result text");
                    GenerationResult::failure(spec.missing_result_message)
                }
            },
            Err(e) => {
                error!(error = %e, "Generation request failed");
                GenerationResult::failure(spec.transport_error_message)
            }
        }
    }
}

/// Missing, null, non-string and empty values all count as absent
fn extract_text<'a>(response: &'a Value, key: &str) -> Option<&'a str> {
    response
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
