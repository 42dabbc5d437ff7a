//! Form session - one form instance and its submit cycle
//!
//! A session exclusively owns its form, the last [`GenerationResult`] and the
//! [`FormPhase`]. The state lock is never held across the network call, so
//! edits and snapshots stay available while a dispatch is in flight. A second
//! submit during that time is refused rather than queued.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use super::dispatch_service::GenerationDispatcher;
use super::generation_form::GenerationForm;
use super::validation::{self, ValidationError};
use crate::domain::entities::{FormPhase, GenerationResult};

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("A generation request is already in flight for this form")]
    Busy,
}

/// Point-in-time copy of a session
#[derive(Debug, Clone)]
pub struct FormSnapshot<F> {
    pub form: F,
    pub result: GenerationResult,
    pub phase: FormPhase,
    pub completed_at: Option<DateTime<Utc>>,
}

impl<F: Default> FormSnapshot<F> {
    fn initial() -> Self {
        Self {
            form: F::default(),
            result: GenerationResult::empty(),
            phase: FormPhase::Idle,
            completed_at: None,
        }
    }
}

pub struct FormSession<F: GenerationForm> {
    dispatcher: Arc<GenerationDispatcher>,
    state: RwLock<FormSnapshot<F>>,
}

impl<F: GenerationForm> FormSession<F> {
    pub fn new(dispatcher: Arc<GenerationDispatcher>) -> Self {
        Self {
            dispatcher,
            state: RwLock::new(FormSnapshot::initial()),
        }
    }

    pub async fn snapshot(&self) -> FormSnapshot<F> {
        self.state.read().await.clone()
    }

    /// Apply a field edit. Allowed in every phase; an in-flight request has
    /// already captured its own copy of the form.
    pub async fn update<R>(&self, edit: impl FnOnce(&mut F) -> R) -> R {
        let mut state = self.state.write().await;
        edit(&mut state.form)
    }

    /// Validate, dispatch and record the result
    ///
    /// The dispatch runs on its own task, so dropping the caller does not
    /// leave the form stuck in `Submitting`.
    #[instrument(skip(self), fields(tool = F::SPEC.tool.as_str()))]
    pub async fn submit(self: &Arc<Self>) -> Result<GenerationResult, FormError> {
        let form = {
            let mut state = self.state.write().await;
            if !state.phase.is_idle() {
                return Err(FormError::Busy);
            }
            if let Err(e) = validation::check(&state.form) {
                info!(missing = ?e.missing_fields, "Submission blocked by validation");
                return Err(e.into());
            }
            state.phase = FormPhase::Submitting;
            state.form.clone()
        };

        let session = Arc::clone(self);
        let task = tokio::spawn(async move {
            let result = session.dispatcher.dispatch(&form).await;
            session.settle(result.clone()).await;
            result
        });

        match task.await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!(error = %e, "Dispatch task did not complete");
                let result = GenerationResult::failure(F::SPEC.transport_error_message);
                self.settle(result.clone()).await;
                Ok(result)
            }
        }
    }

    /// Clear the form and its result back to initial defaults
    pub async fn reset(&self) -> Result<(), FormError> {
        let mut state = self.state.write().await;
        if !state.phase.is_idle() {
            return Err(FormError::Busy);
        }
        state.form.reset();
        state.result = GenerationResult::empty();
        state.phase = FormPhase::Idle;
        state.completed_at = None;
        info!(tool = F::SPEC.tool.as_str(), "Form reset");
        Ok(())
    }

    async fn settle(&self, result: GenerationResult) {
        let mut state = self.state.write().await;
        state.phase = FormPhase::settled(&result);
        state.result = result;
        state.completed_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{GenerationError, GenerationPort};
    use crate::domain::entities::{CharacterForm, StorylineForm};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Returns `{"story": "..."}` once released; counts calls
    struct GatedGeneration {
        gate: Notify,
        gated: bool,
        calls: AtomicUsize,
    }

    impl GatedGeneration {
        fn open() -> Arc<Self> {
            Arc::new(Self {
                gate: Notify::new(),
                gated: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn closed() -> Arc<Self> {
            Arc::new(Self {
                gate: Notify::new(),
                gated: true,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait::async_trait]
    impl GenerationPort for GatedGeneration {
        async fn post_json(&self, _path: &str, _body: String) -> Result<Value, GenerationError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.gated {
                self.gate.notified().await;
            }
            Ok(json!({ "story": format!("Story #{}", call) }))
        }
    }

    fn session_with<F: GenerationForm>(port: Arc<GatedGeneration>) -> Arc<FormSession<F>> {
        Arc::new(FormSession::new(Arc::new(GenerationDispatcher::new(port))))
    }

    #[tokio::test]
    async fn test_submit_records_result() {
        let port = GatedGeneration::open();
        let session = session_with::<StorylineForm>(port.clone());
        session.update(|form| form.set_prompt("A masquerade")).await;

        let result = session.submit().await.unwrap();

        assert_eq!(result, GenerationResult::success("Story #1"));
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.result, result);
        assert_eq!(snapshot.phase, FormPhase::Completed);
        assert!(snapshot.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_validation_failure_never_dispatches() {
        let port = GatedGeneration::open();
        let session = session_with::<CharacterForm>(port.clone());

        let err = session.submit().await.unwrap_err();

        assert!(matches!(err, FormError::Validation(_)));
        assert_eq!(port.calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.snapshot().await.phase, FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_result_is_replaced_on_resubmit() {
        let port = GatedGeneration::open();
        let session = session_with::<StorylineForm>(port.clone());
        session.update(|form| form.set_prompt("A masquerade")).await;

        session.submit().await.unwrap();
        let second = session.submit().await.unwrap();

        assert_eq!(second.text, "Story #2");
        assert_eq!(session.snapshot().await.result.text, "Story #2");
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_refused() {
        let port = GatedGeneration::closed();
        let session = session_with::<StorylineForm>(port.clone());
        session.update(|form| form.set_prompt("A masquerade")).await;

        let first = tokio::spawn({
            let session = Arc::clone(&session);
            async move { session.submit().await }
        });
        while session.snapshot().await.phase != FormPhase::Submitting {
            tokio::task::yield_now().await;
        }

        assert!(matches!(session.submit().await, Err(FormError::Busy)));
        assert!(matches!(session.reset().await, Err(FormError::Busy)));

        // Edits and reads stay available while the request is pending
        session.update(|form| form.set_prompt("A different idea")).await;
        assert_eq!(session.snapshot().await.form.prompt(), "A different idea");

        port.gate.notify_one();
        let result = first.await.unwrap().unwrap();

        assert_eq!(result.text, "Story #1");
        assert_eq!(port.calls.load(Ordering::SeqCst), 1);
        assert!(session.snapshot().await.phase.is_idle());
    }

    #[tokio::test]
    async fn test_reset_clears_form_and_result() {
        let port = GatedGeneration::open();
        let session = session_with::<StorylineForm>(port);
        session
            .update(|form| {
                form.set_prompt("A masquerade");
                form.set_length(1500);
            })
            .await;
        session.submit().await.unwrap();

        session.reset().await.unwrap();

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.form, StorylineForm::default());
        assert!(snapshot.result.is_empty());
        assert!(!snapshot.result.is_error);
        assert_eq!(snapshot.phase, FormPhase::Idle);
        assert!(snapshot.completed_at.is_none());
    }
}
