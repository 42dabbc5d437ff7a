//! Generated text and the lifecycle of a form around it

/// Outcome of one dispatch: either generated text or a fallback message
///
/// Replaced wholesale on each dispatch, never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
    pub is_error: bool,
}

impl GenerationResult {
    /// The result a freshly initialized form holds
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Where a form is in its submit cycle
///
/// `Idle -> Submitting -> {Completed, Failed}`. Every phase except
/// `Submitting` accepts a new submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    /// Idle, holding generated text
    Completed,
    /// Idle, holding a fallback message
    Failed,
}

impl FormPhase {
    /// Phase a form settles in once the dispatcher resolves
    pub fn settled(result: &GenerationResult) -> Self {
        if result.is_error {
            Self::Failed
        } else {
            Self::Completed
        }
    }

    pub fn is_idle(&self) -> bool {
        !matches!(self, Self::Submitting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}
