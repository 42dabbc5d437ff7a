//! Application services - Use case implementations
//!
//! Each generation tool runs the same cycle: a [`FormSession`] holds the
//! form, the [`validation`] gate decides whether it may be sent, the
//! [`GenerationDispatcher`] sends it and the [`presenter`] shows the result.

pub mod dispatch_service;
pub mod form_session;
pub mod generation_form;
pub mod presenter;
pub mod theme_service;
pub mod validation;

pub use dispatch_service::GenerationDispatcher;
pub use form_session::{FormError, FormSession, FormSnapshot};
pub use generation_form::{GenerationForm, Tool, ToolSpec};
pub use presenter::ExportError;
pub use theme_service::ThemeService;
