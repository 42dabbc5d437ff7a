//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP) can
//! serialize/deserialize without pulling serde into the domain model.

mod form;
mod generation_request;

pub use form::*;
pub use generation_request::*;
