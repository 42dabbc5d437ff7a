//! Outbound ports - Interfaces that the application requires from external systems

mod file_save_port;
mod generation_port;

pub use file_save_port::{FileSaveError, FileSavePort};
pub use generation_port::{GenerationError, GenerationPort};
