//! Domain layer - Form state with no I/O
//!
//! This layer contains:
//! - Value Objects: option lists, selections, story length, theme
//! - Entities: the three generation forms and their results

pub mod entities;
pub mod value_objects;
