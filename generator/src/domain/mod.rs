//! Domain layer
//!
//! Contains the data model with no external dependencies.
//! - `entities`: Posts, media and feed items
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
