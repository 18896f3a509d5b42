//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod file;
pub mod x;

pub use file::TimelineFile;
pub use x::XApiClient;
