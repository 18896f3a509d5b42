//! Saved timeline adapter

mod timeline_file;

pub use timeline_file::TimelineFile;
