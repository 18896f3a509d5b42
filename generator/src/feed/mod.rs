//! Feed module
//!
//! HTML rendering of posts and RSS 2.0 output.

pub mod renderer;
pub mod writer;

pub use renderer::render_item;
pub use writer::{build_channel, write_channel};
