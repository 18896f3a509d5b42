//! X API adapter

mod client;

pub use client::XApiClient;
