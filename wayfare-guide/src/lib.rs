pub mod client;
pub mod service;

pub use client::{ModelClient, ModelError, ModelResponse};
pub use service::{GuideError, GuideService};
