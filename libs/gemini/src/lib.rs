//! Minimal client for the Gemini `generateContent` endpoint.

pub mod error;
pub mod models;

pub use error::GeminiError;
pub use models::Models;
