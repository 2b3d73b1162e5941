//! Gemini `generateContent` over REST.

mod client;
mod dto;

pub use client::{api_key_from_env, GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
