//! Adapters for the task board ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskRepository`]: Thread-safe in-memory task store
//! - [`gemini::GeminiTransport`]: HTTP transport for the Generative Language
//!   `generateContent` API

pub mod gemini;
pub mod memory;
