//! Chat proxy in front of the generative-language API.
//!
//! Stateless per request: the user's question is wrapped in the fixed
//! health-assistant prompt, sent upstream, and the first generated text
//! block comes back as the reply. Upstream trouble turns into the canned
//! apology, never a retry.

pub mod client;
pub mod prompt;
pub mod routes;

pub use client::{ChatClient, ChatError};

#[cfg(test)]
mod tests;
