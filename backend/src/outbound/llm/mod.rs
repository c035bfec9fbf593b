//! Chat-completion outbound adapter.
//!
//! Implements the `SummaryGenerator` port against an OpenAI-compatible
//! `chat/completions` endpoint.

mod dto;
mod http_generator;

pub use http_generator::ChatCompletionGenerator;
