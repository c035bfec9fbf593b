//! Driven port for the chat-completion API that writes summaries.

use async_trait::async_trait;

use crate::domain::SummaryPrompt;

use super::define_port_error;

define_port_error! {
    /// Errors raised by summary generator adapters.
    pub enum SummaryGeneratorError {
        /// No API credential is configured.
        NotConfigured => "summary generator is not configured",
        /// The API answered with a non-success status.
        Status { status: u16, message: String } => "summary generator returned status {status}: {message}",
        /// The request could not be delivered or the connection failed.
        Transport { message: String } => "summary generator transport failed: {message}",
        /// The request did not complete within the configured timeout.
        Timeout { message: String } => "summary generator timed out: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "summary generator response was malformed: {message}",
        /// The response carried no completion text.
        EmptyCompletion => "summary generator returned no completion",
    }
}

/// Produces a completion for a prompt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// Return the text of the first completion choice.
    async fn summarize(&self, prompt: &SummaryPrompt) -> Result<String, SummaryGeneratorError>;
}
