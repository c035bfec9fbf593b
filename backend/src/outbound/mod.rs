//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! This module follows the hexagonal architecture pattern, providing concrete
//! implementations of domain port traits:
//!
//! - **persistence**: PostgreSQL-backed user repository using Diesel ORM
//! - **memory**: process-local user repository for runs without a database
//! - **hashing**: Argon2id password hashing
//! - **github**: commit listing over the GitHub REST API
//! - **llm**: chat-completion summaries over an OpenAI-compatible API
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod github;
pub mod hashing;
mod http_support;
pub mod llm;
pub mod memory;
pub mod persistence;
