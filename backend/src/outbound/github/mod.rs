//! GitHub outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `CommitSource`
//! port against the GitHub REST API.

mod dto;
mod http_source;

pub use http_source::GithubCommitSource;
