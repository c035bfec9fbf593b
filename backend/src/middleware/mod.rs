//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns. The
//! only component today is [`Trace`], which assigns each request a trace id.

pub mod trace;

pub use trace::Trace;
