//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport used by the data loader

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
