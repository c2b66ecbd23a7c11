//! Core components of the `edgar-insiders` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EdgarClient`] and its builder.
//! - The primary [`EdgarError`] type.
//! - The [`ReportSource`] seam the batch driver fetches through.

/// The main client (`EdgarClient`), builder, and endpoint defaults.
pub mod client;
/// The primary error type (`EdgarError`) for the crate.
pub mod error;
/// Service traits for abstracting report retrieval.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub use client::{EdgarClient, EdgarClientBuilder, PAGE_SIZE};
pub use error::EdgarError;
pub use services::ReportSource;
