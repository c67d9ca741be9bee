//! Core components of `finboard`.
//!
//! This module contains the foundational building blocks shared by the HTTP layer:
//! - The provider [`ChartClient`] and its builder.
//! - The primary [`FbError`] type.
//! - The [`ChartService`] seam the data route calls through.

/// The provider client (`ChartClient`) and builder.
pub mod client;
/// The primary error type (`FbError`) for the crate.
pub mod error;
/// Service traits for abstracting chart fetching.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{ChartClient, ChartClientBuilder};
pub use error::FbError;
pub use services::{ChartRequest, ChartService, ChartWindow};
