//! qnorm-core — question bank document model and output normalizer.
//!
//! This crate exposes the layers of a single read-transform-write pass as
//! public modules, plus the shared types used across them.
//!
//! # Pipeline
//!
//! ```text
//! Document::load ──► Normalizer::normalize ──► Document::save
//!                            │
//!                            └──► Report (fixes + totals)
//! ```
//!
//! Everything is synchronous. The document is held fully in memory and is
//! written back only after the whole transform has succeeded.

pub mod config;
pub mod document;
pub mod error;
pub mod normalizer;
pub mod types;

pub use document::{Document, OutputStyle};
pub use error::{Error, Result};
pub use normalizer::{element_text, Normalizer, DEFAULT_SEPARATOR};
pub use types::{Fix, Report};
