//! qnorm — question bank output normalizer.
//!
//! Rewrites every array-valued `examples[*].output` field of a question file
//! (`Questions.json` by default) as a comma-joined string, then writes the
//! file back. The core layers live in `qnorm-core` and are re-exported here
//! so that integration tests and the binary share one import path.
//!
//! # Pipeline
//!
//! ```text
//! Config ──► app::Settings ──► app::run
//!                                 │
//!            Document::load ──► Normalizer ──► Document::save
//!                                 │
//!                                 └──► operator report (stdout)
//! ```

pub mod app;

pub use qnorm_core::{config, document, error, normalizer, types};
pub use qnorm_core::{Document, Error, Fix, Normalizer, OutputStyle, Report};
