//! Shared test utilities for qnorm integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
