//! Shared building blocks for `reconr`.
//!
//! Everything here is free of process and filesystem side effects so that the
//! `core` pipeline and the `cli` front end can agree on one vocabulary.

pub mod config;
pub mod domain;
pub mod error;
pub mod log;

#[doc(hidden)]
pub use tracing as __tracing;
