//! # reconr core
//!
//! The scan is a strictly forward pipeline of four stages:
//!
//! * **[`workspace`]**: prepares the per-domain output directory.
//! * **[`enumerate`]**: runs the subdomain discovery tools, best effort.
//! * **[`combine`]**: merges every text artifact into one deduplicated host list.
//! * **[`liveness`]**: hands the host list to the liveness checker, fail fast.
//!
//! [`pipeline`] strings the stages together. External programs are only ever
//! reached through the [`process::CommandRunner`] port.

pub mod combine;
pub mod enumerate;
pub mod liveness;
pub mod pipeline;
pub mod process;
pub mod workspace;
