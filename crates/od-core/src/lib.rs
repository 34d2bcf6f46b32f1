//! # od-core
//!
//! Core error definitions and text helpers for officedays.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error hierarchy with its `ensure!` macro, and the
//! small parsing / formatting utilities used by the date types and the wire
//! codec.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
