//! # alm-core
//!
//! Core types and error definitions for almanac.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: primitive type aliases and the error hierarchy together
//! with the `ensure!` / `fail!` macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A proleptic Gregorian year (astronomical numbering, year 0 exists).
pub type Year = i32;

/// Days since 1970-01-01 in the proleptic Gregorian calendar.
pub type DayNumber = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
