//! tarn-util - Shared Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the small set of utilities shared by every phase of
//! the Tarn interpreter pipeline:
//!
//! 1. DIAGNOSTICS
//!    The `Handler` collects `Diagnostic`s (level + message) as a phase
//!    runs. The parser never halts on a single syntax error - it reports
//!    into the handler and keeps going, and the driver decides afterwards
//!    whether the program is runnable.
//!
//! 2. HASH MAPS
//!    `FxHashMap`/`FxHashSet` re-exports. Interpreter tables (environment
//!    frames, keyword lookups) are small, hot, and keyed by short strings;
//!    the Fx hasher is the conventional choice for that workload.
//!
//! Diagnostics here carry no source locations: Tarn error messages are
//! content-only, so a diagnostic is fully described by its level and text.

pub mod diagnostic;

pub use diagnostic::{Diagnostic, Handler, Level};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
