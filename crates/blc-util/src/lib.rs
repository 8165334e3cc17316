//! blc-util - Shared utilities for the B compiler.
//!
//! This crate holds the pieces every phase can see: the observable limits
//! of the toolchain and the diagnostic collector used by code generation.

pub mod diagnostics;
pub mod limits;

pub use diagnostics::{Diagnostic, Handler, Severity};
pub use limits::*;
