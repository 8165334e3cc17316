//! blc-gen - x86-64 code generation for the B language.
//!
//! Walks the AST and emits one NASM translation unit targeting the Linux
//! `_start` ABI: a fixed `.data` block, the hand-written runtime helpers,
//! every user function in source order, and a `_start` that calls `main`
//! and exits with its return value.
//!
//! Expressions are lowered as a stack machine: every expression pushes
//! exactly one 8-byte value. Locals live at fixed offsets below `rbp`,
//! tracked by a flat per-function [`SymbolTable`] with last-match-wins
//! lookup. Control flow uses `.L<n>` labels from one monotonic counter.
//!
//! Semantic problems (unknown variable, `break` outside a loop, a
//! non-literal array size, blown limits) are collected on the shared
//! [`Handler`](blc_util::Handler) and generation continues; the only hard
//! failure is a program without `main`.

pub mod error;
mod expr;
mod generator;
pub mod runtime;
pub mod symbols;


pub use error::{CodeGenError, Result};
pub use generator::Generator;
pub use symbols::{Symbol, SymbolTable};
