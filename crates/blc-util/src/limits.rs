//! Observable limits of the toolchain.
//!
//! These bounds are part of the compiler's external contract: they shape
//! the token stream, the per-function frame layout, and the emitted
//! runtime buffers.

/// Maximum length of a single lexeme in bytes. Longer identifiers and
/// string literals are truncated without a diagnostic.
pub const MAX_LEXEME_LEN: usize = 255;

/// Maximum number of variables in one function's frame.
pub const MAX_LOCALS: usize = 100;

/// Maximum loop nesting depth tracked for `break`/`continue`.
pub const MAX_LOOP_DEPTH: usize = 50;

/// Bytes reserved in the frame for a declared `string` variable,
/// terminator included.
pub const STRING_BUF_SIZE: u32 = 256;

/// Bytes occupied by a scalar local or one array slot.
pub const SLOT_SIZE: u32 = 8;

/// Fixed per-function stack reservation emitted by the prologue.
pub const FRAME_SCRATCH: u32 = 256;

/// Size of the shared runtime input buffer, terminator included.
pub const INPUT_BUF_SIZE: u32 = 256;
