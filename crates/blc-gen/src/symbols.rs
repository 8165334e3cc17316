//! Per-function symbol table.
//!
//! A flat list of frame slots. Offsets are positive distances below
//! `rbp`: a symbol with offset `n` is addressed as `[rbp-n]`. For arrays
//! the recorded offset is the *highest* one, so slot 0 sits at
//! `[rbp-offset]` and slot `k` at `[rbp-offset+8k]`.
//!
//! Lookup scans from the end so the most recent declaration of a name
//! wins, which is what gives shadowing its meaning.

use blc_par::TypeName;
use blc_util::{SLOT_SIZE, STRING_BUF_SIZE};

/// One declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    /// Distance below `rbp` in bytes.
    pub offset: u32,
    pub ty: TypeName,
    /// Number of 8-byte slots; 1 for scalars.
    pub slots: u32,
}

/// Flat symbol table for the function currently being generated.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    frame_size: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every symbol; called at each function boundary.
    pub fn clear(&mut self) {
        self.symbols.clear();
        self.frame_size = 0;
    }

    /// Declares a scalar. A declared `string` reserves a 256-byte
    /// in-frame buffer; everything else takes one slot.
    pub fn declare_scalar(&mut self, name: &str, ty: TypeName) -> u32 {
        let size = if ty == TypeName::Str {
            STRING_BUF_SIZE
        } else {
            SLOT_SIZE
        };
        self.push(name, ty, 1, size)
    }

    /// Declares an array of `slots` 8-byte elements.
    pub fn declare_array(&mut self, name: &str, ty: TypeName, slots: u32) -> u32 {
        self.push(name, ty, slots, slots * SLOT_SIZE)
    }

    fn push(&mut self, name: &str, ty: TypeName, slots: u32, size: u32) -> u32 {
        self.frame_size += size;
        let offset = self.frame_size;
        self.symbols.push(Symbol {
            name: name.to_string(),
            offset,
            ty,
            slots,
        });
        offset
    }

    /// Finds the most recent declaration of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().rev().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Total bytes declared so far, tracked separately from the fixed
    /// scratch reservation the prologue makes.
    pub fn frame_size(&self) -> u32 {
        self.frame_size
    }
}
