//! blc-drv - Driver for the B compiler.
//!
//! Orchestrates the pipeline: read the source, lex and parse it, resolve
//! imports, generate NASM text, and hand the artifact to the external
//! toolchain (`nasm` to assemble, `ld` to link). Every stage is a plain
//! function so the whole pipeline is usable without the CLI.
//!
//! Artifact names are fixed: the assembly goes to `output.asm`, the
//! object to `output.o`, and the executable to `./program`, all relative
//! to the working directory.
//!
//! Error policy: lex/parse/import problems and a missing `main` are
//! returned as errors with the failing stage in their context chain.
//! Codegen-time semantic diagnostics ride along in [`Lowered`]; the
//! caller decides how loudly to fail (the CLI prints them with an
//! `[ERROR]` prefix and exits 1, after still writing the artifact).

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use blc_gen::Generator;
use blc_par::resolve_imports;
use blc_util::{Diagnostic, Handler};

pub mod report;

/// Assembly artifact, NASM syntax.
pub const ASM_FILE: &str = "output.asm";

/// Object artifact produced by `nasm -f elf64`.
pub const OBJ_FILE: &str = "output.o";

/// Linked executable.
pub const BIN_FILE: &str = "./program";

/// Result of lowering one source file to assembly.
#[derive(Debug)]
pub struct Lowered {
    /// The complete NASM translation unit.
    pub asm: String,

    /// Semantic diagnostics collected during generation. When non-empty
    /// the assembly is suspect (possibly incomplete) even though it was
    /// produced.
    pub diagnostics: Vec<Diagnostic>,
}

/// Lowers the source file at `path` to assembly text. The file is read
/// as raw bytes; source encoding is not the compiler's business.
pub fn lower_file(path: &Path) -> Result<Lowered> {
    let source =
        fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    lower_source(&source)
}

/// Lowers a source buffer: parse, resolve imports, generate.
pub fn lower_source(source: &(impl AsRef<[u8]> + ?Sized)) -> Result<Lowered> {
    let mut program = blc_par::parse(source).context("parsing failed")?;
    resolve_imports(&mut program).context("import resolution failed")?;

    let mut handler = Handler::new();
    let asm = Generator::new(&mut handler)
        .generate(&program)
        .context("code generation failed")?;

    Ok(Lowered {
        asm,
        diagnostics: handler.diagnostics().to_vec(),
    })
}

/// Writes the assembly artifact to [`ASM_FILE`].
pub fn write_asm(asm: &str) -> Result<()> {
    fs::write(ASM_FILE, asm).with_context(|| format!("cannot write {ASM_FILE}"))
}

/// Assembles [`ASM_FILE`] into [`OBJ_FILE`].
pub fn assemble() -> Result<()> {
    run_tool("nasm", &["-f", "elf64", ASM_FILE, "-o", OBJ_FILE])
}

/// Links [`OBJ_FILE`] into [`BIN_FILE`].
pub fn link() -> Result<()> {
    run_tool("ld", &[OBJ_FILE, "-o", BIN_FILE])
}

/// Runs the linked program and returns its exit code.
pub fn run_program() -> Result<i32> {
    let status = Command::new(BIN_FILE)
        .status()
        .with_context(|| format!("cannot launch {BIN_FILE}"))?;
    Ok(status.code().unwrap_or(-1))
}

fn run_tool(tool: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(tool)
        .args(args)
        .status()
        .with_context(|| format!("cannot launch {tool}"))?;
    if !status.success() {
        bail!("{tool} failed with {status}");
    }
    Ok(())
}
