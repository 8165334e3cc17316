//! blc - command-line interface for the B compiler.
//!
//! Verbs: `asm` writes `output.asm` only; `compile` additionally
//! assembles and links to `./program`; `run` also executes the result
//! and reports its exit status. `help` and `--version` come with clap.
//!
//! Exit code 0 on success, 1 on any failing stage.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use blc_drv::{
    assemble, link, lower_file, report, run_program, write_asm, Lowered, ASM_FILE, BIN_FILE,
};

/// Compiler for the B language
#[derive(Parser, Debug)]
#[command(name = "blc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiler for the B language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a source file to output.asm
    Asm {
        /// Source file to compile
        file: PathBuf,
    },

    /// Compile, assemble with nasm, and link with ld to ./program
    Compile {
        /// Source file to compile
        file: PathBuf,
    },

    /// Compile, link, then execute ./program and report its status
    Run {
        /// Source file to compile
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report::error(&format!("{e:#}"));
            ExitCode::FAILURE
        },
    }
}

fn dispatch(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Asm { file } => build_asm(&file),
        Commands::Compile { file } => build_binary(&file),
        Commands::Run { file } => {
            build_binary(&file)?;
            let status = run_program()?;
            report::info(&format!("{BIN_FILE} exited with status {status}"));
            Ok(())
        },
    }
}

/// Lowers `file` and writes `output.asm`. The artifact is written even
/// when semantic diagnostics were collected, but the invocation then
/// fails after printing them.
fn build_asm(file: &Path) -> anyhow::Result<()> {
    let Lowered { asm, diagnostics } = lower_file(file)?;
    write_asm(&asm)?;

    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            report::error(&diagnostic.to_string());
        }
        anyhow::bail!("code generation reported {} error(s)", diagnostics.len());
    }

    report::success(&format!("wrote {ASM_FILE}"));
    Ok(())
}

fn build_binary(file: &Path) -> anyhow::Result<()> {
    build_asm(file)?;
    assemble()?;
    link()?;
    report::success(&format!("linked {BIN_FILE}"));
    Ok(())
}
