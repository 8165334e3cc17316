//! Colored status lines.
//!
//! Everything goes to stdout, errors included; downstream tooling keys
//! on the bracketed prefix rather than the stream.

use colored::Colorize;

pub fn info(message: &str) {
    println!("{} {}", "[INFO]".blue().bold(), message);
}

pub fn success(message: &str) {
    println!("{} {}", "[OK]".green().bold(), message);
}

pub fn error(message: &str) {
    println!("{} {}", "[ERROR]".red().bold(), message);
}
