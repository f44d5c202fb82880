//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Print the tool banner to stderr.
pub fn print_banner() {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        "lorakeys".bold(),
        "· LoRaWAN ABP activation credential generator".dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
