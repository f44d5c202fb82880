//! lorakeys — LoRaWAN ABP activation credential generator CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use lorakeys::config::Config;
use lorakeys::constants;
use lorakeys::env::Env;
use lorakeys::keygen;
use lorakeys::models::CredentialSet;
use lorakeys::output;
use lorakeys::render;

use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, GenerateArgs, HeaderArgs, ReportFormat};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Header(args) => run_header(args),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}  {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Generate a credential set, print the report, and optionally save it.
fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = load_config()?;

    let credentials = generate_credentials(&args)?;
    let rendered = render::render_credentials(&credentials, &config.firmware.style());

    if !args.quiet && args.format == ReportFormat::Terminal {
        cli::print_banner();
    }
    print!("{}", args.format.render(&rendered));

    // Persistence is optional and never invalidates the printed report.
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| config.output.keys_file.clone());
    let save = match args.save_decision() {
        Some(decision) => decision,
        None => {
            args.format == ReportFormat::Terminal
                && std::io::stdin().is_terminal()
                && confirm_save(&out)?
        }
    };

    if save {
        match output::file::write_keys_file(&out, &rendered) {
            Ok(()) => {
                if !args.quiet {
                    eprintln!("Keys saved to '{}'.", out.display());
                }
            }
            Err(e) => eprintln!("Warning: {e}"),
        }
    }

    Ok(())
}

/// Generate a credential set and write the build header.
///
/// This is the pre-build hook body: a build orchestrator invokes it before
/// compiling firmware so the header is regenerated on every build.
fn run_header(args: HeaderArgs) -> Result<()> {
    let config = load_config()?;

    let credentials = keygen::generate_credentials()?;
    let rendered = render::render_credentials(&credentials, &config.firmware.style());

    if !args.quiet {
        println!("Device Address (DEVADDR): {}", rendered.dev_addr_hex);
        println!("  MSB: {}", rendered.dev_addr.msb);
        println!("Network Session Key (NWKSKEY) - MSB: {}", rendered.nwk_skey.msb);
        println!("Application Session Key (APPSKEY) - MSB: {}", rendered.app_skey.msb);
    }

    let include_dir = args
        .include_dir
        .clone()
        .unwrap_or_else(|| config.output.include_dir.clone());
    let header_path = output::header::write_header(&include_dir, &rendered)
        .context("failed to write build header")?;
    if !args.quiet {
        eprintln!("Keys written to '{}'.", header_path.display());
    }

    // The companion keys file is secondary; its failure is only a warning.
    if !args.no_keys_file {
        let keys_file = args
            .keys_file
            .clone()
            .unwrap_or_else(|| config.output.keys_file.clone());
        match output::file::write_keys_file(&keys_file, &rendered) {
            Ok(()) => {
                if !args.quiet {
                    eprintln!("Registration info saved to '{}'.", keys_file.display());
                }
            }
            Err(e) => eprintln!("Warning: {e}"),
        }
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    let work_dir = std::env::current_dir().ok();
    Config::load(work_dir.as_deref(), &Env::real()).context("failed to load configuration")
}

/// Build the credential set, honouring a pinned device address.
fn generate_credentials(args: &GenerateArgs) -> Result<CredentialSet> {
    let set = match args.dev_addr {
        Some(dev_addr) => CredentialSet {
            dev_addr,
            nwk_skey: keygen::generate_session_key()?,
            app_skey: keygen::generate_session_key()?,
        },
        None => keygen::generate_credentials()?,
    };
    Ok(set)
}

/// Ask the operator whether to write the keys file. Defaults to no.
fn confirm_save(path: &Path) -> Result<bool> {
    eprint!("Save these keys to '{}'? [y/N] ", path.display());
    let _ = std::io::stderr().flush();

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read confirmation")?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
