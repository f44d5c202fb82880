//! Clap argument types, validation, and format dispatch.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use lorakeys::models::{DevAddr, RenderedCredentialSet};

/// LoRaWAN ABP activation credential generator.
#[derive(Parser, Debug)]
#[command(name = "lorakeys", version = lorakeys::constants::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate a fresh credential set and print the report.
    Generate(GenerateArgs),

    /// Generate credentials and write the build header (pre-build hook body).
    Header(HeaderArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Write the keys file without prompting.
    #[arg(long, default_value_t = false, conflicts_with = "no_save")]
    pub save: bool,

    /// Skip the keys file (and the prompt) entirely.
    #[arg(long, default_value_t = false)]
    pub no_save: bool,

    /// Path of the keys file (default: lorawan_keys.txt, or config).
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Pin a network-assigned device address (hex, e.g. 26011BDA or
    /// 0x26011BDA) instead of generating a random one. Session keys are
    /// still freshly generated.
    #[arg(long)]
    pub dev_addr: Option<DevAddr>,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: ReportFormat,

    /// Suppress the banner and informational messages.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// Resolve the save decision from the flags.
    ///
    /// `Some(true)` / `Some(false)` when a flag decided it; `None` means no
    /// flag was given and the caller should ask the operator.
    pub fn save_decision(&self) -> Option<bool> {
        if self.save {
            Some(true)
        } else if self.no_save {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the `header` subcommand.
#[derive(Parser, Debug)]
pub struct HeaderArgs {
    /// Directory the header is written into (default: include/, or config).
    #[arg(long)]
    pub include_dir: Option<PathBuf>,

    /// Path of the companion keys file (default: lorawan_keys.txt, or config).
    #[arg(long)]
    pub keys_file: Option<PathBuf>,

    /// Skip writing the companion keys file.
    #[arg(long, default_value_t = false)]
    pub no_keys_file: bool,

    /// Suppress informational output.
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

/// Report format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ReportFormat {
    Terminal,
    Json,
}

impl ReportFormat {
    /// Render the credential set using the renderer for this format.
    pub fn render(&self, set: &RenderedCredentialSet) -> String {
        use lorakeys::output::ReportRenderer;
        match self {
            ReportFormat::Terminal => lorakeys::output::terminal::TerminalRenderer.render(set),
            ReportFormat::Json => lorakeys::output::json::JsonRenderer.render(set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn generate_defaults() {
        let cli = parse(&["lorakeys", "generate"]);
        match cli.command {
            Command::Generate(args) => {
                assert!(!args.save);
                assert!(!args.no_save);
                assert!(args.out.is_none());
                assert!(args.dev_addr.is_none());
                assert_eq!(args.format, ReportFormat::Terminal);
                assert!(!args.quiet);
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn save_conflicts_with_no_save() {
        let result = Cli::try_parse_from(["lorakeys", "generate", "--save", "--no-save"]);
        assert!(result.is_err());
    }

    #[test]
    fn save_decision_from_flags() {
        let save = |argv: &[&str]| match parse(argv).command {
            Command::Generate(args) => args.save_decision(),
            _ => panic!("expected Generate command"),
        };
        assert_eq!(save(&["lorakeys", "generate", "--save"]), Some(true));
        assert_eq!(save(&["lorakeys", "generate", "--no-save"]), Some(false));
        assert_eq!(save(&["lorakeys", "generate"]), None);
    }

    #[test]
    fn dev_addr_parses_hex() {
        let cli = parse(&["lorakeys", "generate", "--dev-addr", "0x26011BDA"]);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.dev_addr.unwrap().to_u32(), 0x26011BDA);
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn dev_addr_rejects_bad_hex() {
        let result = Cli::try_parse_from(["lorakeys", "generate", "--dev-addr", "nothex"]);
        assert!(result.is_err());
    }

    #[test]
    fn json_format_parsed() {
        let cli = parse(&["lorakeys", "generate", "--format", "json"]);
        match cli.command {
            Command::Generate(args) => assert_eq!(args.format, ReportFormat::Json),
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn header_defaults() {
        let cli = parse(&["lorakeys", "header"]);
        match cli.command {
            Command::Header(args) => {
                assert!(args.include_dir.is_none());
                assert!(args.keys_file.is_none());
                assert!(!args.no_keys_file);
                assert!(!args.quiet);
            }
            _ => panic!("expected Header command"),
        }
    }

    #[test]
    fn header_accepts_paths() {
        let cli = parse(&[
            "lorakeys",
            "header",
            "--include-dir",
            "gen/include",
            "--keys-file",
            "gen/keys.txt",
        ]);
        match cli.command {
            Command::Header(args) => {
                assert_eq!(args.include_dir.unwrap(), PathBuf::from("gen/include"));
                assert_eq!(args.keys_file.unwrap(), PathBuf::from("gen/keys.txt"));
            }
            _ => panic!("expected Header command"),
        }
    }

    #[test]
    fn quiet_flag_parsed_short() {
        let cli = parse(&["lorakeys", "generate", "-q"]);
        match cli.command {
            Command::Generate(args) => assert!(args.quiet),
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn format_render_dispatches() {
        use lorakeys::models::{CredentialSet, DevAddr, SessionKey};
        use lorakeys::render::{FirmwareStyle, render_credentials};

        let set = CredentialSet {
            dev_addr: DevAddr::new([0x0A, 0xFF, 0x01, 0x23]),
            nwk_skey: SessionKey::new([0x00; 16]),
            app_skey: SessionKey::new([0xFF; 16]),
        };
        let rendered = render_credentials(&set, &FirmwareStyle::default());

        let terminal = ReportFormat::Terminal.render(&rendered);
        assert!(terminal.contains("0x0AFF0123"));

        let json = ReportFormat::Json.render(&rendered);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["dev_addr_hex"], "0x0AFF0123");
    }
}
