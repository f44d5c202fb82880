//! App-wide constants.
//!
//! Centralises the tool name, file names, environment variable names, and
//! credential sizes so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "lorakeys";

/// Crate version, reported by the `version` command.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for (set by build.rs).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.lorakeys.toml` in the project root).
pub const CONFIG_FILENAME: &str = ".lorakeys.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "lorakeys";

/// Default plain-text keys file written by `generate --save` and `header`.
pub const KEYS_FILENAME: &str = "lorawan_keys.txt";

/// Name of the generated build header.
pub const HEADER_FILENAME: &str = "generated_keys.h";

/// Default directory the build header is written into.
pub const INCLUDE_DIR: &str = "include";


// ── Credential sizes ────────────────────────────────────────────────

/// Device address length in bytes (DEVADDR is a 32-bit identifier).
pub const DEV_ADDR_LEN: usize = 4;

/// Session key length in bytes (NWKSKEY/APPSKEY are AES-128 keys).
pub const SESSION_KEY_LEN: usize = 16;


// ── Firmware variable names ─────────────────────────────────────────

pub const DEVADDR_NAME: &str = "DEVADDR";
pub const NWKSKEY_NAME: &str = "NWKSKEY";
pub const APPSKEY_NAME: &str = "APPSKEY";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_KEYS_FILE: &str = "LORAKEYS_KEYS_FILE";
pub const ENV_INCLUDE_DIR: &str = "LORAKEYS_INCLUDE_DIR";
