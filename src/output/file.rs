//! Plain-text keys file persister.
//!
//! Writes the same rendered strings the console report showed, verbatim, so
//! the file can be archived or pasted into a registration console later.

use std::path::Path;

use crate::models::RenderedCredentialSet;
use crate::output::PersistError;

/// Write the keys file at `path`, replacing any previous run's output.
pub fn write_keys_file(path: &Path, set: &RenderedCredentialSet) -> Result<(), PersistError> {
    std::fs::write(path, keys_file_contents(set)).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// The exact file contents for a rendered set.
pub fn keys_file_contents(set: &RenderedCredentialSet) -> String {
    let banner = "=".repeat(70);
    let rule = "-".repeat(70);
    let mut out = String::new();

    out.push_str(&format!("{banner}\nLoRaWAN ABP Keys\n{banner}\n\n"));

    out.push_str(&format!("Firmware Format:\n{rule}\n"));
    out.push_str(&format!("{}\n", set.firmware.dev_addr));
    out.push_str(&format!("{}\n", set.firmware.nwk_skey));
    out.push_str(&format!("{}\n\n", set.firmware.app_skey));

    out.push_str(&format!("Registration Console Format:\n{rule}\n"));
    out.push_str(&format!("Device Address: {}\n", set.dev_addr.msb));
    out.push_str(&format!("Network Session Key: {}\n", set.nwk_skey.msb));
    out.push_str(&format!("App Session Key: {}\n", set.app_skey.msb));

    out
}
