//! Build header emitter.
//!
//! Writes `generated_keys.h` with C-preprocessor macro definitions. The file
//! is meant to be regenerated by a pre-build hook on every build, so it is
//! always overwritten.

use std::path::{Path, PathBuf};

use crate::constants::HEADER_FILENAME;
use crate::models::RenderedCredentialSet;
use crate::output::PersistError;

/// Write the header into `include_dir`, creating the directory if needed.
///
/// Returns the path of the written header.
pub fn write_header(
    include_dir: &Path,
    set: &RenderedCredentialSet,
) -> Result<PathBuf, PersistError> {
    std::fs::create_dir_all(include_dir).map_err(|source| PersistError::CreateDir {
        path: include_dir.to_path_buf(),
        source,
    })?;

    let path = include_dir.join(HEADER_FILENAME);
    std::fs::write(&path, header_contents(set)).map_err(|source| PersistError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// The exact header contents for a rendered set.
pub fn header_contents(set: &RenderedCredentialSet) -> String {
    format!(
        r#"#ifndef GENERATED_KEYS_H
#define GENERATED_KEYS_H

// AUTO-GENERATED FILE - DO NOT EDIT MANUALLY
// Generated during build process
// To regenerate: clean and rebuild the project

// Device Address (4 bytes) - MSB format
#define LORAWAN_DEVADDR {devaddr}

// Network Session Key (16 bytes) - MSB format
#define LORAWAN_NWKSKEY {nwkskey}

// Application Session Key (16 bytes) - MSB format
#define LORAWAN_APPSKEY {appskey}

// For the network server registration console - copy these values:
// Device Address: {addr_msb}
// Network Session Key: {nwk_msb}
// App Session Key: {app_msb}

#endif // GENERATED_KEYS_H
"#,
        devaddr = set.dev_addr_hex,
        nwkskey = set.firmware.nwk_skey_values,
        appskey = set.firmware.app_skey_values,
        addr_msb = set.dev_addr.msb,
        nwk_msb = set.nwk_skey.msb,
        app_msb = set.app_skey.msb,
    )
}
