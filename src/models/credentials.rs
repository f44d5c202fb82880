//! ABP credential value objects.
//!
//! `DevAddr` and `SessionKey` are immutable fixed-length byte sequences;
//! `RenderedCredentialSet` is purely derived data, recomputed fresh each run
//! and never mutated after construction.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEV_ADDR_LEN, SESSION_KEY_LEN};
use crate::render;

/// 4-byte LoRaWAN device address.
///
/// The byte form and the packed big-endian `u32` form are always mutually
/// consistent: [`DevAddr::to_u32`] recomputes from the bytes on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevAddr([u8; DEV_ADDR_LEN]);

impl DevAddr {
    pub fn new(bytes: [u8; DEV_ADDR_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DEV_ADDR_LEN] {
        &self.0
    }

    /// Pack the bytes as a big-endian 32-bit integer (MSB first).
    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for DevAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render::packed_hex(self.to_u32()))
    }
}

impl FromStr for DevAddr {
    type Err = String;

    /// Parse a device address from hex.
    ///
    /// Accepts `26011BDA`, `0x26011BDA`, and the space-separated console
    /// form `26 01 1B DA`. Anything that does not decode to exactly 4 bytes
    /// is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let bytes =
            render::parse_hex_msb(digits).map_err(|e| format!("invalid hex device address: {e}"))?;
        let bytes: [u8; DEV_ADDR_LEN] = bytes.as_slice().try_into().map_err(|_| {
            format!(
                "device address must be exactly {DEV_ADDR_LEN} bytes, got {}",
                bytes.len(),
            )
        })?;
        Ok(Self(bytes))
    }
}

/// 16-byte AES-128 session key (NWKSKEY or APPSKEY).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKey([u8; SESSION_KEY_LEN]);

impl SessionKey {
    pub fn new(bytes: [u8; SESSION_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SESSION_KEY_LEN] {
        &self.0
    }
}

/// One run's worth of ABP activation material.
///
/// No mutual-distinctness check is performed between the three values;
/// collision probability at these sizes is negligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSet {
    pub dev_addr: DevAddr,
    pub nwk_skey: SessionKey,
    pub app_skey: SessionKey,
}

/// MSB and LSB hex renderings of one byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCredential {
    pub msb: String,
    pub lsb: String,
}

/// Copy-paste firmware declarations, plus the bare initializer fragments the
/// header emitter splices into its macros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirmwareBlock {
    pub dev_addr: String,
    pub nwk_skey: String,
    pub app_skey: String,
    pub nwk_skey_values: String,
    pub app_skey_values: String,
}

/// Every textual rendering the downstream consumers need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCredentialSet {
    /// Packed device address, `0x` + 8 uppercase hex digits.
    pub dev_addr_hex: String,
    pub dev_addr: RenderedCredential,
    pub nwk_skey: RenderedCredential,
    pub app_skey: RenderedCredential,
    pub firmware: FirmwareBlock,
}
