//! Multi-format credential rendering.
//!
//! Pure functions, no I/O, no hidden state: same bytes in, same strings out.
//! The exact spacing, casing, zero-padding, and byte order are load-bearing;
//! the output is copy-pasted into firmware source and a network-server
//! registration console.

pub mod c_array;

pub use c_array::{array_declaration, braced_literal};

use crate::constants::{APPSKEY_NAME, DEVADDR_NAME, NWKSKEY_NAME};
use crate::models::{
    CredentialSet, FirmwareBlock, RenderedCredential, RenderedCredentialSet,
};

/// MSB-first hex string: two uppercase digits per byte, space separated.
///
/// An empty sequence renders as an empty string.
pub fn hex_msb(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// LSB-first hex string: same formatting as [`hex_msb`], byte order reversed.
pub fn hex_lsb(bytes: &[u8]) -> String {
    bytes
        .iter()
        .rev()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Packed device address: `0x` followed by exactly 8 uppercase hex digits.
pub fn packed_hex(addr: u32) -> String {
    format!("0x{addr:08X}")
}

/// Parse an MSB-first hex string back into bytes.
///
/// Inverse of [`hex_msb`]: whitespace between byte pairs is ignored, so
/// `"0A FF 01 23"` and `"0AFF0123"` decode to the same sequence.
pub fn parse_hex_msb(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let compact: String = s.split_whitespace().collect();
    hex::decode(compact)
}

/// Declaration prefixes for the firmware copy-paste block.
///
/// The tokens before the variable name are caller-supplied so the same
/// renderer serves different firmware stacks (`u1_t` vs `uint8_t`, with or
/// without `PROGMEM`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareStyle {
    /// Tokens preceding a key array name, e.g. `static const PROGMEM u1_t`.
    pub array_decl: String,
    /// Tokens preceding the packed device address name, e.g. `static const u4_t`.
    pub devaddr_decl: String,
}

impl Default for FirmwareStyle {
    fn default() -> Self {
        Self {
            array_decl: "static const PROGMEM u1_t".to_string(),
            devaddr_decl: "static const u4_t".to_string(),
        }
    }
}

/// Produce every representation of a credential set in one pass.
pub fn render_credentials(set: &CredentialSet, style: &FirmwareStyle) -> RenderedCredentialSet {
    let addr = set.dev_addr.as_bytes();
    let nwk = set.nwk_skey.as_bytes();
    let app = set.app_skey.as_bytes();

    RenderedCredentialSet {
        dev_addr_hex: packed_hex(set.dev_addr.to_u32()),
        dev_addr: RenderedCredential {
            msb: hex_msb(addr),
            lsb: hex_lsb(addr),
        },
        nwk_skey: RenderedCredential {
            msb: hex_msb(nwk),
            lsb: hex_lsb(nwk),
        },
        app_skey: RenderedCredential {
            msb: hex_msb(app),
            lsb: hex_lsb(app),
        },
        firmware: FirmwareBlock {
            dev_addr: format!(
                "{} {} = {};",
                style.devaddr_decl,
                DEVADDR_NAME,
                packed_hex(set.dev_addr.to_u32()),
            ),
            nwk_skey: array_declaration(&style.array_decl, NWKSKEY_NAME, nwk),
            app_skey: array_declaration(&style.array_decl, APPSKEY_NAME, app),
            nwk_skey_values: braced_literal(nwk),
            app_skey_values: braced_literal(app),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DevAddr, SessionKey};
    use pretty_assertions::assert_eq;

    fn sample_set() -> CredentialSet {
        CredentialSet {
            dev_addr: DevAddr::new([0x0A, 0xFF, 0x01, 0x23]),
            nwk_skey: SessionKey::new([0x00; 16]),
            app_skey: SessionKey::new([
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
                0x0E, 0x0F, 0x10,
            ]),
        }
    }

    #[test]
    fn hex_msb_scenario() {
        assert_eq!(hex_msb(&[0x0A, 0xFF, 0x01, 0x23]), "0A FF 01 23");
    }

    #[test]
    fn hex_lsb_scenario() {
        assert_eq!(hex_lsb(&[0x0A, 0xFF, 0x01, 0x23]), "23 01 FF 0A");
    }

    #[test]
    fn hex_zero_pads_small_values() {
        assert_eq!(hex_msb(&[0x05]), "05");
        assert_eq!(hex_lsb(&[0x05]), "05");
    }

    #[test]
    fn hex_empty_sequence() {
        assert_eq!(hex_msb(&[]), "");
        assert_eq!(hex_lsb(&[]), "");
    }

    #[test]
    fn msb_reversed_equals_lsb() {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x7F];
        let msb_str = hex_msb(&bytes);
        let lsb_str = hex_lsb(&bytes);
        let msb: Vec<&str> = msb_str.split(' ').collect();
        let lsb: Vec<&str> = lsb_str.split(' ').collect();
        let reversed: Vec<&str> = msb.into_iter().rev().collect();
        assert_eq!(reversed, lsb);
    }

    #[test]
    fn packed_hex_scenario() {
        assert_eq!(packed_hex(0x0AFF_0123), "0x0AFF0123");
    }

    #[test]
    fn packed_hex_zero_pads() {
        assert_eq!(packed_hex(0x5), "0x00000005");
    }

    #[test]
    fn parse_round_trips_msb() {
        let bytes = vec![0x0A, 0xFF, 0x01, 0x23, 0x00, 0x80];
        assert_eq!(parse_hex_msb(&hex_msb(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn parse_accepts_contiguous_hex() {
        assert_eq!(
            parse_hex_msb("0AFF0123").unwrap(),
            vec![0x0A, 0xFF, 0x01, 0x23],
        );
    }

    #[test]
    fn parse_rejects_non_hex() {
        assert!(parse_hex_msb("0A ZZ").is_err());
    }

    #[test]
    fn rendering_is_deterministic() {
        let set = sample_set();
        let style = FirmwareStyle::default();
        assert_eq!(
            render_credentials(&set, &style),
            render_credentials(&set, &style),
        );
    }

    #[test]
    fn render_full_set() {
        let rendered = render_credentials(&sample_set(), &FirmwareStyle::default());
        assert_eq!(rendered.dev_addr_hex, "0x0AFF0123");
        assert_eq!(rendered.dev_addr.msb, "0A FF 01 23");
        assert_eq!(rendered.dev_addr.lsb, "23 01 FF 0A");
        assert_eq!(
            rendered.firmware.dev_addr,
            "static const u4_t DEVADDR = 0x0AFF0123;",
        );
        assert!(
            rendered
                .firmware
                .nwk_skey
                .starts_with("static const PROGMEM u1_t NWKSKEY[16] = {"),
        );
        assert!(rendered.firmware.app_skey.ends_with("};"));
    }

    #[test]
    fn render_all_zero_key() {
        let rendered = render_credentials(&sample_set(), &FirmwareStyle::default());
        let entries: Vec<&str> = rendered
            .firmware
            .nwk_skey_values
            .trim_start_matches("{ ")
            .trim_end_matches(" }")
            .split(", ")
            .collect();
        assert_eq!(entries.len(), 16);
        assert!(entries.iter().all(|e| *e == "0x00"));
    }

    #[test]
    fn render_honours_custom_style() {
        let style = FirmwareStyle {
            array_decl: "const uint8_t".to_string(),
            devaddr_decl: "const uint32_t".to_string(),
        };
        let rendered = render_credentials(&sample_set(), &style);
        assert_eq!(
            rendered.firmware.dev_addr,
            "const uint32_t DEVADDR = 0x0AFF0123;",
        );
        assert!(rendered.firmware.nwk_skey.starts_with("const uint8_t NWKSKEY[16]"));
    }
}
