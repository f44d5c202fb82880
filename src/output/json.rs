//! JSON output renderer for scripted consumers.

use crate::models::RenderedCredentialSet;
use crate::output::ReportRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, set: &RenderedCredentialSet) -> String {
        serde_json::to_string_pretty(set).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CredentialSet, DevAddr, SessionKey};
    use crate::render::{FirmwareStyle, render_credentials};

    #[test]
    fn render_json() {
        let set = CredentialSet {
            dev_addr: DevAddr::new([0x0A, 0xFF, 0x01, 0x23]),
            nwk_skey: SessionKey::new([0x00; 16]),
            app_skey: SessionKey::new([0xFF; 16]),
        };
        let rendered = render_credentials(&set, &FirmwareStyle::default());
        let output = JsonRenderer.render(&rendered);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["dev_addr_hex"], "0x0AFF0123");
        assert_eq!(parsed["dev_addr"]["msb"], "0A FF 01 23");
        assert_eq!(parsed["dev_addr"]["lsb"], "23 01 FF 0A");
        assert!(
            parsed["firmware"]["nwk_skey"]
                .as_str()
                .unwrap()
                .contains("NWKSKEY[16]"),
        );
    }
}
