//! Terminal renderer: the human-readable credential report.
//!
//! Grouped by credential first, then by consumer (firmware copy-paste block,
//! registration-console block). The literal value lines are left unstyled so
//! they can be copied verbatim.

use colored::Colorize;

use crate::models::RenderedCredentialSet;
use crate::output::ReportRenderer;

/// Terminal output renderer with colored section headers.
pub struct TerminalRenderer;

impl ReportRenderer for TerminalRenderer {
    fn render(&self, set: &RenderedCredentialSet) -> String {
        let rule = "──────────────────────────────────────────────────────"
            .dimmed()
            .to_string();
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Device Address (DEVADDR):".bold()));
        output.push_str(&format!("  {} {}\n", "Hex:".cyan(), set.dev_addr_hex));
        output.push_str(&format!("  {} {}\n", "MSB:".cyan(), set.dev_addr.msb));
        output.push_str(&format!("  {} {}\n", "LSB:".cyan(), set.dev_addr.lsb));
        output.push('\n');

        output.push_str(&format!(
            "{}\n",
            "Network Session Key (NWKSKEY) - MSB:".bold()
        ));
        output.push_str(&format!("  {}\n", set.nwk_skey.msb));
        output.push('\n');

        output.push_str(&format!(
            "{}\n",
            "Application Session Key (APPSKEY) - MSB:".bold()
        ));
        output.push_str(&format!("  {}\n", set.app_skey.msb));
        output.push('\n');

        output.push_str(&format!("{rule}\n"));
        output.push_str(&format!(
            "{}\n",
            "For firmware source (copy into your sketch or config header):".bold()
        ));
        output.push_str(&format!("{}\n", set.firmware.dev_addr));
        output.push_str(&format!("{}\n", set.firmware.nwk_skey));
        output.push_str(&format!("{}\n", set.firmware.app_skey));
        output.push('\n');

        output.push_str(&format!("{rule}\n"));
        output.push_str(&format!(
            "{}\n",
            "For the network server registration console:".bold()
        ));
        output.push_str(&format!("Device Address: {}\n", set.dev_addr.msb));
        output.push_str(&format!("Network Session Key: {}\n", set.nwk_skey.msb));
        output.push_str(&format!("App Session Key: {}\n", set.app_skey.msb));

        output
    }
}
