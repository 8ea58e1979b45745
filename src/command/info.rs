//! The print information command (`ESC i c`)
//!
//! Unlike the other commands this one carries a handful of independently
//! optional fields, so it is modeled as an options struct with a
//! `serialize` method rather than a long argument list. A field left as
//! `None` is encoded as zero and masked out, telling the printer to keep
//! its current setting.

use super::{Paper, ESC};

/// Parameters of the print information command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Info {
    /// Paper kind to select, or `None` to leave unchanged.
    pub paper: Option<Paper>,
    /// Paper width, or `None` to leave unchanged.
    pub width: Option<u8>,
    /// Paper length, or `None` to leave unchanged.
    pub length: Option<u8>,
    /// Let the printer run its own error recovery.
    pub enable_recovery: bool,
    /// Print with reduced energy.
    pub low_power_print: bool,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            paper: None,
            width: None,
            length: None,
            enable_recovery: true,
            low_power_print: false,
        }
    }
}

impl Info {
    // Validity mask bits: which optional fields carry a value.
    const PAPER_KIND: u8 = 1 << 1;
    const PAPER_WIDTH: u8 = 1 << 2;
    const PAPER_LENGTH: u8 = 1 << 3;
    // Bits 4 through 7 are all set when recovery is enabled.
    const RECOVERY: u8 = 0xF0;

    /// Encode the command frame: `ESC i c` followed by the validity
    /// mask, paper kind, width, length and the low power flag.
    pub fn serialize(&self) -> Vec<u8> {
        let mask = self.paper.map_or(0, |_| Self::PAPER_KIND)
            | self.width.map_or(0, |_| Self::PAPER_WIDTH)
            | self.length.map_or(0, |_| Self::PAPER_LENGTH)
            | if self.enable_recovery { Self::RECOVERY } else { 0 };
        vec![
            ESC,
            b'i',
            b'c',
            mask,
            self.paper.map_or(0, Paper::raw),
            self.width.unwrap_or(0),
            self.length.unwrap_or(0),
            self.low_power_print as u8,
        ]
    }
}
