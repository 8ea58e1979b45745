//! Command frame builders for the RL-700S
//!
//! Each function here maps one printer command to its exact wire bytes and
//! returns them as an owned `Vec<u8>`. Builders are pure: nothing is
//! shared between calls, and writing the frame to the device is the
//! caller's business.
//!
//! Multi-byte integers are little-endian. No frame is ever longer than
//! [`MAX_COMMAND_LEN`] bytes, the printer's maximum single transfer.
//!
//! ```
//! use rl700s::command::{self, Modes};
//!
//! assert_eq!(command::initialize(), vec![0x1B, 0x40]);
//! assert_eq!(
//!     command::set_mode(Modes::AUTO_TAPE_CUT | Modes::MIRROR),
//!     vec![0x1B, 0x69, 0x4D, 0xC0],
//! );
//! ```

use bitflags::bitflags;

use crate::{Error, Result};

pub mod info;

/// ESC (Escape) - prefix byte of most command frames.
pub const ESC: u8 = 0x1B;

/// Maximum length of a single command transfer to the printer.
pub const MAX_COMMAND_LEN: usize = 64;

bitflags! {
    /// Flags for the various-mode command ([`set_mode`]).
    ///
    /// Bits 0 through 5 are reserved and always transmitted as zero.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modes: u8 {
        /// Cut the tape automatically after each label.
        const AUTO_TAPE_CUT = 1 << 6;
        /// Mirror the printout.
        const MIRROR = 1 << 7;
    }
}

bitflags! {
    /// Flags for the enhanced-mode command ([`set_enhanced_mode`]).
    ///
    /// Bits 0, 1 and 4 are reserved and always transmitted as zero.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EnhancedModes: u8 {
        /// Half cut (multi half cut); laminated tape only.
        const HALF_CUT = 1 << 2;
        /// No chain printing: feed and cut the last label.
        const NON_CHAIN_PRINT = 1 << 3;
        /// Cut the tail of the last label when chain printing.
        const CUT_ON_CHAIN_PRINT = 1 << 5;
        /// Fine printing (720 x 360 dpi).
        const FINE_PRINT = 1 << 6;
        /// Copy printing: do not clear the buffer between copies.
        const COPY_PRINT = 1 << 7;
    }
}

/// Command interpretation mode of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandMode {
    /// ESC/P escape sequence mode.
    EscP = 0,
    /// Raster graphics mode.
    Raster = 1,
}

impl CommandMode {
    /// The wire byte for this mode.
    pub fn raw(self) -> u8 {
        self as u8
    }
}

/// Raster data compression mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CompressionMode {
    /// Uncompressed raster lines.
    None = 0,
    /// TIFF PackBits run-length compression.
    Tiff = 2,
}

impl CompressionMode {
    /// The wire byte for this mode.
    pub fn raw(self) -> u8 {
        self as u8
    }
}

/// Paper kind for the print information command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Paper {
    Unknown = 0,
    Laminate = 1,
    Lettering = 2,
    NonLaminate = 3,
    /// HG tape.
    Hg = 9,
    /// SZ tape.
    Sz = 16,
}

impl Paper {
    /// The wire byte for this paper kind.
    pub fn raw(self) -> u8 {
        self as u8
    }
}

/// Invalidate: a stream of `count` zero bytes, capped at
/// [`MAX_COMMAND_LEN`].
///
/// Sent ahead of [`initialize`] to flush whatever half-received command
/// the printer may still be chewing on.
pub fn invalidate(count: usize) -> Vec<u8> {
    vec![0x00; count.min(MAX_COMMAND_LEN)]
}

/// Status information request (`ESC i S`).
///
/// The printer answers with a 32-byte status frame; see
/// [`crate::status::Status::parse`].
pub fn status_request() -> Vec<u8> {
    vec![ESC, b'i', b'S']
}

/// Initialize (`ESC @`): reset the printer to its power-on state.
pub fn initialize() -> Vec<u8> {
    vec![ESC, b'@']
}

/// Various mode settings (`ESC i M`).
pub fn set_mode(modes: Modes) -> Vec<u8> {
    vec![ESC, b'i', b'M', modes.bits()]
}

/// Set the feed margin in dots (`ESC i d`), little-endian.
pub fn set_margin(dots: u16) -> Vec<u8> {
    let [low, high] = dots.to_le_bytes();
    vec![ESC, b'i', b'd', low, high]
}

/// Enhanced mode settings (`ESC i K`).
pub fn set_enhanced_mode(modes: EnhancedModes) -> Vec<u8> {
    vec![ESC, b'i', b'K', modes.bits()]
}

/// Switch the device between ESC/P and raster mode (`ESC i a`).
pub fn switch_command_mode(mode: CommandMode) -> Vec<u8> {
    vec![ESC, b'i', b'a', mode.raw()]
}

/// Send one raster line (`G <len low> <len high> <data>`).
///
/// `line` is the uncompressed bit image of one line. Only
/// [`CompressionMode::None`] is implemented end to end; asking for
/// [`CompressionMode::Tiff`] here is a caller error. The line must also
/// leave room for the three header bytes within [`MAX_COMMAND_LEN`].
pub fn send_raster_line(line: &[u8], mode: CompressionMode) -> Result<Vec<u8>> {
    if mode != CompressionMode::None {
        return Err(Error::UnsupportedCompression(mode));
    }
    if line.len() + 3 > MAX_COMMAND_LEN {
        return Err(Error::CommandTooLong(line.len() + 3));
    }
    let [low, high] = (line.len() as u16).to_le_bytes();
    let mut command = vec![b'G', low, high];
    command.extend_from_slice(line);
    Ok(command)
}

/// Send a zero raster line (`Z`): one line with every bit clear.
pub fn send_zero_raster_line() -> Vec<u8> {
    vec![b'Z']
}

/// Start printing, cutting ahead of the cut line (`0x0B`).
pub fn start_print_with_half_cut() -> Vec<u8> {
    vec![0x0B]
}

/// Start printing (`0x0C`).
pub fn start_print() -> Vec<u8> {
    vec![0x0C]
}

/// Start printing and eject the label (`0x1A`).
pub fn start_print_with_evacuation() -> Vec<u8> {
    vec![0x1A]
}

/// Select the raster compression mode (`M <mode>`).
pub fn select_compression_mode(mode: CompressionMode) -> Vec<u8> {
    vec![b'M', mode.raw()]
}
