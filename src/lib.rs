//! Byte-level codec for the Brother RL-700S thermal label printer
//!
//! The RL-700S speaks a raster protocol close to the one described in the
//! published Brother QL series command references: short escape-sequence
//! command frames go out, fixed 32-byte status frames come back, and raster
//! line data may be run-length compressed with TIFF PackBits before it is
//! framed.
//!
//! This crate covers exactly that byte layer and nothing else:
//!
//! * [`command`] — builders producing the exact bytes of each command frame
//! * [`status`] — parser for the 32-byte status reply
//! * [`packbits`] — PackBits compressor for one 48-byte raster line
//!
//! All three are pure functions over their inputs. Moving the bytes over
//! USB or serial, retrying, and deciding *which* commands to send belong to
//! the caller.
//!
//! ```
//! use rl700s::{command, packbits, status};
//!
//! // Wake the printer up and ask what it thinks of the world
//! let mut out = Vec::new();
//! out.extend(command::invalidate(64));
//! out.extend(command::initialize());
//! out.extend(command::status_request());
//! // ...write `out` to the device, read 32 bytes back...
//! # let reply = {
//! #     let mut frame = [0u8; status::STATUS_SIZE];
//! #     frame[..7].copy_from_slice(&[0x80, 0x20, b'B', b'3', b'1', b'0', 0x00]);
//! #     frame
//! # };
//! let mut cursor = &reply[..];
//! let status = status::Status::parse(&mut cursor)?;
//! assert!(status.errors.is_empty());
//!
//! // Compress a blank raster line: 48 zero bytes pack down to two
//! let line = [0u8; packbits::LINE_BYTES];
//! assert_eq!(packbits::pack(&line).len(), 2);
//! # Ok::<(), rl700s::Error>(())
//! ```

use thiserror::Error;

pub mod command;
pub mod packbits;
pub mod status;

/// Everything that can go wrong while encoding a command or decoding a
/// status frame.
///
/// PackBits has no error path: its overflow condition is a defined
/// fallback, not a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A raster line send was requested with a compression mode the
    /// encoder does not implement. Only uncompressed lines can be framed.
    #[error("unsupported compression mode: {0:?}")]
    UnsupportedCompression(command::CompressionMode),
    /// The encoded command would not fit in a single 64-byte transfer.
    #[error("command of {0} bytes exceeds the 64 byte transfer limit")]
    CommandTooLong(usize),
    /// Fewer than 32 bytes were available to decode a status frame.
    #[error("status frame truncated: need 32 bytes, got {0}")]
    Truncated(usize),
    /// Status byte 0 was not the 0x80 print head mark.
    #[error("missing header marker: expected 0x80, found {0:#04x}")]
    MissingHeaderMarker(u8),
    /// Status byte 1 was not the fixed 0x20 size byte.
    #[error("invalid status size byte: expected 0x20, found {0:#04x}")]
    InvalidSize(u8),
    /// One of the fixed model code bytes at offsets 2 through 6 was wrong.
    #[error("invalid status value at byte {offset}: expected {expected:#04x}, found {found:#04x}")]
    InvalidValue {
        offset: usize,
        expected: u8,
        found: u8,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
