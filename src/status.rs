//! The 32-byte status frame the RL-700S sends back
//!
//! Every status reply is exactly [`STATUS_SIZE`] bytes and opens with a
//! fixed header: the `0x80` print head mark, the `0x20` size byte, and
//! the model code `"B310"` followed by a NUL. [`Status::parse`] validates
//! that header byte by byte, lifts the interesting fields out of their
//! fixed offsets, and leaves the reserved regions alone.

use bitflags::bitflags;

use crate::{Error, Result};

/// Length of one status frame.
pub const STATUS_SIZE: usize = 32;

/// The fixed frame header: head mark, size, model code, NUL.
const HEADER: [u8; 7] = [0x80, 0x20, b'B', b'3', b'1', b'0', 0x00];

/// Enhanced error code reported when the media ran out.
pub const EERR_MEDIA_FINISHED: u8 = 0x10;

bitflags! {
    /// Error flags spanning the two error information bytes of the
    /// status frame. The low byte holds bits 0 through 7, the high byte
    /// bits 8 through 15; bits 5, 7, and 13 are unused by the device.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ErrorInfo: u16 {
        /// No media loaded.
        const NO_MEDIA = 1 << 0;
        /// End of media; resuming reprints the same page.
        const MEDIA_END = 1 << 1;
        /// Tape cutter jam.
        const CUTTER_JAM = 1 << 2;
        /// Battery running low.
        const LOW_BATTERY = 1 << 3;
        /// Device busy printing or cooling.
        const BUSY = 1 << 4;
        /// High voltage adapter connected.
        const HIGH_VOLTAGE_ADAPTER = 1 << 6;
        /// Media needs changing.
        const MEDIA_CHANGE = 1 << 8;
        /// Expansion buffer full.
        const EXPANSION_BUFFER_FULL = 1 << 9;
        /// Communication error.
        const COMMUNICATION_ERROR = 1 << 10;
        /// Communication buffer full.
        const COMMUNICATION_BUFFER_FULL = 1 << 11;
        /// Cover open.
        const COVER_OPEN = 1 << 12;
        /// Tape head detection error.
        const HEAD_DETECTION_ERROR = 1 << 14;
        /// RFID error.
        const RFID_ERROR = 1 << 15;
    }
}

impl ErrorInfo {
    /// Combine the two error information bytes of a frame, low byte
    /// first. Reserved bits are retained so a raw frame round-trips.
    pub fn from_bytes(low: u8, high: u8) -> Self {
        Self::from_bits_retain(u16::from(low) | u16::from(high) << 8)
    }
}

/// One parsed status frame.
///
/// Media and phase fields are reported as the raw bytes the device sent;
/// constructed only by [`Status::parse`] and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Secondary, device-specific error classification; see
    /// [`EERR_MEDIA_FINISHED`].
    pub enhanced_error_code: u8,
    /// The error flag set from the two error information bytes.
    pub errors: ErrorInfo,
    pub media_width: u8,
    pub media_type: u8,
    pub media_length: u8,
    pub status_type: u8,
    pub phase_type: u8,
    /// Phase number; the one big-endian field of the protocol.
    pub phase_number: u16,
}

impl Status {
    /// Parse one status frame from the front of `input`.
    ///
    /// On success exactly [`STATUS_SIZE`] bytes are consumed and the
    /// slice is advanced past them. On failure the slice is left
    /// untouched and no partial frame exists.
    ///
    /// Validation happens in order, each check its own failure:
    /// at least 32 bytes available, then the `0x80` head mark, the
    /// `0x20` size byte, and the five fixed model code bytes, reported
    /// per offending byte.
    pub fn parse(input: &mut &[u8]) -> Result<Status> {
        let buf = *input;
        if buf.len() < STATUS_SIZE {
            return Err(Error::Truncated(buf.len()));
        }
        if buf[0] != HEADER[0] {
            return Err(Error::MissingHeaderMarker(buf[0]));
        }
        if buf[1] != HEADER[1] {
            return Err(Error::InvalidSize(buf[1]));
        }
        for offset in 2..HEADER.len() {
            if buf[offset] != HEADER[offset] {
                return Err(Error::InvalidValue {
                    offset,
                    expected: HEADER[offset],
                    found: buf[offset],
                });
            }
        }

        let status = Status {
            enhanced_error_code: buf[7],
            errors: ErrorInfo::from_bytes(buf[8], buf[9]),
            media_width: buf[10],
            media_type: buf[11],
            // Bytes 12 through 16 are reserved.
            media_length: buf[17],
            status_type: buf[18],
            phase_type: buf[19],
            phase_number: u16::from_be_bytes([buf[20], buf[21]]),
            // Bytes 22 through 31 are reserved.
        };
        *input = &buf[STATUS_SIZE..];
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// A frame with a valid header and an all-zero payload.
    fn default_frame() -> [u8; STATUS_SIZE] {
        let mut frame = [0u8; STATUS_SIZE];
        frame[..HEADER.len()].copy_from_slice(&HEADER);
        frame
    }

    #[test]
    fn default_frame_parses_to_zeroed_status() {
        let frame = default_frame();
        let mut cursor = &frame[..];
        let status = Status::parse(&mut cursor).unwrap();

        assert!(cursor.is_empty(), "parse must consume all 32 bytes");
        assert_eq!(status.enhanced_error_code, 0);
        assert_eq!(status.errors, ErrorInfo::empty());
        assert_eq!(status.media_width, 0);
        assert_eq!(status.media_type, 0);
        assert_eq!(status.media_length, 0);
        assert_eq!(status.status_type, 0);
        assert_eq!(status.phase_type, 0);
        assert_eq!(status.phase_number, 0);
    }

    #[test]
    fn representative_frame() {
        let mut frame = default_frame();
        frame[7] = EERR_MEDIA_FINISHED;
        frame[8] = 0x02; // error info 1
        frame[9] = 0x10; // error info 2
        frame[10] = 210; // media width
        frame[11] = 150; // media type
        frame[17] = 200; // media length
        frame[18] = 0x06; // status type
        frame[19] = 0x01; // phase type
        frame[20] = 0x82; // phase number, high byte
        frame[21] = 0x7F; // phase number, low byte

        let mut cursor = &frame[..];
        let status = Status::parse(&mut cursor).unwrap();

        assert!(cursor.is_empty());
        assert_eq!(status.enhanced_error_code, EERR_MEDIA_FINISHED);
        assert_eq!(status.errors, ErrorInfo::MEDIA_END | ErrorInfo::COVER_OPEN);
        assert_eq!(status.media_width, 210);
        assert_eq!(status.media_type, 150);
        assert_eq!(status.media_length, 200);
        assert_eq!(status.status_type, 6);
        assert_eq!(status.phase_type, 1);
        assert_eq!(status.phase_number, 0x827F);
    }

    #[test]
    fn parse_advances_the_cursor_past_one_frame() {
        let mut data = default_frame().to_vec();
        data.extend_from_slice(&[0xDE, 0xAD]);
        let mut cursor = &data[..];

        Status::parse(&mut cursor).unwrap();
        assert_eq!(cursor, &[0xDE, 0xAD]);
    }

    #[test]
    fn truncated_frame_is_an_underflow() {
        let frame = default_frame();
        let mut cursor = &frame[..STATUS_SIZE - 1];
        assert_eq!(
            Status::parse(&mut cursor),
            Err(Error::Truncated(STATUS_SIZE - 1))
        );
        // Cursor untouched on failure.
        assert_eq!(cursor.len(), STATUS_SIZE - 1);
    }

    #[test]
    fn corrupt_head_mark_is_rejected() {
        let mut frame = default_frame();
        frame[0] = 0x81;
        let mut cursor = &frame[..];
        assert_eq!(
            Status::parse(&mut cursor),
            Err(Error::MissingHeaderMarker(0x81))
        );
        assert_eq!(cursor.len(), STATUS_SIZE);
    }

    #[test]
    fn corrupt_size_byte_is_rejected() {
        let mut frame = default_frame();
        frame[1] = 0x21;
        let mut cursor = &frame[..];
        assert_eq!(Status::parse(&mut cursor), Err(Error::InvalidSize(0x21)));
    }

    #[test]
    fn corrupt_model_code_reports_the_offending_byte() {
        for offset in 2..HEADER.len() {
            let mut frame = default_frame();
            frame[offset] = 0xFF;
            let mut cursor = &frame[..];
            assert_eq!(
                Status::parse(&mut cursor),
                Err(Error::InvalidValue {
                    offset,
                    expected: HEADER[offset],
                    found: 0xFF,
                })
            );
        }
    }

    #[test]
    fn error_info_from_bytes() {
        assert_eq!(ErrorInfo::from_bytes(0, 0), ErrorInfo::empty());
        assert_eq!(
            ErrorInfo::from_bytes(0x0F, 0),
            ErrorInfo::NO_MEDIA
                | ErrorInfo::MEDIA_END
                | ErrorInfo::CUTTER_JAM
                | ErrorInfo::LOW_BATTERY
        );
        assert_eq!(
            ErrorInfo::from_bytes(0, 0xF0) & ErrorInfo::all(),
            ErrorInfo::COVER_OPEN | ErrorInfo::HEAD_DETECTION_ERROR | ErrorInfo::RFID_ERROR
        );
    }

    #[test]
    fn error_info_retains_reserved_bits() {
        let all = ErrorInfo::from_bytes(0xFF, 0xFF);
        assert_eq!(all.bits(), 0xFFFF);
        assert!(all.contains(ErrorInfo::all()));
    }
}
