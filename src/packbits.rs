//! TIFF PackBits compression for raster line data
//!
//! The RL-700S accepts raster lines either uncompressed or run-length
//! compressed in the TIFF PackBits scheme: the stream alternates spans,
//! each introduced by a signed control byte. A control byte `v <= 0`
//! means "the next byte repeats `1 - v` times"; `v >= 0` means "the next
//! `v + 1` bytes are literal". Storing `count - 1` lets a single signed
//! byte cover span lengths 1 through 128.
//!
//! One raster line on this device is always [`LINE_BYTES`] bytes wide, so
//! [`pack`] normalizes its input to that width before scanning. The output
//! never exceeds [`MAX_PACKED_BYTES`]: whenever compression would grow the
//! data past the input width, the whole line is emitted as a single
//! literal span instead, which costs exactly one control byte of overhead.
//!
//! Decompression is not implemented; the printer consumes the compressed
//! bytes and never echoes them back.

/// Byte width of one raster line.
pub const LINE_BYTES: usize = 48;

/// Worst-case output of [`pack`]: the uncompressed fallback, one control
/// byte plus the full line.
pub const MAX_PACKED_BYTES: usize = LINE_BYTES + 1;

/// Compress one raster line with PackBits.
///
/// `line` is normalized to exactly [`LINE_BYTES`] bytes first: shorter
/// input is zero-padded on the right, longer input is truncated. The
/// scan then walks the line once, alternating between run spans
/// (repeated bytes) and literal spans (differing bytes).
///
/// Deterministic, and the result is never longer than
/// [`MAX_PACKED_BYTES`].
pub fn pack(line: &[u8]) -> Vec<u8> {
    let mut norm = [0u8; LINE_BYTES];
    let take = line.len().min(LINE_BYTES);
    norm[..take].copy_from_slice(&line[..take]);
    let line = &norm;

    let mut packed = Vec::with_capacity(MAX_PACKED_BYTES);
    // Input bytes already flushed into `packed`.
    let mut consumed = 0;
    let mut same = true;
    for current in 0..LINE_BYTES {
        if consumed == current {
            // The first byte of a span tentatively starts a run, so a
            // trailing single byte still flushes as a run of one.
            same = true;
            continue;
        }
        if current == consumed + 1 {
            // The second byte fixes the span mode.
            same = line[current - 1] == line[current];
            continue;
        }
        if same == (line[current - 1] == line[current]) {
            // Current mode continues.
            continue;
        }
        if same {
            let len = current - consumed;
            if packed.len() + 2 > LINE_BYTES {
                return uncompressed(line);
            }
            packed.push(run_control(len));
            packed.push(line[current - 1]);
            consumed = current;
        } else {
            // The pair (current - 1, current) turned out equal, which
            // means the literal span really ended one byte earlier and a
            // run starts at that repeated pair.
            let len = current - consumed - 1;
            if packed.len() + 1 + len > LINE_BYTES {
                return uncompressed(line);
            }
            packed.push(literal_control(len));
            packed.extend_from_slice(&line[consumed..consumed + len]);
            consumed = current - 1;
        }
        same = !same;
    }

    // The final span is always still open here; flush it by its mode.
    let len = LINE_BYTES - consumed;
    if same {
        if packed.len() + 2 > LINE_BYTES {
            return uncompressed(line);
        }
        packed.push(run_control(len));
        packed.push(line[LINE_BYTES - 1]);
    } else {
        if packed.len() + 1 + len > LINE_BYTES {
            return uncompressed(line);
        }
        packed.push(literal_control(len));
        packed.extend_from_slice(&line[consumed..]);
    }

    packed
}

/// Control byte for a run of `len` repeated bytes: `-(len - 1)`.
fn run_control(len: usize) -> u8 {
    debug_assert!((1..=128).contains(&len));
    (-((len as i16) - 1)) as i8 as u8
}

/// Control byte for `len` literal bytes: `len - 1`.
fn literal_control(len: usize) -> u8 {
    debug_assert!((1..=128).contains(&len));
    (len - 1) as u8
}

/// The no-growth fallback: the whole line as one literal span. 49 bytes,
/// regardless of run structure.
fn uncompressed(line: &[u8; LINE_BYTES]) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_PACKED_BYTES);
    out.push(literal_control(LINE_BYTES));
    out.extend_from_slice(line);
    out
}
