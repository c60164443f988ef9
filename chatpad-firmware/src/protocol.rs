//! Framing layer for the Chatpad's UART byte stream.
//!
//! The pad sends fixed 8-byte frames: `[tag0, tag1, _, modifiers, key0,
//! key1, _, checksum]`. `tag0` is either the data header or the status
//! header; status frames carry no key information and are dropped whole.
//! Corruption is recovered by discarding a single byte and rescanning, so a
//! bad byte costs at most one frame of input.

use heapless::Vec;

pub const FRAME_SIZE: usize = 8;
pub const DATA_HEADER: u8 = 0xB4;
pub const STATUS_HEADER: u8 = 0xA5;
pub const DATA_HEADER2: u8 = 0xC5;

/// Wakes the pad up; sent once when the controller is created.
pub const INIT_MSG: [u8; 5] = [0x87, 0x02, 0x8C, 0x1F, 0xCC];
/// Keeps the pad from sleeping; sent at a fixed interval.
pub const AWAKE_MSG: [u8; 5] = [0x87, 0x02, 0x8C, 0x1B, 0xD0];

const BUF_SIZE: usize = FRAME_SIZE * 4;

/// Byte-oriented serial link to the pad. Both calls must never block;
/// `read_available` returns however many bytes have arrived, possibly zero.
pub trait Transport {
    fn read_available(&mut self, buf: &mut [u8]) -> usize;
    fn write(&mut self, bytes: &[u8]);
}

/// A validated data frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame([u8; FRAME_SIZE]);

impl Frame {
    pub fn modifiers(&self) -> u8 {
        self.0[3]
    }

    pub fn key0(&self) -> u8 {
        self.0[4]
    }

    pub fn key1(&self) -> u8 {
        self.0[5]
    }
}

/// Two's-complement checksum over the first seven frame bytes.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |sum, b| sum.wrapping_add(*b))
        .wrapping_neg()
}

/// Accumulates incoming bytes and yields validated data frames.
#[derive(Default)]
pub struct FrameDecoder {
    buf: Vec<u8, BUF_SIZE>,
}

impl FrameDecoder {
    pub fn feed(&mut self, data: &[u8]) {
        for &b in data {
            if self.buf.is_full() {
                // A saturated buffer means the consumer stalled; the oldest
                // frame's worth of bytes is stale and can go.
                self.discard(FRAME_SIZE);
            }
            self.buf.push(b).ok();
        }
    }

    /// Returns the next valid data frame, or `None` when fewer than a full
    /// frame's worth of usable bytes is buffered. Never blocks.
    pub fn next_frame(&mut self) -> Option<Frame> {
        while self.buf.len() >= FRAME_SIZE {
            match self.buf[0] {
                STATUS_HEADER => self.discard(FRAME_SIZE),
                DATA_HEADER => {
                    if self.buf[1] != DATA_HEADER2 {
                        self.resync();
                        continue;
                    }
                    let mut frame = [0; FRAME_SIZE];
                    frame.copy_from_slice(&self.buf[..FRAME_SIZE]);
                    if checksum(&frame[..FRAME_SIZE - 1]) == frame[FRAME_SIZE - 1] {
                        self.discard(FRAME_SIZE);
                        return Some(Frame(frame));
                    }
                    crate::debug!("frame checksum mismatch");
                    self.resync();
                }
                _ => self.discard(1),
            }
        }
        None
    }

    /// Drops a single byte so scanning can recover after a corrupted or
    /// missing byte without losing the rest of the stream.
    fn resync(&mut self) {
        self.discard(1);
    }

    fn discard(&mut self, n: usize) {
        let keep = self.buf.len() - n;
        self.buf.rotate_left(n);
        self.buf.truncate(keep);
    }

    #[cfg(test)]
    fn buffered(&self) -> usize {
        self.buf.len()
    }
}

#[cfg(test)]
#[path = "protocol_test.rs"]
mod test;
