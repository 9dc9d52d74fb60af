//! Raw CAN frame representation.

use serde::{Deserialize, Serialize};

/// Number of bus segments the safety module can sit between.
///
/// Three physical transceivers plus one virtual bus; bus ids are `0..4`.
pub const BUS_COUNT: usize = 4;

/// Maximum payload length of a classic CAN frame.
pub const MAX_FRAME_LEN: usize = 8;

/// Highest valid 11-bit (standard) CAN address.
pub const MAX_STANDARD_ADDR: u32 = 0x7FF;

/// Highest valid 29-bit (extended) CAN address.
pub const MAX_EXTENDED_ADDR: u32 = 0x1FFF_FFFF;

/// A raw CAN frame as observed on, or destined for, a bus segment.
///
/// The payload is stored inline in a fixed buffer; `len` bytes of it are
/// meaningful. Construction truncates over-long payloads rather than failing
/// so that malformed input still yields a frame the core can classify (and
/// reject) deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanFrame {
    /// Bus segment the frame was received on or should be sent to.
    pub bus: u8,
    /// CAN arbitration id.
    pub addr: u32,
    /// Inline payload buffer; only the first `len` bytes are meaningful.
    pub data: [u8; MAX_FRAME_LEN],
    /// Number of meaningful payload bytes, at most [`MAX_FRAME_LEN`].
    pub len: u8,
}

impl CanFrame {
    /// Create a frame, copying at most [`MAX_FRAME_LEN`] payload bytes.
    #[must_use]
    pub fn new(bus: u8, addr: u32, payload: &[u8]) -> Self {
        let mut data = [0u8; MAX_FRAME_LEN];
        let len = payload.len().min(MAX_FRAME_LEN);
        for (dst, src) in data.iter_mut().zip(payload.iter().take(len)) {
            *dst = *src;
        }
        // len is clamped to MAX_FRAME_LEN, which fits in u8
        let len = u8::try_from(len).unwrap_or(MAX_FRAME_LEN as u8);
        Self {
            bus,
            addr,
            data,
            len,
        }
    }

    /// Create an all-zero frame of the given length, useful in tests and
    /// heartbeat paths.
    #[must_use]
    pub fn zeroed(bus: u8, addr: u32, len: u8) -> Self {
        Self {
            bus,
            addr,
            data: [0u8; MAX_FRAME_LEN],
            len: len.min(MAX_FRAME_LEN as u8),
        }
    }

    /// The meaningful payload bytes.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        let len = usize::from(self.len).min(MAX_FRAME_LEN);
        self.data.get(..len).unwrap_or(&self.data)
    }

    /// True if this frame matches an `(addr, bus)` pair.
    #[must_use]
    pub fn matches(&self, bus: u8, addr: u32) -> bool {
        self.bus == bus && self.addr == addr
    }
}
