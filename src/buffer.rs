//! Pixel state storage
//!
//! [`FrameBuffer`] holds the on/off state of every logical pixel. Memory is
//! pre-allocated for the largest supported matrix: one `u32` per logical
//! column, bit `y` set when pixel `(x, y)` is on.

use crate::config::{MAX_ANODES, MAX_CATHODES};

/// Logical columns the buffer can hold (the larger axis of any rotation)
pub const BUFFER_COLUMNS: usize = if MAX_ANODES > MAX_CATHODES {
    MAX_ANODES as usize
} else {
    MAX_CATHODES as usize
};

/// Fixed-capacity, bit-packed pixel buffer indexed by logical coordinates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    columns: [u32; BUFFER_COLUMNS],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a buffer with every pixel off
    pub const fn new() -> Self {
        Self {
            columns: [0; BUFFER_COLUMNS],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.columns.fill(0);
    }

    /// Read a pixel; anything beyond the buffer capacity reads as off
    pub fn get(&self, x: usize, y: usize) -> bool {
        match (self.columns.get(x), Self::mask(y)) {
            (Some(column), Some(mask)) => column & mask != 0,
            _ => false,
        }
    }

    /// Write a pixel; writes beyond the buffer capacity are dropped
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        let (Some(column), Some(mask)) = (self.columns.get_mut(x), Self::mask(y)) else {
            return;
        };
        if on {
            *column |= mask;
        } else {
            *column &= !mask;
        }
    }

    /// True when no pixel is on
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|column| *column == 0)
    }

    fn mask(y: usize) -> Option<u32> {
        u32::try_from(y).ok().and_then(|y| 1u32.checked_shl(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = FrameBuffer::new();
        assert!(buffer.is_blank());
        assert!(!buffer.get(0, 0));
    }

    #[test]
    fn test_set_and_get_corners() {
        let mut buffer = FrameBuffer::new();
        buffer.set(0, 0, true);
        buffer.set(31, 31, true);
        assert!(buffer.get(0, 0));
        assert!(buffer.get(31, 31));
        assert!(!buffer.get(31, 0));
        assert!(!buffer.get(0, 31));
    }

    #[test]
    fn test_set_off_only_touches_one_pixel() {
        let mut buffer = FrameBuffer::new();
        buffer.set(4, 2, true);
        buffer.set(4, 3, true);
        buffer.set(4, 2, false);
        assert!(!buffer.get(4, 2));
        assert!(buffer.get(4, 3));
    }

    #[test]
    fn test_out_of_capacity_access_is_ignored() {
        let mut buffer = FrameBuffer::new();
        buffer.set(32, 0, true);
        buffer.set(0, 32, true);
        buffer.set(usize::MAX, usize::MAX, true);
        assert!(buffer.is_blank());
        assert!(!buffer.get(32, 0));
        assert!(!buffer.get(0, 32));
    }

    #[test]
    fn test_clear() {
        let mut buffer = FrameBuffer::new();
        for i in 0..32 {
            buffer.set(i, 31 - i, true);
        }
        assert!(!buffer.is_blank());
        buffer.clear();
        assert!(buffer.is_blank());
    }
}
