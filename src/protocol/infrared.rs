// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pulse-timing decoder for the infrared receiver.
//!
//! The receiver output idles high and is pulled low while a carrier is seen. A transmission starts
//! with a long low phase, after which each bit is carried by the length of one high phase: long is
//! 1, short is 0, most significant bit first. A high phase longer than the end-of-frame threshold
//! means the remote stopped sending.
//!
//! Durations are measured by counting poll iterations, so [`InfraredReceiver::read_frame`] blocks
//! the caller for the whole transmission (a few tens of milliseconds). Every phase is bounded, so
//! a stuck line cannot hang the control loop.

use embedded_hal::digital::v2::InputPin;

use crate::config::DecoderTiming;

pub const FRAME_LEN: usize = 4;

/// One complete infrared command.
pub type Frame = [u8; FRAME_LEN];

pub struct InfraredReceiver<P> {
    pin: P,
    timing: DecoderTiming,
    /// Longest low phase tolerated, covers the start-of-transmission burst.
    max_low: u32,
}

impl<P: InputPin> InfraredReceiver<P> {
    pub fn new(pin: P, timing: DecoderTiming) -> Self {
        Self {
            pin,
            timing,
            max_low: timing.end_of_frame.saturating_mul(4),
        }
    }

    /// A transmission has started (line pulled low).
    #[inline]
    pub fn is_receiving(&self) -> bool {
        !self.line_high()
    }

    /// Decode one transmission into `frame`.
    ///
    /// Returns the number of complete bytes read. Anything short of [`FRAME_LEN`] is a partial
    /// frame and must be discarded; the unread tail of `frame` is zero apart from any bits of the
    /// incomplete byte.
    pub fn read_frame(&mut self, frame: &mut Frame) -> usize {
        *frame = [0; FRAME_LEN];
        let mut read = 0;
        let mut bit = 0x80u8;

        while read < FRAME_LEN {
            if self.measure(false, self.max_low) >= self.max_low {
                break;
            }
            let high = self.measure(true, self.timing.end_of_frame);
            if high >= self.timing.end_of_frame {
                break;
            }
            if high > self.timing.bit_threshold {
                frame[read] |= bit;
            }
            bit >>= 1;
            if bit == 0 {
                bit = 0x80;
                read += 1;
            }
        }
        read
    }

    /// Count polls while the line stays at `level`, up to `limit`.
    fn measure(&self, level: bool, limit: u32) -> u32 {
        let mut count = 0;
        while count < limit && self.line_high() == level {
            count += 1;
        }
        count
    }

    /// An unreadable line counts as idle.
    #[inline]
    fn line_high(&self) -> bool {
        self.pin.is_high().unwrap_or(true)
    }
}
