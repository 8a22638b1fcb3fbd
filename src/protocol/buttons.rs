// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Button codes of the projector remote.
//!
//! Every frame is four bytes: a two-byte device prefix followed by a two-byte button body.

use crate::protocol::infrared::Frame;

/// Device prefix shared by all buttons of the remote.
pub const DEVICE_PREFIX: [u8; 2] = [0xE0, 0xD5];

/// Logical remote button.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Button {
    On,
    Off,
    Up,
    Down,
    Set,
    /// Foreign device, unmapped button, or garbled frame.
    Unknown,
}

const BODIES: [([u8; 2], Button); 5] = [
    ([0x04, 0xFB], Button::On),
    ([0x44, 0xBB], Button::Off),
    ([0x06, 0xF9], Button::Up),
    ([0x26, 0xD9], Button::Down),
    ([0x50, 0xAF], Button::Set),
];

impl Button {
    /// Complete frame sent for this button, `None` for [`Button::Unknown`].
    pub fn frame(self) -> Option<Frame> {
        BODIES
            .iter()
            .find(|(_, button)| *button == self)
            .map(|([upper, lower], _)| [DEVICE_PREFIX[0], DEVICE_PREFIX[1], *upper, *lower])
    }
}

/// Map a complete frame to its button.
pub fn decode_button(frame: &Frame) -> Button {
    if frame[..2] != DEVICE_PREFIX {
        return Button::Unknown;
    }
    let body = [frame[2], frame[3]];
    BODIES
        .iter()
        .find(|(code, _)| *code == body)
        .map_or(Button::Unknown, |&(_, button)| button)
}
