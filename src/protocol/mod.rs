// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Infrared Remote Protocol
//!
//! - [`infrared`] - Pulse-timing decoder turning the receiver line into 4-byte frames.
//! - [`buttons`] - Frame-to-button table of the projector remote.

pub mod buttons;
pub mod infrared;

pub use buttons::{decode_button, Button};
pub use infrared::{Frame, InfraredReceiver, FRAME_LEN};
