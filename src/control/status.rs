// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status LED pattern.
//!
//! | State            | LED |
//! | ---------------- | --- |
//! | no fault         | lit while the Up/Down window is open |
//! | end-switch fault | slow blink (~0.5 s per phase) |
//! | rotation fault   | fast blink (~0.13 s per phase) |
//!
//! Blinking simply follows one bit of the free-running timer.

use crate::control::ErrorKind;
use crate::time::ClockTick;

pub const SLOW_BLINK_BIT: u16 = 1 << 12;
pub const FAST_BLINK_BIT: u16 = 1 << 10;

/// LED level for this loop iteration.
pub fn status_led_level(error: ErrorKind, window_open: bool, now: ClockTick) -> bool {
    match error {
        ErrorKind::None => window_open,
        ErrorKind::EndSwitchFault => now.bit(SLOW_BLINK_BIT),
        ErrorKind::RotationFault => now.bit(FAST_BLINK_BIT),
    }
}
