// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Mechanical end-switch at the home (fully up) position.

use embedded_hal::digital::v2::InputPin;

use crate::hw::ActiveLevel;

pub struct EndSwitch<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> EndSwitch<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Switch pulling its line to ground when pressed (pull-up wiring).
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Whether the switch is currently pressed.
    ///
    /// A failed read counts as engaged: that blocks upward travel instead of driving into the stop.
    pub fn is_engaged(&self) -> bool {
        let asserted = match self.active {
            ActiveLevel::Low => self.pin.is_low(),
            ActiveLevel::High => self.pin.is_high(),
        };
        asserted.unwrap_or(true)
    }
}
