// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-pin H-bridge for the screen's roller motor.
//!
//! Each half of the bridge has its own direction pin. At most one of them is high at any time;
//! both low leaves the motor unpowered.

use embedded_hal::digital::v2::OutputPin;

/// Commanded motor state. This is what we asked for, not what the roller is physically doing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Neutral,
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub(crate) const fn to_bits(self) -> u8 {
        match self {
            Direction::Neutral => 0,
            Direction::Up => 1,
            Direction::Down => 2,
        }
    }

    #[inline]
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Direction::Up,
            2 => Direction::Down,
            _ => Direction::Neutral,
        }
    }
}

pub struct HBridge<UP, DN> {
    up: UP,
    down: DN,
}

impl<UP: OutputPin, DN: OutputPin> HBridge<UP, DN> {
    /// Take both direction pins and de-energize the motor.
    pub fn new(up: UP, down: DN) -> Self {
        let mut bridge = Self { up, down };
        bridge.drive(Direction::Neutral);
        bridge
    }

    /// Apply `dir` to the pins. The inactive side is always released first.
    pub fn drive(&mut self, dir: Direction) {
        match dir {
            Direction::Up => {
                self.down.set_low().ok();
                self.up.set_high().ok();
            }
            Direction::Down => {
                self.up.set_low().ok();
                self.down.set_high().ok();
            }
            Direction::Neutral => {
                self.up.set_low().ok();
                self.down.set_low().ok();
            }
        }
    }
}
