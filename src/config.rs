// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration for the screen controller.

use crate::time::{ticks_for, ClockTick};

/// Core clock after reset (HSI, no PLL).
pub const CORE_CLOCK_MHZ: u32 = 16;

/// Prescaler applied to the timer input clock.
pub const TIMER_PRESCALER: u32 = 2048;

/// Tick rate of the free-running timer: ~7.8 kHz, wraps every ~8.4 s.
pub const TIMER_TICK_HZ: u32 = CORE_CLOCK_MHZ * 1_000_000 / TIMER_PRESCALER;

/// How long Up/Down on the remote act on the screen after On/Off was pressed.
pub const EXTRA_BUTTONS_WINDOW: ClockTick = ticks_for(4000);

/// Travel limits and fault timing of the screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Position at or below which the screen counts as fully up.
    pub up_stop: i16,
    /// Position at or above which the screen counts as fully down.
    pub down_stop: i16,
    /// Max time without a rotation tick while the motor is driven.
    pub stall_timeout: ClockTick,
}

impl ScreenConfig {
    pub const fn new() -> Self {
        Self {
            up_stop: -4,
            down_stop: 258,
            stall_timeout: ticks_for(1000),
        }
    }

    pub const fn with_limits(mut self, up_stop: i16, down_stop: i16) -> Self {
        self.up_stop = up_stop;
        self.down_stop = down_stop;
        self
    }

    pub const fn with_stall_timeout(mut self, timeout: ClockTick) -> Self {
        self.stall_timeout = timeout;
        self
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Busy-wait thresholds of the infrared pulse decoder, in poll iterations.
///
/// Measured at 8 MHz: short high phase ~539, long ~1500, so the split sits at 127 per MHz.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecoderTiming {
    /// High phases longer than this decode as a 1 bit.
    pub bit_threshold: u32,
    /// A phase this long ends the frame.
    pub end_of_frame: u32,
}

impl DecoderTiming {
    pub const fn for_core_mhz(mhz: u32) -> Self {
        Self {
            bit_threshold: 127 * mhz,
            end_of_frame: 1500 * mhz,
        }
    }
}

impl Default for DecoderTiming {
    fn default() -> Self {
        Self::for_core_mhz(CORE_CLOCK_MHZ)
    }
}
