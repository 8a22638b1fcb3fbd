// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Wrapping timer ticks.
//!
//! The hardware counter is 16 bits wide and rolls over every ~8.4 s at [`TIMER_TICK_HZ`]. Only the
//! difference of two ticks taken less than half a wrap period apart is meaningful, so every
//! elapsed-time check goes through [`ClockTick::elapsed_since`] and never compares raw values.
//!
//! [`TIMER_TICK_HZ`]: crate::config::TIMER_TICK_HZ

use core::cell::Cell;

use crate::config::TIMER_TICK_HZ;

/// One reading of the free-running hardware counter.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ClockTick(u16);

impl ClockTick {
    /// Largest interval that can be measured without ambiguity.
    pub const MAX_INTERVAL: ClockTick = ClockTick(u16::MAX / 2);

    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Ticks from `earlier` to `self`, correct across one counter wrap.
    #[inline]
    pub const fn elapsed_since(self, earlier: ClockTick) -> ClockTick {
        ClockTick(self.0.wrapping_sub(earlier.0))
    }

    #[inline]
    pub const fn wrapping_add(self, ticks: ClockTick) -> ClockTick {
        ClockTick(self.0.wrapping_add(ticks.0))
    }

    /// Test a single bit of the raw counter. Used for LED blink patterns.
    #[inline]
    pub const fn bit(self, mask: u16) -> bool {
        self.0 & mask != 0
    }
}

impl PartialOrd for ClockTick {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering of *durations*. Comparing two absolute readings with this is meaningless.
impl Ord for ClockTick {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

/// Convert milliseconds into timer ticks.
///
/// `const`, so constant inputs fold at compile time. Results above
/// [`ClockTick::MAX_INTERVAL`] cannot be compared safely and are clamped to it.
pub const fn ticks_for(ms: u32) -> ClockTick {
    let ticks = ms as u64 * TIMER_TICK_HZ as u64 / 1000;
    if ticks > ClockTick::MAX_INTERVAL.0 as u64 {
        ClockTick::MAX_INTERVAL
    } else {
        ClockTick(ticks as u16)
    }
}

/// Source of the current tick count.
pub trait Clock {
    fn now(&self) -> ClockTick;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> ClockTick {
        (**self).now()
    }
}

/// Clock advanced by hand. Drives the state machines deterministically on the host.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u16>,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    pub const fn starting_at(raw: u16) -> Self {
        Self { now: Cell::new(raw) }
    }

    pub fn set(&self, tick: ClockTick) {
        self.now.set(tick.raw());
    }

    pub fn advance(&self, ticks: ClockTick) {
        self.now.set(self.now.get().wrapping_add(ticks.raw()));
    }

    pub fn advance_ms(&self, ms: u32) {
        self.advance(ticks_for(ms));
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> ClockTick {
        ClockTick(self.now.get())
    }
}
