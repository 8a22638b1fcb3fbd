// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Rotation counter shared between the control loop and the comparator interrupt.
//!
//! The interrupt only ever sees a [`TickSink`]: it may move the position by one tick in the
//! commanded direction and stamp the tick time. Direction and position resets are written by
//! the control loop through [`Screen`](crate::control::Screen) only.
//!
//! Every field is a single machine word, so relaxed atomics are enough on a single core. The
//! interrupt cannot be preempted by the foreground, which makes its read-direction-then-count
//! sequence effectively atomic.

use core::sync::atomic::{AtomicI16, AtomicU16, AtomicU8, Ordering};

use crate::drivers::Direction;
use crate::time::ClockTick;

pub struct RotationCounter {
    direction: AtomicU8,
    position: AtomicI16,
    last_tick: AtomicU16,
}

impl RotationCounter {
    pub const fn new() -> Self {
        Self {
            direction: AtomicU8::new(Direction::Neutral.to_bits()),
            position: AtomicI16::new(0),
            last_tick: AtomicU16::new(0),
        }
    }

    /// Handle for interrupt context.
    pub fn sink(&self) -> TickSink<'_> {
        TickSink { counter: self }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_bits(self.direction.load(Ordering::Relaxed))
    }

    /// Rotation ticks since the last reset. Up is negative.
    #[inline]
    pub fn position(&self) -> i16 {
        self.position.load(Ordering::Relaxed)
    }

    /// Time of the last tick or motor start, whichever came later.
    #[inline]
    pub fn last_tick(&self) -> ClockTick {
        ClockTick::from_raw(self.last_tick.load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn set_direction(&self, dir: Direction) {
        self.direction.store(dir.to_bits(), Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn set_position(&self, position: i16) {
        self.position.store(position, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn stamp(&self, now: ClockTick) {
        self.last_tick.store(now.raw(), Ordering::Relaxed);
    }
}

impl Default for RotationCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt-side view of a [`RotationCounter`].
#[derive(Copy, Clone)]
pub struct TickSink<'a> {
    counter: &'a RotationCounter,
}

impl TickSink<'_> {
    /// One encoder tick observed at `now`.
    pub fn tick(&self, now: ClockTick) {
        match self.counter.direction() {
            Direction::Up => {
                self.counter.position.fetch_sub(1, Ordering::Relaxed);
            }
            Direction::Down => {
                self.counter.position.fetch_add(1, Ordering::Relaxed);
            }
            Direction::Neutral => {}
        }
        self.counter.stamp(now);
    }
}
