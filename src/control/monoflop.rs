// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One-shot timer.
//!
//! Active for a fixed duration after [`Monoflop::trigger`]. Expiry is polled: the latch only
//! drops when [`Monoflop::regular_check`] runs, so the control loop must call it every iteration.
//! Lives entirely in the foreground; never touch it from interrupt context.

use crate::time::{Clock, ClockTick};

pub struct Monoflop<C> {
    clock: C,
    duration: ClockTick,
    trigger_time: ClockTick,
    active: bool,
}

impl<C: Clock> Monoflop<C> {
    /// `duration` must not exceed [`ClockTick::MAX_INTERVAL`].
    pub fn new(clock: C, duration: ClockTick) -> Self {
        Self {
            clock,
            duration,
            trigger_time: ClockTick::default(),
            active: false,
        }
    }

    /// (Re)start the window from now.
    pub fn trigger(&mut self) {
        self.trigger_time = self.clock.now();
        self.active = true;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn regular_check(&mut self) {
        if self.active && self.clock.now().elapsed_since(self.trigger_time) >= self.duration {
            self.active = false;
        }
    }
}
