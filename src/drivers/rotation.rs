// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Rotation sensor behind a biased comparator.
//!
//! The encoder wheel's analog signal is compared against a reference that we shift ourselves:
//! after a falling edge the bias goes high, after a rising edge it goes low. This turns the plain
//! comparator into a Schmitt trigger, so each real transition produces exactly one edge.
//!
//! [`RotationEdgeHandler::on_edge`] runs in interrupt context on every comparator transition. It
//! must stay short: it never blocks and never touches direction or error state.

use embedded_hal::digital::v2::OutputPin;

use crate::control::TickSink;
use crate::time::Clock;

pub struct RotationEdgeHandler<'a, B, C> {
    sink: TickSink<'a>,
    bias: B,
    clock: C,
    last_falling: bool,
}

impl<'a, B: OutputPin, C: Clock> RotationEdgeHandler<'a, B, C> {
    pub fn new(sink: TickSink<'a>, bias: B, clock: C) -> Self {
        Self {
            sink,
            bias,
            clock,
            last_falling: false,
        }
    }

    /// Comparator changed; `comparator_high` is its output level now.
    pub fn on_edge(&mut self, comparator_high: bool) {
        let falling = !comparator_high;
        if falling != self.last_falling {
            self.last_falling = falling;
            self.sink.tick(self.clock.now());
        }

        if falling {
            self.bias.set_high().ok();
        } else {
            self.bias.set_low().ok();
        }
    }
}
