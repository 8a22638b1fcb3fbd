// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Foreground loop of the screen controller.
//!
//! Each [`ControlLoop::step`] runs one iteration in a fixed order: stop conditions, Up/Down
//! window expiry, infrared command (only if a transmission has started), end-switch, status LED.
//! Decoding a command blocks the iteration until the transmission is over.

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::control::status::status_led_level;
use crate::control::{dispatch, ErrorKind, Monoflop, Screen};
use crate::hw::Led;
use crate::protocol::{decode_button, Button, InfraredReceiver, FRAME_LEN};
use crate::time::{Clock, ClockTick};

/// What happened during one iteration. Empty for the vast majority of iterations.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StepReport {
    /// Fault entered in this iteration.
    pub fault: Option<ErrorKind>,
    /// Button decoded from a complete frame and dispatched.
    pub button: Option<Button>,
    /// Byte count of a transmission that ended early and was dropped.
    pub partial_frame: Option<usize>,
    /// End-switch moved the position back to home.
    pub homed: bool,
}

impl StepReport {
    pub fn is_empty(&self) -> bool {
        *self == StepReport::default()
    }
}

pub struct ControlLoop<'a, UP, DN, SW, C, IR, LED: OutputPin> {
    screen: Screen<'a, UP, DN, SW, C>,
    extra_buttons: Monoflop<C>,
    infrared: InfraredReceiver<IR>,
    led: Led<LED>,
    clock: C,
}

impl<'a, UP, DN, SW, C, IR, LED> ControlLoop<'a, UP, DN, SW, C, IR, LED>
where
    UP: OutputPin,
    DN: OutputPin,
    SW: InputPin,
    C: Clock + Copy,
    IR: InputPin,
    LED: OutputPin,
{
    /// Assemble the loop and start homing: after power-up the position is unknown.
    ///
    /// `window` is how long Up/Down stay bound to the screen after On/Off.
    pub fn new(
        screen: Screen<'a, UP, DN, SW, C>,
        infrared: InfraredReceiver<IR>,
        led: Led<LED>,
        clock: C,
        window: ClockTick,
    ) -> Self {
        let mut control = Self {
            screen,
            extra_buttons: Monoflop::new(clock, window),
            infrared,
            led,
            clock,
        };
        control.screen.go_home();
        control
    }

    pub fn screen(&self) -> &Screen<'a, UP, DN, SW, C> {
        &self.screen
    }

    pub fn extra_buttons(&self) -> &Monoflop<C> {
        &self.extra_buttons
    }

    pub fn led_is_on(&self) -> bool {
        self.led.is_on()
    }

    /// Run one iteration.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport {
            fault: self.screen.check_stop_conditions(),
            ..StepReport::default()
        };
        self.extra_buttons.regular_check();

        if self.infrared.is_receiving() {
            self.handle_infrared(&mut report);
        }
        if self.screen.end_switch_engaged() {
            report.homed = self.screen.on_endswitch_triggered();
        }

        self.led.set(status_led_level(
            self.screen.error(),
            self.extra_buttons.is_active(),
            self.clock.now(),
        ));
        report
    }

    fn handle_infrared(&mut self, report: &mut StepReport) {
        let mut frame = [0; FRAME_LEN];
        let read = self.infrared.read_frame(&mut frame);
        if read != FRAME_LEN {
            report.partial_frame = Some(read);
            return;
        }
        let button = decode_button(&frame);
        dispatch(button, &mut self.screen, &mut self.extra_buttons);
        report.button = Some(button);
    }
}
