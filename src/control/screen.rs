// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Position and fault state machine for the roller screen.
//!
//! The screen knows its position only as a count of rotation ticks since the end-switch last
//! defined home (0). Up decreases the count, down increases it. The state is a commanded
//! [`Direction`] plus a sticky [`ErrorKind`]; a fault overrides the direction: entering one
//! forces the motor to neutral and every further motion request is refused until
//! [`Screen::go_home`] clears it.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! screen.go_home();
//!
//! loop {
//!     screen.check_stop_conditions();
//!     if end_switch_pressed {
//!         screen.on_endswitch_triggered();
//!     }
//! }
//! ```
//!
//! Rotation ticks arrive asynchronously through the [`RotationCounter`]'s tick sink.

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::ScreenConfig;
use crate::control::RotationCounter;
use crate::drivers::{Direction, EndSwitch, HBridge};
use crate::time::Clock;

/// Sticky fault state.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ErrorKind {
    #[default]
    None,
    /// Travelled past home without the end-switch engaging. Never cleared at runtime.
    EndSwitchFault,
    /// Commanded to move but no rotation ticks arrived within the stall timeout.
    RotationFault,
}

impl ErrorKind {
    #[inline]
    pub fn is_fault(self) -> bool {
        self != ErrorKind::None
    }
}

pub struct Screen<'a, UP, DN, SW, C> {
    motor: HBridge<UP, DN>,
    end_switch: EndSwitch<SW>,
    clock: C,
    counter: &'a RotationCounter,
    error: ErrorKind,
    config: ScreenConfig,
}

impl<'a, UP, DN, SW, C> Screen<'a, UP, DN, SW, C>
where
    UP: OutputPin,
    DN: OutputPin,
    SW: InputPin,
    C: Clock,
{
    /// Create the screen in neutral with no fault and position 0.
    ///
    /// `counter` must be the one whose [`TickSink`](crate::control::TickSink) feeds the rotation
    /// interrupt.
    pub fn new(
        mut motor: HBridge<UP, DN>,
        end_switch: EndSwitch<SW>,
        clock: C,
        counter: &'a RotationCounter,
        config: ScreenConfig,
    ) -> Self {
        motor.drive(Direction::Neutral);
        counter.set_direction(Direction::Neutral);
        counter.set_position(0);
        counter.stamp(clock.now());
        Self {
            motor,
            end_switch,
            clock,
            counter,
            error: ErrorKind::None,
            config,
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.counter.direction()
    }

    #[inline]
    pub fn position(&self) -> i16 {
        self.counter.position()
    }

    #[inline]
    pub fn error(&self) -> ErrorKind {
        self.error
    }

    #[inline]
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    #[inline]
    pub fn end_switch_engaged(&self) -> bool {
        self.end_switch.is_engaged()
    }

    /// Command the motor, honoring the travel limits.
    ///
    /// Up and down are silently dropped while their stop condition holds. Neutral always applies.
    /// Requesting the current direction changes nothing, not even the stall timestamp.
    pub fn set_direction(&mut self, dir: Direction) {
        if dir == self.direction() {
            return;
        }
        match dir {
            Direction::Up if self.up_stop_condition() => return,
            Direction::Down if self.down_stop_condition() => return,
            _ => {}
        }

        self.motor.drive(dir);
        self.counter.set_direction(dir);
        if dir != Direction::Neutral {
            // Arms the stall timeout.
            self.counter.stamp(self.clock.now());
        }
    }

    /// Drive toward the end-switch and clear a rotation fault.
    ///
    /// The true position is unknown, so assume the worst case (fully down) and let the
    /// end-switch stop the motor. Does nothing after an end-switch fault.
    pub fn go_home(&mut self) {
        if self.error == ErrorKind::EndSwitchFault {
            return;
        }
        self.error = ErrorKind::None;
        if self.end_switch.is_engaged() {
            return;
        }
        self.counter.set_position(self.config.down_stop);
        self.set_direction(Direction::Up);
    }

    /// End-switch reads engaged; called every loop iteration while it does.
    ///
    /// Defines home unless we are driving down, where a chattering switch must not reset the
    /// count. Returns true if the position actually moved to 0.
    pub fn on_endswitch_triggered(&mut self) -> bool {
        if self.direction() == Direction::Down {
            return false;
        }
        let moved = self.position() != 0;
        self.counter.set_position(0);
        moved
    }

    /// Enforce the stall timeout and travel limits. Must be called every loop iteration.
    ///
    /// Returns the fault entered by this call, if any.
    pub fn check_stop_conditions(&mut self) -> Option<ErrorKind> {
        let mut entered = None;

        // Last tick before now: an edge landing between the reads must not look like a wrap.
        let last_tick = self.counter.last_tick();
        if self.direction() != Direction::Neutral
            && self.clock.now().elapsed_since(last_tick) > self.config.stall_timeout
        {
            // Encoder broken or motor stuck.
            self.enter_error_state(ErrorKind::RotationFault);
            entered = Some(ErrorKind::RotationFault);
        }

        if self.direction() == Direction::Up && self.position() <= self.config.up_stop {
            // Past home and the switch never fired.
            self.enter_error_state(ErrorKind::EndSwitchFault);
            entered = Some(ErrorKind::EndSwitchFault);
        }

        let stop = match self.direction() {
            Direction::Up => self.up_stop_condition(),
            Direction::Down => self.down_stop_condition(),
            Direction::Neutral => false,
        };
        if stop {
            self.set_direction(Direction::Neutral);
        }

        entered
    }

    pub fn up_stop_condition(&self) -> bool {
        self.error.is_fault()
            || self.position() <= self.config.up_stop
            || self.end_switch.is_engaged()
    }

    pub fn down_stop_condition(&self) -> bool {
        self.error.is_fault() || self.position() >= self.config.down_stop
    }

    fn enter_error_state(&mut self, kind: ErrorKind) {
        self.set_direction(Direction::Neutral);
        self.error = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockInput, MockOutput};
    use crate::time::{ticks_for, ClockTick, ManualClock};
    use core::cell::Cell;

    struct Rig {
        clock: ManualClock,
        counter: RotationCounter,
        up: MockOutput,
        down: MockOutput,
        switch: MockInput,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                clock: ManualClock::new(),
                counter: RotationCounter::new(),
                up: MockOutput::new(),
                down: MockOutput::new(),
                // Released: active-low line idles high.
                switch: MockInput::new(true),
            }
        }

        fn screen(&self) -> Screen<'_, MockOutput, MockOutput, MockInput, &ManualClock> {
            Screen::new(
                HBridge::new(self.up.clone(), self.down.clone()),
                EndSwitch::active_low(self.switch.clone()),
                &self.clock,
                &self.counter,
                ScreenConfig::default(),
            )
        }

        fn press_switch(&self, pressed: bool) {
            self.switch.set_high(!pressed);
        }

        fn ticks(&self, n: u32) {
            for _ in 0..n {
                self.counter.sink().tick(self.clock.now());
            }
        }
    }

    /// Clock that lets a rotation edge fire right after the timer is read, once armed.
    struct EdgeAfterRead<'a> {
        clock: &'a ManualClock,
        counter: &'a RotationCounter,
        armed: Cell<bool>,
    }

    impl Clock for EdgeAfterRead<'_> {
        fn now(&self) -> ClockTick {
            let now = self.clock.now();
            if self.armed.get() {
                self.counter.sink().tick(now.wrapping_add(ClockTick::from_raw(1)));
            }
            now
        }
    }

    #[test]
    fn edge_between_clock_reads_is_not_a_stall() {
        let rig = Rig::new();
        let clock = EdgeAfterRead {
            clock: &rig.clock,
            counter: &rig.counter,
            armed: Cell::new(false),
        };
        let mut screen = Screen::new(
            HBridge::new(rig.up.clone(), rig.down.clone()),
            EndSwitch::active_low(rig.switch.clone()),
            &clock,
            &rig.counter,
            ScreenConfig::default(),
        );

        screen.set_direction(Direction::Down);
        rig.clock.advance(ClockTick::from_raw(100));
        clock.armed.set(true);

        assert_eq!(screen.check_stop_conditions(), None);
        assert_eq!(screen.error(), ErrorKind::None);
        assert_eq!(screen.direction(), Direction::Down);
    }

    #[test]
    fn down_energizes_down_pin_only() {
        let rig = Rig::new();
        let mut screen = rig.screen();

        screen.set_direction(Direction::Down);
        assert_eq!(screen.direction(), Direction::Down);
        assert!(rig.down.is_set());
        assert!(!rig.up.is_set());
    }

    #[test]
    fn repeated_direction_is_a_no_op() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);
        let writes = (rig.up.writes(), rig.down.writes());
        let stamped = rig.counter.last_tick();

        rig.clock.advance_ms(300);
        screen.set_direction(Direction::Down);

        assert_eq!((rig.up.writes(), rig.down.writes()), writes);
        assert_eq!(rig.counter.last_tick(), stamped);
    }

    #[test]
    fn up_is_refused_at_home() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        rig.press_switch(true);

        screen.set_direction(Direction::Up);
        assert_eq!(screen.direction(), Direction::Neutral);
        assert!(!rig.up.is_set());
    }

    #[test]
    fn down_is_refused_at_lower_limit() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        rig.counter.set_position(258);

        screen.set_direction(Direction::Down);
        assert_eq!(screen.direction(), Direction::Neutral);
    }

    #[test]
    fn neutral_always_applies() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);
        screen.set_direction(Direction::Neutral);
        assert!(!rig.up.is_set() && !rig.down.is_set());
    }

    #[test]
    fn stall_without_ticks_is_a_rotation_fault() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);

        rig.clock.advance_ms(1000);
        assert_eq!(screen.check_stop_conditions(), None);

        rig.clock.advance(ClockTick::from_raw(1));
        assert_eq!(screen.check_stop_conditions(), Some(ErrorKind::RotationFault));
        assert_eq!(screen.error(), ErrorKind::RotationFault);
        assert_eq!(screen.direction(), Direction::Neutral);
        assert!(!rig.down.is_set());
    }

    #[test]
    fn tick_before_deadline_resets_stall_clock() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);

        rig.clock.advance_ms(999);
        rig.ticks(1);
        rig.clock.advance_ms(999);
        assert_eq!(screen.check_stop_conditions(), None);
        assert_eq!(screen.direction(), Direction::Down);
        assert_eq!(screen.position(), 1);
    }

    #[test]
    fn neutral_screen_never_stalls() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        rig.clock.advance_ms(5000);
        assert_eq!(screen.check_stop_conditions(), None);
        assert_eq!(screen.error(), ErrorKind::None);
    }

    #[test]
    fn stall_detection_survives_counter_wrap() {
        let rig = Rig::new();
        rig.clock.set(ClockTick::from_raw(0xFF00));
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);

        rig.clock.advance_ms(500);
        assert_eq!(screen.check_stop_conditions(), None);
        rig.clock.advance_ms(600);
        assert_eq!(screen.check_stop_conditions(), Some(ErrorKind::RotationFault));
    }

    #[test]
    fn driving_down_stops_at_lower_limit() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);

        for _ in 0..258 {
            rig.ticks(1);
            screen.check_stop_conditions();
        }
        assert_eq!(screen.position(), 258);
        assert_eq!(screen.direction(), Direction::Neutral);
        assert_eq!(screen.error(), ErrorKind::None);

        // A late tick after the stop no longer moves the count.
        rig.ticks(1);
        assert_eq!(screen.position(), 258);
    }

    #[test]
    fn overrunning_home_is_an_end_switch_fault() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        rig.counter.set_position(2);
        screen.set_direction(Direction::Up);

        for _ in 0..6 {
            rig.ticks(1);
            screen.check_stop_conditions();
        }
        assert_eq!(screen.position(), -4);
        assert_eq!(screen.error(), ErrorKind::EndSwitchFault);
        assert_eq!(screen.direction(), Direction::Neutral);
    }

    #[test]
    fn faults_block_all_motion() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);
        rig.clock.advance_ms(2000);
        screen.check_stop_conditions();

        screen.set_direction(Direction::Down);
        screen.set_direction(Direction::Up);
        assert_eq!(screen.direction(), Direction::Neutral);
    }

    #[test]
    fn go_home_assumes_worst_case_and_drives_up() {
        let rig = Rig::new();
        let mut screen = rig.screen();

        screen.go_home();
        assert_eq!(screen.position(), 258);
        assert_eq!(screen.direction(), Direction::Up);
        assert!(rig.up.is_set());
    }

    #[test]
    fn go_home_at_home_does_nothing() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        rig.press_switch(true);

        screen.go_home();
        assert_eq!(screen.position(), 0);
        assert_eq!(screen.direction(), Direction::Neutral);
    }

    #[test]
    fn go_home_clears_rotation_fault() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);
        rig.clock.advance_ms(2000);
        screen.check_stop_conditions();
        assert_eq!(screen.error(), ErrorKind::RotationFault);

        screen.go_home();
        assert_eq!(screen.error(), ErrorKind::None);
        assert_eq!(screen.direction(), Direction::Up);
    }

    #[test]
    fn go_home_keeps_end_switch_fault() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Up);
        for _ in 0..4 {
            rig.ticks(1);
        }
        screen.check_stop_conditions();
        assert_eq!(screen.error(), ErrorKind::EndSwitchFault);

        screen.go_home();
        assert_eq!(screen.error(), ErrorKind::EndSwitchFault);
        assert_eq!(screen.direction(), Direction::Neutral);
        assert_eq!(screen.position(), -4);
    }

    #[test]
    fn homing_ends_at_the_switch() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.go_home();

        rig.ticks(40);
        rig.press_switch(true);
        assert!(screen.on_endswitch_triggered());
        assert_eq!(screen.position(), 0);

        screen.check_stop_conditions();
        assert_eq!(screen.direction(), Direction::Neutral);
        assert_eq!(screen.error(), ErrorKind::None);
        assert!(!rig.up.is_set());
    }

    #[test]
    fn end_switch_is_ignored_while_driving_down() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        screen.set_direction(Direction::Down);
        rig.ticks(3);

        assert!(!screen.on_endswitch_triggered());
        assert_eq!(screen.position(), 3);
    }

    #[test]
    fn configured_limits_and_timeout_apply() {
        let rig = Rig::new();
        let config = ScreenConfig::default()
            .with_limits(-1, 3)
            .with_stall_timeout(ticks_for(200));
        let mut screen = Screen::new(
            HBridge::new(rig.up.clone(), rig.down.clone()),
            EndSwitch::active_low(rig.switch.clone()),
            &rig.clock,
            &rig.counter,
            config,
        );

        screen.set_direction(Direction::Down);
        rig.ticks(3);
        screen.check_stop_conditions();
        assert_eq!(screen.direction(), Direction::Neutral);

        screen.go_home();
        assert_eq!(screen.position(), 3);
        rig.clock.advance_ms(250);
        assert_eq!(screen.check_stop_conditions(), Some(ErrorKind::RotationFault));
    }

    #[test]
    fn end_switch_at_home_reports_no_movement() {
        let rig = Rig::new();
        let mut screen = rig.screen();
        assert!(!screen.on_endswitch_triggered());
    }
}
