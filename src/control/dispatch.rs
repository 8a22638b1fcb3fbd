// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! What each remote button does to the screen.
//!
//! The remote belongs to the projector. On and Off are idempotent for the projector, so they
//! double as screen commands (down and up) and open a short window in which Up/Down steer the
//! screen directly. Outside that window Up/Down are projector buttons, and receiving one stops the
//! screen instead of moving it.

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::control::{ErrorKind, Monoflop, Screen};
use crate::drivers::Direction;
use crate::protocol::Button;
use crate::time::Clock;

/// Apply `button` to the screen. `extra_buttons` is the Up/Down window.
pub fn dispatch<UP, DN, SW, C, M>(
    button: Button,
    screen: &mut Screen<'_, UP, DN, SW, C>,
    extra_buttons: &mut Monoflop<M>,
) where
    UP: OutputPin,
    DN: OutputPin,
    SW: InputPin,
    C: Clock,
    M: Clock,
{
    match button {
        Button::On => {
            if screen.error() == ErrorKind::RotationFault {
                // On doubles as the operator's recovery request.
                screen.go_home();
            } else {
                screen.set_direction(Direction::Down);
                extra_buttons.trigger();
            }
        }
        Button::Off => {
            screen.set_direction(Direction::Up);
            extra_buttons.trigger();
        }
        Button::Up => screen.set_direction(if extra_buttons.is_active() {
            Direction::Up
        } else {
            Direction::Neutral
        }),
        Button::Down => screen.set_direction(if extra_buttons.is_active() {
            Direction::Down
        } else {
            Direction::Neutral
        }),
        Button::Set => {}
        Button::Unknown => screen.set_direction(Direction::Neutral),
    }
}
