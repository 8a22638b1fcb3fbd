// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the screen controller on a Nucleo-F767ZI.
//!
//! | Signal        | Pin  | Notes |
//! | ------------- | ---- | ----- |
//! | IR receiver   | PC6  | TSOP output, idle high |
//! | End-switch    | PC7  | to GND when pressed, internal pull-up |
//! | Comparator    | PC8  | encoder comparator output, EXTI9_5 |
//! | Bias          | PA4  | Schmitt-trigger bias divider |
//! | Motor up      | PD12 | H-bridge input 1 |
//! | Motor down    | PD13 | H-bridge input 2 |
//! | Status LED    | PB0  | LD1 (green) |
//! | Debug UART    | PD8/PD9 | USART3 on the ST-LINK virtual COM port |

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpioc, gpiod, Alternate, Floating, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub inputs: InputPins,
    pub motor: MotorPins,
    pub rotation: RotationPins,
    pub status_led: gpiob::PB0<Output<PushPull>>,
    pub usart3: Usart3Pins,
}

pub struct InputPins {
    pub infrared: gpioc::PC6<Input<Floating>>,
    pub end_switch: gpioc::PC7<Input<PullUp>>,
}

pub struct MotorPins {
    pub up: gpiod::PD12<Output<PushPull>>,
    pub down: gpiod::PD13<Output<PushPull>>,
}

/// Encoder comparator and its bias output.
pub struct RotationPins {
    pub comparator: gpioc::PC8<Input<Floating>>,
    pub bias: gpioa::PA4<Output<PushPull>>,
}

pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpioc: pac::GPIOC, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();

        Self {
            inputs: InputPins {
                infrared: gpioc.pc6.into_floating_input(),
                end_switch: gpioc.pc7.into_pull_up_input(),
            },

            motor: MotorPins {
                up: gpiod.pd12.into_push_pull_output(),
                down: gpiod.pd13.into_push_pull_output(),
            },

            rotation: RotationPins {
                comparator: gpioc.pc8.into_floating_input(),
                bias: gpioa.pa4.into_push_pull_output(),
            },

            status_led: gpiob.pb0.into_push_pull_output(),

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },
        }
    }
}
