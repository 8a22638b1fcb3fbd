// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Remote-Controlled Projector Screen
//!
//! Firmware for a motorized roller screen operated with the projector's infrared remote. The
//! motor is driven through an H-bridge, position is tracked by counting ticks of an encoder
//! wheel, and a mechanical end-switch marks the home (fully up) position. Targets an STM32F767.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`time`] | Wrapping timer ticks and the `Clock` trait |
//! | [`config`] | Travel limits, timeouts, decoder thresholds |
//! | [`hw`] | MCU-level wrappers (status LED; timer, pins and USART with `firmware`) |
//! | [`drivers`] | H-bridge, end-switch, rotation comparator |
//! | [`protocol`] | Infrared pulse decoder and remote button table |
//! | [`control`] | Screen state machine, button policy, control loop |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod hw;
pub mod protocol;
pub mod time;

#[cfg(test)]
mod mock;
