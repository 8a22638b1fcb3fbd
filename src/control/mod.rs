// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Screen Control
//!
//! State machines and policy for the roller screen. Nothing in here touches hardware directly;
//! pins come in through `embedded-hal` traits and time through [`Clock`](crate::time::Clock).
//!
//! ## Modules
//!
//! - [`rotation`] - Tick counter shared with the rotation interrupt.
//! - [`screen`] - Position/fault state machine with travel-limit enforcement.
//! - [`monoflop`] - One-shot timer gating the Up/Down buttons.
//! - [`dispatch`] - Remote button policy.
//! - [`status`] - Status LED pattern.
//! - [`control_loop`] - One foreground iteration tying everything together.

pub mod control_loop;
pub mod dispatch;
pub mod monoflop;
pub mod rotation;
pub mod screen;
pub mod status;

pub use control_loop::{ControlLoop, StepReport};
pub use dispatch::dispatch;
pub use monoflop::Monoflop;
pub use rotation::{RotationCounter, TickSink};
pub use screen::{ErrorKind, Screen};
