// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw pins and below the
//! screen logic.
//!
//! ## Existing drivers
//!
//! - [`hbridge`] – Two-pin H-bridge driving the roller motor
//! - [`endswitch`] – Home position end-switch
//! - [`rotation`] – Encoder wheel comparator with Schmitt-trigger bias (interrupt side)

pub mod endswitch;
pub mod hbridge;
pub mod rotation;

pub use endswitch::EndSwitch;
pub use hbridge::{Direction, HBridge};
pub use rotation::RotationEdgeHandler;
