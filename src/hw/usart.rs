// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART debug terminal.
//!
//! Blocking writes, used to print control loop reports. Nothing here is needed for the screen to
//! work; the status LED stays the operator-facing signal.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the ST-LINK USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

use crate::control::StepReport;

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// Print one line per noteworthy event of a control loop iteration.
    pub fn report(&mut self, report: &StepReport) {
        use fmt::Write;

        if let Some(fault) = report.fault {
            let _ = write!(self, "fault: {:?}\r\n", fault);
        }
        if let Some(button) = report.button {
            let _ = write!(self, "button: {:?}\r\n", button);
        }
        if let Some(bytes) = report.partial_frame {
            let _ = write!(self, "partial frame: {} bytes\r\n", bytes);
        }
        if report.homed {
            self.println("homed");
        }
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
