// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side pin doubles for unit tests.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::DecoderTiming;

/// Output pin whose level and write count stay observable after it is moved into a driver.
#[derive(Clone, Debug, Default)]
pub struct MockOutput {
    level: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.level.get()
    }

    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl OutputPin for MockOutput {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Input pin driven by the test.
#[derive(Clone, Debug)]
pub struct MockInput {
    level: Rc<Cell<bool>>,
}

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(high)),
        }
    }

    pub fn set_high(&self, high: bool) {
        self.level.set(high);
    }
}

impl InputPin for MockInput {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

/// Input pin that always fails to read.
#[derive(Debug)]
pub struct BrokenInput;

impl InputPin for BrokenInput {
    type Error = ();

    fn is_high(&self) -> Result<bool, Self::Error> {
        Err(())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Err(())
    }
}

/// Infrared line that replays runs of (level, samples). Every read consumes one sample; once
/// the script is exhausted the line idles high.
#[derive(Clone, Debug, Default)]
pub struct ScriptedLine {
    runs: Rc<RefCell<VecDeque<(bool, u32)>>>,
}

impl ScriptedLine {
    pub fn new(runs: &[(bool, u32)]) -> Self {
        Self {
            runs: Rc::new(RefCell::new(
                runs.iter().copied().filter(|&(_, n)| n > 0).collect(),
            )),
        }
    }

    /// Waveform of a complete transmission of `bytes`, MSB first, as seen by a receiver
    /// with the given timing.
    pub fn transmission(bytes: &[u8], timing: DecoderTiming) -> Self {
        Self::new(&Self::runs_for(bytes, timing))
    }

    /// Queue a transmission of `bytes` behind whatever is still pending.
    pub fn send(&self, bytes: &[u8], timing: DecoderTiming) {
        self.runs
            .borrow_mut()
            .extend(Self::runs_for(bytes, timing).into_iter().filter(|&(_, n)| n > 0));
    }

    pub fn runs_for(bytes: &[u8], timing: DecoderTiming) -> Vec<(bool, u32)> {
        let one = timing.bit_threshold * 2;
        let zero = (timing.bit_threshold / 2).max(2);
        let mut runs = Vec::new();
        runs.push((false, 20));
        for byte in bytes {
            for bit in (0..8).rev() {
                let high = if byte & (1 << bit) != 0 { one } else { zero };
                runs.push((true, high));
                runs.push((false, 3));
            }
        }
        runs
    }

    /// Number of samples not yet consumed.
    pub fn remaining(&self) -> u32 {
        self.runs.borrow().iter().map(|&(_, n)| n).sum()
    }

    fn sample(&self) -> bool {
        let mut runs = self.runs.borrow_mut();
        match runs.front_mut() {
            Some((level, left)) => {
                let level = *level;
                *left -= 1;
                if *left == 0 {
                    runs.pop_front();
                }
                level
            }
            None => true,
        }
    }
}

impl InputPin for ScriptedLine {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.sample())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.sample())
    }
}
