// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Free-running TIM3 time base.
//!
//! TIM3 counts up at [`TIMER_TICK_HZ`](crate::config::TIMER_TICK_HZ) over its full 16-bit
//! range and is never stopped or reset after configuration. Reading `CNT` has no side effects, so
//! any number of [`TimerClock`] copies may read it from both the main loop and interrupt handlers.

use stm32f7xx_hal::pac;

use crate::config::TIMER_PRESCALER;
use crate::time::{Clock, ClockTick};

#[derive(Copy, Clone)]
pub struct TimerClock {
    _private: (),
}

impl TimerClock {
    /// Configure and start TIM3. Consumes the peripheral so nobody else can reprogram it.
    ///
    /// Assumes the APB1 timer clock runs at the reset default (HSI, 16 MHz).
    pub fn tim3(tim3: pac::TIM3) -> Self {
        let tim = tim3;

        // Enable the peripheral clock. RCC itself is owned by the HAL after `constrain()`.
        unsafe {
            (*pac::RCC::ptr())
                .apb1enr
                .modify(|_, w| w.tim3en().set_bit());
        }

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(TIMER_PRESCALER - 1) });

        // Auto-reload: max 16-bit
        tim.arr.write(|w| unsafe { w.bits(0xFFFF) });

        // Latch the prescaler now rather than at the first overflow.
        tim.egr.write(|w| w.ug().set_bit());

        // Reset counter
        tim.cnt.write(|w| unsafe { w.bits(0) });

        // Enable counter
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { _private: () }
    }
}

impl Clock for TimerClock {
    #[inline]
    fn now(&self) -> ClockTick {
        // Read-only access to a running counter.
        let cnt = unsafe { (*pac::TIM3::ptr()).cnt.read().bits() };
        ClockTick::from_raw(cnt as u16)
    }
}
