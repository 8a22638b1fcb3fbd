#![no_main]
#![no_std]

use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use cortex_m::peripheral::NVIC;
use cortex_m_rt::entry;
use embedded_hal::digital::v2::InputPin;
use panic_halt as _;

use hal::{
    gpio::{gpioa, gpioc, Edge, ExtiPin, Floating, Input, Output, PushPull},
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use rc_screen::config::{DecoderTiming, ScreenConfig, EXTRA_BUTTONS_WINDOW};
use rc_screen::control::{ControlLoop, RotationCounter, Screen};
use rc_screen::drivers::{EndSwitch, HBridge, RotationEdgeHandler};
use rc_screen::hw::{BoardPins, Led, TimerClock, Usart};
use rc_screen::protocol::InfraredReceiver;

/// Everything the comparator interrupt owns.
struct RotationIrq {
    comparator: gpioc::PC8<Input<Floating>>,
    handler: RotationEdgeHandler<'static, gpioa::PA4<Output<PushPull>>, TimerClock>,
}

// Filled once in `main` before EXTI9_5 is unmasked.
static ROTATION_IRQ: Mutex<RefCell<Option<RotationIrq>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    // Peripherals
    let mut dp = pac::Peripherals::take().unwrap();

    // Clocks: HSI at 16 MHz, which the timer rate and decoder timing assume.
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;

    let clock = TimerClock::tim3(dp.TIM3);
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);

    // USART3 (ST-LINK VCP)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let mut usart = Usart::new(serial);
    usart.println("rc-screen running");

    // Screen
    let counter: &'static RotationCounter =
        cortex_m::singleton!(: RotationCounter = RotationCounter::new()).unwrap();
    let screen = Screen::new(
        HBridge::new(pins.motor.up, pins.motor.down),
        EndSwitch::active_low(pins.inputs.end_switch),
        clock,
        counter,
        ScreenConfig::default(),
    );

    // Rotation interrupt: hand over its state, then unmask.
    let mut comparator = pins.rotation.comparator;
    comparator.make_interrupt_source(&mut dp.SYSCFG, &mut apb2);
    comparator.trigger_on_edge(&mut dp.EXTI, Edge::RisingFalling);
    comparator.enable_interrupt(&mut dp.EXTI);
    let handler = RotationEdgeHandler::new(counter.sink(), pins.rotation.bias, clock);
    cortex_m::interrupt::free(|cs| {
        ROTATION_IRQ
            .borrow(cs)
            .replace(Some(RotationIrq {
                comparator,
                handler,
            }));
    });
    unsafe { NVIC::unmask(pac::Interrupt::EXTI9_5) };

    // Starts homing right away.
    let mut control = ControlLoop::new(
        screen,
        InfraredReceiver::new(pins.inputs.infrared, DecoderTiming::default()),
        Led::active_high(pins.status_led),
        clock,
        EXTRA_BUTTONS_WINDOW,
    );

    loop {
        let report = control.step();
        if !report.is_empty() {
            usart.report(&report);
        }
    }
}

#[interrupt]
fn EXTI9_5() {
    cortex_m::interrupt::free(|cs| {
        if let Some(irq) = ROTATION_IRQ.borrow(cs).borrow_mut().as_mut() {
            irq.comparator.clear_interrupt_pending_bit();
            let level = InputPin::is_high(&irq.comparator).unwrap_or(true);
            irq.handler.on_edge(level);
        }
    });
}
