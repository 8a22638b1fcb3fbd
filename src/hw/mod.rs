pub mod led;
#[cfg(feature = "firmware")]
pub mod pins;
#[cfg(feature = "firmware")]
pub mod timer;
#[cfg(feature = "firmware")]
pub mod usart;

pub use led::{ActiveLevel, Led};
#[cfg(feature = "firmware")]
pub use pins::BoardPins;
#[cfg(feature = "firmware")]
pub use timer::TimerClock;
#[cfg(feature = "firmware")]
pub use usart::Usart;
