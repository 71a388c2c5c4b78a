#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod agc;
pub mod alarm;
pub mod constants;
pub mod exec;
pub mod math;
pub mod memory;
pub mod periph;
pub mod timer;
pub mod waitlist;

// Entry point traits implemented by the Agc
pub use agc::Agc;
pub use alarm::{Alarm, Alarms};
pub use exec::{JobFn, Jobs};
pub use periph::DisplayPeriph;
pub use timer::Interrupt;
pub use waitlist::{TaskFn, Tasks};
