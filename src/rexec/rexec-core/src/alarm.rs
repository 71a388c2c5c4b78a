use core::fmt;

use crate::agc::Agc;
use crate::constants::{lights, ports};
use crate::exec::Jobs;
use log::error;

/// Program alarms. Each carries the octal code shown in the DSKY
/// alarm noun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alarm {
    NoVacArea,
    NoCoreSet,
    WaitlistOverflow,
    ProgramAlarm,
    ProgramNotAvailable,
    Poodoo,
    Bailout,
}

impl Alarm {
    pub fn code(self) -> u16 {
        match self {
            Alarm::NoVacArea => 0o1201,
            Alarm::NoCoreSet => 0o1202,
            Alarm::WaitlistOverflow => 0o1203,
            Alarm::ProgramAlarm => 0o1520,
            Alarm::ProgramNotAvailable => 0o0115,
            Alarm::Poodoo => 0o1407,
            Alarm::Bailout => 0o1410,
        }
    }

    /// True for the table exhaustion alarms raised by the schedulers
    pub fn is_exhaustion(self) -> bool {
        matches!(
            self,
            Alarm::NoVacArea | Alarm::NoCoreSet | Alarm::WaitlistOverflow
        )
    }
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05o}", self.code())
    }
}

/// Alarm and abort handling
pub trait Alarms {
    fn alarm(&mut self, alarm: Alarm);
    fn abort(&mut self, alarm: Alarm);
    fn reset_alarm(&mut self);
    fn last_alarm(&self) -> Option<Alarm>;
}

impl<'a> Alarms for Agc<'a> {
    /// Records the code and lights PROG
    fn alarm(&mut self, alarm: Alarm) {
        error!("Program alarm {}", alarm);
        self.alarm = Some(alarm);
        self.state
            .channel_set_bits(ports::CHANNEL_DSALMOUT, lights::PROG);
    }

    /// POODOO: alarm, then terminate the running job
    fn abort(&mut self, alarm: Alarm) {
        self.alarm(alarm);
        self.end_of_job();
    }

    /// RSET
    fn reset_alarm(&mut self) {
        self.alarm = None;
        self.state
            .channel_clear_bits(ports::CHANNEL_DSALMOUT, lights::PROG);
    }

    fn last_alarm(&self) -> Option<Alarm> {
        self.alarm
    }
}
