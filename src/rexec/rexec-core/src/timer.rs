use crate::agc::Agc;
use crate::constants::timers::{T3_PERIOD, T4_PERIOD};
use crate::waitlist::Tasks;

/// Sub-period counters of the periodic clock. T3 drives the waitlist and
/// T4 the display scan; both keep counting while interrupts are inhibited.
pub struct TimerDispatcher {
    t3_count: i32,
    t4_count: i32,
    display_phase: u32,
    ticks: u64,
}

impl TimerDispatcher {
    pub fn new() -> Self {
        TimerDispatcher {
            t3_count: T3_PERIOD,
            t4_count: T4_PERIOD,
            display_phase: 0,
            ticks: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = TimerDispatcher::new();
    }

    // Returns true when the T3 sub-period expired this tick
    fn count_t3(&mut self) -> bool {
        self.t3_count -= 1;
        if self.t3_count > 0 {
            return false;
        }
        self.t3_count = T3_PERIOD;
        true
    }

    fn count_t4(&mut self) -> bool {
        self.t4_count -= 1;
        if self.t4_count > 0 {
            return false;
        }
        self.t4_count = T4_PERIOD;
        true
    }

    /// Number of display scans delivered since reset
    pub fn display_phase(&self) -> u32 {
        self.display_phase
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for TimerDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock interrupts
pub trait Interrupt {
    fn tick(&mut self);
    fn t3rupt(&mut self);
    fn t4rupt(&mut self);
}

impl<'a> Interrupt for Agc<'a> {
    /// One centisecond: advance TIME1/TIME2, then fire whichever
    /// sub-period interrupts are due and not inhibited
    fn tick(&mut self) {
        self.timer.ticks = self.timer.ticks.wrapping_add(1);
        self.state.fetch_clocks().advance_elapsed();

        let inhibited = self.state.is_inhibited();
        if self.timer.count_t3() && !inhibited {
            self.t3rupt();
        }
        if self.timer.count_t4() && !inhibited {
            self.t4rupt();
        }
    }

    fn t3rupt(&mut self) {
        self.dispatch_waitlist();
    }

    fn t4rupt(&mut self) {
        self.timer.display_phase = self.timer.display_phase.wrapping_add(1);
        if let Some(display) = self.display.as_mut() {
            display.scan(&self.state);
        }
    }
}
