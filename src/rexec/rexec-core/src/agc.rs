use crate::alarm::Alarm;
use crate::constants::ports;
use crate::exec::{Executive, Jobs};
use crate::memory::MachineState;
use crate::periph::DisplayPeriph;
use crate::timer::{Interrupt, TimerDispatcher};
use crate::waitlist::WaitList;
use log::debug;

// Keypresses held between loop iterations
const KEY_QUEUE_DEPTH: usize = 8;

/// The guidance computer: machine state plus the executive, waitlist and
/// clock that run over it.
pub struct Agc<'a> {
    pub state: MachineState,

    pub(crate) exec: Executive,
    pub(crate) waitlist: WaitList,
    pub(crate) timer: TimerDispatcher,
    pub(crate) alarm: Option<Alarm>,
    pub(crate) display: Option<&'a mut dyn DisplayPeriph>,

    keys: heapless::Deque<u16, KEY_QUEUE_DEPTH>,
}

impl<'a> Agc<'a> {
    pub fn new() -> Self {
        Agc {
            state: MachineState::new(),
            exec: Executive::new(),
            waitlist: WaitList::new(),
            timer: TimerDispatcher::new(),
            alarm: None,
            display: None,
            keys: heapless::Deque::new(),
        }
    }

    /// Lends the presentation layer to the T4RUPT display scan
    pub fn with_display(display: &'a mut dyn DisplayPeriph) -> Self {
        let mut agc = Agc::new();
        agc.display = Some(display);
        agc
    }

    /// FRESH START: everything back to power-up, program 00
    pub fn fresh_start(&mut self) {
        debug!("Fresh start");
        self.state.reset();
        self.exec.reset();
        self.waitlist.reset();
        self.timer.reset();
        self.alarm = None;
        self.keys.clear();
    }

    /// One pass of the main loop: a clock tick, then one job quantum
    pub fn step(&mut self) -> bool {
        self.tick();
        self.keyrupt();
        self.run_job()
    }

    /// Queues a keypress from the host. Hands the code back when the
    /// queue is full.
    pub fn push_key(&mut self, code: u16) -> Result<(), u16> {
        self.keys.push_back(code)
    }

    /// KEYRUPT1: moves the oldest pending keypress into MNKEYIN
    pub fn keyrupt(&mut self) -> Option<u16> {
        if self.state.is_inhibited() {
            return None;
        }
        let code = self.keys.pop_front()?;
        debug!("Keypress 0o{:o}", code);
        self.state.write_channel(ports::CHANNEL_MNKEYIN, code);
        Some(code)
    }

    pub fn exec(&self) -> &Executive {
        &self.exec
    }

    pub fn waitlist_table(&self) -> &WaitList {
        &self.waitlist
    }

    pub fn timer(&self) -> &TimerDispatcher {
        &self.timer
    }
}

impl<'a> Default for Agc<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod agc_tests {
    use super::*;
    use crate::alarm::Alarms;
    use crate::constants::{lights, priority::PRIO20};
    use crate::waitlist::Tasks;

    fn noop(_agc: &mut Agc<'_>) {}

    struct ScanCounter {
        scans: usize,
        program: u16,
    }

    impl DisplayPeriph for ScanCounter {
        fn scan(&mut self, state: &MachineState) {
            self.scans += 1;
            self.program = state.program();
        }
    }

    #[test]
    fn test_fresh_start() {
        let mut agc = Agc::new();
        agc.novac(PRIO20, noop).unwrap();
        agc.waitlist(10, noop).unwrap();
        agc.alarm(Alarm::Bailout);
        agc.state.set_program(11);
        agc.push_key(0o21).unwrap();
        agc.tick();

        agc.fresh_start();

        assert!(agc.exec().is_idle());
        assert_eq!(agc.waitlist_table().occupied(), 0);
        assert_eq!(agc.last_alarm(), None);
        assert_eq!(agc.state.program(), 0);
        assert_eq!(agc.state.read_channel(ports::CHANNEL_DSALMOUT) & lights::PROG, 0);
        assert_eq!(agc.timer().ticks(), 0);
        assert_eq!(agc.keyrupt(), None);
    }

    #[test]
    fn test_key_queue() {
        let mut agc = Agc::new();
        for code in 0..KEY_QUEUE_DEPTH as u16 {
            agc.push_key(code + 1).unwrap();
        }
        assert_eq!(agc.push_key(0o30), Err(0o30));

        assert_eq!(agc.keyrupt(), Some(1));
        assert_eq!(agc.state.read_channel(ports::CHANNEL_MNKEYIN), 1);

        agc.state.inhint();
        assert_eq!(agc.keyrupt(), None);
        agc.state.relint();
        assert_eq!(agc.keyrupt(), Some(2));
    }

    #[test]
    fn test_display_scan() {
        let mut counter = ScanCounter {
            scans: 0,
            program: 0,
        };
        {
            let mut agc = Agc::with_display(&mut counter);
            agc.state.set_program(6);
            for _ in 0..7 {
                agc.step();
            }
        }
        assert_eq!(counter.scans, 3);
        assert_eq!(counter.program, 6);
    }
}
