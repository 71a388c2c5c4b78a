use log::info;
use rexec_core::constants::{lights, ports};
use rexec_core::memory::MachineState;
use rexec_core::DisplayPeriph;

/// Lamps reported by name when they change
const LAMPS: [(u16, &str); 13] = [
    (lights::COMP_ACTY, "COMP ACTY"),
    (lights::UPLINK_ACTY, "UPLINK ACTY"),
    (lights::TEMP, "TEMP"),
    (lights::KEY_REL, "KEY REL"),
    (lights::VEL, "VEL"),
    (lights::NO_ATT, "NO ATT"),
    (lights::ALT, "ALT"),
    (lights::GIMBAL_LOCK, "GIMBAL LOCK"),
    (lights::TRACKER, "TRACKER"),
    (lights::PROG, "PROG"),
    (lights::OPR_ERR, "OPR ERR"),
    (lights::STBY, "STBY"),
    (lights::RESTART, "RESTART"),
];

/// Console stand-in for the DSKY: logs relay words, lamps and the major
/// mode whenever a scan sees them change
pub struct ConsoleDisplay {
    relay_word: u16,
    lamps: u16,
    program: Option<u16>,
    scans: u64,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        ConsoleDisplay {
            relay_word: 0,
            lamps: 0,
            program: None,
            scans: 0,
        }
    }

    pub fn scans(&self) -> u64 {
        self.scans
    }
}

impl DisplayPeriph for ConsoleDisplay {
    fn scan(&mut self, state: &MachineState) {
        self.scans += 1;

        let relay_word = state.read_channel(ports::CHANNEL_OUT0);
        if relay_word != self.relay_word {
            info!("OUT0 relay word {:05o}", relay_word);
            self.relay_word = relay_word;
        }

        let lamps = state.read_channel(ports::CHANNEL_DSALMOUT);
        let changed = lamps ^ self.lamps;
        for (mask, name) in LAMPS.iter() {
            // COMP ACTY blinks with every job, keep it out of the log
            if changed & mask == 0 || *mask == lights::COMP_ACTY {
                continue;
            }
            let status = if lamps & mask != 0 { "on" } else { "off" };
            info!("{} {}", name, status);
        }
        self.lamps = lamps;

        let program = state.program();
        if self.program != Some(program) {
            info!("PROG {:02}", program);
            self.program = Some(program);
        }
    }
}

#[cfg(test)]
mod console_tests {
    use super::*;

    #[test]
    fn test_tracks_last_seen_words() {
        let mut display = ConsoleDisplay::new();
        let mut state = MachineState::new();
        state.set_program(6);
        state.write_channel(ports::CHANNEL_OUT0, 0o12345);
        state.channel_set_bits(ports::CHANNEL_DSALMOUT, lights::PROG);

        display.scan(&state);
        assert_eq!(display.scans(), 1);
        assert_eq!(display.relay_word, 0o12345);
        assert_eq!(display.lamps, lights::PROG);
        assert_eq!(display.program, Some(6));
    }
}
