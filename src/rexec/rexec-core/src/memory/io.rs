use crate::constants::{ports, NUM_CHANNELS};
use crate::memory::MemoryType;

use log::{debug, warn};

/// AGC I/O channel words. Channel numbers are octal as on the real machine;
/// anything past the last channel is ignored on write and reads as zero.
pub struct IoController {
    port_map: [u16; NUM_CHANNELS],
}

impl IoController {
    /// Creates the channel block in its power-up state
    pub fn new() -> Self {
        let mut controller = Self {
            port_map: [0; NUM_CHANNELS],
        };
        controller.reset();
        controller
    }

    /// Zeroes every channel, then loads the power-up pattern
    pub fn reset(&mut self) {
        self.port_map = [0; NUM_CHANNELS];
        // Standby not pressed, no warnings, IMU modes idle
        self.port_map[ports::CHANNEL_CHAN30] = ports::POWER_UP_PATTERN;
        self.port_map[ports::CHANNEL_CHAN31] = ports::POWER_UP_PATTERN;
        self.port_map[ports::CHANNEL_CHAN32] = ports::POWER_UP_PATTERN;
        self.port_map[ports::CHANNEL_CHAN33] = ports::POWER_UP_PATTERN;
    }

    pub fn read_port(&self, port: usize) -> u16 {
        match self.port_map.get(port) {
            Some(value) => *value,
            None => {
                warn!("Unknown I/O channel read: 0o{:o}", port);
                0
            }
        }
    }

    pub fn write_port(&mut self, port: usize, value: u16) {
        match self.port_map.get_mut(port) {
            Some(slot) => {
                debug!("Writing to I/O channel 0o{:o} with value 0o{:o}", port, value);
                *slot = value;
            }
            None => warn!("Unknown I/O channel write: 0o{:o}", port),
        }
    }

    /// WOR: OR bits into a channel
    pub fn set_bits(&mut self, port: usize, mask: u16) {
        let value = self.read_port(port) | mask;
        self.write_port(port, value);
    }

    /// WAND with the complement: clear bits in a channel
    pub fn clear_bits(&mut self, port: usize, mask: u16) {
        let value = self.read_port(port) & !mask;
        self.write_port(port, value);
    }
}

impl MemoryType for IoController {
    type Value = u16;

    fn read(&self, _bank: usize, port: usize) -> u16 {
        self.read_port(port)
    }

    fn write(&mut self, _bank: usize, port: usize, value: u16) {
        self.write_port(port, value)
    }
}
