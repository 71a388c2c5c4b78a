mod clock;
mod flags;
mod io;
mod memory;

use crate::constants;
use crate::math::Word;
use log::warn;

/// Bank-addressed storage shared by the erasable, channel and timer blocks
trait MemoryType {
    type Value;

    fn read(&self, bank_idx: usize, bank_offset: usize) -> Self::Value;
    fn write(&mut self, bank_idx: usize, bank_offset: usize, value: Self::Value);
}

/// Register and memory state of the machine: erasable banks, I/O channels,
/// flagwords, timers, the E-bank register, the running program number and
/// the interrupt inhibit.
///
/// Every accessor is bounds checked. Out of range indices are a no-op on
/// write and read back as zero.
pub struct MachineState {
    ram: memory::Ram,        // Erasable memory
    io: io::IoController,    // I/O channel words
    flags: flags::FlagWords, // FLAGWRD0-11
    timers: clock::Clocks,   // TIME1-TIME6

    erasable_bank: usize,
    program: u16,
    inhibited: bool,
}

impl MachineState {
    pub fn new() -> Self {
        let mut state = MachineState {
            ram: memory::Ram::new(),
            io: io::IoController::new(),
            flags: flags::FlagWords::new(),
            timers: clock::Clocks::new(),
            erasable_bank: 0,
            program: 0,
            inhibited: false,
        };
        state.reset();
        state
    }

    /// Zeroes memory, channels, flags and timers, then restores the
    /// power-up channel pattern
    pub fn reset(&mut self) {
        self.ram.reset();
        self.io.reset();
        self.flags.reset();
        self.timers.reset();
        self.erasable_bank = 0;
        self.program = 0;
        self.inhibited = false;
    }

    // Erasable memory

    pub fn read_erasable(&self, bank: usize, addr: usize) -> Word {
        self.ram.read(bank, addr)
    }

    pub fn write_erasable(&mut self, bank: usize, addr: usize, value: Word) {
        self.ram.write(bank, addr, value)
    }

    /// Reads through the E-bank register
    pub fn read_banked(&self, addr: usize) -> Word {
        self.ram.read(self.erasable_bank, addr)
    }

    /// Writes through the E-bank register
    pub fn write_banked(&mut self, addr: usize, value: Word) {
        self.ram.write(self.erasable_bank, addr, value)
    }

    pub fn erasable_bank(&self) -> usize {
        self.erasable_bank
    }

    pub fn set_erasable_bank(&mut self, bank: usize) {
        if bank >= constants::MEMORY_SEGMENTS {
            warn!("Invalid E-bank select: {}", bank);
            return;
        }
        self.erasable_bank = bank;
    }

    // I/O channels

    pub fn read_channel(&self, channel: usize) -> u16 {
        self.io.read(0, channel)
    }

    pub fn write_channel(&mut self, channel: usize, value: u16) {
        self.io.write(0, channel, value)
    }

    pub fn channel_set_bits(&mut self, channel: usize, mask: u16) {
        self.io.set_bits(channel, mask)
    }

    pub fn channel_clear_bits(&mut self, channel: usize, mask: u16) {
        self.io.clear_bits(channel, mask)
    }

    // Flagwords

    pub fn flag_set(&mut self, flagword: usize, mask: u16) {
        self.flags.set(flagword, mask)
    }

    pub fn flag_clear(&mut self, flagword: usize, mask: u16) {
        self.flags.clear(flagword, mask)
    }

    pub fn flag_test(&self, flagword: usize, mask: u16) -> bool {
        self.flags.test(flagword, mask)
    }

    pub fn flagword(&self, flagword: usize) -> u16 {
        self.flags.word(flagword)
    }

    // Timers

    /// Reads TIME1 through TIME6 by number
    pub fn read_timer(&self, number: usize) -> Word {
        self.timers.get_time(number)
    }

    pub fn write_timer(&mut self, number: usize, value: Word) {
        self.timers.set_time(number, value)
    }

    pub(crate) fn fetch_clocks(&mut self) -> &mut clock::Clocks {
        &mut self.timers
    }

    // Program number and interrupt inhibit

    pub fn program(&self) -> u16 {
        self.program
    }

    pub fn set_program(&mut self, program: u16) {
        self.program = program;
    }

    /// INHINT: suppress T3RUPT and T4RUPT dispatch
    pub fn inhint(&mut self) {
        self.inhibited = true;
    }

    /// RELINT: release the inhibit
    pub fn relint(&mut self) {
        self.inhibited = false;
    }

    pub fn is_inhibited(&self) -> bool {
        self.inhibited
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
