use crate::constants::{timers, NUM_TIMERS};
use crate::constants::word::POSMAX;
use crate::math::Word;
use crate::memory::MemoryType;
use log::warn;

/// TIME1 through TIME6. TIME1/TIME2 form the mission elapsed time clock,
/// the others are countdown registers owned by application code.
pub struct Clocks {
    registers: [Word; NUM_TIMERS],
}

impl Clocks {
    pub fn new() -> Self {
        Self {
            registers: [0; NUM_TIMERS],
        }
    }

    pub fn reset(&mut self) {
        self.registers = [0; NUM_TIMERS];
    }

    /// Bumps TIME1 one centisecond. Past the word maximum it wraps to zero
    /// and carries into TIME2, which wraps the same way.
    pub fn advance_elapsed(&mut self) {
        let time1 = &mut self.registers[timers::TIME1 - 1];
        if *time1 >= POSMAX {
            *time1 = 0;
            let time2 = &mut self.registers[timers::TIME2 - 1];
            *time2 = if *time2 >= POSMAX { 0 } else { *time2 + 1 };
        } else {
            *time1 += 1;
        }
    }

    pub fn get_time(&self, number: usize) -> Word {
        self.read(0, number)
    }

    pub fn set_time(&mut self, number: usize, value: Word) {
        self.write(0, number, value)
    }
}

/// Timer registers addressed by number, 1 through 6
impl MemoryType for Clocks {
    type Value = Word;

    fn read(&self, _bank: usize, number: usize) -> Word {
        match number {
            timers::TIME1..=timers::TIME6 => self.registers[number - 1],
            _ => {
                warn!("Invalid timer register read: TIME{}", number);
                0
            }
        }
    }

    fn write(&mut self, _bank: usize, number: usize, value: Word) {
        match number {
            timers::TIME1..=timers::TIME6 => self.registers[number - 1] = value,
            _ => warn!("Invalid timer register write: TIME{}", number),
        }
    }
}

#[cfg(test)]
mod clock_tests {
    use super::*;

    #[test]
    fn test_time1_carries_into_time2() {
        let mut clocks = Clocks::new();
        clocks.set_time(timers::TIME1, 16382);
        clocks.advance_elapsed();
        assert_eq!(clocks.get_time(timers::TIME1), 16383);
        clocks.advance_elapsed();
        assert_eq!(clocks.get_time(timers::TIME1), 0);
        assert_eq!(clocks.get_time(timers::TIME2), 1);
    }

    #[test]
    fn test_time2_wraps() {
        let mut clocks = Clocks::new();
        clocks.set_time(timers::TIME1, 16383);
        clocks.set_time(timers::TIME2, 16383);
        clocks.advance_elapsed();
        assert_eq!(clocks.get_time(timers::TIME1), 0);
        assert_eq!(clocks.get_time(timers::TIME2), 0);
    }

    #[test]
    fn test_invalid_register() {
        let mut clocks = Clocks::new();
        clocks.set_time(0, 5);
        clocks.set_time(7, 5);
        assert_eq!(clocks.get_time(0), 0);
        assert_eq!(clocks.get_time(7), 0);
    }
}
