use crate::constants;
use crate::math::Word;
use crate::memory::MemoryType;
use log::warn;

/// Implements AGC's erasable memory: eight E-banks of 256 words each.
/// Accesses outside the banks are dropped and read back as zero.
pub struct Ram {
    memory_banks: [[Word; constants::MEMORY_SEGMENT_SIZE]; constants::MEMORY_SEGMENTS],
}

impl Ram {
    pub fn new() -> Self {
        Self {
            memory_banks: [[0; constants::MEMORY_SEGMENT_SIZE]; constants::MEMORY_SEGMENTS],
        }
    }

    pub fn reset(&mut self) {
        self.memory_banks = [[0; constants::MEMORY_SEGMENT_SIZE]; constants::MEMORY_SEGMENTS];
    }

    fn in_range(bank_index: usize, address_offset: usize) -> bool {
        bank_index < constants::MEMORY_SEGMENTS && address_offset < constants::MEMORY_SEGMENT_SIZE
    }
}

impl MemoryType for Ram {
    type Value = Word;

    fn read(&self, bank_index: usize, address_offset: usize) -> Word {
        if !Self::in_range(bank_index, address_offset) {
            warn!(
                "Erasable read out of range (E{}, 0o{:o})",
                bank_index, address_offset
            );
            return 0;
        }
        self.memory_banks[bank_index][address_offset]
    }

    fn write(&mut self, bank_index: usize, address_offset: usize, value: Word) {
        if !Self::in_range(bank_index, address_offset) {
            warn!(
                "Erasable write out of range (E{}, 0o{:o})",
                bank_index, address_offset
            );
            return;
        }
        self.memory_banks[bank_index][address_offset] = value;
    }
}
