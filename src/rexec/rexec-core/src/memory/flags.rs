use crate::constants::NUM_FLAGWORDS;
use log::warn;

/// FLAGWRD0 through FLAGWRD11, the bit-vector switches of UPFLAG/DOWNFLAG
pub struct FlagWords {
    words: [u16; NUM_FLAGWORDS],
}

impl FlagWords {
    pub fn new() -> Self {
        Self {
            words: [0; NUM_FLAGWORDS],
        }
    }

    pub fn reset(&mut self) {
        self.words = [0; NUM_FLAGWORDS];
    }

    /// UPFLAG
    pub fn set(&mut self, flagword: usize, mask: u16) {
        match self.words.get_mut(flagword) {
            Some(word) => *word |= mask,
            None => warn!("UPFLAG on invalid flagword {}", flagword),
        }
    }

    /// DOWNFLAG
    pub fn clear(&mut self, flagword: usize, mask: u16) {
        match self.words.get_mut(flagword) {
            Some(word) => *word &= !mask,
            None => warn!("DOWNFLAG on invalid flagword {}", flagword),
        }
    }

    /// True if any bit of `mask` is set
    pub fn test(&self, flagword: usize, mask: u16) -> bool {
        self.word(flagword) & mask != 0
    }

    pub fn word(&self, flagword: usize) -> u16 {
        self.words.get(flagword).copied().unwrap_or(0)
    }
}
