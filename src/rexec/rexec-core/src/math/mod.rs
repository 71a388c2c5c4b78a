//! Fixed-point numeric model of the AGC.
//!
//! Single precision words are 15 data bits plus sign, 1's complement on the
//! real machine. They are hosted here in 2's complement `i16`, so the
//! distinct +0 and -0 encodings collapse to one zero. Every operation stays
//! inside [`POSMAX`](crate::constants::word::POSMAX) and never faults: bad
//! inputs produce a defined result instead.

pub mod dp;
pub mod trig;
pub mod vector;

use crate::constants::word::{LOW_BITS, NEGMAX, POSMAX, WRAP};

pub use dp::*;
pub use trig::*;
pub use vector::*;

/// Single precision word, range [-16383, +16383]
pub type Word = i16;

/// Double precision value: high word (sign + 14 integer bits) and low word
/// (14 fraction bits) packed into one integer
pub type DoubleWord = i32;

/// Outcome of the CCS instruction's four-way skip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CcsBranch {
    Positive,
    PlusZero,
    Negative,
    /// Unreachable with a 2's complement host: -0 reads back as +0
    MinusZero,
}

/// Brings a widened sum back into word range by wrapping through +-0,
/// the way the end-around carry does on the real adder.
pub fn overflow_correct(value: i32) -> Word {
    if value > POSMAX as i32 || value < NEGMAX as i32 {
        // Same result as stepping by a full turn until back in range
        let posmax = POSMAX as i64;
        return ((value as i64 + posmax).rem_euclid(WRAP as i64) - posmax) as Word;
    }
    value as Word
}

/// 1's complement add with overflow correction
pub fn add(a: Word, b: Word) -> Word {
    overflow_correct(a as i32 + b as i32)
}

/// 1's complement subtract, `a + (-b)`
pub fn sub(a: Word, b: Word) -> Word {
    overflow_correct(a as i32 - b as i32)
}

pub fn negate(value: Word) -> Word {
    overflow_correct(-(value as i32))
}

pub fn abs(value: Word) -> Word {
    if value < 0 {
        negate(value)
    } else {
        value
    }
}

/// Diminished absolute value as left in A by CCS: |v| - 1, or 0 for zero
pub fn diminished_abs(value: Word) -> Word {
    match value {
        0 => 0,
        v if v > 0 => v - 1,
        v => overflow_correct(-(v as i32) - 1),
    }
}

pub fn ccs_branch(value: Word) -> CcsBranch {
    if value > 0 {
        CcsBranch::Positive
    } else if value == 0 {
        CcsBranch::PlusZero
    } else {
        CcsBranch::Negative
    }
}

/// Single precision multiply, both operands scaled at 1 (16384)
pub fn sp_multiply(a: Word, b: Word) -> Word {
    overflow_correct((a as i32 * b as i32) >> LOW_BITS)
}
