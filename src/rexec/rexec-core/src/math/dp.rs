use super::{DoubleWord, Word};
use crate::constants::word::{DP_MAX, LOW_BITS, LOW_MASK, POSMAX};

/// Packs a high/low word pair. The low word takes the sign of the high
/// word (or its own sign when the high word is zero) and only its 14
/// magnitude bits are kept.
pub fn dp_pack(high: Word, low: Word) -> DoubleWord {
    let negative = high < 0 || (high == 0 && low < 0);
    let magnitude = (low as i32).abs() & LOW_MASK;
    let upper = (high as i32) << LOW_BITS;
    if negative {
        upper - magnitude
    } else {
        upper + magnitude
    }
}

/// Splits a DP value into sign-matched high and low words. Magnitudes past
/// the largest representable pair saturate to +-(POSMAX, POSMAX).
pub fn dp_unpack(value: DoubleWord) -> (Word, Word) {
    let scale = 1i64 << LOW_BITS;
    let magnitude = (value as i64).abs();
    let (high, low) = if magnitude / scale > POSMAX as i64 {
        (POSMAX, LOW_MASK as Word)
    } else {
        ((magnitude / scale) as Word, (magnitude % scale) as Word)
    };

    if value < 0 {
        (-high, -low)
    } else {
        (high, low)
    }
}

pub fn dp_add(a: DoubleWord, b: DoubleWord) -> DoubleWord {
    a.wrapping_add(b)
}

pub fn dp_sub(a: DoubleWord, b: DoubleWord) -> DoubleWord {
    a.wrapping_sub(b)
}

fn clamp_dp(value: i64) -> DoubleWord {
    value.max(-(DP_MAX as i64)).min(DP_MAX as i64) as DoubleWord
}

/// `(a * b) >> 14`, clamped to +-(2^29 - 1)
pub fn dp_multiply(a: DoubleWord, b: DoubleWord) -> DoubleWord {
    clamp_dp((a as i64 * b as i64) >> LOW_BITS)
}

/// `(a << 14) / b`, clamped to +-(2^29 - 1). Dividing by zero yields the
/// clamp value with the dividend's sign.
pub fn dp_divide(a: DoubleWord, b: DoubleWord) -> DoubleWord {
    if b == 0 {
        return if a >= 0 { DP_MAX } else { -DP_MAX };
    }
    clamp_dp(((a as i64) << LOW_BITS) / b as i64)
}

pub fn dp_abs(value: DoubleWord) -> DoubleWord {
    value.wrapping_abs()
}

pub fn dp_negate(value: DoubleWord) -> DoubleWord {
    value.wrapping_neg()
}

pub fn dp_sign(value: DoubleWord) -> i32 {
    value.signum()
}

/// Newton-Raphson square root in DP scaling (1.0 = 16384), 0 for
/// non-positive input
pub fn dp_sqrt(value: DoubleWord) -> DoubleWord {
    if value <= 0 {
        return 0;
    }

    let target = (value as i64) << LOW_BITS;
    let mut x = (value >> 1).max(1) as i64;
    for _ in 0..20 {
        if x == 0 {
            break;
        }
        let prev = x;
        x = (x + target / x) >> 1;
        if x == prev {
            break;
        }
    }
    x as DoubleWord
}

/// Converts a DP value to an integer for display: shift by the binary
/// scale exponent, then drop the 14 fraction bits
pub fn dp_to_display(value: DoubleWord, scale_exp: i32) -> i32 {
    let scaled = if scale_exp >= 0 {
        (value as i64) << scale_exp.min(32)
    } else {
        (value as i64) >> (-scale_exp).min(63)
    };
    (scaled >> LOW_BITS) as i32
}
