//! SP and DP trigonometry.
//!
//! Angles are scaled in half-revolutions: a single word of 16384 is PI, so a
//! quarter turn is 8192. DP angles and results carry the single precision
//! value in their high word (DP 2^28 is PI for angles, 1.0 for results).

use super::dp::{dp_divide, dp_multiply, dp_pack, dp_sqrt, dp_unpack};
use super::{overflow_correct, DoubleWord, Word};
use crate::constants::word::{DP_MAX, LOW_BITS, NEGMAX, POSMAX, QUARTER, WRAP};

// Polynomial coefficients for sin(PI/2 * x) / 2, scaled at 1
const C1_2: i32 = 0o31103;
const C3_2: i32 = -0o12225;
const C5_2: i32 = 0o01124;

// PI * 2^13 and 2^15 / PI
const PI_Q13: i64 = 25736;
const INV_PI_Q15: i64 = 10430;

const DP_QUARTER: DoubleWord = QUARTER << LOW_BITS;

// Largest DP magnitude treated as a sine/cosine inside (-1, 1)
const DP_UNITY: DoubleWord = (POSMAX as i32) << LOW_BITS;

/// Single precision sine, angle in half-revolutions, result scaled at 1
pub fn sp_sin(angle: Word) -> Word {
    let posmax = POSMAX as i32;
    let negmax = NEGMAX as i32;

    let temk = overflow_correct(angle as i32) as i32;

    // Double into quarter-turn units; an overflow means the second or third
    // quadrant, which folds back about the quarter turn
    let mut reduced = temk * 2;
    if reduced > posmax {
        reduced = WRAP - reduced;
        if reduced >= posmax {
            return POSMAX;
        }
    } else if reduced < negmax {
        reduced = -WRAP - reduced;
        if reduced <= negmax {
            return NEGMAX;
        }
    }

    let sq = (reduced * reduced) >> LOW_BITS;
    let mut acc = C5_2;
    acc = ((sq * acc) >> LOW_BITS) + C3_2;
    acc = ((sq * acc) >> LOW_BITS) + C1_2;
    acc = (reduced * acc) >> LOW_BITS;

    // DDOUBL, saturating like the limit table does on overflow
    (acc * 2).max(negmax).min(posmax) as Word
}

/// Single precision cosine: sine of the angle advanced a quarter turn
pub fn sp_cos(angle: Word) -> Word {
    sp_sin(overflow_correct(angle as i32 + QUARTER))
}

// Low word of an angle expressed in result units: l * PI * f / 2^14
fn low_correction(low: Word, factor: Word) -> DoubleWord {
    ((low as i64 * factor as i64 * PI_Q13) >> (LOW_BITS + 13)) as DoubleWord
}

/// DP sine: SP sine of the high word plus the first order term of the low
/// word
pub fn dp_sin(angle: DoubleWord) -> DoubleWord {
    let (high, low) = dp_unpack(angle);
    dp_pack(sp_sin(high), 0) + low_correction(low, sp_cos(high))
}

/// DP cosine: SP cosine of the high word minus the first order term of the
/// low word
pub fn dp_cos(angle: DoubleWord) -> DoubleWord {
    let (high, low) = dp_unpack(angle);
    dp_pack(sp_cos(high), 0) - low_correction(low, sp_sin(high))
}

/// DP arcsine by Newton iteration on `sin(x) = value`; input scaled at 1,
/// result in half-revolutions
pub fn dp_asin(value: DoubleWord) -> DoubleWord {
    if value >= DP_UNITY {
        return DP_QUARTER;
    }
    if value <= -DP_UNITY {
        return -DP_QUARTER;
    }

    // asin(v) ~ v radians for small v
    let mut x = ((value as i64 * INV_PI_Q15) >> 15) as DoubleWord;
    for _ in 0..15 {
        let cosx = dp_cos(x);
        if cosx == 0 {
            break;
        }
        let err = value as i64 - dp_sin(x) as i64;
        // Step in radians scaled at 2^28, then into half-revolutions
        let step = ((err << 28) / cosx as i64).max(-(DP_MAX as i64)).min(DP_MAX as i64);
        let dx = ((step * INV_PI_Q15) >> 15) as DoubleWord;
        x = x.saturating_add(dx);
        if dx.abs() < 2 {
            break;
        }
    }
    x
}

/// DP arccosine: a quarter turn less the arcsine
pub fn dp_acos(value: DoubleWord) -> DoubleWord {
    DP_QUARTER - dp_asin(value)
}

/// DP two-argument arctangent. `y` and `x` share DP scaling (1.0 = 16384);
/// the result is in half-revolutions.
pub fn dp_atan2(y: DoubleWord, x: DoubleWord) -> DoubleWord {
    if x == 0 && y == 0 {
        return 0;
    }

    let mag = dp_sqrt(dp_multiply(x, x).saturating_add(dp_multiply(y, y)));
    if mag == 0 {
        return 0;
    }

    // y / |r| in DP scaling, lifted into sine scaling for the arcsine
    let ratio = dp_divide(y, mag) as i64;
    let ratio = (ratio << LOW_BITS).max(-(DP_UNITY as i64)).min(DP_UNITY as i64);
    let result = dp_asin(ratio as DoubleWord);

    let half_turn = dp_pack(POSMAX, 0);
    if x < 0 {
        if y >= 0 {
            half_turn - result
        } else {
            -half_turn - result
        }
    } else {
        result
    }
}

/// Whole degrees to a DP angle in half-revolutions
pub fn degrees_to_angle(degrees: i32) -> DoubleWord {
    ((degrees as i64 * (1i64 << 28)) / 180) as DoubleWord
}
