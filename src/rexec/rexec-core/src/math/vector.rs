use super::dp::{dp_add, dp_divide, dp_multiply, dp_pack, dp_sqrt, dp_sub, dp_unpack};
use super::{DoubleWord, Word};

/// Three DP components (X, Y, Z)
pub type Vector = [DoubleWord; 3];

/// 3x3 DP matrix, row-major
pub type Matrix = [[DoubleWord; 3]; 3];

/// Reads a vector stored as six words: X high/low, Y high/low, Z high/low
pub fn vector_from_words(words: &[Word; 6]) -> Vector {
    [
        dp_pack(words[0], words[1]),
        dp_pack(words[2], words[3]),
        dp_pack(words[4], words[5]),
    ]
}

pub fn vector_to_words(v: &Vector) -> [Word; 6] {
    let mut words = [0; 6];
    for (i, component) in v.iter().enumerate() {
        let (high, low) = dp_unpack(*component);
        words[i * 2] = high;
        words[i * 2 + 1] = low;
    }
    words
}

pub fn vec_add(a: &Vector, b: &Vector) -> Vector {
    [dp_add(a[0], b[0]), dp_add(a[1], b[1]), dp_add(a[2], b[2])]
}

pub fn vec_sub(a: &Vector, b: &Vector) -> Vector {
    [dp_sub(a[0], b[0]), dp_sub(a[1], b[1]), dp_sub(a[2], b[2])]
}

pub fn vec_cross(a: &Vector, b: &Vector) -> Vector {
    [
        dp_sub(dp_multiply(a[1], b[2]), dp_multiply(a[2], b[1])),
        dp_sub(dp_multiply(a[2], b[0]), dp_multiply(a[0], b[2])),
        dp_sub(dp_multiply(a[0], b[1]), dp_multiply(a[1], b[0])),
    ]
}

pub fn vec_dot(a: &Vector, b: &Vector) -> DoubleWord {
    a.iter()
        .zip(b.iter())
        .fold(0, |sum, (x, y)| dp_add(sum, dp_multiply(*x, *y)))
}

pub fn vec_magnitude(a: &Vector) -> DoubleWord {
    dp_sqrt(vec_dot(a, a))
}

/// Unit vector and the input's magnitude. A zero vector gives a zero
/// result rather than a division fault.
pub fn vec_unit(a: &Vector) -> (Vector, DoubleWord) {
    let mag = vec_magnitude(a);
    if mag == 0 {
        return ([0; 3], 0);
    }
    (
        [
            dp_divide(a[0], mag),
            dp_divide(a[1], mag),
            dp_divide(a[2], mag),
        ],
        mag,
    )
}

pub fn vec_scale(scalar: DoubleWord, v: &Vector) -> Vector {
    [
        dp_multiply(scalar, v[0]),
        dp_multiply(scalar, v[1]),
        dp_multiply(scalar, v[2]),
    ]
}

/// `M * v`
pub fn mat_vec_mul(m: &Matrix, v: &Vector) -> Vector {
    let mut result = [0; 3];
    for (row, out) in result.iter_mut().enumerate() {
        *out = vec_dot(&m[row], v);
    }
    result
}

/// `v * M`, i.e. the transpose applied to `v`
pub fn vec_mat_mul(v: &Vector, m: &Matrix) -> Vector {
    let mut result = [0; 3];
    for (col, out) in result.iter_mut().enumerate() {
        *out = (0..3).fold(0, |sum, row| dp_add(sum, dp_multiply(v[row], m[row][col])));
    }
    result
}
