//! Integer math helpers
//!
//! No floating point: the target has no FPU.

use jolt_hal::RawSample;

/// Integer square root
///
/// Newton's method from `x0 = n`, stopping as soon as a refinement no
/// longer decreases the guess. Converging from above yields the largest
/// `r` with `r * r <= n`.
pub fn isqrt(n: u64) -> u32 {
    if n == 0 {
        return 0;
    }
    // `xk + n / xk` overflows for the very first step on u64::MAX
    if n == u64::MAX {
        return u32::MAX;
    }

    let mut xk = n;
    loop {
        let xk1 = (xk + n / xk) / 2;
        if xk1 >= xk {
            return xk as u32;
        }
        xk = xk1;
    }
}

/// Acceleration magnitude of a reading
///
/// The sum of squares is computed in 64 bits; three full-scale i16 axes
/// would overflow 32 bits. The result always fits a u16 for i16 inputs,
/// the saturation only guards the cast.
pub fn magnitude(sample: &RawSample) -> u16 {
    let sq = |v: i16| {
        let v = v as i64;
        (v * v) as u64
    };
    let sum = sq(sample.x) + sq(sample.y) + sq(sample.z);
    u16::try_from(isqrt(sum)).unwrap_or(u16::MAX)
}
