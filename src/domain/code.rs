//! Genetic code arithmetic on the 256-point ring

/// Weight of the attacking strain when it takes over a victim.
pub const STRAIN_DOMINANCE: f64 = 0.999;

/// Number of color buckets in the per-tick histogram (top 3 bits of a code).
pub const COLOR_BUCKETS: usize = 8;

/// Shorter-arc distance between two codes, in [0, 128].
#[inline]
pub fn code_diff(a: u8, b: u8) -> u8 {
    let d = (a as i16 - b as i16).unsigned_abs();
    if d > 127 {
        (256 - d) as u8
    } else {
        d as u8
    }
}

/// Midpoint of two codes on the ring.
///
/// There are always two candidate midpoints 128 apart; this picks the one
/// geometrically closer to both parents.
#[inline]
pub fn circular_mean(c0: u8, c1: u8) -> u8 {
    let m = (c0 as i32 + c1 as i32) >> 1;
    let d = m - c0 as i32;
    let m = if d > -64 && d < 64 { m } else { m + 128 };
    (m & 0xff) as u8
}

/// New strain written into an infected victim: mostly the attacker's code with
/// a small drift toward the victim's prior code. Truncated to the ring here.
#[inline]
pub fn blend_strain(attacker: u8, victim: u8) -> u8 {
    let blended = STRAIN_DOMINANCE * attacker as f64 + (1.0 - STRAIN_DOMINANCE) * victim as f64;
    (blended as i32 & 0xff) as u8
}

/// Apply a signed, fractional mutation offset. The sum is truncated toward
/// zero and wrapped onto the ring with two's-complement masking.
#[inline]
pub fn shift_code(code: u8, offset: f64) -> u8 {
    ((code as f64 + offset) as i32 & 0xff) as u8
}

/// Histogram bucket for a code: one of 8 arcs of 32 codes each.
#[inline]
pub fn color_bucket(code: u8) -> usize {
    (code >> 5) as usize
}
