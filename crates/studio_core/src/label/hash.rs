//! Stable string hash shared by icon and color derivation.
//!
//! # Invariants
//! - Input is consumed as UTF-16 code units, so non-BMP characters contribute
//!   two units (surrogate pair) each.
//! - Arithmetic is signed 32-bit with wraparound on every step.
//! - Bucket selection uses the absolute value widened to 64 bits, so
//!   `i32::MIN` maps to `2^31` and never overflows.

/// Rolling polynomial hash: `h = h * 31 + unit`, starting at zero.
pub fn label_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0_i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Maps `value` onto `0..len` via `|label_hash(value)| mod len`.
///
/// `len` must be non-zero; callers index non-empty tables only.
pub fn label_bucket(value: &str, len: usize) -> usize {
    debug_assert!(len > 0, "bucket table must not be empty");
    let magnitude = i64::from(label_hash(value)).unsigned_abs();
    (magnitude % len as u64) as usize
}
