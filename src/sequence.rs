use crate::errors::SumbenchError;

/// Largest sequence length whose indices all fit in an `i32` element.
pub const MAX_SIZE: usize = i32::MAX as usize + 1;

/// Builds `[0, 1, ..., size - 1]`.
pub fn build_sequence(size: usize) -> Result<Vec<i32>, SumbenchError> {
    if size > MAX_SIZE {
        return Err(SumbenchError::SizeTooLarge {
            size,
            max: MAX_SIZE,
        });
    }
    let mut seq = Vec::with_capacity(size);
    for i in 0..size {
        seq.push(i as i32);
    }
    Ok(seq)
}

/// Sums the sequence front to back, in index order, into a 64-bit accumulator.
#[inline(never)]
#[allow(clippy::needless_range_loop)]
pub fn sum_sequence(seq: &[i32]) -> i64 {
    let mut sum: i64 = 0;
    for i in 0..seq.len() {
        sum += seq[i] as i64;
    }
    sum
}

/// Closed-form `0 + 1 + ... + (size - 1)`.
pub fn expected_sum(size: usize) -> i64 {
    let n = size as i64;
    n * (n - 1) / 2
}
