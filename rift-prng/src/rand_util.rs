use crate::PseudoRandomNumberGenerator;

/// One past the largest value [`PseudoRandomNumberGenerator::next`] returns.
const SPAN: f64 = (1u64 << 32) as f64;

/// Draws once and succeeds with probability `numerator / denominator`.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next() % denominator < numerator
}

/// Draws an integer in `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    min + prng.next() % (max - min)
}

/// Draws a float in `[0, 1)`.
pub fn unit(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    prng.next() as f64 / SPAN
}

/// Draws a float between `min` and `max`.
pub fn uniform(prng: &mut dyn PseudoRandomNumberGenerator, min: f64, max: f64) -> f64 {
    let t = unit(prng);
    min + t * (max - min)
}

/// Picks one element. Slices with fewer than two elements do not consume a draw.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    match slice.len() {
        0 | 1 => slice.first(),
        len => slice.get(range(prng, 0, len as u64) as usize),
    }
}

/// Shuffles in place, drawing once per position except the last.
pub fn shuffle<T>(prng: &mut dyn PseudoRandomNumberGenerator, items: &mut [T]) {
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let j = range(prng, i as u64, len as u64) as usize;
        items.swap(i, j);
    }
}
