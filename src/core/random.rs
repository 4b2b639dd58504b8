/// Random number generator (xorshift32)
///
/// Only used for the randomized initial fill, so speed and reproducibility
/// from a fixed seed matter more than quality.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Fill rule producing values in `0..range` from a seeded xorshift stream.
/// A zero seed would lock xorshift at zero forever, so it is bumped to 1.
pub fn random_fill(seed: u32, range: u32) -> impl FnMut(u32, u32) -> u32 {
    let mut state = if seed == 0 { 1 } else { seed };
    let range = range.max(1);
    move |_, _| xorshift32(&mut state) % range
}
