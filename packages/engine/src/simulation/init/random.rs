const DEFAULT_SEED: u32 = 12345;

/// Seed for the spawn rng; xorshift needs a non-zero state.
pub(super) fn seed(configured: Option<u32>) -> u32 {
    match configured {
        Some(0) | None => DEFAULT_SEED,
        Some(s) => s,
    }
}

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform sample in [0, 1)
#[inline]
pub(super) fn unit(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}
