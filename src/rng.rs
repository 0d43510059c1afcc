use rand_pcg::Pcg64;

/// PCG stream shared by every level; levels differ by state only.
const LEVEL_STREAM: u128 = 0x0a02_bdbf_7bb3_c0a7_ac28_fa16_a64a_bf96;

/// Deterministic RNG for a given (seed, level) pair.
///
/// The 128-bit PCG state holds `seed` in the high half and `level` in the low
/// half. Distinct pairs therefore start from distinct states, and equal inputs
/// replay the same placements.
#[inline]
pub fn rng_for_level(seed: u64, level: u64) -> Pcg64 {
    Pcg64::new((u128::from(seed) << 64) | u128::from(level), LEVEL_STREAM)
}
