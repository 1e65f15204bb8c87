// src/core/random.rs
use rand::Rng;
use rand::distr::Alphanumeric;

/// Returns `length` characters drawn uniformly from `[a-zA-Z0-9]`.
///
/// Uses the thread-local generator, which is seeded from the operating
/// system once per thread.
#[inline]
#[must_use]
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::rng(), length)
}

/// Same as [`generate`] but draws from the supplied generator.
#[inline]
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
