//! Choosing one quote out of the extracted candidates.

use rand::Rng;

/// Pick one quote uniformly at random.
///
/// A single candidate is returned as is. Returns `None` only for an
/// empty slice, which a successful extraction never produces.
pub fn choose_quote<'a, R: Rng + ?Sized>(quotes: &'a [String], rng: &mut R) -> Option<&'a str> {
    match quotes.len() {
        0 => None,
        1 => Some(quotes[0].as_str()),
        n => Some(quotes[rng.gen_range(0..n)].as_str()),
    }
}
