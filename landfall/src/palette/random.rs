use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::Color;

/// Returns an opaque color with uniformly random channels.
pub fn random_color(rng: &mut impl Rng) -> Color {
    Color::rgb(rng.gen(), rng.gen(), rng.gen())
}

/// Returns `count` random colors.
///
/// The same `seed` always gives the same sequence. Without a seed the generator is seeded from
/// the OS entropy source.
pub fn random_colors(count: usize, seed: Option<u64>) -> Vec<Color> {
    let mut rng = match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    (0..count).map(|_| random_color(&mut rng)).collect()
}
