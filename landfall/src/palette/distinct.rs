use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::Color;

/// Seed of the candidate search when the caller does not provide one.
pub(crate) const DEFAULT_DISTINCT_SEED: u64 = 42;

/// Number of random candidates checked for every new color.
const CANDIDATES: usize = 1000;

/// Colors that are never generated, since they are indistinguishable from map labels and
/// backgrounds. Channels are in `0.0..=1.0`.
const EXCLUDED: [[f64; 3]; 2] = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

/// Generates `count` colors that are as distinct from each other as possible.
///
/// See [`get_distinct_colors`] for the algorithm and parameters.
pub fn distinct_colors(count: usize, pastel_factor: f64, seed: Option<u64>) -> Vec<Color> {
    get_distinct_colors(count, pastel_factor, seed)
        .into_iter()
        .map(|(r, g, b)| Color::rgb(r, g, b))
        .collect()
}

/// Generates `qty` perceptually distinct RGB triples.
///
/// Colors are picked greedily: for every new color a fixed number of random candidates is
/// generated and the one farthest from all colors picked so far (and from black and white) is
/// taken. Distance is the "redmean" weighted euclidean RGB distance.
///
/// `pastel_factor` above zero shifts candidates towards lighter tones. Without a `seed` a fixed
/// default seed is used, so the same call always returns the same colors.
pub fn get_distinct_colors(qty: usize, pastel_factor: f64, seed: Option<u64>) -> Vec<(u8, u8, u8)> {
    let mut rng = Pcg64::seed_from_u64(seed.unwrap_or(DEFAULT_DISTINCT_SEED));
    let mut picked: Vec<[f64; 3]> = Vec::with_capacity(qty);

    for _ in 0..qty {
        let best = (0..CANDIDATES)
            .map(|_| candidate(&mut rng, pastel_factor))
            .map(|c| (c, min_distance(&c, &picked)))
            .fold(None, |best: Option<([f64; 3], f64)>, (c, d)| match best {
                Some((_, best_d)) if best_d >= d => best,
                _ => Some((c, d)),
            });

        if let Some((color, _)) = best {
            picked.push(color);
        }
    }

    picked
        .into_iter()
        .map(|[r, g, b]| (to_channel(r), to_channel(g), to_channel(b)))
        .collect()
}

fn candidate(rng: &mut impl Rng, pastel_factor: f64) -> [f64; 3] {
    let mut channel = || (rng.gen::<f64>() + pastel_factor) / (1.0 + pastel_factor);
    [channel(), channel(), channel()]
}

fn min_distance(color: &[f64; 3], picked: &[[f64; 3]]) -> f64 {
    EXCLUDED
        .iter()
        .chain(picked)
        .map(|other| color_distance(color, other))
        .fold(f64::INFINITY, f64::min)
}

/// "Redmean" distance between two colors with channels in `0.0..=1.0`.
fn color_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let mean_r = (a[0] + b[0]) / 2.0;
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];

    ((2.0 + mean_r) * dr * dr + 4.0 * dg * dg + (3.0 - mean_r) * db * db).sqrt()
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).clamp(0.0, 255.0) as u8
}
