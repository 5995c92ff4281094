use ahash::{HashSet, HashSetExt};

/// Converts HSV color (all components in `0.0..=1.0`) into RGB channels.
///
/// Hue `0.0` is red, `1/3` green and `2/3` blue. Each channel is rounded to the nearest integer.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let (r, g, b) = hsv_to_rgb_f64(h, s, v);
    (to_channel(r), to_channel(g), to_channel(b))
}

fn hsv_to_rgb_f64(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Returns up to `count` unique colors evenly spaced around the hue circle, in hue order.
///
/// For huge counts neighbouring hues can round to the same RGB triple. Such duplicates are
/// dropped, so the result may be shorter than `count`.
pub fn wheel_colors(count: usize) -> Vec<(u8, u8, u8)> {
    let mut seen = HashSet::with_capacity(count);
    (0..count)
        .map(|i| hsv_to_rgb(i as f64 / count as f64, 1.0, 1.0))
        .filter(|rgb| seen.insert(*rgb))
        .collect()
}
