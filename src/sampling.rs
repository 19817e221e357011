use rand::Rng;

/// Pick a value from ordered `(value, weight)` pairs.
///
/// Draws one uniform number in `[0, 1)` and returns the first entry whose
/// cumulative weight reaches it. If the weights sum to slightly less than 1
/// the last entry absorbs the remainder.
///
/// # Panics
///
/// Panics if `options` is empty.
pub fn weighted_choice<'a, T, R: Rng + ?Sized>(rng: &mut R, options: &'a [(T, f64)]) -> &'a T {
    let roll: f64 = rng.random();
    let mut cumulative = 0.0;
    for (value, weight) in options {
        cumulative += weight;
        if roll <= cumulative {
            return value;
        }
    }
    &options[options.len() - 1].0
}

/// Uniform pick from a non-empty slice.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Uniform float in `[lo, hi)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    rng.random_range(lo..hi)
}

/// Uniform whole number of days in `[lo, hi]`.
pub fn days_between<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (i64, i64)) -> i64 {
    rng.random_range(lo..=hi)
}
