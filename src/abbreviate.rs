//! Human-readable abbreviation of large counts ("1 Million").

/// Magnitude names, one per power of 1000.
const TIER_NAMES: [&str; 5] = ["", "Thousand", "Million", "Billion", "Trillion"];

/// Index into [`TIER_NAMES`] for a magnitude. Zero maps to the first tier,
/// anything at or above 10^15 saturates at "Trillion".
fn tier_index(magnitude: f64) -> usize {
    if magnitude == 0.0 {
        return 0;
    }
    let tier = (magnitude.log10() / 3.0).floor();
    // `as` saturates for infinities and maps NaN to 0
    (tier as i64).clamp(0, (TIER_NAMES.len() - 1) as i64) as usize
}

/// Abbreviate a number to the nearest whole unit of its magnitude tier.
///
/// The sign is dropped: callers pass object counts, which are never negative.
/// Halves round away from zero, so 2.5 Million reads "3 Million".
pub fn abbreviate(n: f64) -> String {
    let magnitude = n.abs();
    let tier = tier_index(magnitude);
    let scaled = (magnitude / 1000f64.powi(tier as i32)).round();

    match TIER_NAMES[tier] {
        "" => format!("{}", scaled),
        name => format!("{} {}", scaled, name),
    }
}

/// Abbreviate an object count.
pub fn abbreviate_count(count: u64) -> String {
    abbreviate(count as f64)
}
