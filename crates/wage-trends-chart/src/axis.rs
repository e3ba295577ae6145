//! Value axis range

/// Drawn value range for a series.
///
/// The data range is padded by 10% on each side. A flat series gets a unit
/// of padding so the range is never empty.
pub fn value_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    let (lo, hi) = if lo > hi { (0.0, 0.0) } else { (lo, hi) };
    let pad = if hi > lo { (hi - lo) * 0.1 } else { 1.0 };
    (lo - pad, hi + pad)
}
