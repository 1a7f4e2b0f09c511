//! One-decimal percentages that sum to exactly 100.0.
//!
//! Vote displays round each share to one decimal, which leaves a residual
//! against 100. The residual is repaired in exact integer tenths by cycling
//! ±0.1 adjustments through the entries in descending-value order, so the
//! correction lands on already-leading entries first and the printed total
//! is always exactly 100.0.

/// Safety cap on repair iterations; far above anything a real residual needs.
const MAX_REPAIR_STEPS: usize = 1000;

/// Round raw percentages (already summing to ~100) to one decimal each and
/// repair the rounding residual so the result sums to exactly 100.0.
///
/// Ties in the descending order are broken by first occurrence (stable
/// sort). An empty input comes back empty; there is nothing to repair.
pub fn round_to_exact_100(raw: &[f64]) -> Vec<f64> {
    if raw.is_empty() {
        return Vec::new();
    }

    // Work in integer tenths: float stepping would accumulate drift.
    let mut tenths: Vec<i64> = raw.iter().map(|&x| (x * 10.0).round() as i64).collect();
    let mut residual: i64 = 1000 - tenths.iter().sum::<i64>();

    let mut order: Vec<usize> = (0..tenths.len()).collect();
    order.sort_by(|&a, &b| tenths[b].cmp(&tenths[a]));

    let step = if residual > 0 { 1 } else { -1 };
    let mut i = 0;
    while residual != 0 && i < MAX_REPAIR_STEPS {
        let k = order[i % order.len()];
        tenths[k] += step;
        residual -= step;
        i += 1;
    }

    tenths.iter().map(|&t| t as f64 / 10.0).collect()
}

/// Convert raw non-negative scores to one-decimal percentage shares summing
/// to exactly 100.0. A zero total is treated as all-equal shares.
pub fn share_percents(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    let total: f64 = scores.iter().sum();
    let raw: Vec<f64> = if total == 0.0 {
        vec![100.0 / scores.len() as f64; scores.len()]
    } else {
        scores.iter().map(|&s| s / total * 100.0).collect()
    };
    round_to_exact_100(&raw)
}
