//! Gaps between successive block heights.

/// Successive differences of the positive `heights`, ascending. Fewer than two
/// heights yields no intervals.
pub fn block_intervals(heights: impl IntoIterator<Item = i64>) -> Vec<f64> {
    let mut sorted: Vec<i64> = heights.into_iter().filter(|h| *h > 0).collect();
    if sorted.len() < 2 {
        return Vec::new();
    }
    sorted.sort_unstable();
    sorted.windows(2).map(|w| (w[1] - w[0]) as f64).collect()
}
