//! Forward-fill reduction from buckets to a dense series.

use crate::bucket::Buckets;

/// One value per x-axis tick.
pub type Series = Vec<i64>;

/// Reduce buckets to one value each.
///
/// A bucket with events yields the highest score among them; an empty bucket
/// repeats the previous value, starting from 0.
pub fn forward_fill(buckets: &Buckets) -> Series {
    let mut last = 0;
    buckets
        .iter()
        .map(|events| {
            if let Some(max) = events.iter().map(|e| e.score).max() {
                last = max;
            }
            last
        })
        .collect()
}

/// Force a series to exactly `point_count` values.
///
/// Longer series lose their oldest values. Shorter series are right-aligned
/// behind leading zeros, the value every series starts from.
pub fn fit_to_length(mut series: Series, point_count: usize) -> Series {
    if series.len() > point_count {
        series.drain(..series.len() - point_count);
    } else if series.len() < point_count {
        let mut padded = vec![0; point_count - series.len()];
        padded.append(&mut series);
        series = padded;
    }
    series
}
