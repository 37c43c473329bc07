//! Fixed-width time buckets.

use crate::window::TimeWindow;
use scoregraph_core::SubmissionEvent;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bucket geometry shared by every team of a graph.
///
/// Bucket `i` covers `[min + i * width, min + (i + 1) * width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketLayout {
    /// Window the buckets partition
    pub window: TimeWindow,

    /// Bucket width in seconds, at least 1
    pub width: i64,

    /// Number of buckets, at least 1
    pub count: usize,
}

impl BucketLayout {
    /// Lay out buckets over `window` aiming for `point_count` of them.
    ///
    /// The width is `floor(span / point_count)` floored at one second, and
    /// the count is `ceil(span / width)`. When the span is at least
    /// `point_count` seconds this yields at least `point_count` buckets.
    pub fn new(window: TimeWindow, point_count: usize) -> Self {
        let span = window.span();
        let points = i64::try_from(point_count.max(1)).unwrap_or(i64::MAX);
        let width = (span / points).max(1);
        let count = usize::try_from(span / width + i64::from(span % width != 0))
            .unwrap_or(usize::MAX)
            .max(1);

        debug!(
            "Bucket layout: span {}s, width {}s, {} buckets for {} points",
            span, width, count, point_count
        );

        Self {
            window,
            width,
            count,
        }
    }

    /// Bucket index for a timestamp.
    ///
    /// Times before the window clip to the first bucket and times past the
    /// last bucket clip to the last one.
    pub fn index_of(&self, time: i64) -> usize {
        if time <= self.window.min {
            return 0;
        }
        // i128 keeps offsets across the whole i64 range exact
        let raw = (i128::from(time) - i128::from(self.window.min)) / i128::from(self.width);
        usize::try_from(raw).unwrap_or(usize::MAX).min(self.count - 1)
    }

    /// Time range `[start, end)` of a bucket, saturated to the `i64` range.
    pub fn bounds(&self, index: usize) -> (i64, i64) {
        let offset = i128::try_from(index)
            .unwrap_or(i128::MAX)
            .saturating_mul(i128::from(self.width));
        let start = i128::from(self.window.min).saturating_add(offset);
        let end = start.saturating_add(i128::from(self.width));
        (saturate(start), saturate(end))
    }

    /// Group one team's events by bucket.
    pub fn assign(&self, events: &[SubmissionEvent]) -> Buckets {
        let mut slots = vec![Vec::new(); self.count];
        let mut clipped = 0usize;

        for event in events {
            let index = self.index_of(event.time);
            let (start, end) = self.bounds(index);
            if event.time < start || event.time >= end {
                clipped += 1;
            }
            slots[index].push(*event);
        }

        if clipped > 0 {
            debug!("Clipped {} out-of-range events into edge buckets", clipped);
        }

        Buckets { slots }
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// One team's events grouped by bucket index.
///
/// Every index from `0` to `count - 1` is present, empty or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    slots: Vec<Vec<SubmissionEvent>>,
}

impl Buckets {
    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no buckets at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Events of one bucket.
    pub fn get(&self, index: usize) -> Option<&[SubmissionEvent]> {
        self.slots.get(index).map(Vec::as_slice)
    }

    /// Buckets in increasing index order.
    pub fn iter(&self) -> impl Iterator<Item = &[SubmissionEvent]> {
        self.slots.iter().map(Vec::as_slice)
    }
}
