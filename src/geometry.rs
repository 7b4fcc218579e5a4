//! Coordinate mapping from a rate history to render-ready sparkline
//! geometry.
//!
//! The render surface is an external collaborator; this module stops at
//! plain `(x, y)` pairs. x scales linearly over the observation index,
//! y inversely over the value range (a higher rate sits higher on screen,
//! which is a smaller y).

use chrono::NaiveDate;
use tracing::error;

use crate::models::{MonthlySeries, RateHistory};

/// Horizontal inset on each side of the canvas.
const X_INSET: f64 = 2.0;

/// Vertical inset on the top and bottom of the canvas.
const Y_INSET: f64 = 2.0;

/// One vertex of the sparkline polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklinePoint {
    pub x: f64,
    pub y: f64,
}

/// A monthly marker dot, carrying its source observation for tooltips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub date: NaiveDate,
    pub value: f64,
}

/// Overall direction of the series, first observation vs. last.
///
/// The render surface colors the line with this (rising rates read as
/// adverse, so rising is typically the warning color).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

/// Render-ready sparkline geometry for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SparklineGeometry {
    /// Polyline vertices, one per history observation.
    pub points: Vec<SparklinePoint>,
    /// Marker dots, one per monthly downsample point.
    pub markers: Vec<Marker>,
    pub trend: Trend,
}

/// Maps a history and its monthly downsample onto a `width` x `height`
/// canvas.
///
/// x spans indices `0..N-1` across `[2, width-2]`; y spans
/// `[min, max]` of the values across `[height-2, 2]` (inverted). A flat
/// series (`max == min`) treats the range as 1 so every point sits on the
/// bottom edge rather than dividing by zero; a single-point history pins x
/// to the left edge.
///
/// Markers are located by exact date match in the history. The monthly
/// series is by construction a subset of the history, so a missing date is
/// an internal invariant failure: it trips a debug assertion and the marker
/// is skipped in release builds.
pub fn map_to_canvas(
    history: &RateHistory,
    monthly: &MonthlySeries,
    width: f64,
    height: f64,
) -> SparklineGeometry {
    let observations = history.as_slice();

    let (min, max) = observations.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), o| {
        (lo.min(o.value), hi.max(o.value))
    });
    let range = if max > min { max - min } else { 1.0 };
    let x_span = (observations.len().saturating_sub(1)).max(1) as f64;

    let place = |idx: usize, value: f64| SparklinePoint {
        x: X_INSET + (idx as f64 / x_span) * (width - 2.0 * X_INSET),
        y: height - Y_INSET - ((value - min) / range) * (height - 2.0 * Y_INSET),
    };

    let points: Vec<SparklinePoint> = observations
        .iter()
        .enumerate()
        .map(|(i, o)| place(i, o.value))
        .collect();

    let mut markers = Vec::with_capacity(monthly.len());
    for m in monthly.as_slice() {
        match history.position(m.date) {
            Some(idx) => {
                let p = place(idx, observations[idx].value);
                markers.push(Marker {
                    x: p.x,
                    y: p.y,
                    date: m.date,
                    value: observations[idx].value,
                });
            }
            None => {
                debug_assert!(false, "monthly date {} missing from history", m.date);
                error!(date = %m.date, "monthly marker date not present in history; skipping");
            }
        }
    }

    let trend = match (observations.first(), observations.last()) {
        (Some(first), Some(last)) if last.value > first.value => Trend::Rising,
        (Some(first), Some(last)) if last.value < first.value => Trend::Falling,
        _ => Trend::Flat,
    };

    SparklineGeometry {
        points,
        markers,
        trend,
    }
}
