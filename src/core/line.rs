use crate::core::geometry::{CellGeometry, RowGeometry, value_fraction};
use crate::core::max::resolve_max;
use crate::error::ChartResult;

/// Builds line/area segment geometry for one series against a resolved
/// maximum.
///
/// Each adjacent point pair becomes one cell whose `start` is the fraction
/// of the starting point and whose `size` is the fraction of the ending
/// point. Both are absolute axis coordinates for the renderer, not a
/// magnitude from the baseline; the last point has no outgoing segment, so
/// the output holds one cell fewer than the input has points.
///
/// A series of length 0 or 1 yields an empty row, not an error.
pub fn build_segments(series: &[f64], max: f64, hidable: bool) -> ChartResult<RowGeometry> {
    if series.len() < 2 {
        return Ok(RowGeometry::empty());
    }

    let mut cells = Vec::with_capacity(series.len() - 1);
    for pair in series.windows(2) {
        cells.push(CellGeometry::segment(
            value_fraction(pair[0], max)?,
            value_fraction(pair[1], max)?,
            pair[0],
            hidable,
        ));
    }

    Ok(RowGeometry::new(None, cells))
}

/// Builds the segment row for a flat line/area dataset.
///
/// The maximum is resolved once over the entire series when no override is
/// supplied. This scope differs from the nested branch, which resolves
/// per-row; the divergence is part of the stylesheet contract and is pinned
/// by regression tests.
pub fn build_flat_segments(
    series: &[f64],
    override_max: Option<f64>,
    hidable: bool,
) -> ChartResult<Vec<RowGeometry>> {
    if series.len() < 2 {
        return Ok(vec![RowGeometry::empty()]);
    }

    let max = resolve_max(series, override_max)?;
    Ok(vec![build_segments(series, max, hidable)?])
}

/// Builds one segment row per sub-series of a nested line/area dataset.
///
/// Without an override, each row resolves its maximum from that row alone.
/// A supplied override applies uniformly to every row. Empty and
/// single-point sub-series yield empty rows.
pub fn build_nested_segment_rows(
    rows: &[Vec<f64>],
    override_max: Option<f64>,
    hidable: bool,
) -> ChartResult<Vec<RowGeometry>> {
    let mut out = Vec::with_capacity(rows.len());
    for series in rows {
        if series.len() < 2 {
            out.push(RowGeometry::empty());
            continue;
        }
        let max = resolve_max(series, override_max)?;
        out.push(build_segments(series, max, hidable)?);
    }

    Ok(out)
}
