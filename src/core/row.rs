#[cfg(feature = "parallel-rows")]
use rayon::prelude::*;

use crate::core::dataset::LabeledValue;
use crate::core::geometry::{CellGeometry, RowGeometry, value_fraction};
use crate::core::max::resolve_max;
use crate::error::ChartResult;

/// Builds bar/column row geometry for one series against a resolved maximum.
///
/// Cell order follows series order. Sizes are raw fractions with no
/// clamping; `hidable` marks every cell as hidden-for-display but kept for
/// assistive technologies.
pub fn build_row(
    series: &[f64],
    max: f64,
    label: Option<&str>,
    hidable: bool,
) -> ChartResult<RowGeometry> {
    let mut cells = Vec::with_capacity(series.len());
    for &value in series {
        cells.push(CellGeometry::bar(
            value_fraction(value, max)?,
            value,
            hidable,
        ));
    }

    Ok(RowGeometry::new(label.map(str::to_owned), cells))
}

/// Builds one single-cell row per flat value.
///
/// The whole dataset shares a single maximum: the override when supplied,
/// the dataset maximum otherwise.
pub fn build_flat_rows(
    values: &[f64],
    override_max: Option<f64>,
    hidable: bool,
) -> ChartResult<Vec<RowGeometry>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let max = resolve_max(values, override_max)?;
    values
        .iter()
        .map(|&value| build_row(&[value], max, None, hidable))
        .collect()
}

/// Builds one row per sub-series of a nested dataset.
///
/// Maximum scope is per-row unless an override is supplied, in which case
/// the override applies uniformly to every row. An empty sub-series yields
/// an empty row rather than an error, so maximum resolution never runs on
/// an empty domain.
pub fn build_nested_rows(
    rows: &[Vec<f64>],
    override_max: Option<f64>,
    hidable: bool,
) -> ChartResult<Vec<RowGeometry>> {
    // For large datasets, optional parallel row building keeps API behavior
    // stable while reducing wall-clock normalization time.
    #[cfg(feature = "parallel-rows")]
    {
        let built: Vec<ChartResult<RowGeometry>> = rows
            .par_iter()
            .map(|series| build_nested_row(series, override_max, hidable))
            .collect();
        built.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-rows"))]
    {
        let mut out = Vec::with_capacity(rows.len());
        for series in rows {
            out.push(build_nested_row(series, override_max, hidable)?);
        }
        Ok(out)
    }
}

fn build_nested_row(
    series: &[f64],
    override_max: Option<f64>,
    hidable: bool,
) -> ChartResult<RowGeometry> {
    if series.is_empty() {
        return Ok(RowGeometry::empty());
    }

    let max = resolve_max(series, override_max)?;
    build_row(series, max, None, hidable)
}

/// Builds one labeled single-cell row per series entry.
///
/// The whole series shares a single maximum resolved over the entry values
/// unless an override is supplied.
pub fn build_labeled_rows(
    entries: &[LabeledValue],
    override_max: Option<f64>,
    hidable: bool,
) -> ChartResult<Vec<RowGeometry>> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let values: Vec<f64> = entries.iter().map(|entry| entry.value).collect();
    let max = resolve_max(&values, override_max)?;
    entries
        .iter()
        .map(|entry| build_row(&[entry.value], max, Some(&entry.label), hidable))
        .collect()
}
