use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Converts one raw value into its normalized fraction of the axis maximum.
///
/// The fraction is intentionally unclamped: values above `max` map above 1
/// and negative values map below 0, both left for the renderer to clip.
pub fn value_fraction(value: f64, max: f64) -> ChartResult<f64> {
    if !max.is_finite() || max <= 0.0 {
        return Err(ChartError::InvalidMaximum { max });
    }

    Ok(value / max)
}

/// Formats a raw value the way chart cells display it.
///
/// Integer-valued floats render without a decimal part so `45.0` shows as
/// `"45"`; everything else uses the shortest `f64` representation.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// One rendered cell along the value axis.
///
/// `start` is `None` for bar/column cells (implicit zero baseline) and
/// populated only for line/area segments, where `start` and `size` are both
/// absolute axis fractions rather than a magnitude from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub start: Option<f64>,
    pub size: f64,
    pub raw_value: f64,
    pub hidable: bool,
}

impl CellGeometry {
    /// Builds a baseline-anchored cell for bar/column geometry.
    #[must_use]
    pub fn bar(size: f64, raw_value: f64, hidable: bool) -> Self {
        Self {
            start: None,
            size,
            raw_value,
            hidable,
        }
    }

    /// Builds a segment cell whose `start`/`size` pair spans two adjacent
    /// line points.
    #[must_use]
    pub fn segment(start: f64, size: f64, raw_value: f64, hidable: bool) -> Self {
        Self {
            start: Some(start),
            size,
            raw_value,
            hidable,
        }
    }

    /// Display form of the raw value carried by this cell.
    #[must_use]
    pub fn display_value(&self) -> String {
        format_value(self.raw_value)
    }
}

/// Ordered cell sequence for one rendered row, with an optional label.
///
/// Cell order maps 1:1 to axis tick order and is preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowGeometry {
    pub label: Option<String>,
    pub cells: Vec<CellGeometry>,
}

impl RowGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            label: None,
            cells: Vec::new(),
        }
    }

    #[must_use]
    pub fn new(label: Option<String>, cells: Vec<CellGeometry>) -> Self {
        Self { label, cells }
    }

    /// Fraction sizes of the cells, in row order.
    #[must_use]
    pub fn sizes(&self) -> Vec<f64> {
        self.cells.iter().map(|cell| cell.size).collect()
    }
}
