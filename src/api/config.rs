use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Dataset, LabeledValue, VariantFlags};
use crate::error::{ChartError, ChartResult};

/// Chart families understood by the stylesheet contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Column,
    Area,
    Line,
    Pie,
    Donut,
    Radar,
    Polar,
}

impl ChartType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "column",
            Self::Area => "area",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Radar => "radar",
            Self::Polar => "polar",
        }
    }

    /// Whether this chart family renders point-to-point segments instead of
    /// baseline-anchored cells.
    #[must_use]
    pub fn uses_segments(self) -> bool {
        matches!(self, Self::Line | Self::Area)
    }
}

/// Public chart configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Defaults are resolved
/// here, once; downstream builders never see optional knobs except the axis
/// override.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub heading: Option<String>,
    pub data: Dataset,
    pub series_data: Option<Vec<LabeledValue>>,
    /// Override for the maximum derived from the data. Useful for sharing
    /// one maximum across charts or adding headroom above the tallest cell.
    pub max: Option<f64>,
    pub stacked: bool,
    pub reverse: bool,
    pub reverse_data: bool,
    pub reverse_datasets: bool,
    pub label: bool,
    pub show_primary_axis: bool,
    pub show_secondary_axes: u32,
    pub show_data_axes: bool,
    pub spacing: u32,
    pub dataset_spacing: u32,
    pub hide_data: bool,
    pub show_data_on_hover: bool,
    /// Unrecognized presentation attributes, forwarded opaquely to the
    /// renderer with insertion order preserved.
    #[serde(flatten)]
    pub attributes: IndexMap<String, Value>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Dataset) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_series_data(mut self, entries: Vec<LabeledValue>) -> Self {
        self.series_data = Some(entries);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_hide_data(mut self, hide_data: bool) -> Self {
        self.hide_data = hide_data;
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Classified dataset for this configuration.
    ///
    /// A non-empty `series_data` takes precedence over `data` regardless of
    /// the latter's shape.
    #[must_use]
    pub fn dataset(&self) -> Dataset {
        match &self.series_data {
            Some(entries) if !entries.is_empty() => Dataset::Labeled(entries.clone()),
            _ => self.data.clone(),
        }
    }

    /// Variant flags as configured, before classification forces the
    /// structural `multiple`/`label` flags.
    #[must_use]
    pub fn variant_flags(&self) -> VariantFlags {
        VariantFlags {
            multiple: false,
            reverse: self.reverse,
            reverse_data: self.reverse_data,
            reverse_datasets: self.reverse_datasets,
            label: self.label,
            show_primary_axis: self.show_primary_axis,
            show_secondary_axes: self.show_secondary_axes,
            show_data_axes: self.show_data_axes,
            spacing: self.spacing,
            dataset_spacing: self.dataset_spacing,
            heading: self.heading.as_deref().is_some_and(|h| !h.is_empty()),
            hide_data: self.hide_data,
            show_data_on_hover: self.show_data_on_hover,
            stacked: self.stacked,
        }
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse config: {e}")))
    }
}
