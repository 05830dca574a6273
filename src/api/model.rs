use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{
    Dataset, DatasetShape, RowGeometry, VariantFlags, VariantTokens, build_flat_rows,
    build_flat_segments, build_labeled_rows, build_nested_rows, build_nested_segment_rows,
};
use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, ChartType};

/// Normalized chart model handed to the markup-rendering collaborator.
///
/// Everything the renderer needs is here: the resolved chart type and
/// heading, the ordered row geometry, the structural flags with their token
/// sequence, and the opaque passthrough attributes. The model is
/// serializable so regression tests and host tooling can pin it as a
/// deterministic snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub chart_type: ChartType,
    pub heading: Option<String>,
    pub rows: Vec<RowGeometry>,
    pub variants: VariantFlags,
    pub attributes: IndexMap<String, Value>,
}

impl ChartModel {
    /// Builds the normalized model for one configuration.
    ///
    /// Classification decides the dataset shape (a non-empty `series_data`
    /// wins over `data`), the shape forces the structural flags (`multiple`
    /// for nested, `label` for labeled), and the chart family picks the
    /// geometry builder: line/area charts get point-to-point segments,
    /// everything else gets baseline-anchored cells. An empty dataset
    /// yields an empty row sequence, not an error.
    pub fn build(config: &ChartConfig) -> ChartResult<Self> {
        let dataset = config.dataset();
        let shape = dataset.shape();
        let mut variants = config.variant_flags();
        match shape {
            DatasetShape::Nested => variants.multiple = true,
            DatasetShape::Labeled => variants.label = true,
            DatasetShape::Empty | DatasetShape::Flat => {}
        }

        debug!(
            chart_type = config.chart_type.as_str(),
            ?shape,
            override_max = ?config.max,
            "normalize chart data"
        );

        let hidable = config.hide_data;
        let rows = if dataset.is_empty() {
            Vec::new()
        } else {
            match &dataset {
                Dataset::Empty => Vec::new(),
                Dataset::Labeled(entries) => build_labeled_rows(entries, config.max, hidable)?,
                Dataset::Flat(values) => {
                    if config.chart_type.uses_segments() {
                        build_flat_segments(values, config.max, hidable)?
                    } else {
                        build_flat_rows(values, config.max, hidable)?
                    }
                }
                Dataset::Nested(nested) => {
                    if config.chart_type.uses_segments() {
                        build_nested_segment_rows(nested, config.max, hidable)?
                    } else {
                        build_nested_rows(nested, config.max, hidable)?
                    }
                }
            }
        };

        trace!(row_count = rows.len(), "normalized rows");

        Ok(Self {
            chart_type: config.chart_type,
            heading: config.heading.clone(),
            rows,
            variants,
            attributes: config.attributes.clone(),
        })
    }

    /// Ordered variant token sequence for the renderer's class-name layer.
    #[must_use]
    pub fn variant_tokens(&self) -> VariantTokens {
        self.variants.tokens()
    }

    /// Serializes the model to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize model: {e}")))
    }

    /// Deserializes a model from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse model: {e}")))
    }
}
