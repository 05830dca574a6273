use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// One label/value entry of a labeled series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Shape tag produced by dataset classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetShape {
    Empty,
    Flat,
    Nested,
    Labeled,
}

/// Caller-supplied dataset with the shape decided at construction time.
///
/// Typed callers pick a variant directly; untyped JSON input goes through
/// [`Dataset::classify_value`], which infers the shape from the first
/// element and validates every remaining element against it.
///
/// On the wire the variants are untagged: a flat array of numbers, an array
/// of arrays, an array of `{label, value}` objects, or `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    #[default]
    Empty,
    Flat(Vec<f64>),
    Nested(Vec<Vec<f64>>),
    Labeled(Vec<LabeledValue>),
}

impl Dataset {
    /// Classified shape of this dataset.
    ///
    /// A variant with a zero-length payload classifies as `Empty`, matching
    /// the absent-data case.
    #[must_use]
    pub fn shape(&self) -> DatasetShape {
        match self {
            Self::Empty => DatasetShape::Empty,
            Self::Flat(values) if values.is_empty() => DatasetShape::Empty,
            Self::Nested(rows) if rows.is_empty() => DatasetShape::Empty,
            Self::Labeled(entries) if entries.is_empty() => DatasetShape::Empty,
            Self::Flat(_) => DatasetShape::Flat,
            Self::Nested(_) => DatasetShape::Nested,
            Self::Labeled(_) => DatasetShape::Labeled,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shape() == DatasetShape::Empty
    }

    /// Classifies an untyped JSON payload into a shape-tagged dataset.
    ///
    /// Shape is inferred from the first element; every remaining element is
    /// validated against that shape, so mixed flat/nested input or a
    /// non-numeric entry fails here with `MalformedDataset` instead of
    /// surfacing later inside geometry building.
    pub fn classify_value(value: &Value) -> ChartResult<Self> {
        let items = match value {
            Value::Null => return Ok(Self::Empty),
            Value::Array(items) => items,
            other => {
                return Err(ChartError::MalformedDataset(format!(
                    "dataset must be an array or null, got {}",
                    json_type_name(other)
                )));
            }
        };

        if items.is_empty() {
            return Ok(Self::Empty);
        }

        match &items[0] {
            Value::Number(_) => {
                let mut values = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    values.push(number_entry(item, index)?);
                }
                Ok(Self::Flat(values))
            }
            Value::Array(_) => {
                let mut rows = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let Value::Array(entries) = item else {
                        return Err(ChartError::MalformedDataset(format!(
                            "expected a nested series at index {index}, got {}",
                            json_type_name(item)
                        )));
                    };
                    let mut row = Vec::with_capacity(entries.len());
                    for (entry_index, entry) in entries.iter().enumerate() {
                        row.push(number_entry(entry, entry_index)?);
                    }
                    rows.push(row);
                }
                Ok(Self::Nested(rows))
            }
            Value::Object(_) => {
                let mut entries = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    entries.push(labeled_entry(item, index)?);
                }
                Ok(Self::Labeled(entries))
            }
            other => Err(ChartError::MalformedDataset(format!(
                "unsupported dataset element at index 0: {}",
                json_type_name(other)
            ))),
        }
    }
}

fn number_entry(value: &Value, index: usize) -> ChartResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| {
            ChartError::MalformedDataset(format!(
                "expected a number at index {index}, got {}",
                json_type_name(value)
            ))
        })
}

fn labeled_entry(value: &Value, index: usize) -> ChartResult<LabeledValue> {
    let Value::Object(map) = value else {
        return Err(ChartError::MalformedDataset(format!(
            "expected a label/value entry at index {index}, got {}",
            json_type_name(value)
        )));
    };

    let label = map
        .get("label")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ChartError::MalformedDataset(format!(
                "entry at index {index} is missing a string `label`"
            ))
        })?;
    let entry_value = map
        .get("value")
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            ChartError::MalformedDataset(format!(
                "entry at index {index} is missing a numeric `value`"
            ))
        })?;

    Ok(LabeledValue::new(label, entry_value))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
