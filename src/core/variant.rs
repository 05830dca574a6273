use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered variant token sequence handed to the class-name layer of the
/// external renderer.
pub type VariantTokens = SmallVec<[String; 8]>;

/// Structural variant flags for one chart instance.
///
/// Flags are independent toggles; no mutual-exclusion rules are enforced
/// here. `stacked` is emitted for any chart type, leaving semantic
/// validation to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantFlags {
    pub multiple: bool,
    pub reverse: bool,
    pub reverse_data: bool,
    pub reverse_datasets: bool,
    pub label: bool,
    pub show_primary_axis: bool,
    pub show_secondary_axes: u32,
    pub show_data_axes: bool,
    pub spacing: u32,
    pub dataset_spacing: u32,
    pub heading: bool,
    pub hide_data: bool,
    pub show_data_on_hover: bool,
    pub stacked: bool,
}

impl VariantFlags {
    /// Emits the active tokens in the fixed order the stylesheet contract
    /// expects. Absent or zero-valued flags contribute nothing; numeric
    /// flags interpolate their value verbatim.
    ///
    /// The order is stable regardless of how the flags were assigned.
    #[must_use]
    pub fn tokens(&self) -> VariantTokens {
        let mut tokens = VariantTokens::new();
        if self.multiple {
            tokens.push("multiple".to_owned());
        }
        if self.reverse {
            tokens.push("reverse".to_owned());
        }
        if self.reverse_data {
            tokens.push("reverse-data".to_owned());
        }
        if self.reverse_datasets {
            tokens.push("reverse-datasets".to_owned());
        }
        if self.label {
            tokens.push("show-labels".to_owned());
        }
        if self.show_primary_axis {
            tokens.push("show-primary-axis".to_owned());
        }
        if self.show_secondary_axes > 0 {
            tokens.push(format!("show-{}-secondary-axes", self.show_secondary_axes));
        }
        if self.show_data_axes {
            tokens.push("show-data-axes".to_owned());
        }
        if self.spacing > 0 {
            tokens.push(format!("data-spacing-{}", self.spacing));
        }
        if self.dataset_spacing > 0 {
            tokens.push(format!("dataset-spacing-{}", self.dataset_spacing));
        }
        if self.heading {
            tokens.push("show-heading".to_owned());
        }
        if self.hide_data {
            tokens.push("hide-data".to_owned());
        }
        if self.show_data_on_hover {
            tokens.push("show-data-on-hover".to_owned());
        }
        if self.stacked {
            tokens.push("stacked".to_owned());
        }
        tokens
    }
}
