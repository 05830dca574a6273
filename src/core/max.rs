use crate::error::{ChartError, ChartResult};

/// Resolves the axis maximum for one fraction domain.
///
/// An explicit override wins unconditionally and is never clamped against
/// the data; an override below the true maximum is accepted and simply
/// yields fractions above 1. Without an override the maximum of `values` is
/// used. Both paths reject a maximum that is non-finite or `<= 0`, and an
/// empty slice is rejected explicitly instead of folding to `NEG_INFINITY`.
pub fn resolve_max(values: &[f64], override_max: Option<f64>) -> ChartResult<f64> {
    if let Some(max) = override_max {
        return validate_max(max);
    }

    if values.is_empty() {
        return Err(ChartError::EmptyDomain);
    }

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    validate_max(max)
}

fn validate_max(max: f64) -> ChartResult<f64> {
    if !max.is_finite() || max <= 0.0 {
        return Err(ChartError::InvalidMaximum { max });
    }

    Ok(max)
}
