//! Log-scaled waste intensity.

use crate::numeric::clamp_unit;

/// Annual waste at which intensity saturates
pub const DEFAULT_MAX_ANNUAL_WASTE: f64 = 250_000.0;

/// `log10(waste + 1) / log10(max + 1)`, clamped to [0, 1].
///
/// A cap that is not a positive finite number falls back to
/// [`DEFAULT_MAX_ANNUAL_WASTE`].
pub fn intensity_from_annual_waste(annualized_waste: f64, max_annual_waste: f64) -> f64 {
    let max = effective_cap(max_annual_waste);
    let value = (annualized_waste + 1.0).log10() / (max + 1.0).log10();
    clamp_unit(value)
}

pub(crate) fn effective_cap(max_annual_waste: f64) -> f64 {
    if max_annual_waste.is_finite() && max_annual_waste > 0.0 {
        max_annual_waste
    } else {
        DEFAULT_MAX_ANNUAL_WASTE
    }
}
