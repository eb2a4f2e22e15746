//! Numeric guards shared by the computation core.
//!
//! Every public computation is total over `f64`. NaN collapses to zero and
//! infinities saturate to the largest finite magnitude, so downstream
//! arithmetic and formatting only ever see finite values.

/// Replace NaN with 0.0 and saturate infinities to `±f64::MAX`.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-f64::MAX, f64::MAX)
    }
}

/// Clamp into `[min, max]`, treating NaN as `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.max(min).min(max)
    }
}

/// Clamp into the unit interval.
pub fn clamp_unit(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
