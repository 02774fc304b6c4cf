use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::interpolation::{interp, round_half_even};
use super::scheil_curve::ScheilCurve;
use super::type_lib::NumericData;

/// Temperatures are reported to 4 decimal places throughout.
const REPORT_DIGITS: u32 = 4;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("degenerate solidification curve: cannot compute HCS (equal temperature drop at 40% and 90% solid)")]
    DegenerateCurve,

    #[error("curve has {0} pooled samples, interpolation needs at least 2")]
    TooFewSamples(usize),
}

/// The two susceptibility indices derived from one solidification curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SusceptibilityResult {
    pub hcs: NumericData,
    pub grf: NumericData,
}

impl SusceptibilityResult {
    pub fn from_curve(curve: &ScheilCurve) -> Result<Self, MetricsError> {
        Ok(SusceptibilityResult {
            hcs: hot_cracking_susceptibility(curve)?,
            grf: growth_restriction_factor(curve)?,
        })
    }
}

/// Interpolated temperature at a given fraction solid on the pooled curve,
/// rounded to 4 decimal places. Targets outside the sampled fraction range
/// clamp to the nearest boundary temperature.
pub fn interpolate_temperature_at_fraction(curve: &ScheilCurve, target_fraction: NumericData) -> Result<NumericData, MetricsError> {
    let (fractions, temperatures) = curve.pooled();
    if fractions.len() < 2 {
        return Err(MetricsError::TooFewSamples(fractions.len()));
    }
    let (first, last) = (fractions[0], fractions[fractions.len() - 1]);
    if target_fraction < first.min(last) || target_fraction > first.max(last) {
        debug!(target_fraction, "target outside sampled fraction range, clamping");
    }
    Ok(round_half_even(interp(target_fraction, &fractions, &temperatures), REPORT_DIGITS))
}

/// Hot-cracking susceptibility: ratio of the normalized temperature drop in
/// the crack-susceptible late mushy zone (90-100% solid) to the drop over the
/// early solidification range (0-40% solid). Larger means more susceptible.
pub fn hot_cracking_susceptibility(curve: &ScheilCurve) -> Result<NumericData, MetricsError> {
    let t_00 = interpolate_temperature_at_fraction(curve, 0.0)?;
    let t_04 = interpolate_temperature_at_fraction(curve, 0.4)?;
    let t_09 = interpolate_temperature_at_fraction(curve, 0.9)?;
    let t_10 = interpolate_temperature_at_fraction(curve, 1.0)?;

    let t09 = (t_00 - t_09) / 100.0;
    let t10 = (t_00 - t_10) / 100.0;
    let t04 = (t_00 - t_04) / 100.0;

    // Both terms come from temperatures already rounded to 4 decimals, so a
    // plateau between 40% and 90% solid gives an exact zero here.
    let denominator = t04 - t09;
    if denominator == 0.0 {
        return Err(MetricsError::DegenerateCurve);
    }
    Ok((t09 - t10) / denominator)
}

/// Growth restriction factor: magnitude of the initial cooling-curve slope
/// near the liquidus, taken over the first 5% of solidification.
pub fn growth_restriction_factor(curve: &ScheilCurve) -> Result<NumericData, MetricsError> {
    let t_00 = interpolate_temperature_at_fraction(curve, 0.0)?;
    let t_005 = interpolate_temperature_at_fraction(curve, 0.05)?;
    Ok(((t_005 - t_00) / 0.05).abs())
}
