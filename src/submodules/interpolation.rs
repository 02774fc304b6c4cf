use super::type_lib::NumericData;

/// One-dimensional linear interpolation of `ys` over `xs` at `x`.
///
/// Convention: the samples are consumed as given and assumed non-decreasing
/// in `xs` (Scheil output is ordered by increasing fraction solid across
/// segment boundaries). When `x` lands exactly on a duplicated abscissa the
/// earliest such sample wins, so at a phase-transition boundary the
/// temperature of the segment that ends there is reported. Targets outside
/// the sampled range clamp to the boundary ordinate; there is no
/// extrapolation.
///
/// Callers must guarantee `xs.len() == ys.len()` and at least one sample.
pub fn interp(x: NumericData, xs: &[NumericData], ys: &[NumericData]) -> NumericData {
    let upper = xs.partition_point(|&sample| sample < x);
    if upper == 0 {
        return ys[0];
    }
    if upper == xs.len() {
        return ys[xs.len() - 1];
    }
    if xs[upper] == x {
        return ys[upper];
    }
    let slope = (ys[upper] - ys[upper - 1]) / (xs[upper] - xs[upper - 1]);
    ys[upper - 1] + slope * (x - xs[upper - 1])
}

/// Rounds `x` to `digits` decimal places, breaking exact halfway cases
/// towards the even neighbour.
pub fn round_half_even(x: NumericData, digits: u32) -> NumericData {
    let scale = (10.0 as NumericData).powi(digits as i32);
    let y = x * scale;
    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }
    z / scale
}
