use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::type_lib::NumericData;

#[derive(Error, Debug)]
pub enum CurveError {
    #[error("segment '{label}' has {x_len} fraction samples but {y_len} temperature samples")]
    MismatchedSamples {
        label: String,
        x_len: usize,
        y_len: usize,
    },
}

/// One stable-phase-set section of a Scheil solidification path, e.g.
/// "LIQUID + BCC_A2". Fractions and temperatures are parallel vectors,
/// temperatures in Kelvin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSegment {
    pub label: String,
    pub fraction_solid: Vec<NumericData>,
    pub temperature: Vec<NumericData>,
}

impl CurveSegment {
    pub fn new(label: &str, fraction_solid: Vec<NumericData>, temperature: Vec<NumericData>) -> Result<Self, CurveError> {
        if fraction_solid.len() != temperature.len() {
            return Err(CurveError::MismatchedSamples {
                label: label.to_owned(),
                x_len: fraction_solid.len(),
                y_len: temperature.len(),
            });
        }
        Ok(CurveSegment {
            label: label.to_owned(),
            fraction_solid,
            temperature,
        })
    }

    pub fn len(&self) -> usize {
        self.fraction_solid.len()
    }
}

/// A full solidification curve as returned by one Scheil calculation:
/// segments in the order the engine produced them, fraction solid
/// increasing across segment boundaries as the melt cools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheilCurve {
    pub segments: Vec<CurveSegment>,
}

impl ScheilCurve {
    pub fn new(segments: Vec<CurveSegment>) -> Self {
        ScheilCurve { segments }
    }

    pub fn sample_count(&self) -> usize {
        self.segments.iter().map(|segment| segment.len()).sum()
    }

    /// Merges every segment, in order, into parallel (fraction, temperature)
    /// vectors. Duplicated fractions at segment boundaries are kept as given.
    pub fn pooled(&self) -> (Vec<NumericData>, Vec<NumericData>) {
        let mut fractions = Vec::with_capacity(self.sample_count());
        let mut temperatures = Vec::with_capacity(self.sample_count());
        for segment in self.segments.iter() {
            fractions.extend_from_slice(&segment.fraction_solid);
            temperatures.extend_from_slice(&segment.temperature);
        }
        (fractions, temperatures)
    }

    /// Minimum and maximum sampled temperature, `None` for a curve with no
    /// samples.
    pub fn temperature_range(&self) -> Option<(NumericData, NumericData)> {
        let mut samples = self
            .segments
            .iter()
            .flat_map(|segment| segment.temperature.iter().copied());
        let first = samples.next()?;
        Some(samples.fold((first, first), |(temp_min, temp_max), temp| {
            (temp_min.min(temp), temp_max.max(temp))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_segment_vectors_are_rejected() {
        let result = CurveSegment::new("LIQUID + BCC_A2", vec![0.0, 0.5], vec![1800.0]);
        assert!(matches!(
            result,
            Err(CurveError::MismatchedSamples { x_len: 2, y_len: 1, .. })
        ));
    }

    #[test]
    fn pooling_preserves_segment_order_and_duplicates() {
        let primary = CurveSegment::new("LIQUID + BCC_A2", vec![0.0, 0.9], vec![1800.0, 1700.0]).unwrap();
        let terminal = CurveSegment::new("LIQUID + BCC_A2 + M7C3", vec![0.9, 1.0], vec![1700.0, 1650.0]).unwrap();
        let curve = ScheilCurve::new(vec![primary, terminal]);

        let (fractions, temperatures) = curve.pooled();
        assert_eq!(fractions, vec![0.0, 0.9, 0.9, 1.0]);
        assert_eq!(temperatures, vec![1800.0, 1700.0, 1700.0, 1650.0]);
        assert_eq!(curve.sample_count(), 4);
    }

    #[test]
    fn temperature_range_spans_all_segments() {
        let primary = CurveSegment::new("LIQUID + BCC_A2", vec![0.0, 0.9], vec![1805.5, 1700.0]).unwrap();
        let terminal = CurveSegment::new("LIQUID + BCC_A2 + M7C3", vec![0.9, 1.0], vec![1700.0, 1651.25]).unwrap();
        let curve = ScheilCurve::new(vec![primary, terminal]);

        assert_eq!(curve.temperature_range(), Some((1651.25, 1805.5)));
    }

    #[test]
    fn curve_without_samples_has_no_temperature_range() {
        assert_eq!(ScheilCurve::new(vec![]).temperature_range(), None);

        let empty = CurveSegment::new("LIQUID", vec![], vec![]).unwrap();
        assert_eq!(ScheilCurve::new(vec![empty]).temperature_range(), None);
    }
}
