use enum_dispatch::enum_dispatch;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::scheil_curve::{CurveSegment, ScheilCurve};
use super::type_lib::NumericData;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unknown element '{0}'")]
    UnknownElement(String),

    #[error("composition out of range: {element} = {value}")]
    CompositionOutOfRange { element: String, value: NumericData },

    #[error("composition unit {0:?} is not supported by this backend")]
    UnsupportedUnit(CompositionUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositionUnit {
    MassPercent,
    MoleFraction,
}

/// Conditions for one Scheil calculation: the value-object form of the
/// external engine's fluent configuration builder. Dependent element is Fe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheilConfig {
    pub composition_unit: CompositionUnit,
    pub composition: Vec<(String, NumericData)>,
}

impl ScheilConfig {
    pub fn new(composition_unit: CompositionUnit) -> Self {
        ScheilConfig {
            composition_unit,
            composition: Vec::new(),
        }
    }

    /// Sets the amount of one element, replacing any earlier entry.
    pub fn set_composition(&mut self, element: &str, value: NumericData) {
        match self.composition.iter_mut().find(|(name, _)| name == element) {
            Some(entry) => entry.1 = value,
            None => self.composition.push((element.to_owned(), value)),
        }
    }

    pub fn composition_of(&self, element: &str) -> NumericData {
        self.composition
            .iter()
            .find(|(name, _)| name == element)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }
}

#[enum_dispatch]
pub trait ScheilEngineTrait {
    fn calculate(&self, config: &ScheilConfig) -> Result<ScheilCurve, EngineError>;
}

#[enum_dispatch(ScheilEngineTrait)]
pub enum EngineKinds {
    Analytic(AnalyticScheil),
    Tabulated(TabulatedScheil),
}

/// Deterministic stand-in for the external thermodynamics engine: classic
/// Scheil model with liquidus slopes and partition coefficients per solute,
/// T(fs) = Tm - sum_i m_i * c0_i * (1 - fs)^(k_i - 1).
///
/// Produces a primary ferritic segment up to `primary_cutoff` and a terminal
/// carbide segment down to full solidification, so curves carry the same
/// segment structure the external engine reports.
pub struct AnalyticScheil {
    pub melting_point: NumericData,
    pub primary_cutoff: NumericData,
    pub terminal_drop: NumericData,
    pub samples_per_segment: usize,
}

impl AnalyticScheil {
    // (liquidus slope [K per wt%], partition coefficient) per solute in Fe.
    const SOLUTES: [(&'static str, NumericData, NumericData); 4] = [
        ("C", 78.0, 0.34),
        ("N", 65.0, 0.48),
        ("Cr", 1.5, 0.86),
        ("Co", 0.9, 0.90),
    ];

    fn solute(element: &str) -> Option<(NumericData, NumericData)> {
        Self::SOLUTES
            .iter()
            .find(|(name, _, _)| *name == element)
            .map(|(_, slope, partition)| (*slope, *partition))
    }

    fn temperature_at(&self, fraction: NumericData, config: &ScheilConfig) -> NumericData {
        let mut temperature = self.melting_point;
        for (element, amount) in config.composition.iter() {
            let (slope, partition) = Self::solute(element).unwrap_or((0.0, 1.0));
            temperature -= slope * amount * (1.0 - fraction).powf(partition - 1.0);
        }
        temperature
    }
}

impl Default for AnalyticScheil {
    fn default() -> Self {
        AnalyticScheil {
            melting_point: 1811.0,
            primary_cutoff: 0.98,
            terminal_drop: 40.0,
            samples_per_segment: 60,
        }
    }
}

impl ScheilEngineTrait for AnalyticScheil {
    fn calculate(&self, config: &ScheilConfig) -> Result<ScheilCurve, EngineError> {
        if config.composition_unit != CompositionUnit::MassPercent {
            return Err(EngineError::UnsupportedUnit(config.composition_unit));
        }
        for (element, amount) in config.composition.iter() {
            if AnalyticScheil::solute(element).is_none() {
                return Err(EngineError::UnknownElement(element.to_owned()));
            }
            if *amount < 0.0 || *amount > 100.0 {
                return Err(EngineError::CompositionOutOfRange {
                    element: element.to_owned(),
                    value: *amount,
                });
            }
        }

        let primary_fractions = Array1::linspace(0.0, self.primary_cutoff, self.samples_per_segment);
        let primary_temperatures = primary_fractions.mapv(|fraction| self.temperature_at(fraction, config));
        let primary = CurveSegment::new(
            "LIQUID + BCC_A2",
            primary_fractions.to_vec(),
            primary_temperatures.to_vec(),
        )
        .expect("linspace vectors have equal length");

        // The terminal eutectic-like reaction solidifies the remaining liquid
        // over a fixed temperature interval.
        let cutoff_temperature = self.temperature_at(self.primary_cutoff, config);
        let terminal_fractions = Array1::linspace(self.primary_cutoff, 1.0, 9);
        let terminal_temperatures = terminal_fractions.mapv(|fraction| {
            let progress = (fraction - self.primary_cutoff) / (1.0 - self.primary_cutoff);
            cutoff_temperature - self.terminal_drop * progress
        });
        let terminal = CurveSegment::new(
            "LIQUID + BCC_A2 + M7C3",
            terminal_fractions.to_vec(),
            terminal_temperatures.to_vec(),
        )
        .expect("linspace vectors have equal length");

        Ok(ScheilCurve::new(vec![primary, terminal]))
    }
}

/// Fixture backend: hands back a stored curve for every request.
pub struct TabulatedScheil {
    pub curve: ScheilCurve,
}

impl ScheilEngineTrait for TabulatedScheil {
    fn calculate(&self, _config: &ScheilConfig) -> Result<ScheilCurve, EngineError> {
        Ok(self.curve.clone())
    }
}
