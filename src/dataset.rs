//! Wavefunction sample datasets
//!
//! Loads and validates the precomputed probability-density samples that feed
//! the particle engine. Samples arrive fully materialized and are immutable
//! afterwards; the engine never computes wavefunctions itself. All input
//! checking happens here, before the first frame, so the per-frame loops can
//! assume clean data.

use log::info;
use serde::Deserialize;
use thiserror::Error;

/// Quantum numbers identifying an orbital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantumNumbers {
    /// Principal quantum number n (1, 2, 3, ...)
    pub n: u32,
    /// Angular momentum quantum number l (0 to n-1)
    pub l: u32,
    /// Magnetic quantum number m (-l to +l)
    pub m: i32,
}

impl QuantumNumbers {
    pub fn new(n: u32, l: u32, m: i32) -> Option<Self> {
        if n == 0 || l >= n || m.unsigned_abs() > l {
            None
        } else {
            Some(Self { n, l, m })
        }
    }

    /// Orbital name (1s+0, 2p+1, 3d-2, etc.)
    pub fn name(&self) -> String {
        let l_char = match self.l {
            0 => 's',
            1 => 'p',
            2 => 'd',
            3 => 'f',
            _ => 'g',
        };
        format!("{}{}{:+}", self.n, l_char, self.m)
    }
}

/// One precomputed point of the probability-density field
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Sample {
    /// Radius in scaled Bohr radii
    pub r: f32,
    /// Polar angle from +z
    pub theta: f32,
    /// Azimuthal angle
    pub phi: f32,
    /// Probability density |ψ|² at this point
    pub p: f32,
}

/// Raw dataset entry as it appears on disk
#[derive(Debug, Deserialize)]
struct StateRecord {
    n: u32,
    l: u32,
    m: i32,
    data: Vec<Sample>,
}

/// An orbital together with its immutable ordered sample sequence
#[derive(Debug)]
pub struct QuantumState {
    numbers: QuantumNumbers,
    samples: Vec<Sample>,
}

impl QuantumState {
    pub fn numbers(&self) -> QuantumNumbers {
        self.numbers
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

/// Dataset problems rejected at load time, before any frame runs
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid quantum numbers n={n} l={l} m={m}")]
    InvalidQuantumNumbers { n: u32, l: u32, m: i32 },
    #[error("state {state}: sample {index} has invalid radius {r}")]
    InvalidRadius { state: String, index: usize, r: f32 },
    #[error("state {state}: sample {index} has non-finite angles")]
    InvalidAngles { state: String, index: usize },
    #[error("state {state}: sample {index} has invalid probability {p}")]
    InvalidProbability { state: String, index: usize, p: f32 },
}

/// The read-only sample store, one entry per quantum state.
///
/// An empty sample sequence is a valid degenerate state: its cursor never
/// yields a candidate and its population stays at zero.
#[derive(Debug, Default)]
pub struct SampleStore {
    states: Vec<QuantumState>,
}

impl SampleStore {
    /// Build a store from already-materialized state data, validating every
    /// sample.
    pub fn new(
        states: impl IntoIterator<Item = (QuantumNumbers, Vec<Sample>)>,
    ) -> Result<Self, DatasetError> {
        let mut validated = Vec::new();
        for (numbers, samples) in states {
            for (index, sample) in samples.iter().enumerate() {
                validate_sample(numbers, index, sample)?;
            }
            validated.push(QuantumState { numbers, samples });
        }

        let total: usize = validated.iter().map(|s| s.samples.len()).sum();
        info!("loaded {} states ({} samples)", validated.len(), total);

        Ok(Self { states: validated })
    }

    /// Parse and validate a JSON dataset of the form
    /// `[{"n": 3, "l": 2, "m": 2, "data": [{"r", "theta", "phi", "p"}, ...]}, ...]`.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<StateRecord> = serde_json::from_str(json)?;

        let mut states = Vec::with_capacity(records.len());
        for record in records {
            let numbers = QuantumNumbers::new(record.n, record.l, record.m).ok_or(
                DatasetError::InvalidQuantumNumbers {
                    n: record.n,
                    l: record.l,
                    m: record.m,
                },
            )?;
            states.push((numbers, record.data));
        }

        Self::new(states)
    }

    pub fn states(&self) -> &[QuantumState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

fn validate_sample(
    numbers: QuantumNumbers,
    index: usize,
    sample: &Sample,
) -> Result<(), DatasetError> {
    if !sample.r.is_finite() || sample.r < 0.0 {
        return Err(DatasetError::InvalidRadius {
            state: numbers.name(),
            index,
            r: sample.r,
        });
    }
    if !sample.theta.is_finite() || !sample.phi.is_finite() {
        return Err(DatasetError::InvalidAngles {
            state: numbers.name(),
            index,
        });
    }
    if !sample.p.is_finite() || sample.p < 0.0 {
        return Err(DatasetError::InvalidProbability {
            state: numbers.name(),
            index,
            p: sample.p,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(p: f32) -> Sample {
        Sample {
            r: 1.0,
            theta: 0.5,
            phi: 0.5,
            p,
        }
    }

    #[test]
    fn quantum_number_validity() {
        assert!(QuantumNumbers::new(3, 2, 2).is_some());
        assert!(QuantumNumbers::new(3, 2, -2).is_some());
        assert!(QuantumNumbers::new(0, 0, 0).is_none());
        assert!(QuantumNumbers::new(2, 2, 0).is_none());
        assert!(QuantumNumbers::new(2, 1, 2).is_none());
    }

    #[test]
    fn orbital_names() {
        assert_eq!(QuantumNumbers::new(1, 0, 0).unwrap().name(), "1s+0");
        assert_eq!(QuantumNumbers::new(3, 2, -2).unwrap().name(), "3d-2");
    }

    #[test]
    fn parses_valid_json() {
        let json = r#"[
            {"n": 2, "l": 1, "m": 0, "data": [
                {"r": 4.0, "theta": 1.2, "phi": 0.3, "p": 0.05},
                {"r": 6.5, "theta": 2.9, "phi": 4.1, "p": 0.0002}
            ]},
            {"n": 3, "l": 2, "m": 2, "data": []}
        ]"#;

        let store = SampleStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.states()[0].samples().len(), 2);
        assert_eq!(store.states()[0].numbers(), QuantumNumbers::new(2, 1, 0).unwrap());
        assert!(store.states()[1].samples().is_empty());
    }

    #[test]
    fn rejects_invalid_quantum_numbers() {
        let json = r#"[{"n": 1, "l": 1, "m": 0, "data": []}]"#;
        assert!(matches!(
            SampleStore::from_json(json),
            Err(DatasetError::InvalidQuantumNumbers { n: 1, l: 1, m: 0 })
        ));
    }

    #[test]
    fn rejects_negative_probability() {
        let qn = QuantumNumbers::new(1, 0, 0).unwrap();
        let result = SampleStore::new([(qn, vec![sample(0.1), sample(-0.5)])]);
        assert!(matches!(
            result,
            Err(DatasetError::InvalidProbability { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_nan_angles() {
        let qn = QuantumNumbers::new(1, 0, 0).unwrap();
        let bad = Sample {
            r: 1.0,
            theta: f32::NAN,
            phi: 0.0,
            p: 0.1,
        };
        let result = SampleStore::new([(qn, vec![bad])]);
        assert!(matches!(
            result,
            Err(DatasetError::InvalidAngles { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_nan_and_negative_radius() {
        let qn = QuantumNumbers::new(1, 0, 0).unwrap();
        let bad = Sample {
            r: -1.0,
            theta: 0.0,
            phi: 0.0,
            p: 0.1,
        };
        assert!(matches!(
            SampleStore::new([(qn, vec![bad])]),
            Err(DatasetError::InvalidRadius { index: 0, .. })
        ));
    }

    #[test]
    fn empty_state_is_valid() {
        let qn = QuantumNumbers::new(2, 0, 0).unwrap();
        let store = SampleStore::new([(qn, Vec::new())]).unwrap();
        assert_eq!(store.states()[0].samples().len(), 0);
    }
}
