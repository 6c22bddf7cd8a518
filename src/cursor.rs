//! Cyclic sampling cursor
//!
//! Walks a state's sample sequence one entry per call and runs the
//! probability-weighted spawn trial. The cursor advances whether or not the
//! trial accepts, so over enough calls every sample keeps getting candidate
//! opportunities.

use rand::Rng;

use crate::config::CloudConfig;
use crate::dataset::{QuantumState, Sample};

/// Per-state position within the sample sequence
#[derive(Debug, Default)]
pub struct SamplingCursor {
    index: usize,
}

impl SamplingCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next candidate within the sample sequence
    pub fn position(&self) -> usize {
        self.index
    }

    /// Present the next sample as a spawn candidate.
    ///
    /// Advances the cursor (wrapping past the end), applies the probability
    /// floor, then accepts with chance `p * spawn_gain`. Returns the sample
    /// on acceptance. Touches nothing beyond its own index.
    pub fn try_next_candidate<'a, R: Rng>(
        &mut self,
        state: &'a QuantumState,
        config: &CloudConfig,
        rng: &mut R,
    ) -> Option<&'a Sample> {
        let samples = state.samples();
        if samples.is_empty() {
            return None;
        }

        // A cursor handed a shorter sequence than it last walked must not
        // index out of bounds; stay in range for whatever it is given
        let index = self.index % samples.len();
        self.index = (index + 1) % samples.len();

        let sample = &samples[index];

        if sample.p <= config.minimum_probability {
            return None;
        }
        if rng.gen::<f32>() < sample.p * config.spawn_gain {
            Some(sample)
        } else {
            None
        }
    }
}
