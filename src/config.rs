//! Tunable visualization parameters
//!
//! One shared set of knobs for every quantum state. None of these are
//! physical quantities; they shape how readable the cloud looks and how
//! quickly it churns.

/// Monotone mapping from sample probability to initial particle life.
///
/// Higher-probability samples stay visible longer: `life = base + gain * p`.
#[derive(Debug, Clone, Copy)]
pub struct LifeCurve {
    /// Life granted to any accepted sample, in frames
    pub base: f32,
    /// Extra frames per unit probability
    pub per_probability: f32,
}

impl LifeCurve {
    pub fn life_for(&self, p: f32) -> f32 {
        self.base + self.per_probability * p
    }
}

impl Default for LifeCurve {
    fn default() -> Self {
        Self {
            base: 60.0,
            per_probability: 2400.0,
        }
    }
}

/// Population and visual-mapping tunables
#[derive(Debug, Clone, Copy)]
pub struct CloudConfig {
    /// Steady-state particle count per state; zero is valid and spawns nothing
    pub target_capacity: usize,
    /// Samples with probability at or below this never spawn
    pub minimum_probability: f32,
    /// Acceptance scale for the spawn trial: accept when `random < p * spawn_gain`
    pub spawn_gain: f32,
    /// Visual spread factor applied to sample radii
    pub radial_scale: f32,
    /// Probability-to-life mapping
    pub life: LifeCurve,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            target_capacity: 1500,
            // Below this the points read as noise rather than structure
            minimum_probability: 1e-5,
            // Useful range is roughly 10-200; tuned by eye
            spawn_gain: 60.0,
            radial_scale: 5.0,
            life: LifeCurve::default(),
        }
    }
}
