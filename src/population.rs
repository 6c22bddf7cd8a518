//! Particle population management
//!
//! Each quantum state owns an independent live particle set. Every frame the
//! set is aged and pruned, then refilled toward the target capacity by
//! running spawn trials through the state's sampling cursor. States share no
//! mutable state with each other, so they could be processed in parallel.

use glam::Vec3;
use rand::Rng;

use crate::config::CloudConfig;
use crate::cursor::SamplingCursor;
use crate::dataset::QuantumState;
use crate::visual;

/// Life removed from every particle each frame
pub const DECAY_STEP: f32 = 1.0;

/// A transient visible point spawned from one accepted sample
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
    pub alpha: f32,
    /// Countdown in frames; set once at spawn, only ever decremented
    pub remaining_life: f32,
}

/// Live particles and sampling cursor for one quantum state.
///
/// The live count is the vec length, so count and set cannot drift apart.
#[derive(Debug, Default)]
pub struct StateCloud {
    cursor: SamplingCursor,
    particles: Vec<Particle>,
}

impl StateCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn cursor(&self) -> &SamplingCursor {
        &self.cursor
    }

    /// Age every particle by one frame and evict the expired.
    ///
    /// Life clamps at zero rather than wrapping; a particle whose life hits
    /// zero is gone the same frame. Returns the number evicted.
    pub fn decay_and_evict(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|particle| {
            particle.remaining_life = (particle.remaining_life - DECAY_STEP).max(0.0);
            particle.remaining_life > 0.0
        });
        before - self.particles.len()
    }

    /// Refill toward target capacity from the sample sequence.
    ///
    /// Runs spawn trials until capacity is reached or one full cycle of the
    /// sequence has been presented, whichever comes first. The cycle cap
    /// keeps a frame bounded when the probability floor excludes most
    /// samples. Returns the number spawned.
    pub fn replenish<R: Rng>(
        &mut self,
        state: &QuantumState,
        config: &CloudConfig,
        rng: &mut R,
    ) -> usize {
        let before = self.particles.len();
        let cycle = state.samples().len();
        let mut attempts = 0;

        while self.particles.len() < config.target_capacity && attempts < cycle {
            attempts += 1;
            if let Some(sample) = self.cursor.try_next_candidate(state, config, rng) {
                let attrs =
                    visual::to_render_attributes(state.numbers(), sample, config.radial_scale);
                self.particles.push(Particle {
                    position: attrs.position,
                    color: attrs.color,
                    alpha: attrs.alpha,
                    remaining_life: config.life.life_for(sample.p),
                });
            }
        }

        self.particles.len() - before
    }
}
