//! Per-frame orchestration
//!
//! `CloudSimulation` drives decay-then-replenish across every quantum state
//! once per display frame, then hands the full particle set to the render
//! collaborator as one batch. The host's animation loop owns the cadence;
//! each `tick` is synchronous and bounded by capacity times state count.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::CloudConfig;
use crate::dataset::SampleStore;
use crate::population::StateCloud;

/// Instance data for one visible point, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Billboard size for cloud points
pub const POINT_SIZE: f32 = 0.05;

/// Render collaborator boundary.
///
/// Receives exactly one complete batch per tick; partially-built frames are
/// never visible to the sink.
pub trait RenderSink {
    /// Replace the visible particle set with this tick's batch
    fn submit(&mut self, points: &[PointInstance]);
}

/// A sink that simply keeps the latest batch
impl RenderSink for Vec<PointInstance> {
    fn submit(&mut self, points: &[PointInstance]) {
        self.clear();
        self.extend_from_slice(points);
    }
}

/// The full simulation: sample store, per-state populations, and the frame
/// loop body.
pub struct CloudSimulation {
    store: SampleStore,
    config: CloudConfig,
    clouds: Vec<StateCloud>,
    rng: StdRng,
    batch: Vec<PointInstance>,
}

impl CloudSimulation {
    pub fn new(store: SampleStore, config: CloudConfig) -> Self {
        Self::with_rng(store, config, StdRng::from_entropy())
    }

    /// Deterministic variant for tests and reproducible runs
    pub fn with_seed(store: SampleStore, config: CloudConfig, seed: u64) -> Self {
        Self::with_rng(store, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: SampleStore, config: CloudConfig, rng: StdRng) -> Self {
        let clouds = store.states().iter().map(|_| StateCloud::new()).collect();
        Self {
            store,
            config,
            clouds,
            rng,
            batch: Vec::new(),
        }
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    /// Live particle count for the state at `index`
    pub fn live_count(&self, index: usize) -> usize {
        self.clouds[index].live_count()
    }

    /// Per-state populations, in store order
    pub fn clouds(&self) -> &[StateCloud] {
        &self.clouds
    }

    /// Total live particles across all states
    pub fn total_live(&self) -> usize {
        self.clouds.iter().map(StateCloud::live_count).sum()
    }

    /// Run one frame: age and evict, refill, then hand off the batch.
    ///
    /// Eviction runs strictly before replenishment per state, so a slot
    /// vacated this frame is refillable this frame.
    pub fn tick<S: RenderSink>(&mut self, sink: &mut S) {
        self.batch.clear();

        for (state, cloud) in self.store.states().iter().zip(self.clouds.iter_mut()) {
            let evicted = cloud.decay_and_evict();
            let spawned = cloud.replenish(state, &self.config, &mut self.rng);
            if evicted > 0 || spawned > 0 {
                debug!(
                    "{}: evicted {}, spawned {}, live {}",
                    state.numbers().name(),
                    evicted,
                    spawned,
                    cloud.live_count()
                );
            }

            self.batch.extend(cloud.particles().iter().map(|particle| {
                PointInstance {
                    position: particle.position.to_array(),
                    size: POINT_SIZE,
                    color: [
                        particle.color[0],
                        particle.color[1],
                        particle.color[2],
                        particle.alpha,
                    ],
                }
            }));
        }

        sink.submit(&self.batch);
    }
}
