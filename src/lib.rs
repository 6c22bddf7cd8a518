//! Orbital Probability Cloud Engine
//!
//! Turns a precomputed table of hydrogen-orbital probability-density samples
//! into a continuously recycled, bounded point cloud:
//!
//! - **Sample store**: validated, immutable per-orbital sample sequences
//! - **Sampling cursor**: cyclic walk with probability-weighted spawn trials
//! - **Population manager**: per-state decay, eviction, and capacity-bounded refill
//! - **Visual mapping**: spherical positions, per-state color, quantized opacity
//! - **Frame scheduler**: one decay/replenish pass per display frame, one
//!   complete batch to the render collaborator
//!
//! Drawing is out of scope: the engine emits [`scheduler::PointInstance`]
//! batches and a separate front end owns the GPU, camera, and controls.

pub mod config;
pub mod cursor;
pub mod dataset;
pub mod population;
pub mod scheduler;
pub mod visual;
