//! Sample-to-render-attribute mapping
//!
//! Pure functions from (quantum numbers, sample) to a render-ready position,
//! color, and opacity tier. Nothing here touches cursor or particle state.

use glam::Vec3;

use crate::dataset::{QuantumNumbers, Sample};

/// Render-ready attributes for one accepted sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderAttributes {
    pub position: Vec3,
    pub color: [f32; 3],
    pub alpha: f32,
}

pub fn to_render_attributes(
    numbers: QuantumNumbers,
    sample: &Sample,
    radial_scale: f32,
) -> RenderAttributes {
    RenderAttributes {
        position: spherical_to_cartesian(sample.r * radial_scale, sample.theta, sample.phi),
        color: state_color(numbers),
        alpha: opacity_tier(sample.p),
    }
}

/// Physics-convention spherical coordinates: theta polar from +z, phi azimuthal
pub fn spherical_to_cartesian(r: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    )
}

/// Deterministic per-state color: n, l, m each occupy one 8-bit channel.
///
/// m is shifted by l into 0..=2l before encoding so negative values get their
/// own channel values. No lookup table, so any valid triple gets a distinct
/// stable hue.
pub fn state_color(numbers: QuantumNumbers) -> [f32; 3] {
    let m_shifted = (numbers.m + numbers.l as i32) as u32;
    [
        channel(numbers.n),
        channel(numbers.l + 1),
        channel(m_shifted + 1),
    ]
}

/// Map a small integer into a visible 0x30..=0xFF channel byte
fn channel(value: u32) -> f32 {
    let byte = 0x30 + (value * 0x28).min(0xCF);
    byte as f32 / 255.0
}

/// Quantized opacity ladder over probability magnitude.
///
/// Six bands spanning five decades; a lower probability never lands on a
/// higher tier than a higher one.
pub fn opacity_tier(p: f32) -> f32 {
    if p > 0.1 {
        1.0
    } else if p > 0.01 {
        0.8
    } else if p > 0.001 {
        0.6
    } else if p > 0.0001 {
        0.4
    } else if p > 0.00001 {
        0.2
    } else {
        0.1
    }
}
