//! Headless cloud driver
//!
//! Loads a wavefunction sample dataset, runs the particle engine for a fixed
//! number of frames, and logs population statistics. A rendering front end
//! would consume the same batches through its own `RenderSink`.
//!
//! Usage: `orbital_cloud <dataset.json>`

use std::fs;
use std::process::ExitCode;

use log::{error, info};

use orbital_cloud::config::CloudConfig;
use orbital_cloud::dataset::SampleStore;
use orbital_cloud::scheduler::{CloudSimulation, PointInstance, RenderSink};

const DEMO_FRAMES: usize = 600;

/// Sink that tracks batch sizes instead of drawing
struct StatsSink {
    frames: usize,
    last_len: usize,
    peak_len: usize,
}

impl RenderSink for StatsSink {
    fn submit(&mut self, points: &[PointInstance]) {
        self.frames += 1;
        self.last_len = points.len();
        self.peak_len = self.peak_len.max(points.len());
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    let store = SampleStore::from_json(&json)?;
    let mut sim = CloudSimulation::new(store, CloudConfig::default());

    let mut sink = StatsSink {
        frames: 0,
        last_len: 0,
        peak_len: 0,
    };
    for _ in 0..DEMO_FRAMES {
        sim.tick(&mut sink);
    }

    for (index, state) in sim.store().states().iter().enumerate() {
        info!(
            "{}: {} live / {} samples",
            state.numbers().name(),
            sim.live_count(index),
            state.samples().len()
        );
    }
    info!(
        "{} frames, {} particles at exit (peak {})",
        sink.frames, sink.last_len, sink.peak_len
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: orbital_cloud <dataset.json>");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
