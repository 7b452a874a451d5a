//! # Application State Management
//!
//! This module handles everything around the engine that is not the engine itself:
//! - Configuration loading
//! - The input report the engine reads each frame
//! - The headless frame loop used by the binary

pub mod config;
pub mod input_state;

use log::{info, warn};

use config::EngineConfig;
use input_state::{InputState, MovementKey};

use crate::engine_state::{rendering::LoggingRasterizer, rendering::Rasterizer, EngineState};
use crate::math::{AngleDeg, Vec3};

/// Input fed to the headless loop: walk forward while slowly panning right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedInput {
    /// Mouse pixels moved right every frame
    pub pan_per_frame: f32,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self { pan_per_frame: 1.0 }
    }
}

impl ScriptedInput {
    /// Writes this frame's input into `input`.
    pub fn apply(&self, input: &mut InputState) {
        input.set(MovementKey::Forward, true);
        input.on_mouse_move(self.pan_per_frame, 0.0);
    }
}

/// What a headless run ended with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames simulated
    pub frames: usize,
    /// Where the player ended up
    pub final_position: Vec3,
    /// The player's final yaw
    pub final_yaw: AngleDeg,
    /// Vertices submitted over every frame
    pub total_vertices: usize,
}

/// Runs `config.frames` ticks of the engine with scripted input.
///
/// # Arguments
/// * `state` - The engine to drive
/// * `script` - The input to feed every frame
/// * `rasterizer` - Receives each frame's scene
pub fn simulate(
    state: &mut EngineState,
    script: ScriptedInput,
    rasterizer: &mut dyn Rasterizer,
) -> RunSummary {
    let frames = state.config().frames;
    let frame_time = web_time::Duration::from_millis(state.config().frame_time_ms);
    let mut input = InputState::new();
    let mut total_vertices = 0;

    for _ in 0..frames {
        script.apply(&mut input);
        let scene = state.tick(frame_time, &mut input, rasterizer);
        total_vertices += scene.vertex_count();
    }

    RunSummary {
        frames,
        final_position: state.position,
        final_yaw: state.yaw,
        total_vertices,
    }
}

/// Loads the configuration named by the first command-line argument.
///
/// Falls back to the defaults when no path is given or the file can't be used.
pub fn config_from_args() -> EngineConfig {
    let Some(path) = std::env::args().nth(1) else {
        info!("No config path given, using defaults");
        return EngineConfig::default();
    };
    match EngineConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err}; falling back to default config");
            EngineConfig::default()
        }
    }
}

/// Initializes logging, builds the engine and simulates the configured frames.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();
    info!("Logger initialized");

    let config = config_from_args();
    let started = web_time::Instant::now();
    let mut state = EngineState::new(config);
    let mut rasterizer = LoggingRasterizer::default();
    let summary = simulate(&mut state, ScriptedInput::default(), &mut rasterizer);

    info!(
        "Simulated {} frames in {:?}: ended at {:?} facing yaw {:.1}, {} vertices submitted",
        summary.frames,
        started.elapsed(),
        summary.final_position,
        summary.final_yaw,
        summary.total_vertices
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::world::World;

    #[test]
    fn simulate_walks_forward_and_pans() {
        let config = EngineConfig {
            frames: 10,
            frame_time_ms: 100,
            ..EngineConfig::default()
        };
        let mut state = EngineState::with_world(config, World::with_radius(1));
        let mut rasterizer = LoggingRasterizer::default();
        let summary = simulate(&mut state, ScriptedInput::default(), &mut rasterizer);

        assert_eq!(summary.frames, 10);
        assert_eq!(rasterizer.frames, 10);
        assert!((summary.final_yaw + 10.0 / 45.0).abs() < 1e-4);
        // one second of walking at 8 units/s, curving slightly to the right
        let travelled = summary.final_position - Vec3::new(0.0, 0.0, 48.0);
        assert!((travelled.magnitude() - 8.0).abs() < 1e-2);
        assert!(travelled.z < 0.0);
        assert_eq!(summary.total_vertices, 0);
    }

    #[test]
    fn summary_counts_vertices_of_every_frame() {
        let config = EngineConfig {
            frames: 3,
            seed: Some(11),
            world_radius: 1,
            ..EngineConfig::default()
        };
        let mut state = EngineState::new(config);
        let per_frame = state.scene().vertex_count();
        let mut rasterizer = LoggingRasterizer::default();
        let summary = simulate(&mut state, ScriptedInput::default(), &mut rasterizer);
        assert_eq!(summary.total_vertices, per_frame * 3);
        assert_eq!(rasterizer.total_vertices, per_frame * 3);
    }
}
