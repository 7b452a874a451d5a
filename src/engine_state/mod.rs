//! # Engine State Module
//!
//! The core engine module that manages the state and functionality of the voxel engine.
//!
//! ## Key Components
//!
//! * `EngineState` - The player, the world, and the per-frame update
//! * `camera_state` - Camera maths and the packed camera uniform
//! * `rendering` - Chunk meshing and the rasterizer seam
//! * `scene` - The per-frame snapshot handed to the rasterizer
//! * `voxels` - Blocks, chunks and the world grid
//!
//! ## Frame Flow
//!
//! Each tick reads the input report, moves the player, clears the consumed mouse
//! movement, collects every chunk's mesh (rebuilding only stale ones) and hands the
//! resulting scene to the rasterizer.

use std::rc::Rc;

use log::{debug, trace};

use camera_state::Camera;
use rendering::{meshing::ChunkView, Rasterizer};
use scene::Scene;
use voxels::world::World;

use crate::{
    application_state::{config::EngineConfig, input_state::InputState},
    math::{clamp, AngleDeg, Vec3},
};

pub mod camera_state;
pub mod rendering;
pub mod scene;
pub mod voxels;

/// Pitch is kept within this many degrees of level.
pub const PITCH_LIMIT: AngleDeg = 90.0;

/// The main state container for the voxel engine
///
/// Holds the player's position and orientation alongside the world, and turns input
/// reports into movement once per frame.
///
/// # Examples
///
/// ```
/// use voxel_scene::{EngineConfig, EngineState, InputState, LoggingRasterizer};
///
/// let config = EngineConfig { seed: Some(1), world_radius: 1, ..EngineConfig::default() };
/// let mut engine_state = EngineState::new(config);
/// let mut input = InputState::new();
/// let mut rasterizer = LoggingRasterizer::default();
///
/// input.on_key("w", true);
/// let scene = engine_state.tick(web_time::Duration::from_millis(16), &mut input, &mut rasterizer);
/// assert_eq!(scene.chunks.len(), 8);
/// ```
pub struct EngineState {
    /// The player's position in world space
    pub position: Vec3,
    /// Up/down look angle in degrees, within `±PITCH_LIMIT`
    pub pitch: AngleDeg,
    /// Left/right look angle in degrees
    pub yaw: AngleDeg,
    /// The voxel world containing all chunk data
    pub world: World,
    /// Engine tunables
    config: EngineConfig,
}

impl EngineState {
    /// Creates a new engine state with a freshly populated world
    ///
    /// # Arguments
    ///
    /// * `config` - Engine tunables; `config.seed` makes the world reproducible
    ///
    /// # Returns
    ///
    /// A fully initialized `EngineState` instance
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut world = World::with_radius(config.world_radius);
        world.populate(&mut rng, config.fill_probability);
        Self::with_world(config, world)
    }

    /// Creates an engine state around an existing world.
    pub fn with_world(config: EngineConfig, world: World) -> Self {
        Self {
            position: config.spawn_position,
            pitch: 0.0,
            yaw: 0.0,
            world,
            config,
        }
    }

    /// The engine's tunables.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A camera for the player's current position and orientation.
    pub fn camera(&self) -> Camera {
        Camera::new(self.position, self.pitch, self.yaw)
            .with_projection(
                self.config.field_of_view,
                self.config.near_plane,
                self.config.far_plane,
            )
            .with_aspect_ratio(self.config.aspect_ratio)
    }

    /// Moves and turns the player according to the input report.
    ///
    /// # Arguments
    ///
    /// * `wait_duration` - The time elapsed since the last frame
    /// * `input` - The held keys and the mouse movement since the last frame
    pub fn update(&mut self, wait_duration: web_time::Duration, input: &InputState) {
        let actions = PlayerAction::from_input(input);
        let [rel_x, rel_y, rel_z] = self.camera().relative_xyz();

        let position_delta = rel_x.scale(actions.strafe)
            + rel_y.scale(actions.lift)
            + rel_z.scale(actions.advance);
        let step = wait_duration.as_secs_f32() * self.config.movement_speed;
        self.position = self.position + position_delta.norm().scale(step);

        let (dx, dy) = actions.rotate_view;
        self.yaw -= dx * self.config.mouse_speed;
        self.pitch = clamp(
            self.pitch - dy * self.config.mouse_speed,
            -PITCH_LIMIT,
            PITCH_LIMIT,
        );
        trace!(
            "Player at {:?}, pitch {:.2}, yaw {:.2}",
            self.position,
            self.pitch,
            self.yaw
        );
    }

    /// Every chunk's mesh, rebuilding only the chunks edited since the last call.
    pub fn views(&mut self) -> Vec<Rc<ChunkView>> {
        self.world.views()
    }

    /// A description of the current scene.
    pub fn scene(&mut self) -> Scene {
        let chunks = self.views();
        Scene::new(self.camera(), self.config.aspect_ratio, chunks)
    }

    /// Runs one frame: update, clear consumed input, assemble the scene and draw it.
    ///
    /// # Returns
    ///
    /// The scene that was drawn
    pub fn tick(
        &mut self,
        wait_duration: web_time::Duration,
        input: &mut InputState,
        rasterizer: &mut dyn Rasterizer,
    ) -> Scene {
        self.update(wait_duration, input);
        input.reset();
        let scene = self.scene();
        debug!(
            "Tick of {:?}: {} chunks, {} vertices",
            wait_duration,
            scene.chunks.len(),
            scene.vertex_count()
        );
        rasterizer.draw(&scene);
        scene
    }
}

/// Represents player actions derived from input
///
/// Each axis factor is -1, 0 or +1 along the camera's right, up and backward axes.
/// When both keys of a pair are held, left, down and forward win.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlayerAction {
    /// -1 left, +1 right
    pub strafe: f32,
    /// -1 down, +1 up
    pub lift: f32,
    /// -1 forward, +1 back
    pub advance: f32,
    /// Mouse movement in pixels
    pub rotate_view: (f32, f32),
}

impl PlayerAction {
    /// Translates an input report into player actions.
    pub fn from_input(input: &InputState) -> Self {
        Self {
            strafe: axis(input.left(), input.right()),
            lift: axis(input.down(), input.up()),
            advance: axis(input.forward(), input.back()),
            rotate_view: (input.mouse_dx, input.mouse_dy),
        }
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    if negative {
        -1.0
    } else if positive {
        1.0
    } else {
        0.0
    }
}
