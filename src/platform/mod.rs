//! Platform abstraction layer
//!
//! Tracking, physics and rendering belong to the host. The core reaches
//! them only through these traits:
//! - `TrackingSession`: camera pose, surface hit tests, session (re)configuration
//! - `DiceScene`: spawning/removing dice, rendered positions, scene hit tests

pub mod config;
pub mod headless;

pub use config::{
    PlaneDetection, RunOptions, SceneConfig, SurfaceMaterial, TrackingConfig, WorldAlignment,
};
pub use headless::HeadlessHost;

use glam::{Mat4, Vec2, Vec3};

use crate::sim::{AnchorId, CameraPose, DieId, DieLaunch};

/// One candidate returned by a surface hit test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub world_transform: Mat4,
}

impl SurfaceHit {
    pub fn at(position: Vec3) -> Self {
        Self {
            world_transform: Mat4::from_translation(position),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.world_transform.w_axis.truncate()
    }
}

/// The host's world-tracking session
pub trait TrackingSession {
    /// Whether the device supports world tracking at all
    fn is_supported(&self) -> bool {
        true
    }

    /// Camera pose of the current frame, if a frame is available
    fn camera_pose(&self) -> Option<CameraPose>;

    /// Detected surfaces (within their extents) under a screen point
    fn hit_test_surfaces(&mut self, screen_point: Vec2) -> Vec<SurfaceHit>;

    /// (Re)run the session with a configuration
    fn run(&mut self, config: &TrackingConfig, options: RunOptions);

    /// Stop drawing a detected surface
    fn hide_surface(&mut self, anchor: AnchorId);
}

/// The host's rendered, physics-simulated scene
pub trait DiceScene {
    fn configure(&mut self, config: &SceneConfig);

    /// Add a die and apply its launch impulse once
    fn spawn_die(&mut self, id: DieId, launch: &DieLaunch);

    fn remove_die(&mut self, id: DieId);

    /// Current rendered position, `None` if the scene no longer has the die
    fn die_position(&self, id: DieId) -> Option<Vec3>;

    /// Die under a screen point, if any
    fn hit_test(&self, screen_point: Vec2) -> Option<DieId>;

    fn place_focus_marker(&mut self, position: Vec3);
}

/// Everything the game flow needs from the host
pub trait Host: TrackingSession + DiceScene {}

impl<T: TrackingSession + DiceScene> Host for T {}
