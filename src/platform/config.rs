//! Immutable tracking and scene configuration values
//!
//! The host session is never mutated in place: the core builds a new
//! `TrackingConfig` and hands it to `TrackingSession::run`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Surface detection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlaneDetection {
    /// Detection suspended (surfaces already chosen)
    None,
    #[default]
    Horizontal,
}

/// How the session's world coordinates are oriented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WorldAlignment {
    /// Y axis parallel to gravity
    #[default]
    Gravity,
    /// Axes follow the camera's initial orientation
    Camera,
}

/// World tracking configuration handed to the host session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub world_alignment: WorldAlignment,
    pub plane_detection: PlaneDetection,
    pub light_estimation: bool,
    pub provides_audio: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            world_alignment: WorldAlignment::Gravity,
            plane_detection: PlaneDetection::Horizontal,
            light_estimation: true,
            provides_audio: false,
        }
    }
}

impl TrackingConfig {
    /// Copy of this configuration with a different detection mode
    pub fn with_plane_detection(self, plane_detection: PlaneDetection) -> Self {
        Self {
            plane_detection,
            ..self
        }
    }

    pub fn detects_surfaces(&self) -> bool {
        self.plane_detection != PlaneDetection::None
    }
}

/// Options applied when (re)running the tracking session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Restart camera tracking from scratch
    pub reset_tracking: bool,
    /// Forget every previously detected surface anchor
    pub remove_existing_anchors: bool,
}

impl RunOptions {
    /// Keep tracking and anchors, only swap the configuration
    pub const KEEP: Self = Self {
        reset_tracking: false,
        remove_existing_anchors: false,
    };

    /// Start over: fresh tracking, no anchors
    pub const FRESH: Self = Self {
        reset_tracking: true,
        remove_existing_anchors: true,
    };
}

/// Physics material for detected surfaces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMaterial {
    pub restitution: f32,
    pub friction: f32,
}

impl Default for SurfaceMaterial {
    fn default() -> Self {
        Self {
            restitution: SURFACE_RESTITUTION,
            friction: SURFACE_FRICTION,
        }
    }
}

/// Scene setup handed to the host once per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Physics world speed multiplier
    pub physics_speed: f32,
    /// Physics step (seconds)
    pub physics_time_step: f32,
    /// Environment map asset used for image-based lighting
    pub lighting_environment: String,
    pub lighting_intensity: f32,
    pub surface_material: SurfaceMaterial,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            physics_speed: PHYSICS_SPEED,
            physics_time_step: PHYSICS_TIME_STEP,
            lighting_environment: LIGHTING_ENVIRONMENT.to_string(),
            lighting_intensity: LIGHTING_INTENSITY,
            surface_material: SurfaceMaterial::default(),
        }
    }
}
