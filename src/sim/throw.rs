//! Throw parameters: spawn position, launch impulse and initial rotation

use std::f32::consts::PI;

use glam::{Mat4, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Camera pose of one tracked frame
///
/// The camera looks down its local -Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub transform: Mat4,
}

impl CameraPose {
    pub fn new(transform: Mat4) -> Self {
        Self { transform }
    }

    /// Unrotated camera at `position`
    pub fn at(position: Vec3) -> Self {
        Self::new(Mat4::from_translation(position))
    }

    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// Third orientation basis (points out of the back of the device)
    pub fn z_basis(&self) -> Vec3 {
        self.transform.z_axis.truncate()
    }
}

/// Impulse tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowTuning {
    /// Impulse magnitude per unit of camera-to-focus distance
    pub impulse_per_distance: f32,
    /// Subtracted from the basis' vertical component before negation
    pub pitch_bias: f32,
}

impl Default for ThrowTuning {
    fn default() -> Self {
        Self {
            impulse_per_distance: IMPULSE_PER_DISTANCE,
            pitch_bias: THROW_PITCH_BIAS,
        }
    }
}

/// Everything the scene needs to spawn one die
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieLaunch {
    /// Dice style index
    pub style: u8,
    pub position: Vec3,
    /// Euler angles (radians)
    pub rotation: Vec3,
    /// Applied once, at spawn
    pub impulse: Vec3,
}

/// Three independent angles, each uniform in [0, π]
pub fn random_rotation(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.random_range(0.0..=PI),
        rng.random_range(0.0..=PI),
        rng.random_range(0.0..=PI),
    )
}

/// Launch impulse for a die thrown from `camera` toward `focus`
///
/// Magnitude grows linearly with the distance to the focus point; direction
/// is the negated z basis with its vertical component biased by the pitch.
pub fn throw_impulse(camera: &CameraPose, focus: Vec3, tuning: &ThrowTuning) -> Vec3 {
    let distance = focus.distance(camera.position());
    let z = camera.z_basis();
    let scale = distance * tuning.impulse_per_distance;
    -scale * Vec3::new(z.x, z.y - tuning.pitch_bias, z.z)
}

/// Full launch for one die at a spawn offset from the camera
pub fn launch_die(
    camera: &CameraPose,
    offset: Vec3,
    focus: Vec3,
    style: u8,
    tuning: &ThrowTuning,
    rng: &mut impl Rng,
) -> DieLaunch {
    DieLaunch {
        style,
        position: camera.position() + offset,
        rotation: random_rotation(rng),
        impulse: throw_impulse(camera, focus, tuning),
    }
}
