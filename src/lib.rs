//! Poker Dice - game-flow core for an AR tabletop dice game
//!
//! Core modules:
//! - `sim`: Deterministic game flow (state machine, throws, dice lifecycle)
//! - `platform`: Host collaborator traits (tracking session, dice scene)
//! - `settings`: Data-driven tuning and initial tracking/scene configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Dice in the player's hand at the start of a session
    pub const INITIAL_DICE_COUNT: u32 = 5;
    /// Number of dice styles (visual/physical variants)
    pub const DICE_STYLE_COUNT: u8 = 5;

    /// Spawn offsets from the camera, one per simultaneously thrown die
    pub const DICE_OFFSETS: [Vec3; 5] = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(-0.05, 0.0, 0.0),
        Vec3::new(0.05, 0.0, 0.0),
        Vec3::new(-0.05, 0.05, 0.02),
        Vec3::new(0.05, 0.05, 0.02),
    ];

    /// Impulse magnitude per unit of camera-to-focus distance
    pub const IMPULSE_PER_DISTANCE: f32 = 2.5;
    /// Subtracted from the vertical basis component so throws arc downward
    pub const THROW_PITCH_BIAS: f32 = std::f32::consts::FRAC_PI_4;

    /// Dice below this height (world units) are returned to the hand
    pub const FALL_OUT_Y: f32 = -2.0;

    /// Focus anchor sits below screen center by this fraction of half-height
    pub const FOCUS_ANCHOR_DROP: f32 = 0.25;

    /// Physics world settings handed to the scene
    pub const PHYSICS_SPEED: f32 = 1.0;
    pub const PHYSICS_TIME_STEP: f32 = 1.0 / 60.0;

    /// Environment lighting
    pub const LIGHTING_ENVIRONMENT: &str = "PokerDice.scnassets/Textures/Environment_CUBE.jpg";
    pub const LIGHTING_INTENSITY: f32 = 2.0;

    /// Detected surface physics material
    pub const SURFACE_RESTITUTION: f32 = 0.5;
    pub const SURFACE_FRICTION: f32 = 0.5;
}

/// Screen-space point the focus hit test is issued from.
///
/// Horizontal center of the viewport, pushed below vertical center by
/// `drop` times the half-height.
#[inline]
pub fn focus_anchor(viewport: Vec2, drop: f32) -> Vec2 {
    let center = viewport * 0.5;
    Vec2::new(center.x, center.y + center.y * drop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_anchor_portrait() {
        let anchor = focus_anchor(Vec2::new(390.0, 844.0), consts::FOCUS_ANCHOR_DROP);
        assert_eq!(anchor.x, 195.0);
        assert!((anchor.y - 527.5).abs() < 1e-4);
    }

    #[test]
    fn test_focus_anchor_zero_drop_is_center() {
        let anchor = focus_anchor(Vec2::new(800.0, 600.0), 0.0);
        assert_eq!(anchor, Vec2::new(400.0, 300.0));
    }
}
