//! In-memory host for the native demo and tests
//!
//! Records every call the core makes. Dice do not move on their own;
//! positions and screen placements are set explicitly.

use std::collections::BTreeMap;

use glam::{Vec2, Vec3};

use super::{DiceScene, RunOptions, SceneConfig, SurfaceHit, TrackingConfig, TrackingSession};
use crate::sim::{AnchorId, CameraPose, DieId, DieLaunch};

/// Screen distance (points) within which a tap lands on a die
pub const TAP_RADIUS: f32 = 24.0;

/// A die living in the headless scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessDie {
    pub launch: DieLaunch,
    pub position: Vec3,
    /// Where the die appears on screen (not tappable when `None`)
    pub screen_point: Option<Vec2>,
}

#[derive(Debug, Clone)]
pub struct HeadlessHost {
    pub supported: bool,
    pub camera: Option<CameraPose>,
    /// Returned by every surface hit test
    pub surface_hits: Vec<SurfaceHit>,
    /// Screen points the surface hit test was issued from
    pub surface_queries: Vec<Vec2>,
    pub runs: Vec<(TrackingConfig, RunOptions)>,
    pub hidden_surfaces: Vec<AnchorId>,
    pub scene_config: Option<SceneConfig>,
    pub dice: BTreeMap<DieId, HeadlessDie>,
    pub spawned: Vec<(DieId, DieLaunch)>,
    pub removed: Vec<DieId>,
    pub focus_marker: Option<Vec3>,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self {
            supported: true,
            camera: None,
            surface_hits: Vec::new(),
            surface_queries: Vec::new(),
            runs: Vec::new(),
            hidden_surfaces: Vec::new(),
            scene_config: None,
            dice: BTreeMap::new(),
            spawned: Vec::new(),
            removed: Vec::new(),
            focus_marker: None,
        }
    }
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with a camera at `position` looking down -Z
    pub fn with_camera_at(position: Vec3) -> Self {
        Self {
            camera: Some(CameraPose::at(position)),
            ..Self::default()
        }
    }

    /// Make the next surface hit tests return one hit per position
    pub fn set_surface_hits(&mut self, positions: &[Vec3]) {
        self.surface_hits = positions.iter().copied().map(SurfaceHit::at).collect();
    }

    pub fn set_die_position(&mut self, id: DieId, position: Vec3) {
        if let Some(die) = self.dice.get_mut(&id) {
            die.position = position;
        }
    }

    pub fn set_die_screen_point(&mut self, id: DieId, point: Vec2) {
        if let Some(die) = self.dice.get_mut(&id) {
            die.screen_point = Some(point);
        }
    }

    /// Move every die in the scene by `delta`
    pub fn shift_dice(&mut self, delta: Vec3) {
        for die in self.dice.values_mut() {
            die.position += delta;
        }
    }

    /// Drop a die from the scene without the core asking for it
    pub fn lose_die(&mut self, id: DieId) {
        self.dice.remove(&id);
    }

    /// Last configuration the session was run with
    pub fn last_run(&self) -> Option<&(TrackingConfig, RunOptions)> {
        self.runs.last()
    }
}

impl TrackingSession for HeadlessHost {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn camera_pose(&self) -> Option<CameraPose> {
        self.camera
    }

    fn hit_test_surfaces(&mut self, screen_point: Vec2) -> Vec<SurfaceHit> {
        self.surface_queries.push(screen_point);
        self.surface_hits.clone()
    }

    fn run(&mut self, config: &TrackingConfig, options: RunOptions) {
        log::debug!(
            "Headless session run: detection={:?} options={:?}",
            config.plane_detection,
            options
        );
        self.runs.push((*config, options));
    }

    fn hide_surface(&mut self, anchor: AnchorId) {
        self.hidden_surfaces.push(anchor);
    }
}

impl DiceScene for HeadlessHost {
    fn configure(&mut self, config: &SceneConfig) {
        self.scene_config = Some(config.clone());
    }

    fn spawn_die(&mut self, id: DieId, launch: &DieLaunch) {
        self.spawned.push((id, *launch));
        self.dice.insert(
            id,
            HeadlessDie {
                launch: *launch,
                position: launch.position,
                screen_point: None,
            },
        );
    }

    fn remove_die(&mut self, id: DieId) {
        self.dice.remove(&id);
        self.removed.push(id);
    }

    fn die_position(&self, id: DieId) -> Option<Vec3> {
        self.dice.get(&id).map(|die| die.position)
    }

    fn hit_test(&self, screen_point: Vec2) -> Option<DieId> {
        self.dice
            .iter()
            .filter_map(|(id, die)| {
                let dist = die.screen_point?.distance(screen_point);
                (dist <= TAP_RADIUS).then_some((*id, dist))
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }

    fn place_focus_marker(&mut self, position: Vec3) {
        self.focus_marker = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch_at(position: Vec3) -> DieLaunch {
        DieLaunch {
            style: 0,
            position,
            rotation: Vec3::ZERO,
            impulse: Vec3::ZERO,
        }
    }

    #[test]
    fn test_hit_test_picks_nearest_die_in_radius() {
        let mut host = HeadlessHost::new();
        host.spawn_die(DieId(1), &launch_at(Vec3::ZERO));
        host.spawn_die(DieId(2), &launch_at(Vec3::ZERO));
        host.set_die_screen_point(DieId(1), Vec2::new(100.0, 100.0));
        host.set_die_screen_point(DieId(2), Vec2::new(110.0, 100.0));

        assert_eq!(host.hit_test(Vec2::new(108.0, 100.0)), Some(DieId(2)));
        assert_eq!(host.hit_test(Vec2::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_removed_die_has_no_position() {
        let mut host = HeadlessHost::new();
        host.spawn_die(DieId(7), &launch_at(Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(host.die_position(DieId(7)), Some(Vec3::new(0.0, 1.0, 0.0)));

        host.remove_die(DieId(7));
        assert_eq!(host.die_position(DieId(7)), None);
        assert_eq!(host.removed, vec![DieId(7)]);
    }
}
