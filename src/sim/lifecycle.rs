//! Dice lifecycle: hand vs. table, recycling fallen and tapped dice
//!
//! Every die is either in the hand (`DiceInventory::count`) or live on the
//! table (indexed by `DieId`). Recycling moves a die from the table back to
//! the hand exactly once; a die that left the index is never visited again.

use std::collections::BTreeMap;

use glam::Vec2;

use super::inventory::DiceInventory;
use super::state::DieId;
use super::throw::DieLaunch;
use crate::platform::DiceScene;

/// A thrown die still on the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveDie {
    pub launch: DieLaunch,
    /// Tick the die was thrown on
    pub thrown_at: u64,
}

/// Why a die went back into the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecycleCause {
    /// Dropped below the fall-out height
    Fell,
    /// Tapped by the player
    Tapped,
    /// Scene stopped reporting it
    Vanished,
    /// Cleared by a reset
    Reset,
}

#[derive(Debug, Clone)]
pub struct DiceLifecycle {
    inventory: DiceInventory,
    live: BTreeMap<DieId, LiveDie>,
    fall_out_y: f32,
}

impl DiceLifecycle {
    pub fn new(inventory: DiceInventory, fall_out_y: f32) -> Self {
        Self {
            inventory,
            live: BTreeMap::new(),
            fall_out_y,
        }
    }

    pub fn inventory(&self) -> &DiceInventory {
        &self.inventory
    }

    /// Dice available to throw
    pub fn in_hand(&self) -> u32 {
        self.inventory.count()
    }

    /// Dice currently on the table
    pub fn in_play(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: DieId) -> bool {
        self.live.contains_key(&id)
    }

    /// Live dice in id order
    pub fn live(&self) -> impl Iterator<Item = (DieId, &LiveDie)> {
        self.live.iter().map(|(id, die)| (*id, die))
    }

    pub fn cycle_style(&mut self) -> u8 {
        self.inventory.cycle_style()
    }

    /// Move one die from the hand onto the table.
    ///
    /// Returns false (and records nothing) when the hand is empty.
    pub fn spawn(&mut self, id: DieId, launch: DieLaunch, thrown_at: u64) -> bool {
        if !self.inventory.take() {
            return false;
        }
        self.live.insert(id, LiveDie { launch, thrown_at });
        true
    }

    /// Return a live die to the hand. No-op for unknown or already recycled ids.
    pub fn recycle(&mut self, id: DieId, cause: RecycleCause) -> bool {
        if self.live.remove(&id).is_none() {
            return false;
        }
        self.inventory.give_back();
        log::debug!("Die {:?} recycled ({:?}), {} in hand", id, cause, self.in_hand());
        true
    }

    /// Recycle every live die below the fall-out height.
    ///
    /// Dice the scene no longer knows about are reclaimed too so the hand
    /// never loses count. Returns the number recycled.
    pub fn sweep_fallen(&mut self, scene: &mut impl DiceScene) -> usize {
        let mut recycled = Vec::new();
        for id in self.live.keys().copied() {
            match scene.die_position(id) {
                Some(pos) if pos.y < self.fall_out_y => recycled.push((id, RecycleCause::Fell)),
                Some(_) => {}
                None => recycled.push((id, RecycleCause::Vanished)),
            }
        }

        for &(id, cause) in &recycled {
            match cause {
                RecycleCause::Vanished => {
                    log::warn!("Die {:?} missing from scene, reclaiming", id);
                }
                _ => scene.remove_die(id),
            }
            self.recycle(id, cause);
        }
        recycled.len()
    }

    /// Recycle the live die under a tap, if the scene resolves one
    pub fn collect_tapped(&mut self, scene: &mut impl DiceScene, point: Vec2) -> Option<DieId> {
        let id = scene.hit_test(point)?;
        if !self.is_live(id) {
            return None;
        }
        scene.remove_die(id);
        self.recycle(id, RecycleCause::Tapped);
        Some(id)
    }

    /// Remove every live die from the scene and return it to the hand
    pub fn clear(&mut self, scene: &mut impl DiceScene) -> usize {
        let ids: Vec<DieId> = self.live.keys().copied().collect();
        for &id in &ids {
            if scene.die_position(id).is_some() {
                scene.remove_die(id);
            }
            self.recycle(id, RecycleCause::Reset);
        }
        ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::HeadlessHost;
    use glam::Vec3;

    fn launch_at(position: Vec3) -> DieLaunch {
        DieLaunch {
            style: 0,
            position,
            rotation: Vec3::ZERO,
            impulse: Vec3::ZERO,
        }
    }

    fn lifecycle() -> DiceLifecycle {
        DiceLifecycle::new(
            DiceInventory::new(INITIAL_DICE_COUNT, DICE_STYLE_COUNT),
            FALL_OUT_Y,
        )
    }

    /// Spawn in both the lifecycle and the headless scene
    fn throw_one(life: &mut DiceLifecycle, host: &mut HeadlessHost, id: u32) -> DieId {
        let id = DieId(id);
        let launch = launch_at(Vec3::new(0.0, 0.5, 0.0));
        assert!(life.spawn(id, launch, 0));
        host.spawn_die(id, &launch);
        id
    }

    #[test]
    fn test_spawn_moves_die_from_hand() {
        let mut life = lifecycle();
        assert!(life.spawn(DieId(1), launch_at(Vec3::ZERO), 0));
        assert_eq!(life.in_hand(), 4);
        assert_eq!(life.in_play(), 1);
    }

    #[test]
    fn test_spawn_with_empty_hand_is_rejected() {
        let mut life = DiceLifecycle::new(DiceInventory::new(0, DICE_STYLE_COUNT), FALL_OUT_Y);
        assert!(!life.spawn(DieId(1), launch_at(Vec3::ZERO), 0));
        assert_eq!(life.in_play(), 0);
    }

    #[test]
    fn test_fallen_die_recycled_once() {
        let mut life = lifecycle();
        let mut host = HeadlessHost::new();
        let id = throw_one(&mut life, &mut host, 1);
        assert_eq!(life.in_hand(), 4);

        host.set_die_position(id, Vec3::new(0.0, -2.5, 0.0));
        assert_eq!(life.sweep_fallen(&mut host), 1);
        assert_eq!(life.in_hand(), 5);
        assert_eq!(host.removed, vec![id]);

        // Later sweeps never see it again
        assert_eq!(life.sweep_fallen(&mut host), 0);
        assert_eq!(life.in_hand(), 5);
    }

    #[test]
    fn test_die_at_threshold_stays() {
        let mut life = lifecycle();
        let mut host = HeadlessHost::new();
        let id = throw_one(&mut life, &mut host, 1);

        host.set_die_position(id, Vec3::new(0.0, FALL_OUT_Y, 0.0));
        assert_eq!(life.sweep_fallen(&mut host), 0);
        assert!(life.is_live(id));
    }

    #[test]
    fn test_vanished_die_reclaimed_without_remove() {
        let mut life = lifecycle();
        let mut host = HeadlessHost::new();
        let id = throw_one(&mut life, &mut host, 1);

        host.lose_die(id);
        assert_eq!(life.sweep_fallen(&mut host), 1);
        assert_eq!(life.in_hand(), 5);
        assert!(host.removed.is_empty());
    }

    #[test]
    fn test_tap_recycles_live_die() {
        let mut life = lifecycle();
        let mut host = HeadlessHost::new();
        let id = throw_one(&mut life, &mut host, 1);
        host.set_die_screen_point(id, Vec2::new(50.0, 50.0));

        assert_eq!(life.collect_tapped(&mut host, Vec2::new(52.0, 49.0)), Some(id));
        assert_eq!(life.in_hand(), 5);

        // Tapping the same spot again hits nothing
        assert_eq!(life.collect_tapped(&mut host, Vec2::new(52.0, 49.0)), None);
        assert_eq!(life.in_hand(), 5);
    }

    #[test]
    fn test_tap_on_empty_table_is_ignored() {
        let mut life = lifecycle();
        let mut host = HeadlessHost::new();
        assert_eq!(life.collect_tapped(&mut host, Vec2::new(10.0, 10.0)), None);
        assert_eq!(life.in_hand(), 5);
    }

    #[test]
    fn test_tapped_then_fallen_counts_once() {
        let mut life = lifecycle();
        let mut host = HeadlessHost::new();
        let id = throw_one(&mut life, &mut host, 1);
        host.set_die_screen_point(id, Vec2::ZERO);
        host.set_die_position(id, Vec3::new(0.0, -3.0, 0.0));

        assert!(life.collect_tapped(&mut host, Vec2::ZERO).is_some());
        assert_eq!(life.sweep_fallen(&mut host), 0);
        assert_eq!(life.in_hand(), 5);
    }

    #[test]
    fn test_clear_returns_everything() {
        let mut life = lifecycle();
        let mut host = HeadlessHost::new();
        for i in 1..=3 {
            throw_one(&mut life, &mut host, i);
        }
        assert_eq!(life.in_hand(), 2);

        assert_eq!(life.clear(&mut host), 3);
        assert_eq!(life.in_hand(), 5);
        assert_eq!(life.in_play(), 0);
        assert!(host.dice.is_empty());
    }
}
