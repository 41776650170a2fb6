//! Game state and core simulation types
//!
//! `DiceGame` owns everything the flow controller mutates. Only `tick` (and
//! `begin`) change it; everything else reads through accessors.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::event::{EventQueue, EventSender, GameEvent};
use super::focus::SurfaceFocusTracker;
use super::inventory::DiceInventory;
use super::lifecycle::{DiceLifecycle, LiveDie};
use super::surface::SurfaceRegistry;
use super::throw::ThrowTuning;
use crate::platform::{SceneConfig, TrackingConfig};
use crate::settings::Settings;

/// Current phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Scanning the table, surface detection on
    #[default]
    DetectSurface,
    /// Detection off, waiting for the player to aim at one surface
    PointToSurface,
    /// Focus point on a surface, swipe throws
    SwipeToPlay,
}

impl GameState {
    /// Prompt shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            GameState::DetectSurface => "Scan entire table surface...\nHit START when ready!",
            GameState::PointToSurface => "Point at designated surface first!",
            GameState::SwipeToPlay => "Swipe UP to throw!\nTap on dice to collect it again.",
        }
    }

    pub fn accepts_throw(&self) -> bool {
        *self == GameState::SwipeToPlay
    }

    /// Whether the per-frame focus update drives transitions
    pub fn tracks_focus(&self) -> bool {
        matches!(self, GameState::PointToSurface | GameState::SwipeToPlay)
    }
}

/// Identifier of a thrown die
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DieId(pub u32);

pub struct DiceGame {
    pub(crate) state: GameState,
    pub(crate) lifecycle: DiceLifecycle,
    pub(crate) focus: SurfaceFocusTracker,
    pub(crate) surfaces: SurfaceRegistry,
    /// Tracking/session notice overriding the game prompt
    pub(crate) notice: Option<String>,
    pub(crate) start_visible: bool,
    /// Configuration the session was last run with
    pub(crate) tracking_config: TrackingConfig,
    pub(crate) scene_config: SceneConfig,
    pub(crate) dice_offsets: Vec<Vec3>,
    pub(crate) throw_tuning: ThrowTuning,
    pub(crate) rng: Pcg32,
    pub(crate) events: EventQueue,
    /// Tick counter
    pub(crate) frame: u64,
    next_id: u32,
}

impl Default for DiceGame {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl DiceGame {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("New dice game (seed {})", seed);

        Self {
            state: GameState::DetectSurface,
            lifecycle: DiceLifecycle::new(
                DiceInventory::new(settings.initial_dice, settings.dice_styles),
                settings.fall_out_y,
            ),
            focus: SurfaceFocusTracker::new(settings.viewport, settings.focus_anchor_drop),
            surfaces: SurfaceRegistry::new(),
            notice: None,
            start_visible: true,
            tracking_config: settings.tracking,
            scene_config: settings.scene.clone(),
            dice_offsets: settings.dice_offsets.clone(),
            throw_tuning: settings.throw,
            rng: Pcg32::seed_from_u64(seed),
            events: EventQueue::new(),
            frame: 0,
            next_id: 1,
        }
    }

    /// Allocate a new die ID
    pub(crate) fn next_die_id(&mut self) -> DieId {
        let id = DieId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue an event for the next tick
    pub fn post(&self, event: GameEvent) {
        self.events.push(event);
    }

    /// Handle for posting events from callbacks on other contexts
    pub fn sender(&self) -> EventSender {
        self.events.sender()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Text for the status label: the active notice, else the game prompt
    pub fn status_text(&self) -> &str {
        self.notice.as_deref().unwrap_or(self.state.message())
    }

    pub fn inventory(&self) -> &DiceInventory {
        self.lifecycle.inventory()
    }

    /// Dice currently on the table
    pub fn live_dice(&self) -> impl Iterator<Item = (DieId, &LiveDie)> {
        self.lifecycle.live()
    }

    pub fn dice_in_play(&self) -> usize {
        self.lifecycle.in_play()
    }

    pub fn focus_point(&self) -> Option<Vec3> {
        self.focus.point()
    }

    /// Screen point the focus hit test is issued from
    pub fn focus_anchor(&self) -> Vec2 {
        self.focus.anchor()
    }

    pub fn start_visible(&self) -> bool {
        self.start_visible
    }

    pub fn tracking_config(&self) -> &TrackingConfig {
        &self.tracking_config
    }

    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_game_defaults() {
        let game = DiceGame::default();
        assert_eq!(game.state(), GameState::DetectSurface);
        assert_eq!(game.inventory().count(), INITIAL_DICE_COUNT);
        assert_eq!(game.inventory().style(), 0);
        assert!(game.start_visible());
        assert_eq!(game.focus_point(), None);
        assert_eq!(game.status_text(), GameState::DetectSurface.message());
    }

    #[test]
    fn test_die_ids_are_unique() {
        let mut game = DiceGame::default();
        let a = game.next_die_id();
        let b = game.next_die_id();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn test_notice_overrides_prompt() {
        let mut game = DiceGame::default();
        game.notice = Some("Tracking: Relocalizing...".to_string());
        assert_eq!(game.status_text(), "Tracking: Relocalizing...");
    }
}
