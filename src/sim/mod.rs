//! Deterministic game-flow module
//!
//! All gameplay decisions live here. This module must stay host-agnostic:
//! - Seeded RNG only
//! - Stable iteration order (by die / anchor ID)
//! - State changes only inside `tick`, from queued events
//! - No tracking, physics or rendering; those go through `platform`

pub mod event;
pub mod focus;
pub mod inventory;
pub mod lifecycle;
pub mod state;
pub mod surface;
pub mod throw;
pub mod tick;
pub mod tracking;

pub use event::{EventQueue, EventSender, GameEvent};
pub use focus::{FocusSignal, SurfaceFocusTracker};
pub use inventory::DiceInventory;
pub use lifecycle::{DiceLifecycle, LiveDie, RecycleCause};
pub use state::{DiceGame, DieId, GameState};
pub use surface::{AnchorId, Surface, SurfaceRegistry};
pub use throw::{CameraPose, DieLaunch, ThrowTuning, launch_die, random_rotation, throw_impulse};
pub use tick::{begin, tick};
pub use tracking::{LimitedReason, TrackingState};
