//! Scheduler tick: the game-flow controller
//!
//! One `tick` per rendered frame. Queued events are applied first, in
//! arrival order, then the frame update runs: focus tracking drives the
//! PointToSurface/SwipeToPlay transition and fallen dice are recycled.

use super::event::GameEvent;
use super::focus::FocusSignal;
use super::state::{DiceGame, GameState};
use super::throw::launch_die;
use super::tracking::{self, TrackingState};
use crate::platform::{Host, PlaneDetection, RunOptions};

/// Configure the scene and run the tracking session for the first time
pub fn begin<H: Host>(game: &mut DiceGame, host: &mut H) {
    if !host.is_supported() {
        log::warn!("World tracking not supported on this device");
        game.notice = Some(tracking::TRACKING_UNSUPPORTED.to_string());
        return;
    }

    host.configure(&game.scene_config);
    host.run(&game.tracking_config, RunOptions::KEEP);
    log::info!(
        "Session started (detection={:?})",
        game.tracking_config.plane_detection
    );
}

/// Advance the game by one frame
pub fn tick<H: Host>(game: &mut DiceGame, host: &mut H) {
    for event in game.events.drain() {
        apply_event(game, host, event);
    }

    game.frame += 1;

    if game.state.tracks_focus() {
        update_focus(game, host);
    }

    let recycled = game.lifecycle.sweep_fallen(host);
    if recycled > 0 {
        log::debug!(
            "Recycled {} fallen dice, {} in hand",
            recycled,
            game.lifecycle.in_hand()
        );
    }
}

fn apply_event<H: Host>(game: &mut DiceGame, host: &mut H, event: GameEvent) {
    match event {
        GameEvent::Start => start_game(game, host),
        GameEvent::Reset => reset_game(game, host),
        GameEvent::CycleStyle => {
            let style = game.lifecycle.cycle_style();
            log::debug!("Dice style -> {}", style);
        }
        GameEvent::SwipeUp => throw_dice(game, host),
        GameEvent::Tap(point) => {
            if let Some(id) = game.lifecycle.collect_tapped(host, point) {
                log::debug!("Collected die {:?} by tap", id);
            }
        }
        GameEvent::ViewportChanged(size) => game.focus.set_viewport(size),
        GameEvent::TrackingChanged(state) => set_tracking(game, state),
        GameEvent::SessionFailed(error) => {
            log::error!("Tracking session failed: {}", error);
            game.notice = Some(tracking::session_failure(&error));
        }
        GameEvent::SessionInterrupted => {
            log::warn!("Tracking session interrupted");
            game.notice = Some(tracking::SESSION_INTERRUPTED.to_string());
        }
        GameEvent::InterruptionEnded => {
            log::info!("Tracking session interruption ended, resetting");
            game.notice = Some(tracking::INTERRUPTION_ENDED.to_string());
            reset_game(game, host);
        }
        GameEvent::SurfaceAdded {
            anchor,
            center,
            extent,
        } => {
            if game.surfaces.add(anchor, center, extent) {
                host.hide_surface(anchor);
            }
        }
        GameEvent::SurfaceUpdated {
            anchor,
            center,
            extent,
        } => {
            if game.surfaces.update(anchor, center, extent) {
                host.hide_surface(anchor);
            }
        }
        GameEvent::SurfaceRemoved(anchor) => {
            game.surfaces.remove(anchor);
        }
    }
}

fn set_state(game: &mut DiceGame, next: GameState) {
    if game.state != next {
        log::info!("Game state: {:?} -> {:?}", game.state, next);
        game.state = next;
    }
}

fn set_tracking(game: &mut DiceGame, state: TrackingState) {
    game.notice = if state.is_degraded() {
        log::warn!("{}", state.message());
        Some(state.message().to_string())
    } else {
        // Normal tracking gives the status label back to the game prompt
        log::info!("{}", state.message());
        None
    };
}

/// Stop scanning, hide the scanned surfaces and ask the player to aim
fn start_game<H: Host>(game: &mut DiceGame, host: &mut H) {
    if game.state != GameState::DetectSurface {
        log::debug!("Start ignored in {:?}", game.state);
        return;
    }

    game.start_visible = false;
    game.tracking_config = game
        .tracking_config
        .with_plane_detection(PlaneDetection::None);
    host.run(&game.tracking_config, RunOptions::KEEP);

    for anchor in game.surfaces.hide_all() {
        host.hide_surface(anchor);
    }

    set_state(game, GameState::PointToSurface);
}

/// Back to scanning with fresh tracking; every thrown die returns to the hand
fn reset_game<H: Host>(game: &mut DiceGame, host: &mut H) {
    game.start_visible = true;
    game.tracking_config = game
        .tracking_config
        .with_plane_detection(PlaneDetection::Horizontal);
    host.run(&game.tracking_config, RunOptions::FRESH);

    let returned = game.lifecycle.clear(host);
    game.surfaces.clear();
    game.focus.clear();

    log::info!("Game reset ({} dice returned)", returned);
    set_state(game, GameState::DetectSurface);
}

fn update_focus<H: Host>(game: &mut DiceGame, host: &mut H) {
    let hits = host.hit_test_surfaces(game.focus.anchor());
    match game.focus.update(&hits) {
        FocusSignal::Acquired(pos) => {
            host.place_focus_marker(pos);
            set_state(game, GameState::SwipeToPlay);
        }
        FocusSignal::Lost => set_state(game, GameState::PointToSurface),
    }
}

/// Throw every die in hand, one per spawn offset
fn throw_dice<H: Host>(game: &mut DiceGame, host: &mut H) {
    if !game.state.accepts_throw() {
        log::debug!("Swipe ignored in {:?}", game.state);
        return;
    }
    let Some(camera) = host.camera_pose() else {
        log::debug!("Swipe ignored: no camera frame");
        return;
    };
    let Some(focus) = game.focus.point() else {
        return;
    };

    let count = (game.lifecycle.in_hand() as usize).min(game.dice_offsets.len());
    let style = game.lifecycle.inventory().style();

    let mut thrown = 0;
    for i in 0..count {
        let launch = launch_die(
            &camera,
            game.dice_offsets[i],
            focus,
            style,
            &game.throw_tuning,
            &mut game.rng,
        );
        let id = game.next_die_id();
        if !game.lifecycle.spawn(id, launch, game.frame) {
            break;
        }
        host.spawn_die(id, &launch);
        thrown += 1;
    }

    log::info!(
        "Threw {} dice (style {}), {} left in hand",
        thrown,
        style,
        game.lifecycle.in_hand()
    );
}
