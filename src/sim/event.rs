//! Input events and the queue that serializes them
//!
//! Touch, button, tracking and surface callbacks can fire from any context.
//! They only post events here; `tick` drains the queue in arrival order on
//! the game's own context before touching any state.

use std::sync::mpsc::{self, Receiver, Sender};

use glam::{Vec2, Vec3};

use super::surface::AnchorId;
use super::tracking::TrackingState;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Start button: stop scanning, begin aiming
    Start,
    /// Reset button
    Reset,
    /// Style button
    CycleStyle,
    /// Swipe-up gesture
    SwipeUp,
    /// Touch at a screen point
    Tap(Vec2),
    /// Orientation or size change (new viewport size in points)
    ViewportChanged(Vec2),
    TrackingChanged(TrackingState),
    SessionFailed(String),
    SessionInterrupted,
    InterruptionEnded,
    SurfaceAdded {
        anchor: AnchorId,
        center: Vec3,
        extent: Vec3,
    },
    SurfaceUpdated {
        anchor: AnchorId,
        center: Vec3,
        extent: Vec3,
    },
    SurfaceRemoved(AnchorId),
}

/// Cloneable handle for posting events from other contexts
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<GameEvent>,
}

impl EventSender {
    /// Post an event. Returns false if the game has been dropped.
    pub fn post(&self, event: GameEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

#[derive(Debug)]
pub struct EventQueue {
    tx: Sender<GameEvent>,
    rx: Receiver<GameEvent>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    pub fn push(&self, event: GameEvent) {
        // The receiver lives in `self`, so this cannot fail
        let _ = self.tx.send(event);
    }

    /// Everything posted so far, oldest first
    pub fn drain(&self) -> Vec<GameEvent> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let queue = EventQueue::new();
        queue.push(GameEvent::Start);
        queue.sender().post(GameEvent::SwipeUp);
        queue.push(GameEvent::Reset);

        assert_eq!(
            queue.drain(),
            vec![GameEvent::Start, GameEvent::SwipeUp, GameEvent::Reset]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_sender_posts_from_other_thread() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        std::thread::spawn(move || {
            sender.post(GameEvent::Tap(Vec2::new(1.0, 2.0)));
        })
        .join()
        .unwrap();

        assert_eq!(queue.drain(), vec![GameEvent::Tap(Vec2::new(1.0, 2.0))]);
    }

    #[test]
    fn test_post_after_drop_reports_failure() {
        let queue = EventQueue::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.post(GameEvent::Start));
    }
}
