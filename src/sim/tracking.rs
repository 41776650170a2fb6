//! Tracking quality and session notices shown to the player

/// Why tracking is running in a degraded mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitedReason {
    ExcessiveMotion,
    InsufficientFeatures,
    Relocalizing,
    Initializing,
}

/// Camera tracking quality reported by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    NotAvailable,
    Normal,
    Limited(LimitedReason),
}

impl TrackingState {
    pub fn message(&self) -> &'static str {
        match self {
            TrackingState::NotAvailable => "Tracking: Not available!",
            TrackingState::Normal => "Tracking: All Good!",
            TrackingState::Limited(LimitedReason::ExcessiveMotion) => {
                "Tracking: Limited due to excessive motion!"
            }
            TrackingState::Limited(LimitedReason::InsufficientFeatures) => {
                "Tracking: Limited due to insufficient features!"
            }
            TrackingState::Limited(LimitedReason::Relocalizing) => "Tracking: Relocalizing...",
            TrackingState::Limited(LimitedReason::Initializing) => "Tracking: Initializing...",
        }
    }

    /// Whether the player should see this instead of the game prompt
    pub fn is_degraded(&self) -> bool {
        !matches!(self, TrackingState::Normal)
    }
}

pub const SESSION_INTERRUPTED: &str = "AR Session Was Interrupted!";
pub const INTERRUPTION_ENDED: &str = "AR Session Interruption Ended";
pub const TRACKING_UNSUPPORTED: &str = "AR World Tracking Not Supported";

pub fn session_failure(error: &str) -> String {
    format!("AR Session Failure: {}", error)
}
