//! Surface focus tracking
//!
//! One aim point on a detected surface, re-derived every frame from a hit
//! test at a fixed screen anchor. The point only exists while the hit test
//! is unambiguous (exactly one surface).

use glam::{Vec2, Vec3};

use crate::focus_anchor;
use crate::platform::SurfaceHit;

/// Outcome of one frame's focus update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusSignal {
    Acquired(Vec3),
    Lost,
}

#[derive(Debug, Clone)]
pub struct SurfaceFocusTracker {
    anchor: Vec2,
    anchor_drop: f32,
    point: Option<Vec3>,
}

impl SurfaceFocusTracker {
    pub fn new(viewport: Vec2, anchor_drop: f32) -> Self {
        Self {
            anchor: focus_anchor(viewport, anchor_drop),
            anchor_drop,
            point: None,
        }
    }

    /// Screen point the hit test is issued from
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn point(&self) -> Option<Vec3> {
        self.point
    }

    /// Recompute the anchor after a rotation or resize
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.anchor = focus_anchor(viewport, self.anchor_drop);
    }

    pub fn update(&mut self, hits: &[SurfaceHit]) -> FocusSignal {
        match hits {
            [hit] => {
                let pos = hit.position();
                self.point = Some(pos);
                FocusSignal::Acquired(pos)
            }
            _ => {
                self.point = None;
                FocusSignal::Lost
            }
        }
    }

    pub fn clear(&mut self) {
        self.point = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FOCUS_ANCHOR_DROP;

    fn tracker() -> SurfaceFocusTracker {
        SurfaceFocusTracker::new(Vec2::new(400.0, 800.0), FOCUS_ANCHOR_DROP)
    }

    #[test]
    fn test_single_hit_acquires() {
        let mut t = tracker();
        let pos = Vec3::new(0.1, -0.5, -0.8);
        assert_eq!(t.update(&[SurfaceHit::at(pos)]), FocusSignal::Acquired(pos));
        assert_eq!(t.point(), Some(pos));
    }

    #[test]
    fn test_empty_or_ambiguous_loses() {
        let mut t = tracker();
        t.update(&[SurfaceHit::at(Vec3::ONE)]);

        assert_eq!(t.update(&[]), FocusSignal::Lost);
        assert_eq!(t.point(), None);

        let two = [SurfaceHit::at(Vec3::ZERO), SurfaceHit::at(Vec3::ONE)];
        assert_eq!(t.update(&two), FocusSignal::Lost);
        assert_eq!(t.point(), None);
    }

    #[test]
    fn test_viewport_change_moves_anchor() {
        let mut t = tracker();
        assert_eq!(t.anchor(), Vec2::new(200.0, 500.0));

        t.set_viewport(Vec2::new(800.0, 400.0));
        assert_eq!(t.anchor(), Vec2::new(400.0, 250.0));
    }
}
