//! Detected surface bookkeeping
//!
//! Tracks surface anchors reported by the session so they can be hidden
//! when play starts and forgotten on reset.

use std::collections::BTreeMap;

use glam::Vec3;

/// Host-assigned identifier of a detected surface anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnchorId(pub u64);

/// A detected horizontal surface patch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Center relative to the anchor
    pub center: Vec3,
    /// Size along X and Z
    pub extent: Vec3,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    surfaces: BTreeMap<AnchorId, Surface>,
    /// Set once play starts; late arrivals are hidden immediately
    hiding: bool,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn get(&self, anchor: AnchorId) -> Option<&Surface> {
        self.surfaces.get(&anchor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnchorId, &Surface)> {
        self.surfaces.iter().map(|(id, s)| (*id, s))
    }

    /// Record a new surface. Returns true if it must be hidden right away.
    pub fn add(&mut self, anchor: AnchorId, center: Vec3, extent: Vec3) -> bool {
        let hidden = self.hiding;
        self.surfaces.insert(
            anchor,
            Surface {
                center,
                extent,
                hidden,
            },
        );
        hidden
    }

    /// Refresh geometry. Unknown anchors are added.
    pub fn update(&mut self, anchor: AnchorId, center: Vec3, extent: Vec3) -> bool {
        match self.surfaces.get_mut(&anchor) {
            Some(surface) => {
                surface.center = center;
                surface.extent = extent;
                false
            }
            None => self.add(anchor, center, extent),
        }
    }

    pub fn remove(&mut self, anchor: AnchorId) -> Option<Surface> {
        self.surfaces.remove(&anchor)
    }

    /// Mark every surface hidden; returns the ones that were visible
    pub fn hide_all(&mut self) -> Vec<AnchorId> {
        self.hiding = true;
        self.surfaces
            .iter_mut()
            .filter(|(_, s)| !s.hidden)
            .map(|(id, s)| {
                s.hidden = true;
                *id
            })
            .collect()
    }

    /// Forget everything and go back to showing surfaces
    pub fn clear(&mut self) {
        self.surfaces.clear();
        self.hiding = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_all_reports_visible_once() {
        let mut reg = SurfaceRegistry::new();
        reg.add(AnchorId(1), Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        reg.add(AnchorId(2), Vec3::ZERO, Vec3::new(0.5, 0.0, 0.5));

        assert_eq!(reg.hide_all(), vec![AnchorId(1), AnchorId(2)]);
        assert!(reg.hide_all().is_empty());
    }

    #[test]
    fn test_late_surface_hidden_after_start() {
        let mut reg = SurfaceRegistry::new();
        assert!(!reg.add(AnchorId(1), Vec3::ZERO, Vec3::ONE));
        reg.hide_all();
        assert!(reg.add(AnchorId(2), Vec3::ZERO, Vec3::ONE));
        assert!(reg.get(AnchorId(2)).is_some_and(|s| s.hidden));
    }

    #[test]
    fn test_update_keeps_hidden_flag() {
        let mut reg = SurfaceRegistry::new();
        reg.add(AnchorId(4), Vec3::ZERO, Vec3::ONE);
        reg.hide_all();

        assert!(!reg.update(AnchorId(4), Vec3::X, Vec3::splat(2.0)));
        let s = reg.get(AnchorId(4)).copied();
        assert_eq!(
            s,
            Some(Surface {
                center: Vec3::X,
                extent: Vec3::splat(2.0),
                hidden: true,
            })
        );
    }

    #[test]
    fn test_clear_resets_hiding() {
        let mut reg = SurfaceRegistry::new();
        reg.add(AnchorId(1), Vec3::ZERO, Vec3::ONE);
        reg.hide_all();
        reg.clear();

        assert!(reg.is_empty());
        assert!(!reg.add(AnchorId(9), Vec3::ZERO, Vec3::ONE));
    }
}
