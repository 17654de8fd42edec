//! Axis-aligned rectangle geometry
//!
//! Everything that can collide in the game is a rectangle: the player's
//! posture-dependent hitbox and every obstacle. The overlap predicate is
//! strict, so rectangles whose edges merely touch do not collide.

use glam::Vec2;

/// An axis-aligned rectangle (origin is the top-left corner, y grows down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Right edge x
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict interval-overlap test on both axes
    ///
    /// Edges that exactly touch do not count as overlap, so a player
    /// grazing an obstacle's edge survives.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_contained_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_separated_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));

        // Separated vertically
        let c = Rect::new(0.0, 30.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Right edge of a exactly on left edge of b
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Bottom edge of a exactly on top edge of c
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));

        // Corner-touching only
        let d = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares x-range but not y-range
        let b = Rect::new(5.0, 50.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_gap_on_x_never_overlaps(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            gap in 0.001f32..100.0,
            bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(a.right() + gap, ay, 10.0, bh);
            prop_assert!(!a.overlaps(&b));
        }

        #[test]
        fn prop_rect_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..200.0, h in 1.0f32..200.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.overlaps(&r));
        }
    }
}
