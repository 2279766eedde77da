//! Axis-aligned rectangle overlap testing
//!
//! Every interaction in the game (bullet/enemy, bullet/player, enemy/player)
//! reduces to the same AABB test, so it lives here as a pure function.

use glam::Vec2;

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Check whether two rectangles overlap with strictly positive area.
///
/// Rectangles sharing only an edge or corner do not collide, and a
/// zero-size rectangle never overlaps anything.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x.max(b.pos.x) < a.right().min(b.right())
        && a.pos.y.max(b.pos.y) < a.bottom().min(b.bottom())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));

        let c = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the vertical edge at x=10
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));

        // Shares the horizontal edge at y=10
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));

        // Shares only the corner at (10, 10)
        let d = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &d));
    }

    #[test]
    fn test_zero_size_never_overlaps() {
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        let big = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&point, &point));
        // Even fully contained, a degenerate rect has no overlap area
        assert!(!overlaps(&point, &big));
        assert!(!overlaps(&big, &point));
    }

    #[test]
    fn test_containment() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.0f32..200.0, ah in 0.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.0f32..200.0, bh in 0.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_edge_sharing_never_collides(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            // b placed so its left edge coincides with a's right edge
            let b = Rect::new(a.right(), ay, bw, bh);
            prop_assert!(!overlaps(&a, &b));
        }
    }
}
