//! Axis-aligned box overlap
//!
//! Everything in the game is a square, so a strict AABB test is all we need.

use glam::IVec2;

/// Axis-aligned box in screen coordinates (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    /// Top-left corner
    pub min: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    /// Square box of side `side` at `min`
    pub fn square(min: IVec2, side: i32) -> Self {
        Self::new(min, IVec2::splat(side))
    }

    /// Bottom-right corner (exclusive)
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    /// Strict overlap: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        b_max.y > self.min.y
            && other.min.y < a_max.y
            && b_max.x > self.min.x
            && other.min.x < a_max.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Aabb {
        Aabb::square(IVec2::new(610, 660), 60)
    }

    #[test]
    fn test_overlapping_boxes() {
        let obstacle = Aabb::square(IVec2::new(600, 650), 60);
        assert!(player().overlaps(&obstacle));
        assert!(obstacle.overlaps(&player()));
    }

    #[test]
    fn test_disjoint_on_x() {
        let obstacle = Aabb::square(IVec2::new(671, 650), 60);
        assert!(!player().overlaps(&obstacle));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        // Right edge of player at x=670
        let right = Aabb::square(IVec2::new(670, 660), 60);
        assert!(!player().overlaps(&right));

        // Bottom of obstacle exactly at player top (y=660)
        let above = Aabb::square(IVec2::new(610, 600), 60);
        assert!(!player().overlaps(&above));

        // One unit lower and they overlap
        let above = Aabb::square(IVec2::new(610, 601), 60);
        assert!(player().overlaps(&above));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let inner = Aabb::new(IVec2::new(620, 670), IVec2::new(10, 10));
        assert!(player().overlaps(&inner));
    }
}
