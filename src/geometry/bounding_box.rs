use crate::math::Point2;

/// An axis-aligned bounding box.
///
/// A box built from no points is empty (`min` > `max`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl BoundingBox {
    /// Computes the bounding box of a point set.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Checks if two boxes overlap, treating touching within `tolerance` as overlap.
    ///
    /// An empty box overlaps nothing.
    #[must_use]
    pub fn overlaps(&self, other: &Self, tolerance: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.x <= other.max.x + tolerance
            && self.max.x >= other.min.x - tolerance
            && self.min.y <= other.max.y + tolerance
            && self.max.y >= other.min.y - tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn box_of_points() {
        let bb = BoundingBox::from_points(&[p(1.0, 5.0), p(-2.0, 3.0), p(4.0, -1.0)]);
        assert_eq!(bb.min, p(-2.0, -1.0));
        assert_eq!(bb.max, p(4.0, 5.0));
        assert!((bb.width() - 6.0).abs() < 1e-12);
        assert!((bb.height() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn empty_box() {
        assert!(BoundingBox::from_points(&[]).is_empty());
    }

    #[test]
    fn empty_box_overlaps_nothing() {
        let empty = BoundingBox::from_points(&[]);
        let a = BoundingBox::from_points(&[p(0.0, 0.0), p(10.0, 10.0)]);
        assert!(!empty.overlaps(&a, 1.0));
        assert!(!a.overlaps(&empty, 1.0));
        assert!(!empty.overlaps(&empty, 1.0));
    }

    #[test]
    fn overlap_and_separation() {
        let a = BoundingBox::from_points(&[p(0.0, 0.0), p(10.0, 10.0)]);
        let b = BoundingBox::from_points(&[p(5.0, 5.0), p(15.0, 15.0)]);
        let c = BoundingBox::from_points(&[p(20.0, 20.0), p(30.0, 30.0)]);
        assert!(a.overlaps(&b, 0.0));
        assert!(!a.overlaps(&c, 0.0));
    }
}
