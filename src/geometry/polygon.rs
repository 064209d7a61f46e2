use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{point_in_polygon, points_coincide, signed_area};
use crate::math::Point2;

use super::bounding_box::BoundingBox;

/// Tolerance used to drop an explicit closing duplicate on construction.
const CLOSING_TOLERANCE: f64 = 1e-9;

/// An implicitly closed polygon: edge `i` runs from `points[i]` to
/// `points[(i + 1) % n]`.
///
/// The point list never stores a copy of the first point at the end.
/// Winding is arbitrary on input.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon, dropping trailing points that repeat the first one.
    ///
    /// No validation happens here; see [`Polygon::validate`].
    #[must_use]
    pub fn new(mut points: Vec<Point2>) -> Self {
        while points.len() > 1 {
            let (first, last) = (points[0], points[points.len() - 1]);
            if !points_coincide(&first, &last, CLOSING_TOLERANCE) {
                break;
            }
            points.pop();
        }
        Self { points }
    }

    /// Creates a polygon from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Checks that the polygon has at least 3 finite points and a non-zero area.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints`, `GeometryError::NonFinite`, or
    /// `GeometryError::Degenerate` for a zero-area point list.
    pub fn validate(&self) -> Result<()> {
        if self.points.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                count: self.points.len(),
            }
            .into());
        }
        if let Some((index, pt)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, pt)| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(GeometryError::NonFinite {
                index,
                x: pt.x,
                y: pt.y,
            }
            .into());
        }
        if self.area() < f64::EPSILON {
            return Err(GeometryError::Degenerate("polygon has zero area".into()).into());
        }
        Ok(())
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of vertices (and edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns edge `index` as `(start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn edge(&self, index: usize) -> (Point2, Point2) {
        let n = self.points.len();
        (self.points[index], self.points[(index + 1) % n])
    }

    /// Iterates over `(index, start, end)` for every edge, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point2, Point2)> + '_ {
        (0..self.points.len()).map(|i| {
            let (a, b) = self.edge(i);
            (i, a, b)
        })
    }

    /// Signed area: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Returns the polygon with reversed vertex order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Returns the polygon wound counter-clockwise.
    #[must_use]
    pub fn to_ccw(&self) -> Self {
        if self.is_ccw() {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Axis-aligned bounding box of the vertices.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }

    /// Even-odd containment test. Boundary points are unspecified.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        point_in_polygon(point, &self.points)
    }

    /// Returns a copy shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| Point2::new(p.x + dx, p.y + dy))
                .collect(),
        }
    }

    /// Returns `true` if both polygons trace the same vertex cycle within
    /// `tolerance`, regardless of start vertex and direction.
    #[must_use]
    pub fn same_boundary(&self, other: &Self, tolerance: f64) -> bool {
        let n = self.points.len();
        if n == 0 || n != other.points.len() {
            return false;
        }
        let first = &self.points[0];
        other
            .points
            .iter()
            .enumerate()
            .filter(|(_, q)| points_coincide(first, q, tolerance))
            .any(|(offset, _)| {
                let forward = (0..n).all(|k| {
                    points_coincide(&self.points[k], &other.points[(offset + k) % n], tolerance)
                });
                forward
                    || (0..n).all(|k| {
                        points_coincide(
                            &self.points[k],
                            &other.points[(offset + n - k) % n],
                            tolerance,
                        )
                    })
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyboolError;

    fn square() -> Polygon {
        Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
    }

    #[test]
    fn closing_duplicate_is_dropped() {
        let poly =
            Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
        assert_eq!(poly.len(), 4);
    }

    #[test]
    fn edges_wrap_around() {
        let poly = square();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].1, Point2::new(0.0, 2.0));
        assert_eq!(edges[3].2, Point2::new(0.0, 0.0));
    }

    #[test]
    fn validate_rejects_two_points() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
        let err = poly.validate().unwrap_err();
        assert!(matches!(
            err,
            PolyboolError::Geometry(GeometryError::TooFewPoints { count: 2 })
        ));
    }

    #[test]
    fn validate_rejects_non_finite() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]);
        assert!(matches!(
            poly.validate().unwrap_err(),
            PolyboolError::Geometry(GeometryError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_collinear() {
        let poly = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert!(poly.validate().is_err());
    }

    #[test]
    fn winding_normalization() {
        let cw = square().reversed();
        assert!(!cw.is_ccw());
        let ccw = cw.to_ccw();
        assert!(ccw.is_ccw());
        assert!((ccw.area() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn same_boundary_ignores_start_and_direction() {
        let a = square();
        let rotated = Polygon::from_coords(&[(2.0, 2.0), (0.0, 2.0), (0.0, 0.0), (2.0, 0.0)]);
        assert!(a.same_boundary(&rotated, 1e-9));
        assert!(a.same_boundary(&rotated.reversed(), 1e-9));
        assert!(!a.same_boundary(&a.translated(0.5, 0.0), 1e-9));
    }
}
