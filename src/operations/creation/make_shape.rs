use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::polygon_2d::rotate_to_canonical_start;
use crate::shape::{Shape, ShapeKind, ShapeStyle};

/// Length of generated shape identifiers.
const ID_LENGTH: usize = 12;

/// Emits a result polygon as a freeform shape.
///
/// The loop is wound counter-clockwise, rotated to start at its
/// leftmost-bottom vertex, expressed relative to its bounding box origin and
/// closed with an explicit copy of the first point.
pub struct MakeShape<'a> {
    polygon: &'a Polygon,
    style: &'a ShapeStyle,
}

impl<'a> MakeShape<'a> {
    /// Creates a new `MakeShape` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon, style: &'a ShapeStyle) -> Self {
        Self { polygon, style }
    }

    /// Executes the operation, drawing the identifier and render seed from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` for a polygon with fewer than 3 points.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Shape> {
        if self.polygon.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                count: self.polygon.len(),
            }
            .into());
        }

        let ccw = self.polygon.to_ccw();
        let bbox = ccw.bounding_box();
        let mut points: Vec<[f64; 2]> = rotate_to_canonical_start(ccw.points())
            .iter()
            .map(|p| [p.x - bbox.min.x, p.y - bbox.min.y])
            .collect();
        points.push(points[0]);

        Ok(Shape {
            id: generate_id(rng),
            x: bbox.min.x,
            y: bbox.min.y,
            width: bbox.width(),
            height: bbox.height(),
            angle: 0.0,
            seed: rng.gen_range(0..2_000_000_000),
            kind: ShapeKind::Freeform { points },
            style: self.style.clone(),
        })
    }
}

/// Draws an identifier of [`ID_LENGTH`] characters from `[A-Za-z0-9]`.
#[must_use]
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}
