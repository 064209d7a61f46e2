use std::f64::consts::TAU;

use tracing::trace;

use crate::error::{Result, ShapeError};
use crate::geometry::Polygon;
use crate::math::Point2;
use crate::shape::{Shape, ShapeKind};

use super::TessellationParams;

/// Converts an application shape into a polygon in absolute coordinates.
pub struct TessellateShape<'a> {
    shape: &'a Shape,
    params: TessellationParams,
}

impl<'a> TessellateShape<'a> {
    /// Creates a new `TessellateShape` operation.
    #[must_use]
    pub fn new(shape: &'a Shape, params: TessellationParams) -> Self {
        Self { shape, params }
    }

    /// Executes the conversion.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::InvalidSize` for a non-positive or non-finite
    /// rectangle, ellipse or diamond, `ShapeError::NotClosed` for a freeform
    /// shape whose ends are further apart than the closure tolerance, and
    /// `ShapeError::TooFewPoints` for a freeform shape with fewer than 3
    /// distinct points.
    pub fn execute(&self) -> Result<Polygon> {
        let shape = self.shape;
        let points = match &shape.kind {
            ShapeKind::Rectangle => {
                self.check_size()?;
                let (x0, y0, x1, y1) = self.extent();
                vec![
                    Point2::new(x0, y0),
                    Point2::new(x1, y0),
                    Point2::new(x1, y1),
                    Point2::new(x0, y1),
                ]
            }
            ShapeKind::Ellipse => {
                self.check_size()?;
                self.sample_ellipse()
            }
            ShapeKind::Diamond => {
                self.check_size()?;
                let (x0, y0, x1, y1) = self.extent();
                let (cx, cy) = ((x0 + x1) * 0.5, (y0 + y1) * 0.5);
                vec![
                    Point2::new(cx, y0),
                    Point2::new(x1, cy),
                    Point2::new(cx, y1),
                    Point2::new(x0, cy),
                ]
            }
            ShapeKind::Freeform { points } => self.close_freeform(points)?,
        };

        trace!(id = %shape.id, points = points.len(), "tessellated shape");
        Ok(Polygon::new(points))
    }

    fn check_size(&self) -> Result<()> {
        let (width, height) = (self.shape.width, self.shape.height);
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(ShapeError::InvalidSize { width, height }.into())
        }
    }

    fn extent(&self) -> (f64, f64, f64, f64) {
        let s = self.shape;
        (s.x, s.y, s.x + s.width, s.y + s.height)
    }

    fn sample_ellipse(&self) -> Vec<Point2> {
        let s = self.shape;
        let (rx, ry) = (s.width * 0.5, s.height * 0.5);
        let (cx, cy) = (s.x + rx, s.y + ry);
        let n = self.params.ellipse_segments.max(3);
        (0..n)
            .map(|i| {
                let theta = TAU * f64::from(i) / f64::from(n);
                Point2::new(cx + rx * theta.cos(), cy + ry * theta.sin())
            })
            .collect()
    }

    /// Translates a closed point list by the shape origin, dropping the
    /// closing point.
    fn close_freeform(&self, points: &[[f64; 2]]) -> Result<Vec<Point2>> {
        if points.len() < 2 {
            return Err(ShapeError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }

        let (first, last) = (points[0], points[points.len() - 1]);
        let gap = (last[0] - first[0]).hypot(last[1] - first[1]);
        if gap.is_nan() || gap > self.params.closure_tolerance {
            return Err(ShapeError::NotClosed { gap }.into());
        }

        let (ox, oy) = (self.shape.x, self.shape.y);
        let open = &points[..points.len() - 1];
        let translated: Vec<Point2> = open
            .iter()
            .map(|p| Point2::new(p[0] + ox, p[1] + oy))
            .collect();

        if translated.len() < 3 {
            return Err(ShapeError::TooFewPoints {
                count: translated.len(),
            }
            .into());
        }
        Ok(translated)
    }
}
