use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::operations::creation::MakeShape;
use crate::shape::Shape;
use crate::tessellation::{TessellateShape, TessellationParams};

use super::engine::boolean_execute;
use super::intersections::BruteForceFinder;
use super::options::BooleanOptions;
use super::select::BooleanOp;

/// Applies a boolean operation to two application shapes.
///
/// Each shape is tessellated, the kernel runs on the polygons and every result
/// loop is emitted as a new freeform shape styled like `first`.
pub struct ShapeBoolean<'a> {
    first: &'a Shape,
    second: &'a Shape,
    op: BooleanOp,
    options: BooleanOptions,
    params: TessellationParams,
}

impl<'a> ShapeBoolean<'a> {
    /// Creates a new `ShapeBoolean` operation.
    #[must_use]
    pub fn new(first: &'a Shape, second: &'a Shape, op: BooleanOp) -> Self {
        Self {
            first,
            second,
            op,
            options: BooleanOptions::default(),
            params: TessellationParams::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: BooleanOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, drawing new identifiers from `rng`.
    ///
    /// # Errors
    ///
    /// Returns a `ShapeError` if either shape cannot be tessellated, and the
    /// kernel's `OperationError` otherwise.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Shape>> {
        let a = TessellateShape::new(self.first, self.params).execute()?;
        let b = TessellateShape::new(self.second, self.params).execute()?;

        let polygons = boolean_execute(&BruteForceFinder, &a, &b, self.op, &self.options)?;
        debug!(
            op = ?self.op,
            first = %self.first.id,
            second = %self.second.id,
            results = polygons.len(),
            "shape boolean finished"
        );

        polygons
            .iter()
            .map(|polygon| MakeShape::new(polygon, &self.first.style).execute(rng))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::{PolyboolError, ShapeError};
    use crate::shape::{ShapeKind, ShapeStyle};

    #[test]
    fn rectangle_survives_self_intersection() {
        let rect = Shape::rectangle("r", 12.0, 34.0, 56.0, 78.0);
        let result = ShapeBoolean::new(&rect, &rect, BooleanOp::Intersect)
            .execute(&mut StdRng::seed_from_u64(3))
            .unwrap();

        assert_eq!(result.len(), 1);
        let out = &result[0];
        assert!(matches!(out.kind, ShapeKind::Freeform { .. }));
        assert_abs_diff_eq!(out.x, rect.x, epsilon = 1e-9);
        assert_abs_diff_eq!(out.y, rect.y, epsilon = 1e-9);
        assert_abs_diff_eq!(out.width, rect.width, epsilon = 1e-9);
        assert_abs_diff_eq!(out.height, rect.height, epsilon = 1e-9);
        assert_ne!(out.id, rect.id);
    }

    #[test]
    fn union_copies_first_style() {
        let style = ShapeStyle {
            background_color: "#a5d8ff".into(),
            ..ShapeStyle::default()
        };
        let a = Shape::rectangle("a", 0.0, 0.0, 10.0, 10.0).with_style(style.clone());
        let b = Shape::ellipse("b", 4.0, 2.0, 10.0, 6.0);
        let result = ShapeBoolean::new(&a, &b, BooleanOp::Union)
            .execute(&mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].style, style);
        assert_abs_diff_eq!(result[0].width, 14.0, epsilon = 1e-9);
    }

    #[test]
    fn disjoint_union_yields_two_shapes() {
        let a = Shape::diamond("a", 0.0, 0.0, 4.0, 4.0);
        let b = Shape::diamond("b", 10.0, 0.0, 4.0, 4.0);
        let result = ShapeBoolean::new(&a, &b, BooleanOp::Union)
            .execute(&mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(result.len(), 2);
        assert_ne!(result[0].id, result[1].id);
    }

    #[test]
    fn open_freeform_operand_is_rejected() {
        let a = Shape::rectangle("a", 0.0, 0.0, 10.0, 10.0);
        let b = Shape::new(
            "b",
            0.0,
            0.0,
            5.0,
            5.0,
            ShapeKind::Freeform {
                points: vec![[0.0, 0.0], [5.0, 0.0], [5.0, 5.0]],
            },
        );
        let err = ShapeBoolean::new(&a, &b, BooleanOp::Subtract)
            .execute(&mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, PolyboolError::Shape(ShapeError::NotClosed { .. })));
    }
}
