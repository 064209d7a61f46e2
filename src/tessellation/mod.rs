mod tessellate_shape;

pub use tessellate_shape::TessellateShape;

/// Parameters controlling how shapes are turned into polygons.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Number of points sampled around an ellipse.
    pub ellipse_segments: u32,
    /// Largest first/last point gap accepted for a closed freeform shape.
    pub closure_tolerance: f64,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            ellipse_segments: 32,
            closure_tolerance: 1.0,
        }
    }
}
