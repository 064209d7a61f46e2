//! Application shape records consumed and produced by the shape adapters.

use serde::{Deserialize, Serialize};

/// Geometry specific to each kind of shape.
///
/// Serialized with a `type` tag using the host's kind names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    /// Rhombus through the midpoints of the bounding box edges.
    Diamond,
    /// Closed polyline. Points are relative to the shape origin and repeat
    /// the first point at the end.
    #[serde(rename = "line")]
    Freeform { points: Vec<[f64; 2]> },
}

/// Visual attributes copied onto boolean results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeStyle {
    pub stroke_color: String,
    pub background_color: String,
    pub fill_style: String,
    pub stroke_width: f64,
    pub stroke_style: String,
    pub roughness: f64,
    pub opacity: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: "#000000".into(),
            background_color: "transparent".into(),
            fill_style: "solid".into(),
            stroke_width: 1.0,
            stroke_style: "solid".into(),
            roughness: 1.0,
            opacity: 100.0,
        }
    }
}

/// A positioned shape with its bounding box origin at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub angle: f64,
    /// Render seed for the host's hand-drawn stroke style.
    #[serde(default)]
    pub seed: u32,
    #[serde(flatten)]
    pub kind: ShapeKind,
    #[serde(flatten)]
    pub style: ShapeStyle,
}

impl Shape {
    /// Creates a shape with default style.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64, kind: ShapeKind) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            angle: 0.0,
            seed: 0,
            kind,
            style: ShapeStyle::default(),
        }
    }

    #[must_use]
    pub fn rectangle(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(id, x, y, width, height, ShapeKind::Rectangle)
    }

    #[must_use]
    pub fn ellipse(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(id, x, y, width, height, ShapeKind::Ellipse)
    }

    #[must_use]
    pub fn diamond(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(id, x, y, width, height, ShapeKind::Diamond)
    }

    #[must_use]
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }
}
