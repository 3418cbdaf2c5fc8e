//! Drawing primitive types for DXF documents.
//!
//! These types represent the entities a [`Document`](super::Document) can
//! hold: straight lines, circular arcs and multi-line text. Coordinates are
//! stored exactly as they will be written, with the document offset already
//! applied.

use std::fmt;

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Start X (mm).
    pub x1: f64,
    /// Start Y (mm).
    pub y1: f64,
    /// End X (mm).
    pub x2: f64,
    /// End Y (mm).
    pub y2: f64,
    /// Layer name.
    pub layer: String,
    /// Colour index (group code 62).
    pub color: u32,
}

/// A circular arc.
///
/// Angles are in degrees, counter-clockwise from the positive X axis. A start
/// angle greater than the end angle is kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Centre X (mm).
    pub cx: f64,
    /// Centre Y (mm).
    pub cy: f64,
    /// Radius (mm).
    pub radius: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
    /// Layer name.
    pub layer: String,
    /// Colour index (group code 62).
    pub color: u32,
}

/// A positioned block of (possibly multi-line) text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Insertion point X (mm).
    pub x: f64,
    /// Insertion point Y (mm).
    pub y: f64,
    /// Character height (mm).
    pub height: f64,
    /// Text content.
    pub content: String,
    /// Justification relative to the insertion point.
    pub attachment: Attachment,
    /// Rotation in degrees, counter-clockwise.
    pub rotation: f64,
    /// Layer name.
    pub layer: String,
    /// Colour index (group code 62).
    pub color: u32,
}

/// A single drawing entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Straight line segment.
    Line(Line),
    /// Circular arc.
    Arc(Arc),
    /// Multi-line text.
    Text(Text),
}

impl Primitive {
    /// Returns the layer the primitive is drawn on.
    #[must_use]
    pub fn layer(&self) -> &str {
        match self {
            Self::Line(line) => &line.layer,
            Self::Arc(arc) => &arc.layer,
            Self::Text(text) => &text.layer,
        }
    }

    /// Returns the colour index of the primitive.
    #[must_use]
    pub const fn color(&self) -> u32 {
        match self {
            Self::Line(line) => line.color,
            Self::Arc(arc) => arc.color,
            Self::Text(text) => text.color,
        }
    }

    /// Returns the DXF entity type name.
    #[must_use]
    pub const fn entity_name(&self) -> &'static str {
        match self {
            Self::Line(_) => "LINE",
            Self::Arc(_) => "ARC",
            Self::Text(_) => "MTEXT",
        }
    }
}

/// MTEXT attachment point (group code 71).
///
/// Selects which point of the text box sits on the insertion coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attachment {
    /// Top left.
    #[default]
    TopLeft,
    /// Top centre.
    TopCenter,
    /// Top right.
    TopRight,
    /// Middle left.
    MiddleLeft,
    /// Middle centre.
    MiddleCenter,
    /// Middle right.
    MiddleRight,
    /// Bottom left.
    BottomLeft,
    /// Bottom centre.
    BottomCenter,
    /// Bottom right.
    BottomRight,
}

impl Attachment {
    /// Returns the group-71 code for this attachment point (1-9).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::TopLeft => 1,
            Self::TopCenter => 2,
            Self::TopRight => 3,
            Self::MiddleLeft => 4,
            Self::MiddleCenter => 5,
            Self::MiddleRight => 6,
            Self::BottomLeft => 7,
            Self::BottomCenter => 8,
            Self::BottomRight => 9,
        }
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
