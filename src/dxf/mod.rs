//! Minimal DXF drawing document.
//!
//! This module accumulates 2D drawing primitives and encodes them as the
//! `ENTITIES` section of a DXF file.
//!
//! # Offset Handling
//!
//! A [`Document`] carries a working offset. Every primitive is translated by
//! the offset in effect when it is added; the translated coordinates are
//! copied into the primitive, so later offset changes never move primitives
//! that were already added.
//!
//! # Example
//!
//! ```
//! use folded_dipole_dxf::dxf::{Attachment, Document, Pen};
//!
//! let mut doc = Document::new();
//! let wire = Pen::new("wire", 100);
//!
//! doc.line(0.0, 0.0, 10.0, 0.0, &wire);
//! doc.set_offset(5.0, 5.0);
//! doc.arc(0.0, 0.0, 2.0, -90.0, 90.0, &wire);
//! doc.text(0.0, -3.0, 2.5, "R=2mm", Attachment::TopLeft, 0.0, &Pen::default());
//!
//! let dxf = doc.serialize();
//! assert!(dxf.starts_with("0\nSECTION\n2\nENTITIES\n"));
//! assert!(dxf.ends_with("0\nENDSEC\n0\nEOF\n"));
//! ```

pub mod primitives;
pub mod writer;

pub use primitives::{Arc, Attachment, Line, Primitive, Text};

use tracing::trace;

/// Layer used when none is given.
pub const DEFAULT_LAYER: &str = "0";

/// Colour index used when none is given.
pub const DEFAULT_COLOR: u32 = 65535;

/// Layer and colour applied to an added primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pen {
    /// Layer name.
    pub layer: String,
    /// Colour index.
    pub color: u32,
}

impl Pen {
    /// Creates a pen for the given layer and colour.
    #[must_use]
    pub fn new(layer: impl Into<String>, color: u32) -> Self {
        Self {
            layer: layer.into(),
            color,
        }
    }

    /// Creates a pen for the given layer with the default colour.
    #[must_use]
    pub fn layer(layer: impl Into<String>) -> Self {
        Self::new(layer, DEFAULT_COLOR)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(DEFAULT_LAYER, DEFAULT_COLOR)
    }
}

/// An append-only sequence of drawing primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Current X offset applied to added primitives.
    x_offset: f64,
    /// Current Y offset applied to added primitives.
    y_offset: f64,
    /// Primitives in the order they were added.
    primitives: Vec<Primitive>,
}

impl Document {
    /// Creates an empty document with a zero offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working offset used by subsequently added primitives.
    ///
    /// Offsets do not stack: the previous offset is discarded.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        trace!(x, y, "Document offset changed");
        self.x_offset = x;
        self.y_offset = y;
    }

    /// Returns the current working offset.
    #[must_use]
    pub const fn offset(&self) -> (f64, f64) {
        (self.x_offset, self.y_offset)
    }

    /// Adds a line from `(x1, y1)` to `(x2, y2)`.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, pen: &Pen) {
        self.primitives.push(Primitive::Line(Line {
            x1: x1 + self.x_offset,
            y1: y1 + self.y_offset,
            x2: x2 + self.x_offset,
            y2: y2 + self.y_offset,
            layer: pen.layer.clone(),
            color: pen.color,
        }));
    }

    /// Adds an arc centred on `(cx, cy)` sweeping from `start` to `end` degrees.
    pub fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, pen: &Pen) {
        self.primitives.push(Primitive::Arc(Arc {
            cx: cx + self.x_offset,
            cy: cy + self.y_offset,
            radius,
            start_angle: start,
            end_angle: end,
            layer: pen.layer.clone(),
            color: pen.color,
        }));
    }

    /// Adds a text label inserted at `(x, y)`.
    #[allow(clippy::too_many_arguments)] // Mirrors the MTEXT group layout
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        height: f64,
        content: impl Into<String>,
        attachment: Attachment,
        rotation: f64,
        pen: &Pen,
    ) {
        self.primitives.push(Primitive::Text(Text {
            x: x + self.x_offset,
            y: y + self.y_offset,
            height,
            content: content.into(),
            attachment,
            rotation,
            layer: pen.layer.clone(),
            color: pen.color,
        }));
    }

    /// Returns the primitives in the order they were added.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns the number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if no primitives have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Returns the number of primitives on `layer`.
    #[must_use]
    pub fn count_on_layer(&self, layer: &str) -> usize {
        self.primitives.iter().filter(|p| p.layer() == layer).count()
    }

    /// Finishes the document and encodes it as DXF text.
    #[must_use]
    pub fn serialize(self) -> String {
        writer::encode(&self.primitives)
    }
}
