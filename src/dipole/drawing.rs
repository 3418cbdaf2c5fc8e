//! Drawing generation for the folded dipole former.
//!
//! The drawing is produced in a fixed order:
//!
//! 1. Info block (title and a table of key values) on the `info` layer
//! 2. Wire centre line on the `wire` layer
//! 3. Dimension callouts on the `info` layer
//! 4. Inner edge of the wire channel on the `inner` layer
//! 5. Mounting holes on the `inner` layer
//! 6. Outer edge and mounting tab on the `outer` layer
//! 7. Mounting holes on the `outer` layer
//!
//! Everything from step 2 onwards is drawn with the document offset set to
//! `(d + r + 2·wire_radius, 15)` so the body sits clear of the origin.

use tracing::debug;

use crate::dipole::dimensions::Dimensions;
use crate::dxf::writer::format_number;
use crate::dxf::{Attachment, Document, Pen};

/// Layer holding the title, the info table and the dimension callouts.
pub const LAYER_INFO: &str = "info";
/// Layer holding the wire centre line.
pub const LAYER_WIRE: &str = "wire";
/// Layer holding the inner edge of the wire channel.
pub const LAYER_INNER: &str = "inner";
/// Layer holding the outer edge and the mounting tab.
pub const LAYER_OUTER: &str = "outer";

/// Colour index of info text.
const INFO_COLOR: u32 = 63;
/// Colour index of the wire centre line.
const WIRE_COLOR: u32 = 100;

/// Vertical pitch between info rows.
const ROW_PITCH: f64 = 5.0;
/// Height of the info title.
const TITLE_HEIGHT: f64 = 5.0;
/// Height of info row text.
const ROW_HEIGHT: f64 = 3.0;
/// X position of the right-aligned value column.
const VALUE_COLUMN: f64 = 36.0;
/// X position of the unit column.
const UNIT_COLUMN: f64 = 38.0;

/// Vertical offset of the antenna body.
const BODY_Y_OFFSET: f64 = 15.0;
/// Depth of the mounting tab below the wire.
const TAB_DEPTH: f64 = 15.0;
/// Half-width of the mounting tab where it meets the outer edge.
const TAB_HALF_WIDTH: f64 = 7.0;
/// Half-width of the mounting tab at its tip.
const TAB_TIP_HALF_WIDTH: f64 = 2.0;

/// Rounds to two decimals for display.
///
/// Rounds the exact decimal value of `value`, sending exact halves to the
/// even digit, so `868.125` becomes `868.12` while `433.925` (stored just
/// above the half) becomes `433.93`.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Formats a length callout such as `A=60.52mm`.
fn callout(code: &str, value: f64) -> String {
    format!("{code}={}mm", format_number(round2(value)))
}

/// A folded dipole ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldedDipole {
    /// Computed dimensions.
    pub dimensions: Dimensions,

    /// Mounting offset (mm). Sets the inset of the mounting holes from the
    /// bends and scales the callout text.
    pub mount_offset: f64,
}

impl FoldedDipole {
    /// Creates a folded dipole for `frequency` MHz.
    #[must_use]
    pub fn new(frequency: f64, mount_offset: f64, wire_radius: Option<f64>) -> Self {
        Self {
            dimensions: Dimensions::compute(frequency, wire_radius),
            mount_offset,
        }
    }

    /// Draws the complete former into a new document.
    #[must_use]
    pub fn render(&self) -> Document {
        let dims = &self.dimensions;
        let mut doc = Document::new();

        self.draw_info_block(&mut doc);

        doc.set_offset(
            2.0f64.mul_add(dims.wire_radius, dims.d + dims.bend_radius),
            BODY_Y_OFFSET,
        );

        self.draw_wire(&mut doc);
        self.draw_callouts(&mut doc);
        self.draw_inner(&mut doc);
        self.draw_holes(&mut doc, &Pen::layer(LAYER_INNER));
        self.draw_outer(&mut doc);
        self.draw_holes(&mut doc, &Pen::layer(LAYER_OUTER));

        debug!(
            primitives = doc.len(),
            info = doc.count_on_layer(LAYER_INFO),
            wire = doc.count_on_layer(LAYER_WIRE),
            inner = doc.count_on_layer(LAYER_INNER),
            outer = doc.count_on_layer(LAYER_OUTER),
            "Rendered folded dipole"
        );

        doc
    }

    /// Title plus a name / value / unit table, placed above the body.
    fn draw_info_block(&self, doc: &mut Document) {
        let dims = &self.dimensions;
        let pen = Pen::new(LAYER_INFO, INFO_COLOR);

        let rows = [
            ("Freq", dims.frequency, "Mhz"),
            ("1/4lambda", dims.quarter_wavelength(), "mm"),
            ("Total", dims.total_length, "mm"),
            ("Rod", dims.rod_diameter, "mm"),
        ];

        #[allow(clippy::cast_precision_loss)] // Four rows
        let table_height = rows.len() as f64 * ROW_PITCH;
        let mut y = dims.bend_radius * 2.0 + dims.wire_radius * 4.0 + 18.0 + table_height;

        doc.text(0.0, y + 9.0, TITLE_HEIGHT, "Folded-Dipole", Attachment::TopLeft, 0.0, &pen);

        for (name, value, unit) in rows {
            doc.text(0.0, y, ROW_HEIGHT, name, Attachment::TopLeft, 0.0, &pen);
            doc.text(
                VALUE_COLUMN,
                y,
                ROW_HEIGHT,
                format_number(round2(value)),
                Attachment::TopRight,
                0.0,
                &pen,
            );
            doc.text(UNIT_COLUMN, y, ROW_HEIGHT, unit, Attachment::TopLeft, 0.0, &pen);
            y -= ROW_PITCH;
        }
    }

    /// Centre line of the wire: bottom run with the feed gap, both bends and
    /// the top run.
    fn draw_wire(&self, doc: &mut Document) {
        let Dimensions {
            a,
            d,
            gap,
            bend_radius: r,
            ..
        } = self.dimensions;
        let pen = Pen::new(LAYER_WIRE, WIRE_COLOR);

        doc.line(gap, 0.0, gap + a, 0.0, &pen);
        doc.arc(gap + a, r, r, -90.0, 90.0, &pen);
        doc.line(gap + a, r * 2.0, -d, r * 2.0, &pen);
        doc.arc(-d, r, r, 90.0, -90.0, &pen);
        doc.line(-d, 0.0, 0.0, 0.0, &pen);
    }

    /// Letter-coded length labels placed around the outline.
    fn draw_callouts(&self, doc: &mut Document) {
        let Dimensions {
            a,
            b,
            c,
            d,
            gap,
            bend_radius: r,
            wire_radius: wr,
            ..
        } = self.dimensions;
        let pen = Pen::new(LAYER_INFO, INFO_COLOR);
        let size = self.mount_offset / 3.0;
        let side = 2.0f64.mul_add(wr, d + r);
        let below = -wr * 2.0;

        let labels = [
            (0.0, r * 2.0 + wr * 2.0, callout("C", c), Attachment::BottomCenter),
            (side, r, callout("B", b), Attachment::MiddleLeft),
            (-side, r, callout("B", b), Attachment::MiddleRight),
            (d + r / 3.0 * 2.0, 0.0, callout("R", r), Attachment::MiddleLeft),
            (-d - r / 3.0 * 2.0, 0.0, callout("R", r), Attachment::MiddleRight),
            (d / 2.0, below, callout("A", a), Attachment::TopLeft),
            (-d / 2.0, below, callout("D", d), Attachment::TopRight),
            (gap / 2.0, below, callout("Gap", gap), Attachment::TopCenter),
        ];

        for (x, y, content, attachment) in labels {
            doc.text(x, y, size, content, attachment, 0.0, &pen);
        }
    }

    /// Inner edge of the wire channel, closed across the feed gap.
    fn draw_inner(&self, doc: &mut Document) {
        let Dimensions {
            a,
            d,
            gap,
            bend_radius: r,
            wire_radius: wr,
            ..
        } = self.dimensions;
        let pen = Pen::layer(LAYER_INNER);

        doc.line(gap, wr, gap + a, wr, &pen);
        doc.arc(gap + a, r, r - wr, -90.0, 90.0, &pen);
        doc.arc(-d, r, r - wr, 90.0, -90.0, &pen);
        doc.line(-d, wr, 0.0, wr, &pen);
        doc.line(gap + a, r * 2.0 - wr, -d, r * 2.0 - wr, &pen);

        // Feed gap
        doc.line(0.0, wr, 0.0, -wr, &pen);
        doc.line(gap, wr, gap, -wr, &pen);
        doc.line(0.0, -wr, gap, -wr, &pen);
    }

    /// Two slot-shaped mounting holes between `±d` and `±r`.
    fn draw_holes(&self, doc: &mut Document, pen: &Pen) {
        let Dimensions {
            d,
            bend_radius: r,
            ..
        } = self.dimensions;
        let off = self.mount_offset;
        let radius = r - off;

        doc.arc(-d, r, radius, 90.0, -90.0, pen);
        doc.arc(-r, r, radius, -90.0, 90.0, pen);
        doc.line(-d, r * 2.0 - off, -r, r * 2.0 - off, pen);
        doc.line(-d, off, -r, off, pen);

        doc.arc(d, r, radius, -90.0, 90.0, pen);
        doc.arc(r, r, radius, 90.0, -90.0, pen);
        doc.line(d, r * 2.0 - off, r, r * 2.0 - off, pen);
        doc.line(d, off, r, off, pen);
    }

    /// Outer edge of the former with the mounting tab below the feed point.
    fn draw_outer(&self, doc: &mut Document) {
        let Dimensions {
            a,
            d,
            gap,
            bend_radius: r,
            wire_radius: wr,
            ..
        } = self.dimensions;
        let pen = Pen::layer(LAYER_OUTER);

        doc.arc(gap + a, r, r + wr, -90.0, 90.0, &pen);
        doc.arc(-d, r, r + wr, 90.0, -90.0, &pen);
        doc.line(d, r * 2.0 + wr, -d, r * 2.0 + wr, &pen);

        // Mounting tab
        doc.line(TAB_HALF_WIDTH, -wr, d, -wr, &pen);
        doc.line(-d, -wr, -TAB_HALF_WIDTH, -wr, &pen);
        doc.line(-TAB_HALF_WIDTH, -wr, -TAB_TIP_HALF_WIDTH, -TAB_DEPTH, &pen);
        doc.line(TAB_HALF_WIDTH, -wr, TAB_TIP_HALF_WIDTH, -TAB_DEPTH, &pen);
        doc.line(-TAB_TIP_HALF_WIDTH, -TAB_DEPTH, TAB_TIP_HALF_WIDTH, -TAB_DEPTH, &pen);
    }
}
