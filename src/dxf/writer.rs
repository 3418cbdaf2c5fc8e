//! Text writer for DXF entity sections.
//!
//! # Document Format
//!
//! ```text
//! 0 / SECTION / 2 / ENTITIES      // Header
//! 0 / <TYPE> / 8 / <layer> / ...   // One record per primitive
//! 0 / ENDSEC / 0 / EOF            // Trailer
//! ```
//!
//! Every group code and every value sits on its own line.

use std::fmt::Write;

use super::primitives::{Arc, Line, Primitive, Text};

/// Opening lines of every document.
pub const HEADER: &str = "0\nSECTION\n2\nENTITIES\n";

/// Closing lines of every document.
pub const TRAILER: &str = "0\nENDSEC\n0\nEOF\n";

/// Formats a number the way it is embedded in group values.
///
/// Uses the shortest text that round-trips, keeping a trailing `.0` on finite
/// integral values so `868` is written as `868.0`. Magnitudes below `1e-4` or
/// from `1e16` up switch to exponent form with a signed two-digit exponent,
/// e.g. `1e-05` and `1.5e+16`.
#[must_use]
#[allow(clippy::float_cmp)] // Integral check on finite values
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        return format_exponent(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Rewrites Rust's `1.5e16` exponent form as `1.5e+16`.
fn format_exponent(value: f64) -> String {
    let text = format!("{value:e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Writes a single group code / value pair.
fn write_pair(out: &mut String, code: u16, value: impl std::fmt::Display) {
    let _ = write!(out, "{code}\n{value}\n");
}

/// Writes a group code with a numeric value.
fn write_number(out: &mut String, code: u16, value: f64) {
    write_pair(out, code, format_number(value));
}

/// Writes the entity type marker plus the common layer and colour fields.
fn write_common(out: &mut String, primitive: &Primitive) {
    write_pair(out, 0, primitive.entity_name());
    write_pair(out, 8, primitive.layer());
    write_pair(out, 62, primitive.color());
}

fn write_line(out: &mut String, line: &Line) {
    write_number(out, 10, line.x1);
    write_number(out, 20, line.y1);
    write_number(out, 11, line.x2);
    write_number(out, 21, line.y2);
}

fn write_arc(out: &mut String, arc: &Arc) {
    write_number(out, 10, arc.cx);
    write_number(out, 20, arc.cy);
    write_number(out, 40, arc.radius);
    write_number(out, 50, arc.start_angle);
    write_number(out, 51, arc.end_angle);
}

fn write_text(out: &mut String, text: &Text) {
    write_number(out, 10, text.x);
    write_number(out, 20, text.y);
    write_number(out, 40, text.height);
    write_pair(out, 1, &text.content);
    write_pair(out, 71, text.attachment);
    write_number(out, 50, text.rotation);
}

/// Encodes one primitive as its group-code record.
pub fn write_primitive(out: &mut String, primitive: &Primitive) {
    write_common(out, primitive);
    match primitive {
        Primitive::Line(line) => write_line(out, line),
        Primitive::Arc(arc) => write_arc(out, arc),
        Primitive::Text(text) => write_text(out, text),
    }
}

/// Encodes a complete document: header, primitives in order, trailer.
#[must_use]
pub fn encode(primitives: &[Primitive]) -> String {
    // Records run to roughly 100 bytes each.
    let mut out = String::with_capacity(HEADER.len() + TRAILER.len() + primitives.len() * 100);

    out.push_str(HEADER);
    for primitive in primitives {
        write_primitive(&mut out, primitive);
    }
    out.push_str(TRAILER);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dxf::primitives::Attachment;

    #[test]
    fn integral_numbers_keep_decimal_point() {
        assert_eq!(format_number(868.0), "868.0");
        assert_eq!(format_number(-90.0), "-90.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn fractional_numbers_use_shortest_form() {
        assert_eq!(format_number(60.52), "60.52");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-1.5), "-1.5");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
        assert_eq!(format_number(1.5e16), "1.5e+16");
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.2345678901234568e17), "1.2345678901234568e+17");
        assert_eq!(format_number(1e100), "1e+100");
        // Boundaries stay positional
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(9_999_999_999_999_998.0), "9999999999999998.0");
    }

    #[test]
    fn non_finite_numbers() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn line_record_layout() {
        let mut out = String::new();
        write_primitive(
            &mut out,
            &Primitive::Line(Line {
                x1: 1.0,
                y1: 2.5,
                x2: 3.0,
                y2: 4.0,
                layer: "wire".to_string(),
                color: 100,
            }),
        );
        assert_eq!(
            out,
            "0\nLINE\n8\nwire\n62\n100\n10\n1.0\n20\n2.5\n11\n3.0\n21\n4.0\n"
        );
    }

    #[test]
    fn text_record_layout() {
        let mut out = String::new();
        write_primitive(
            &mut out,
            &Primitive::Text(Text {
                x: 0.0,
                y: 10.0,
                height: 3.0,
                content: "Freq".to_string(),
                attachment: Attachment::TopRight,
                rotation: 0.0,
                layer: "info".to_string(),
                color: 63,
            }),
        );
        assert_eq!(
            out,
            "0\nMTEXT\n8\ninfo\n62\n63\n10\n0.0\n20\n10.0\n40\n3.0\n1\nFreq\n71\n3\n50\n0.0\n"
        );
    }

    #[test]
    fn arc_record_layout() {
        let mut out = String::new();
        write_primitive(
            &mut out,
            &Primitive::Arc(Arc {
                cx: 5.0,
                cy: -1.25,
                radius: 2.0,
                start_angle: 90.0,
                end_angle: 270.0,
                layer: "outer".to_string(),
                color: 65535,
            }),
        );
        assert_eq!(
            out,
            "0\nARC\n8\nouter\n62\n65535\n10\n5.0\n20\n-1.25\n40\n2.0\n50\n90.0\n51\n270.0\n"
        );
    }

    #[test]
    fn empty_document_is_header_and_trailer() {
        assert_eq!(encode(&[]), format!("{HEADER}{TRAILER}"));
    }
}
