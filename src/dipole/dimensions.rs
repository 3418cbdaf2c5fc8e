//! Physical dimensions of a folded dipole.
//!
//! All lengths derive from the free-space wavelength at the operating
//! frequency, shortened by the velocity factor [`VFACT`]. The rod diameter
//! and the quarter wavelength are the exceptions and use the raw wavelength.
//!
//! ```text
//!        ______________ c ______________
//!       /                               \
//!  r   (  b                            b )
//!       \______ d ______  gap ___ a ____/
//! ```

use std::f64::consts::PI;

use serde::Serialize;

use super::{LIGHTSPEED, VFACT};

/// Dimension set for one operating frequency. All lengths in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    /// Operating frequency (MHz).
    pub frequency: f64,

    /// Free-space wavelength.
    pub wavelength: f64,

    /// Straight run from the feed gap to the right-hand bend.
    pub a: f64,

    /// Arc length of each semicircular bend.
    pub b: f64,

    /// Length of the continuous top run.
    pub c: f64,

    /// Straight run from the feed point to the left-hand bend.
    pub d: f64,

    /// Feed-point gap.
    pub gap: f64,

    /// Radius of the semicircular bends at each end.
    pub bend_radius: f64,

    /// Rod diameter (wavelength / 300, no velocity factor).
    pub rod_diameter: f64,

    /// Total electrical length of the element.
    pub total_length: f64,

    /// Effective wire radius used to offset the inner and outer tracings.
    pub wire_radius: f64,
}

impl Dimensions {
    /// Computes the dimension set for `frequency` MHz.
    ///
    /// When `wire_radius` is `None` (or zero) the radius defaults to half the
    /// rod diameter. A supplied value is used as-is.
    ///
    /// No validation is performed: zero or negative frequencies produce
    /// non-finite or negative lengths.
    #[must_use]
    #[allow(clippy::float_cmp)] // Exact zero means "not given"
    pub fn compute(frequency: f64, wire_radius: Option<f64>) -> Self {
        let wavelength = LIGHTSPEED / frequency;
        let rod_diameter = wavelength / 300.0;

        let wire_radius = match wire_radius {
            Some(radius) if radius != 0.0 => radius,
            _ => rod_diameter / 2.0,
        };

        Self {
            frequency,
            wavelength,
            a: wavelength * 0.19 * VFACT,
            b: wavelength * 0.10 * VFACT,
            c: wavelength * 0.40 * VFACT,
            d: wavelength * 0.20 * VFACT,
            gap: wavelength * 0.01 * VFACT,
            bend_radius: wavelength * (0.10 / PI) * VFACT,
            rod_diameter,
            total_length: wavelength * VFACT,
            wire_radius,
        }
    }

    /// Returns a quarter of the free-space wavelength.
    #[must_use]
    pub fn quarter_wavelength(&self) -> f64 {
        self.wavelength / 4.0
    }

    /// Returns `true` if the wire is thinner than the bend radius.
    ///
    /// Otherwise the inner tracing of each bend collapses or inverts.
    #[must_use]
    pub fn wire_fits_bend(&self) -> bool {
        self.wire_radius < self.bend_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wavelength_at_868() {
        let dims = Dimensions::compute(868.0, None);
        assert!((dims.wavelength - 345.3825).abs() < 0.001);
        assert!((dims.a - 60.504).abs() < 0.001);
        assert!((dims.total_length - 318.443).abs() < 0.001);
        assert!((dims.rod_diameter - 1.1513).abs() < 0.0001);
        assert!((dims.wire_radius - 0.5756).abs() < 0.0001);
    }

    #[test]
    fn default_wire_radius_is_half_rod() {
        let dims = Dimensions::compute(433.0, None);
        assert!((dims.wire_radius - dims.rod_diameter / 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_wire_radius_is_used_directly() {
        let dims = Dimensions::compute(2400.0, Some(1.0));
        assert!((dims.wire_radius - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_wire_radius_falls_back_to_default() {
        let dims = Dimensions::compute(2400.0, Some(0.0));
        assert!((dims.wire_radius - dims.rod_diameter / 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn total_length_is_shortened_wavelength() {
        let dims = Dimensions::compute(144.0, None);
        assert!((dims.total_length - dims.wavelength * VFACT).abs() < 1e-9);
    }

    #[test]
    fn quarter_wavelength() {
        let dims = Dimensions::compute(868.0, None);
        assert!((dims.quarter_wavelength() - 86.346).abs() < 0.001);
    }

    #[test]
    fn wire_fits_bend() {
        assert!(Dimensions::compute(868.0, None).wire_fits_bend());
        assert!(!Dimensions::compute(868.0, Some(50.0)).wire_fits_bend());
    }
}
