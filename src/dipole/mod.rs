//! Folded dipole dimension calculator.
//!
//! This module derives the physical dimensions of a folded dipole from its
//! operating frequency and draws a mounting former for it.
//!
//! # Units
//!
//! Frequencies are in MHz and all lengths in millimetres. [`LIGHTSPEED`] is
//! expressed so that `LIGHTSPEED / frequency` yields a wavelength in mm.
//!
//! # Example
//!
//! ```
//! use folded_dipole_dxf::dipole::FoldedDipole;
//!
//! let dipole = FoldedDipole::new(868.0, 3.0, None);
//! assert!((dipole.dimensions.a - 60.504).abs() < 0.001);
//!
//! let dxf = dipole.render().serialize();
//! assert!(dxf.contains("A=60.5mm"));
//! ```

pub mod dimensions;
pub mod drawing;
pub mod error;

pub use dimensions::Dimensions;
pub use drawing::{FoldedDipole, LAYER_INFO, LAYER_INNER, LAYER_OUTER, LAYER_WIRE};
pub use error::{DipoleError, DipoleResult};

use tracing::warn;

/// Speed of light in mm·MHz.
pub const LIGHTSPEED: f64 = 299_792.0;

/// Velocity factor of the antenna wire.
pub const VFACT: f64 = 0.922;

/// Default mounting offset (mm).
pub const DEFAULT_MOUNT_OFFSET: f64 = 3.0;

/// Checks that the parameters describe physically sensible geometry.
///
/// Only used in strict mode; by default degenerate input is drawn as-is.
///
/// # Errors
///
/// Returns an error if:
/// - The frequency is not a positive finite number
/// - The mount offset is not finite
/// - The wire radius is not smaller than the bend radius
/// - The mount offset is not smaller than the bend radius (no room for holes)
pub fn validate(dipole: &FoldedDipole) -> DipoleResult<()> {
    let dims = &dipole.dimensions;

    if !dims.frequency.is_finite() || dims.frequency <= 0.0 {
        return Err(DipoleError::invalid_parameter(
            "frequency",
            format!("must be a positive number of MHz, got {}", dims.frequency),
        ));
    }

    if !dipole.mount_offset.is_finite() {
        return Err(DipoleError::invalid_parameter(
            "mount_offset",
            format!("must be finite, got {}", dipole.mount_offset),
        ));
    }

    if !dims.wire_fits_bend() {
        return Err(DipoleError::invalid_parameter(
            "wire_radius",
            format!(
                "{:.3} mm must be smaller than the bend radius {:.3} mm",
                dims.wire_radius, dims.bend_radius
            ),
        ));
    }

    if dipole.mount_offset >= dims.bend_radius {
        return Err(DipoleError::invalid_parameter(
            "mount_offset",
            format!(
                "{:.3} mm must be smaller than the bend radius {:.3} mm",
                dipole.mount_offset, dims.bend_radius
            ),
        ));
    }

    Ok(())
}

/// Logs a warning for each parameter [`validate`] would reject.
pub fn warn_degenerate(dipole: &FoldedDipole) {
    let dims = &dipole.dimensions;

    if !dims.frequency.is_finite() || dims.frequency <= 0.0 {
        warn!(frequency = dims.frequency, "Non-positive frequency, drawing will be degenerate");
    }
    if !dims.wire_fits_bend() {
        warn!(
            wire_radius = dims.wire_radius,
            bend_radius = dims.bend_radius,
            "Wire radius exceeds bend radius, inner outline will self-intersect"
        );
    }
    if dipole.mount_offset >= dims.bend_radius {
        warn!(
            mount_offset = dipole.mount_offset,
            bend_radius = dims.bend_radius,
            "Mount offset exceeds bend radius, mounting holes will be inverted"
        );
    }
}
