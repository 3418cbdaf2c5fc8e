//! folded-dipole-dxf: folded-dipole antenna dimensions as a DXF drawing
//!
//! This library computes the physical dimensions of a folded dipole from its
//! operating frequency and draws a former (mounting bracket) for it as a 2D
//! DXF drawing, ready for laser cutting or 3D printing.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! - **Calculator**: frequency, mount offset and wire radius become a
//!   [`dipole::Dimensions`] set
//! - **Drawing**: [`dipole::FoldedDipole::render`] adds lines, arcs and text
//!   to a [`dxf::Document`] in a fixed order
//! - **Output**: [`dxf::Document::serialize`] encodes the `ENTITIES` section
//!
//! # Modules
//!
//! - [`config`] — Configuration loading and validation
//! - [`dipole`] — Dimension calculator and drawing sequence
//! - [`dxf`] — Drawing document builder and writer
//! - [`error`] — Error types

pub mod config;
pub mod dipole;
pub mod dxf;
pub mod error;
