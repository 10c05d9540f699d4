//! Board-agnostic text rendering for cascaded 8x8 LED matrices
//!
//! This crate contains everything that does not touch a bus:
//!
//! - Variable-width 5x7 font (glyph table)
//! - Cascade addressing (matrix block / digit to chip and register)
//! - Rasterizer and bit-plane framebuffer
//! - Scroll state machine
//! - Cascade configuration
//! - The register write trait implemented by bus connectors

#![no_std]
#![deny(unsafe_code)]

pub mod cascade;
pub mod config;
pub mod font;
pub mod raster;
pub mod scroll;
pub mod traits;

pub use cascade::{Location, Target, MATRIX_WIDTH, MAX_CASCADE_SIZE};
pub use config::{CascadeConfig, ConfigError, MAX_BRIGHTNESS};
pub use raster::{rasterize, Framebuffer, RasterError};
pub use scroll::{ScrollState, Scroller};
pub use traits::RegisterWrite;
