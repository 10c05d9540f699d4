//! Hardware driver implementations
//!
//! This crate drives real chips using the rendering logic in
//! marquee-core:
//!
//! - MAX7219/MAX7221 cascade driver (static text, scrolling, raw images,
//!   brightness/shutdown/decode mode)
//! - SPI connector implementing the register write trait over an
//!   `embedded-hal` SPI device

#![no_std]
#![deny(unsafe_code)]

pub mod display;

pub use display::{ConnectorError, Error, Max7219, SpiConnector};
