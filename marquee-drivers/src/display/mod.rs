//! LED matrix display drivers

pub mod max7219;
pub mod spi;

pub use max7219::{Error, Max7219};
pub use spi::{ConnectorError, SpiConnector};
