//! SPI connector for a MAX7219 cascade
//!
//! Every register write is one SPI transaction carrying a 16-bit word per
//! chip: register address first, then value. The word for chip slot 0 is
//! sent first and ends up in the chip farthest down the chain. Chips that
//! are not addressed receive a no-op word.
//!
//! ```text
//!   CS low │ reg0 val0 │ reg1 val1 │ ... │ regN-1 valN-1 │ CS high
//!          └─ slot 0 ──┘
//! ```

use embedded_hal::spi::SpiDevice;
use heapless::Vec;
use marquee_core::cascade::{Target, MAX_CASCADE_SIZE};
use marquee_core::config::ConfigError;
use marquee_core::traits::RegisterWrite;

use super::max7219::reg;

/// Longest frame, in bytes
pub const MAX_FRAME_LEN: usize = 2 * MAX_CASCADE_SIZE as usize;

/// Build the SPI frame for one register write
///
/// Returns `None` when `target` names a chip outside the cascade.
pub fn build_frame(
    cascade_size: u8,
    target: Target,
    register: u8,
    value: u8,
) -> Option<Vec<u8, MAX_FRAME_LEN>> {
    if matches!(target, Target::Chip(c) if c >= cascade_size) {
        return None;
    }

    let mut frame = Vec::new();
    for chip in 0..cascade_size {
        let word = match target {
            Target::Broadcast => [register, value],
            Target::Chip(c) if c == chip => [register, value],
            Target::Chip(_) => [reg::NOOP, 0x00],
        };
        frame.extend_from_slice(&word).ok()?;
    }
    Some(frame)
}

/// Connector errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectorError<E> {
    /// SPI transaction failed
    Spi(E),
    /// Write addressed a chip past the end of the cascade
    ChipOutOfRange,
}

/// [`RegisterWrite`] over an SPI device
///
/// Chip select is owned by the [`SpiDevice`].
pub struct SpiConnector<SPI> {
    spi: SPI,
    cascade_size: u8,
}

impl<SPI: SpiDevice> SpiConnector<SPI> {
    /// Create a connector for a cascade of `cascade_size` chips
    pub fn new(spi: SPI, cascade_size: u8) -> Result<Self, ConfigError> {
        if cascade_size == 0 || cascade_size > MAX_CASCADE_SIZE {
            return Err(ConfigError::InvalidCascadeSize);
        }
        Ok(Self { spi, cascade_size })
    }

    /// Number of chips in the cascade
    pub fn cascade_size(&self) -> u8 {
        self.cascade_size
    }

    /// Release the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> RegisterWrite for SpiConnector<SPI> {
    type Error = ConnectorError<SPI::Error>;

    fn write_register(&mut self, target: Target, register: u8, value: u8) -> Result<(), Self::Error> {
        let frame = build_frame(self.cascade_size, target, register, value)
            .ok_or(ConnectorError::ChipOutOfRange)?;
        self.spi.write(&frame).map_err(ConnectorError::Spi)
    }
}
