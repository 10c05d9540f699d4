//! Cascade configuration

use crate::cascade::{MATRIX_WIDTH, MAX_CASCADE_SIZE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest brightness (intensity register) value
pub const MAX_BRIGHTNESS: u8 = 15;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Cascade size is 0 or above [`MAX_CASCADE_SIZE`]
    InvalidCascadeSize,
    /// More digits than the cascade has rows
    InvalidDigitCount,
}

/// Physical layout of a chip cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CascadeConfig {
    /// Number of chips in the chain (1..=8)
    pub cascade_size: u8,
    /// Digits (row registers) in use across the chain, 0 for all
    pub digits: u8,
    /// Number digits from the far end of the chain
    pub mirrored: bool,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            cascade_size: 1,
            digits: 0,
            mirrored: false,
        }
    }
}

impl CascadeConfig {
    /// Config for `cascade_size` chips with every digit in use
    pub fn new(cascade_size: u8) -> Self {
        Self {
            cascade_size,
            ..Self::default()
        }
    }

    /// Digits available on the whole chain
    pub fn max_digits(&self) -> u8 {
        self.cascade_size.saturating_mul(MATRIX_WIDTH as u8)
    }

    /// Validate and return the effective digit count
    pub fn validate(&self) -> Result<u8, ConfigError> {
        if self.cascade_size == 0 || self.cascade_size > MAX_CASCADE_SIZE {
            return Err(ConfigError::InvalidCascadeSize);
        }

        let max_digits = self.max_digits();
        match self.digits {
            0 => Ok(max_digits),
            n if n > max_digits => Err(ConfigError::InvalidDigitCount),
            n => Ok(n),
        }
    }
}
