//! Register write trait
//!
//! The single primitive the renderers need from the bus layer.

use crate::cascade::Target;

/// Writes one register on one chip, or on every chip at once
///
/// Implementations own the transport (bus, chip select, framing).
/// Errors are opaque to the renderers and passed through unchanged.
pub trait RegisterWrite {
    /// Transport error type
    type Error;

    /// Write `value` to `register` on `target`
    fn write_register(&mut self, target: Target, register: u8, value: u8)
        -> Result<(), Self::Error>;
}

impl<T: RegisterWrite + ?Sized> RegisterWrite for &mut T {
    type Error = T::Error;

    fn write_register(
        &mut self,
        target: Target,
        register: u8,
        value: u8,
    ) -> Result<(), Self::Error> {
        (**self).write_register(target, register, value)
    }
}
