//! Hardware abstraction traits
//!
//! These traits define the interface between the rendering logic
//! and bus-specific implementations.

pub mod register;

pub use register::RegisterWrite;
