//! Error types for the safety core.
//!
//! The only fallible surface is static configuration validation. The runtime
//! entry points never fail: rejected transmissions and suppressed forwards
//! are ordinary sentinel returns, not errors.

use thiserror::Error;

use canguard_can::{BUS_COUNT, MAX_EXTENDED_ADDR};

/// Errors raised while validating a per-vehicle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A bus id outside the supported range was configured.
    #[error("bus id {0} is out of range (vehicle has {BUS_COUNT} buses)")]
    InvalidBus(u8),

    /// A CAN address outside the 29-bit extended space was configured.
    #[error("CAN address {0:#x} exceeds the extended id space ({MAX_EXTENDED_ADDR:#x})")]
    InvalidAddr(u32),

    /// A forwarding route points a bus back at itself.
    #[error("forward route for bus {0} loops back to its source")]
    RouteLoop(u8),
}

impl ConfigError {
    /// Create an invalid-bus error.
    #[must_use]
    pub fn invalid_bus(bus: u8) -> Self {
        Self::InvalidBus(bus)
    }

    /// Create an invalid-address error.
    #[must_use]
    pub fn invalid_addr(addr: u32) -> Self {
        Self::InvalidAddr(addr)
    }

    /// Create a route-loop error.
    #[must_use]
    pub fn route_loop(bus: u8) -> Self {
        Self::RouteLoop(bus)
    }
}

/// A specialized `Result` type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::invalid_bus(7);
        assert!(err.to_string().contains('7'));

        let err = ConfigError::invalid_addr(0x2000_0000);
        assert!(err.to_string().contains("0x20000000"));

        let err = ConfigError::route_loop(2);
        assert!(err.to_string().contains("bus 2"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            ConfigError::invalid_bus(9),
            ConfigError::InvalidBus(9)
        ));
        assert!(matches!(
            ConfigError::route_loop(1),
            ConfigError::RouteLoop(1)
        ));
    }
}
