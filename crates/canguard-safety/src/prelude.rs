//! Convenient re-exports for safety core consumers.

pub use crate::config::{BusAddr, VehicleConfig, VehicleConfigBuilder};
pub use crate::core::SafetyCore;
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::shared::SharedSafetyCore;
pub use crate::state::{SafetyState, StateSnapshot, UnsafeMode};

pub use canguard_can::{BUS_COUNT, CanFrame, ClassifiedSignal, MessageClassifier};
