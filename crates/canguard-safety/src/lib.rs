//! Safety decision engine gating automated actuation onto vehicle CAN buses.
//!
//! CanGuard sits between a driving-assistance computer and the vehicle's CAN
//! segments. Every received frame updates a single [`SafetyState`] through
//! the inbound rules; every frame the assistance computer wants to emit is
//! checked by the admission filter; every frame eligible for cross-bus
//! mirroring is checked by the forwarding filter. The three entry points
//! share nothing but that state.
//!
//! # Architecture
//!
//! - **SafetyState**: latched observations and flags, no logic
//! - **VehicleConfig**: static per-vehicle thresholds, allow-list, routes
//! - **SafetyCore**: the three entry points (`rx_hook`, `may_transmit`,
//!   `forward_target`) plus the operator/test surface
//! - **SharedSafetyCore**: mutex-wrapped handle for multi-threaded hosts
//!
//! # Fail-safe guarantees
//!
//! - Controls start disallowed and any fresh driver input disengages them.
//! - A zero/neutral actuation command is always admitted, so releasing
//!   control is never blocked.
//! - A relay malfunction locks out transmission and forwarding permanently;
//!   there is no clearing API short of restarting the owning process.
//!
//! # State machine
//!
//! ```text
//! ┌─────────────┐
//! │   NORMAL    │◄─ initial; controls_allowed toggles inside
//! └──────┬──────┘
//!        │ relay malfunction signature observed
//!        ▼
//! ┌─────────────┐
//! │   FAULTED   │── terminal: tx and fwd always refuse
//! └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use canguard_can::{CanFrame, ClassifiedSignal, MessageClassifier};
//! use canguard_safety::{SafetyCore, VehicleConfig};
//!
//! struct Demo;
//!
//! impl MessageClassifier for Demo {
//!     fn classify(&self, frame: &CanFrame) -> ClassifiedSignal {
//!         match frame.addr {
//!             0x1D3 => ClassifiedSignal::CruiseStatus(frame.payload().first() == Some(&1)),
//!             _ => ClassifiedSignal::Other,
//!         }
//!     }
//! }
//!
//! let config = VehicleConfig::builder()
//!     .relay_signature(0, 0x2E4)
//!     .allow_tx(0, 0x2E4)
//!     .build()?;
//! let mut core = SafetyCore::new(Demo, config);
//!
//! // Cruise engages on the rising edge, after which actuation may transmit.
//! core.rx_hook(&CanFrame::new(0, 0x1D3, &[1]));
//! assert!(core.may_transmit(&CanFrame::zeroed(0, 0x2E4, 8)));
//! # Ok::<(), canguard_safety::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod config;
mod core;
mod error;
mod shared;
mod state;

pub mod prelude;

pub use config::{BusAddr, VehicleConfig, VehicleConfigBuilder};
pub use core::SafetyCore;
pub use error::{ConfigError, ConfigResult};
pub use shared::SharedSafetyCore;
pub use state::{SafetyState, StateSnapshot, UnsafeMode};

#[cfg(test)]
mod tests;
