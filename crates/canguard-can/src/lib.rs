//! CAN frame primitives and the message classifier seam for CanGuard.
//!
//! This crate defines the plain-old-data types shared across the CanGuard
//! workspace:
//!
//! - [`CanFrame`]: a raw frame as seen on a bus (address, bus id, payload)
//! - [`ClassifiedSignal`]: the discriminated result of decoding a frame
//! - [`MessageClassifier`]: the capability trait a per-vehicle integration
//!   implements so the safety core never has to know byte offsets, scaling,
//!   or per-vehicle message ids
//!
//! No safety logic lives here; the decision engine is in `canguard-safety`.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod classifier;
mod frame;
mod signal;

pub use classifier::MessageClassifier;
pub use frame::{BUS_COUNT, CanFrame, MAX_EXTENDED_ADDR, MAX_FRAME_LEN, MAX_STANDARD_ADDR};
pub use signal::ClassifiedSignal;
