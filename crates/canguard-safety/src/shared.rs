//! Mutex-wrapped handle for multi-threaded hosts.

use std::sync::Arc;

use parking_lot::Mutex;

use canguard_can::{CanFrame, MessageClassifier};

use crate::config::VehicleConfig;
use crate::core::SafetyCore;
use crate::state::{StateSnapshot, UnsafeMode};

/// A cloneable, thread-safe handle to one [`SafetyCore`].
///
/// The inbound rules assume sequential, atomic evaluation of
/// "read prev, compare, write new"; when frames and transmit requests
/// arrive from more than one thread the host must serialize the entry
/// points. This handle holds the lock for the duration of each call and
/// never across calls, so every operation stays bounded-time and
/// deadlock-free.
#[derive(Debug)]
pub struct SharedSafetyCore<C: MessageClassifier> {
    inner: Arc<Mutex<SafetyCore<C>>>,
}

impl<C: MessageClassifier> Clone for SharedSafetyCore<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: MessageClassifier> SharedSafetyCore<C> {
    /// Wrap a core for shared use.
    #[must_use]
    pub fn new(classifier: C, config: VehicleConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SafetyCore::new(classifier, config))),
        }
    }

    /// See [`SafetyCore::rx_hook`].
    pub fn rx_hook(&self, frame: &CanFrame) -> bool {
        self.inner.lock().rx_hook(frame)
    }

    /// See [`SafetyCore::may_transmit`].
    #[must_use]
    pub fn may_transmit(&self, frame: &CanFrame) -> bool {
        self.inner.lock().may_transmit(frame)
    }

    /// See [`SafetyCore::forward_target`].
    #[must_use]
    pub fn forward_target(&self, source_bus: u8, frame: &CanFrame) -> Option<u8> {
        self.inner.lock().forward_target(source_bus, frame)
    }

    /// See [`SafetyCore::snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        self.inner.lock().snapshot()
    }

    /// See [`SafetyCore::set_controls_allowed`].
    pub fn set_controls_allowed(&self, allowed: bool) {
        self.inner.lock().set_controls_allowed(allowed);
    }

    /// See [`SafetyCore::set_unsafe_mode`].
    pub fn set_unsafe_mode(&self, mode: UnsafeMode) {
        self.inner.lock().set_unsafe_mode(mode);
    }

    /// See [`SafetyCore::set_gas_interceptor_detected`].
    pub fn set_gas_interceptor_detected(&self, detected: bool) {
        self.inner.lock().set_gas_interceptor_detected(detected);
    }

    /// See [`SafetyCore::reinit`].
    pub fn reinit(&self) {
        self.inner.lock().reinit();
    }
}
