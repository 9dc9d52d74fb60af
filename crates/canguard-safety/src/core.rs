//! The safety decision engine: inbound rules, admission filter, forwarding
//! filter, and the relay malfunction detector.
//!
//! All three entry points are synchronous, bounded-time computations over
//! the single [`SafetyState`] instance owned here. Nothing blocks, retries,
//! or performs I/O; a rejected transmission or suppressed forward is a
//! sentinel return the caller drops the frame on.

use tracing::{debug, error, trace, warn};

use canguard_can::{CanFrame, ClassifiedSignal, MessageClassifier};

use crate::config::VehicleConfig;
use crate::state::{SafetyState, StateSnapshot, UnsafeMode};

/// The safety core for one vehicle integration.
///
/// Generic over the per-vehicle [`MessageClassifier`] so the engine itself
/// never sees byte offsets or message ids. Single-threaded by construction;
/// multi-threaded hosts wrap it in [`SharedSafetyCore`].
///
/// [`SharedSafetyCore`]: crate::SharedSafetyCore
#[derive(Debug)]
pub struct SafetyCore<C: MessageClassifier> {
    classifier: C,
    config: VehicleConfig,
    state: SafetyState,
}

impl<C: MessageClassifier> SafetyCore<C> {
    /// Create a core with fail-safe initial state: controls disallowed, no
    /// fault latched.
    ///
    /// The configuration should come from [`VehicleConfig::builder`], which
    /// validates it; the runtime paths assume a well-formed config.
    #[must_use]
    pub fn new(classifier: C, config: VehicleConfig) -> Self {
        Self {
            classifier,
            config,
            state: SafetyState::new(),
        }
    }

    /// The latched safety state.
    #[must_use]
    pub fn state(&self) -> &SafetyState {
        &self.state
    }

    /// The static per-vehicle configuration.
    #[must_use]
    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    /// Serializable copy of every state field, for diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    // ------------------------------------------------------------------
    // Inbound update engine
    // ------------------------------------------------------------------

    /// Feed a received frame through the inbound rules.
    ///
    /// Pure state mutation; never fails. Returns whether the classifier
    /// recognized the frame, which the host may feed into its own frame
    /// accounting. Unrecognized frames are no-ops for the signal rules but
    /// still undergo the relay malfunction check.
    pub fn rx_hook(&mut self, frame: &CanFrame) -> bool {
        if self.config.is_relay_signature(frame) {
            self.trip_relay_malfunction(frame);
        }

        let signal = self.classifier.classify(frame);
        match signal {
            ClassifiedSignal::Speed(value) => {
                self.state.vehicle_moving = value > self.config.standstill_threshold;
            }
            ClassifiedSignal::Gas(level) => {
                let pressed = level > self.config.gas_pressed_threshold;
                if pressed
                    && !self.state.gas_pressed_prev
                    && !self.state.unsafe_mode.disable_disengage_on_gas
                {
                    self.disengage("gas pressed");
                }
                self.state.gas_pressed = pressed;
                self.state.gas_pressed_prev = pressed;
            }
            ClassifiedSignal::GasInterceptor(level) => {
                if !self.state.gas_interceptor_detected {
                    debug!("gas interceptor detected");
                    self.state.gas_interceptor_detected = true;
                }
                let pressed = level > self.config.interceptor_threshold;
                if pressed
                    && !self.state.gas_interceptor_prev
                    && !self.state.unsafe_mode.disable_disengage_on_gas
                {
                    self.disengage("gas interceptor pressed");
                }
                self.state.gas_interceptor_level = pressed;
                self.state.gas_interceptor_prev = pressed;
            }
            ClassifiedSignal::Brake(level) => {
                let pressed = level != 0;
                // A fresh press disengages at any speed; a held brake only
                // disengages while rolling, so a driver can rest on the
                // pedal at standstill without losing engagement.
                if pressed && (!self.state.brake_pressed_prev || self.state.vehicle_moving) {
                    self.disengage("brake pressed");
                }
                self.state.brake_pressed = pressed;
                self.state.brake_pressed_prev = pressed;
            }
            ClassifiedSignal::CruiseStatus(engaged) => {
                if engaged && !self.state.cruise_engaged_prev {
                    debug!("cruise engaged, controls allowed");
                    self.state.controls_allowed = true;
                }
                if !engaged {
                    // Level-sensitive: any disengaged report forces controls
                    // off, with or without a preceding engaged sample.
                    self.disengage("cruise disengaged");
                }
                self.state.cruise_engaged_prev = engaged;
            }
            ClassifiedSignal::RelayFaultSignature => {
                self.trip_relay_malfunction(frame);
            }
            ClassifiedSignal::Other => {}
        }
        signal.is_recognized()
    }

    fn disengage(&mut self, rule: &'static str) {
        if self.state.controls_allowed {
            warn!(rule, "controls disengaged");
            self.state.controls_allowed = false;
        }
    }

    fn trip_relay_malfunction(&mut self, frame: &CanFrame) {
        if !self.state.relay_malfunction {
            error!(
                bus = frame.bus,
                addr = frame.addr,
                "relay malfunction: permanent lockout engaged"
            );
            self.state.relay_malfunction = true;
        }
    }

    // ------------------------------------------------------------------
    // Outbound admission filter
    // ------------------------------------------------------------------

    /// Decide whether a candidate frame may be transmitted.
    ///
    /// Pure predicate over the latched state, the frame, and the static
    /// allow-list; safe to call at arbitrary frequency. Order matters:
    /// relay lockout dominates, then allow-list membership, then actuation
    /// gating. A zero/neutral actuation command always passes so releasing
    /// control can never be blocked.
    #[must_use]
    pub fn may_transmit(&self, frame: &CanFrame) -> bool {
        if self.state.relay_malfunction {
            trace!(addr = frame.addr, bus = frame.bus, "tx refused: relay malfunction");
            return false;
        }
        if !self.config.allows_tx(frame.bus, frame.addr) {
            trace!(addr = frame.addr, bus = frame.bus, "tx refused: not allow-listed");
            return false;
        }
        if let Some(level) = self.classifier.actuation_level(frame) {
            if level != 0 && !self.state.controls_allowed {
                trace!(
                    addr = frame.addr,
                    bus = frame.bus,
                    level,
                    "tx refused: actuation while controls disallowed"
                );
                return false;
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Forwarding filter
    // ------------------------------------------------------------------

    /// Decide which bus, if any, a frame received on `source_bus` should be
    /// mirrored onto.
    ///
    /// Pure predicate: relay lockout dominates, then the blacklist of
    /// addresses the module must originate or suppress itself, then the
    /// static per-bus route.
    #[must_use]
    pub fn forward_target(&self, source_bus: u8, frame: &CanFrame) -> Option<u8> {
        if self.state.relay_malfunction {
            return None;
        }
        if self.config.is_fwd_blacklisted(source_bus, frame.addr) {
            trace!(addr = frame.addr, source_bus, "fwd suppressed: blacklisted");
            return None;
        }
        self.config.route_for(source_bus)
    }

    // ------------------------------------------------------------------
    // Operator / test surface
    // ------------------------------------------------------------------

    /// Directly enable or disable automated actuation.
    ///
    /// Engagement set here is subject to the same disengagement rules as a
    /// cruise engagement; it does not bypass the relay lockout in the
    /// transmit path.
    pub fn set_controls_allowed(&mut self, allowed: bool) {
        self.state.controls_allowed = allowed;
    }

    /// Replace the set of disabled driver-override protections.
    pub fn set_unsafe_mode(&mut self, mode: UnsafeMode) {
        if !mode.is_none() {
            warn!(bits = mode.bits(), "unsafe mode set");
        }
        self.state.unsafe_mode = mode;
    }

    /// Set or clear the sticky interceptor-seen flag.
    pub fn set_gas_interceptor_detected(&mut self, detected: bool) {
        self.state.gas_interceptor_detected = detected;
    }

    /// Reset every state field to its initial value.
    ///
    /// Equivalent to restarting the owning process; this is the only way
    /// `relay_malfunction` clears. Test-bench surface, not part of the
    /// runtime contract.
    pub fn reinit(&mut self) {
        self.state = SafetyState::new();
    }
}
