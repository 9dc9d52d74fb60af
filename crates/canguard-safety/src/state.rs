//! Latched safety observations and operator-settable flags.
//!
//! [`SafetyState`] is pure storage: every rule that reads or writes it lives
//! in the core entry points. The `*_prev` fields hold the value observed
//! *before* the current sample so the rules can compute rising edges; they
//! are only advanced after the rule depending on the edge has run.

use serde::{Deserialize, Serialize};

/// Named flags that selectively disable individual driver-override
/// protections.
///
/// Used on test benches, never by the vehicle itself. Modeled as a closed
/// set of named booleans rather than a raw integer so that "does this flag
/// apply to this check" stays explicit; [`UnsafeMode::from_bits`] and
/// [`UnsafeMode::bits`] round-trip the wire encoding the operator surface
/// speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnsafeMode {
    /// Suppress the disengage-on-gas rule (direct pedal and interceptor).
    pub disable_disengage_on_gas: bool,
    /// Pass-through for integrations that gate stock AEB suppression.
    pub disable_stock_aeb: bool,
    /// Pass-through for integrations that raise longitudinal actuation
    /// limits to the ISO maximum.
    pub raise_longitudinal_limits_to_iso_max: bool,
}

impl UnsafeMode {
    const DISABLE_DISENGAGE_ON_GAS: u32 = 0x1;
    const DISABLE_STOCK_AEB: u32 = 0x2;
    const RAISE_LONGITUDINAL_LIMITS_TO_ISO_MAX: u32 = 0x8;

    /// No protections disabled. This is the default.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Decode the operator wire bitmask. Unknown bits are ignored.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        Self {
            disable_disengage_on_gas: bits & Self::DISABLE_DISENGAGE_ON_GAS != 0,
            disable_stock_aeb: bits & Self::DISABLE_STOCK_AEB != 0,
            raise_longitudinal_limits_to_iso_max: bits
                & Self::RAISE_LONGITUDINAL_LIMITS_TO_ISO_MAX
                != 0,
        }
    }

    /// Encode back to the operator wire bitmask.
    #[must_use]
    pub fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.disable_disengage_on_gas {
            bits |= Self::DISABLE_DISENGAGE_ON_GAS;
        }
        if self.disable_stock_aeb {
            bits |= Self::DISABLE_STOCK_AEB;
        }
        if self.raise_longitudinal_limits_to_iso_max {
            bits |= Self::RAISE_LONGITUDINAL_LIMITS_TO_ISO_MAX;
        }
        bits
    }

    /// True if no protection is disabled.
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::default()
    }
}

/// The process-wide record of latched observations and flags.
///
/// One instance exists per safety core; it is mutated only by the three
/// entry points and the operator surface, and read by all of them. All
/// fields start false/default: controls are disallowed until a qualifying
/// engagement.
#[derive(Debug, Clone, Default)]
pub struct SafetyState {
    pub(crate) controls_allowed: bool,
    pub(crate) gas_pressed: bool,
    pub(crate) gas_pressed_prev: bool,
    pub(crate) gas_interceptor_level: bool,
    pub(crate) gas_interceptor_prev: bool,
    pub(crate) gas_interceptor_detected: bool,
    pub(crate) brake_pressed: bool,
    pub(crate) brake_pressed_prev: bool,
    pub(crate) vehicle_moving: bool,
    pub(crate) cruise_engaged_prev: bool,
    pub(crate) relay_malfunction: bool,
    pub(crate) unsafe_mode: UnsafeMode,
}

impl SafetyState {
    /// Fresh state with every flag at its fail-safe default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Master gate: true iff automated actuation is currently permitted.
    #[must_use]
    pub fn controls_allowed(&self) -> bool {
        self.controls_allowed
    }

    /// Current classified gas-pedal state.
    #[must_use]
    pub fn gas_pressed(&self) -> bool {
        self.gas_pressed
    }

    /// Gas-pedal state before the most recent gas sample.
    #[must_use]
    pub fn gas_pressed_prev(&self) -> bool {
        self.gas_pressed_prev
    }

    /// Current interceptor state, boolean-ized against its threshold.
    #[must_use]
    pub fn gas_interceptor_level(&self) -> bool {
        self.gas_interceptor_level
    }

    /// Interceptor state before the most recent interceptor sample.
    #[must_use]
    pub fn gas_interceptor_prev(&self) -> bool {
        self.gas_interceptor_prev
    }

    /// Sticky flag set once any interceptor frame has been observed.
    #[must_use]
    pub fn gas_interceptor_detected(&self) -> bool {
        self.gas_interceptor_detected
    }

    /// Current classified brake-pedal state.
    #[must_use]
    pub fn brake_pressed(&self) -> bool {
        self.brake_pressed
    }

    /// Brake-pedal state before the most recent brake sample.
    #[must_use]
    pub fn brake_pressed_prev(&self) -> bool {
        self.brake_pressed_prev
    }

    /// True if the last speed sample exceeded the standstill threshold.
    #[must_use]
    pub fn vehicle_moving(&self) -> bool {
        self.vehicle_moving
    }

    /// Cruise engagement before the most recent cruise status sample.
    #[must_use]
    pub fn cruise_engaged_prev(&self) -> bool {
        self.cruise_engaged_prev
    }

    /// One-way fault flag; once true, transmission and forwarding are
    /// refused for the rest of the process lifetime.
    #[must_use]
    pub fn relay_malfunction(&self) -> bool {
        self.relay_malfunction
    }

    /// Currently disabled driver-override protections.
    #[must_use]
    pub fn unsafe_mode(&self) -> UnsafeMode {
        self.unsafe_mode
    }

    /// Copy every field into a serializable snapshot for diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            controls_allowed: self.controls_allowed,
            gas_pressed: self.gas_pressed,
            gas_pressed_prev: self.gas_pressed_prev,
            gas_interceptor_level: self.gas_interceptor_level,
            gas_interceptor_prev: self.gas_interceptor_prev,
            gas_interceptor_detected: self.gas_interceptor_detected,
            brake_pressed: self.brake_pressed,
            brake_pressed_prev: self.brake_pressed_prev,
            vehicle_moving: self.vehicle_moving,
            cruise_engaged_prev: self.cruise_engaged_prev,
            relay_malfunction: self.relay_malfunction,
            unsafe_mode: self.unsafe_mode,
        }
    }
}

/// Point-in-time copy of every [`SafetyState`] field, for the diagnostic
/// and heartbeat paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct StateSnapshot {
    pub controls_allowed: bool,
    pub gas_pressed: bool,
    pub gas_pressed_prev: bool,
    pub gas_interceptor_level: bool,
    pub gas_interceptor_prev: bool,
    pub gas_interceptor_detected: bool,
    pub brake_pressed: bool,
    pub brake_pressed_prev: bool,
    pub vehicle_moving: bool,
    pub cruise_engaged_prev: bool,
    pub relay_malfunction: bool,
    pub unsafe_mode: UnsafeMode,
}
