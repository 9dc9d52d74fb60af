//! Discriminated decode result produced by a message classifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// What a received frame means to the safety core, stripped of every
/// vehicle-specific detail.
///
/// Levels are reported in raw sensor units; the safety core only ever
/// compares them against configured thresholds, so no scaling is applied
/// here. A frame the classifier cannot or does not decode is [`Other`] and
/// is a no-op for the inbound rules.
///
/// [`Other`]: ClassifiedSignal::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassifiedSignal {
    /// Native accelerator pedal level.
    Gas(u32),
    /// Auxiliary gas interceptor level (vehicles without native electronic
    /// throttle override).
    GasInterceptor(u32),
    /// Brake pedal level; any nonzero value is a pressed pedal.
    Brake(u32),
    /// Vehicle speed sample in raw sensor units.
    Speed(u32),
    /// Cruise/PCM engagement state reported by the vehicle.
    CruiseStatus(bool),
    /// A frame that must never appear if the bypass relay is isolating
    /// correctly; observing it is a hardware fault.
    RelayFaultSignature,
    /// Anything else, including frames that failed to decode.
    Other,
}

impl ClassifiedSignal {
    /// True for every variant except [`ClassifiedSignal::Other`].
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ClassifiedSignal::Other)
    }
}

impl fmt::Display for ClassifiedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifiedSignal::Gas(level) => write!(f, "gas pedal level {level}"),
            ClassifiedSignal::GasInterceptor(level) => write!(f, "gas interceptor level {level}"),
            ClassifiedSignal::Brake(level) => write!(f, "brake pedal level {level}"),
            ClassifiedSignal::Speed(value) => write!(f, "speed sample {value}"),
            ClassifiedSignal::CruiseStatus(engaged) => write!(f, "cruise engaged: {engaged}"),
            ClassifiedSignal::RelayFaultSignature => write!(f, "relay fault signature"),
            ClassifiedSignal::Other => write!(f, "unclassified frame"),
        }
    }
}
