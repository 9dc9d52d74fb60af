//! The per-vehicle decode seam.

use crate::{CanFrame, ClassifiedSignal};

/// Per-vehicle frame decoder consumed by the safety core.
///
/// One implementation exists per supported vehicle platform. Implementations
/// own all byte-offset, scaling, and message-id knowledge; the core only
/// sees [`ClassifiedSignal`] values and compares them against configured
/// thresholds.
///
/// Implementations must be pure: no I/O, no shared mutable state. Counter
/// and checksum validation, where a platform requires it, happens inside the
/// classifier before it decides between a real signal and
/// [`ClassifiedSignal::Other`].
pub trait MessageClassifier: Send {
    /// Decode a received frame into its semantic meaning.
    ///
    /// Frames the classifier does not understand decode to
    /// [`ClassifiedSignal::Other`]; decoding never fails.
    fn classify(&self, frame: &CanFrame) -> ClassifiedSignal;

    /// For a frame about to be *transmitted*: if it is an actuation command
    /// (interceptor gas, throttle), return its decoded command level.
    ///
    /// `None` means the frame is not an actuation command on this platform.
    /// The admission filter lets a `Some(0)` (neutral/release) command pass
    /// even while controls are disallowed.
    fn actuation_level(&self, frame: &CanFrame) -> Option<u32> {
        let _ = frame;
        None
    }
}
