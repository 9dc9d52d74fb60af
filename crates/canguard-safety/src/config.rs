//! Static per-vehicle configuration.
//!
//! A [`VehicleConfig`] is built once per vehicle integration and never
//! mutated afterwards. It carries the signal thresholds, the relay
//! malfunction signature, the transmit allow-list, and the cross-bus
//! forwarding tables the three entry points consult.

use serde::{Deserialize, Serialize};

use canguard_can::{BUS_COUNT, CanFrame, MAX_EXTENDED_ADDR};

use crate::error::{ConfigError, ConfigResult};

/// An `(addr, bus)` pair, used for the transmit allow-list, the forwarding
/// blacklist, and the relay malfunction signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusAddr {
    /// Bus segment id.
    pub bus: u8,
    /// CAN arbitration id.
    pub addr: u32,
}

impl BusAddr {
    /// Create a pair.
    #[must_use]
    pub fn new(bus: u8, addr: u32) -> Self {
        Self { bus, addr }
    }
}

/// Static configuration supplied by the vehicle integration.
///
/// Prefer [`VehicleConfig::builder`]; `build()` validates bus ids, address
/// ranges, and route sanity so the runtime paths never have to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Direct gas pedal level above which the pedal counts as pressed.
    pub gas_pressed_threshold: u32,
    /// Interceptor level above which the pedal counts as pressed.
    pub interceptor_threshold: u32,
    /// Speed at or below which the vehicle counts as standing still.
    pub standstill_threshold: u32,
    /// Frame that must never be received if relay isolation is intact.
    pub relay_malfunction: BusAddr,
    /// Every `(addr, bus)` pair that is ever legal to transmit.
    pub tx_allowlist: Vec<BusAddr>,
    /// Destination bus for frames received on each source bus, if any.
    pub fwd_routes: [Option<u8>; BUS_COUNT],
    /// `(addr, bus)` pairs the module originates or suppresses itself and
    /// must therefore never passively relay.
    pub fwd_blacklist: Vec<BusAddr>,
}

impl Default for VehicleConfig {
    /// A configuration that transmits and forwards nothing; thresholds are
    /// zero (any positive pedal level counts as pressed, any positive speed
    /// counts as moving) and the relay signature is unmatchable.
    fn default() -> Self {
        Self {
            gas_pressed_threshold: 0,
            interceptor_threshold: 0,
            standstill_threshold: 0,
            // Extended-space address no vehicle frame carries.
            relay_malfunction: BusAddr::new(0, MAX_EXTENDED_ADDR),
            tx_allowlist: Vec::new(),
            fwd_routes: [None; BUS_COUNT],
            fwd_blacklist: Vec::new(),
        }
    }
}

impl VehicleConfig {
    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> VehicleConfigBuilder {
        VehicleConfigBuilder::default()
    }

    /// True if `(bus, addr)` is legal to transmit.
    #[must_use]
    pub fn allows_tx(&self, bus: u8, addr: u32) -> bool {
        self.tx_allowlist
            .iter()
            .any(|entry| entry.bus == bus && entry.addr == addr)
    }

    /// True if frames with `addr` received on `bus` must not be relayed.
    #[must_use]
    pub fn is_fwd_blacklisted(&self, bus: u8, addr: u32) -> bool {
        self.fwd_blacklist
            .iter()
            .any(|entry| entry.bus == bus && entry.addr == addr)
    }

    /// Destination bus for frames received on `source_bus`, if routed.
    #[must_use]
    pub fn route_for(&self, source_bus: u8) -> Option<u8> {
        self.fwd_routes
            .get(usize::from(source_bus))
            .copied()
            .flatten()
    }

    /// True if a received frame carries the relay malfunction signature.
    #[must_use]
    pub fn is_relay_signature(&self, frame: &CanFrame) -> bool {
        frame.matches(self.relay_malfunction.bus, self.relay_malfunction.addr)
    }

    /// Validate bus ids, address ranges, and route sanity.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry names a bus outside `0..BUS_COUNT`, an
    /// address outside the extended id space, or a route that loops back to
    /// its source bus.
    pub fn validate(&self) -> ConfigResult<()> {
        Self::check_pair(&self.relay_malfunction)?;
        for entry in self.tx_allowlist.iter().chain(self.fwd_blacklist.iter()) {
            Self::check_pair(entry)?;
        }
        for (source, dest) in self.fwd_routes.iter().enumerate() {
            if let Some(dest) = dest {
                if usize::from(*dest) >= BUS_COUNT {
                    return Err(ConfigError::invalid_bus(*dest));
                }
                if usize::from(*dest) == source {
                    return Err(ConfigError::route_loop(*dest));
                }
            }
        }
        Ok(())
    }

    fn check_pair(pair: &BusAddr) -> ConfigResult<()> {
        if usize::from(pair.bus) >= BUS_COUNT {
            return Err(ConfigError::invalid_bus(pair.bus));
        }
        if pair.addr > MAX_EXTENDED_ADDR {
            return Err(ConfigError::invalid_addr(pair.addr));
        }
        Ok(())
    }
}

/// Builder for [`VehicleConfig`].
#[derive(Debug, Default)]
pub struct VehicleConfigBuilder {
    config: VehicleConfig,
    // First error detected while assembling, reported by build(); the
    // per-bus route array cannot itself represent an out-of-range source.
    pending_error: Option<ConfigError>,
}

impl VehicleConfigBuilder {
    /// Set the direct gas pressed threshold.
    #[must_use]
    pub fn gas_pressed_threshold(mut self, threshold: u32) -> Self {
        self.config.gas_pressed_threshold = threshold;
        self
    }

    /// Set the interceptor pressed threshold.
    #[must_use]
    pub fn interceptor_threshold(mut self, threshold: u32) -> Self {
        self.config.interceptor_threshold = threshold;
        self
    }

    /// Set the standstill speed threshold (exclusive).
    #[must_use]
    pub fn standstill_threshold(mut self, threshold: u32) -> Self {
        self.config.standstill_threshold = threshold;
        self
    }

    /// Set the relay malfunction signature.
    #[must_use]
    pub fn relay_signature(mut self, bus: u8, addr: u32) -> Self {
        self.config.relay_malfunction = BusAddr::new(bus, addr);
        self
    }

    /// Allow `(bus, addr)` to be transmitted.
    #[must_use]
    pub fn allow_tx(mut self, bus: u8, addr: u32) -> Self {
        self.config.tx_allowlist.push(BusAddr::new(bus, addr));
        self
    }

    /// Allow every `(bus, addr)` pair in `entries` to be transmitted.
    #[must_use]
    pub fn allow_tx_all<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (u8, u32)>,
    {
        self.config
            .tx_allowlist
            .extend(entries.into_iter().map(|(bus, addr)| BusAddr::new(bus, addr)));
        self
    }

    /// Mirror frames received on `source_bus` onto `dest_bus`.
    #[must_use]
    pub fn route(mut self, source_bus: u8, dest_bus: u8) -> Self {
        if let Some(slot) = self.config.fwd_routes.get_mut(usize::from(source_bus)) {
            *slot = Some(dest_bus);
        } else if self.pending_error.is_none() {
            self.pending_error = Some(ConfigError::invalid_bus(source_bus));
        }
        self
    }

    /// Never relay frames with `addr` received on `bus`.
    #[must_use]
    pub fn blacklist_fwd(mut self, bus: u8, addr: u32) -> Self {
        self.config.fwd_blacklist.push(BusAddr::new(bus, addr));
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the assembled configuration fails
    /// [`VehicleConfig::validate`].
    pub fn build(self) -> ConfigResult<VehicleConfig> {
        if let Some(err) = self.pending_error {
            return Err(err);
        }
        self.config.validate()?;
        Ok(self.config)
    }
}
