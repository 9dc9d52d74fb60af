//! Test support: a synthetic vehicle platform exercising every rule.
//!
//! Constants follow a real integration (standstill at 1 raw unit,
//! interceptor threshold 845, relay signature 0x2E4 on bus 0) so the
//! scenarios match field behavior.


use canguard_can::{CanFrame, ClassifiedSignal, MessageClassifier};

use crate::config::VehicleConfig;
use crate::core::SafetyCore;

pub const GAS_PRESSED_THRESHOLD: u32 = 0;
pub const INTERCEPTOR_THRESHOLD: u32 = 845;
pub const STANDSTILL_THRESHOLD: u32 = 1;
pub const RELAY_MALFUNCTION_BUS: u8 = 0;
pub const RELAY_MALFUNCTION_ADDR: u32 = 0x2E4;

pub const SPEED_ADDR: u32 = 0xAA;
pub const GAS_ADDR: u32 = 0x1D2;
pub const BRAKE_ADDR: u32 = 0x226;
pub const CRUISE_ADDR: u32 = 0x1D3;
pub const INTERCEPTOR_RX_ADDR: u32 = 0x201;
pub const INTERCEPTOR_TX_ADDR: u32 = 0x200;

pub const TX_ALLOWLIST: &[(u8, u32)] = &[
    (0, 0x2E4),
    (0, 0x343),
    (0, INTERCEPTOR_TX_ADDR),
    (1, 0x128),
];
pub const FWD_BLACKLIST: &[(u8, u32)] = &[(2, 0x2E4), (2, 0x412)];

/// Classifier for the synthetic platform; signal levels ride in the first
/// four payload bytes, little-endian.
pub struct TestVehicle;

fn word(frame: &CanFrame) -> u32 {
    let mut bytes = [0u8; 4];
    for (dst, src) in bytes.iter_mut().zip(frame.payload()) {
        *dst = *src;
    }
    u32::from_le_bytes(bytes)
}

impl MessageClassifier for TestVehicle {
    fn classify(&self, frame: &CanFrame) -> ClassifiedSignal {
        if frame.bus != 0 {
            return ClassifiedSignal::Other;
        }
        match frame.addr {
            SPEED_ADDR => ClassifiedSignal::Speed(word(frame)),
            GAS_ADDR => ClassifiedSignal::Gas(word(frame)),
            BRAKE_ADDR => ClassifiedSignal::Brake(word(frame)),
            CRUISE_ADDR => ClassifiedSignal::CruiseStatus(word(frame) != 0),
            INTERCEPTOR_RX_ADDR => ClassifiedSignal::GasInterceptor(word(frame)),
            _ => ClassifiedSignal::Other,
        }
    }

    fn actuation_level(&self, frame: &CanFrame) -> Option<u32> {
        (frame.addr == INTERCEPTOR_TX_ADDR).then(|| word(frame))
    }
}

pub fn test_config() -> VehicleConfig {
    VehicleConfig::builder()
        .gas_pressed_threshold(GAS_PRESSED_THRESHOLD)
        .interceptor_threshold(INTERCEPTOR_THRESHOLD)
        .standstill_threshold(STANDSTILL_THRESHOLD)
        .relay_signature(RELAY_MALFUNCTION_BUS, RELAY_MALFUNCTION_ADDR)
        .allow_tx_all(TX_ALLOWLIST.iter().copied())
        .route(0, 2)
        .route(2, 0)
        .blacklist_fwd(2, 0x2E4)
        .blacklist_fwd(2, 0x412)
        .build()
        .expect("test vehicle config is valid")
}

pub fn test_core() -> SafetyCore<TestVehicle> {
    SafetyCore::new(TestVehicle, test_config())
}

pub fn speed_frame(value: u32) -> CanFrame {
    CanFrame::new(0, SPEED_ADDR, &value.to_le_bytes())
}

pub fn gas_frame(level: u32) -> CanFrame {
    CanFrame::new(0, GAS_ADDR, &level.to_le_bytes())
}

pub fn brake_frame(level: u32) -> CanFrame {
    CanFrame::new(0, BRAKE_ADDR, &level.to_le_bytes())
}

pub fn cruise_frame(engaged: bool) -> CanFrame {
    CanFrame::new(0, CRUISE_ADDR, &u32::from(engaged).to_le_bytes())
}

pub fn interceptor_rx_frame(level: u32) -> CanFrame {
    CanFrame::new(0, INTERCEPTOR_RX_ADDR, &level.to_le_bytes())
}

pub fn interceptor_tx_frame(level: u32) -> CanFrame {
    CanFrame::new(0, INTERCEPTOR_TX_ADDR, &level.to_le_bytes())
}
