//! Shared test-vehicle integration used by the scenario tests.
//!
//! A synthetic platform with one bus of interest (bus 0), a Toyota-like
//! interceptor threshold, and a 0 <-> 2 forwarding pair with the module's
//! own LKAS/ACC addresses blacklisted on the camera bus.

#![allow(dead_code)] // not every scenario binary uses every helper

use canguard_safety::prelude::*;

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

pub fn config() -> VehicleConfig {
    VehicleConfig::builder()
        .gas_pressed_threshold(GAS_PRESSED_THRESHOLD)
        .interceptor_threshold(INTERCEPTOR_THRESHOLD)
        .standstill_threshold(STANDSTILL_THRESHOLD)
        .relay_signature(RELAY_MALFUNCTION_BUS, RELAY_MALFUNCTION_ADDR)
        .allow_tx(0, 0x2E4)
        .allow_tx(0, 0x343)
        .allow_tx(0, INTERCEPTOR_TX_ADDR)
        .allow_tx(1, 0x128)
        .route(0, 2)
        .route(2, 0)
        .blacklist_fwd(2, 0x2E4)
        .blacklist_fwd(2, 0x412)
        .build()
        .expect("test vehicle config is valid")
}

pub fn core() -> SafetyCore<TestVehicle> {
    SafetyCore::new(TestVehicle, config())
}

pub fn speed(value: u32) -> CanFrame {
    CanFrame::new(0, SPEED_ADDR, &value.to_le_bytes())
}

pub fn gas(level: u32) -> CanFrame {
    CanFrame::new(0, GAS_ADDR, &level.to_le_bytes())
}

pub fn brake(level: u32) -> CanFrame {
    CanFrame::new(0, BRAKE_ADDR, &level.to_le_bytes())
}

pub fn cruise(engaged: bool) -> CanFrame {
    CanFrame::new(0, CRUISE_ADDR, &u32::from(engaged).to_le_bytes())
}

pub fn interceptor_rx(level: u32) -> CanFrame {
    CanFrame::new(0, INTERCEPTOR_RX_ADDR, &level.to_le_bytes())
}

pub fn interceptor_tx(level: u32) -> CanFrame {
    CanFrame::new(0, INTERCEPTOR_TX_ADDR, &level.to_le_bytes())
}
