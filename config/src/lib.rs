//! Configuration store for the BLE beacon scanner firmware.
//!
//! The firmware's build script turns `cfg.toml` into a [`Constants`] value.
//! At startup it is validated once by [`DeviceConfig::load`] against the
//! target chip, and the resulting record is shared read-only with the WiFi,
//! MQTT, BLE scan and LED modules for the rest of the run.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod constants;
pub mod device;
pub mod error;
pub mod pins;

pub use constants::Constants;
pub use device::{BrokerHost, DeviceConfig, DHCP_HOSTNAME_MAX};
pub use error::{ConfigError, Field};
pub use pins::Target;
