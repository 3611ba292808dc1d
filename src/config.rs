use beacon_scanner_config::{ConfigError, Constants, DeviceConfig};

use crate::constants::TARGET;

/// Validates the build-time configuration for this chip.
pub fn load() -> Result<DeviceConfig, ConfigError> {
    DeviceConfig::load(&CONSTANTS, TARGET)
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
