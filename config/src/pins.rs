//! GPIO maps of the supported chips
//!
//! Only pins that exist on the chip, can drive an output and are not wired
//! to the SPI flash on standard modules are accepted for the status LED.

use core::ops::RangeInclusive;

/// Chip the firmware is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Esp32,
    Esp32C3,
    Esp32C6,
    Esp32S3,
}

// GPIO 6-11: SPI flash, 20/24/28-31: not bonded, 34-39: input only
const ESP32_OUTPUT_PINS: &[RangeInclusive<u8>] = &[0..=5, 12..=19, 21..=23, 25..=27, 32..=33];
// GPIO 12-17: SPI flash
const ESP32C3_OUTPUT_PINS: &[RangeInclusive<u8>] = &[0..=11, 18..=21];
// GPIO 24-30: SPI flash
const ESP32C6_OUTPUT_PINS: &[RangeInclusive<u8>] = &[0..=23];
// GPIO 22-25: not bonded, 26-32: SPI flash / PSRAM
const ESP32S3_OUTPUT_PINS: &[RangeInclusive<u8>] = &[0..=21, 33..=48];

impl Target {
    pub const fn name(self) -> &'static str {
        match self {
            Target::Esp32 => "ESP32",
            Target::Esp32C3 => "ESP32-C3",
            Target::Esp32C6 => "ESP32-C6",
            Target::Esp32S3 => "ESP32-S3",
        }
    }

    fn output_pins(self) -> &'static [RangeInclusive<u8>] {
        match self {
            Target::Esp32 => ESP32_OUTPUT_PINS,
            Target::Esp32C3 => ESP32C3_OUTPUT_PINS,
            Target::Esp32C6 => ESP32C6_OUTPUT_PINS,
            Target::Esp32S3 => ESP32S3_OUTPUT_PINS,
        }
    }

    /// Returns true if `pin` can be used as a push-pull output on this chip
    pub fn is_output_pin(self, pin: u8) -> bool {
        self.output_pins().iter().any(|range| range.contains(&pin))
    }
}
