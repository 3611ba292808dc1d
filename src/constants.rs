use beacon_scanner_config::Target;

/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Chip this firmware is built for, decides which GPIOs may drive the LED
pub const TARGET: Target = Target::Esp32;

/// Interval in seconds between error reports once halted on a bad configuration
pub const HALT_REPORT_INTERVAL_SECS: u64 = 30;
