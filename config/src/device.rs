use core::fmt;
use core::net::Ipv4Addr;
use core::str::FromStr;
use core::time::Duration;

use heapless::String;
use log::{debug, error, warn};

use crate::constants::Constants;
use crate::error::{ConfigError, Field};
use crate::pins::Target;

/// Longest hostname the DHCP client accepts
pub const DHCP_HOSTNAME_MAX: usize = 32;

/// SSID left in place by the configuration template
const PLACEHOLDER_SSID: &str = "?";

/// Validated device configuration.
///
/// Built once at startup by [`DeviceConfig::load`] and never modified
/// afterwards. Fields are only reachable through getters.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    wifi_ssid: &'static str,
    wifi_password: &'static str,
    mqtt_address: &'static str,
    mqtt_port: u16,
    mqtt_username: &'static str,
    mqtt_password: &'static str,
    host_name: &'static str,
    mqtt_reconnect_interval_seconds: u8,
    scan_duration_seconds: u8,
    led_pin: u8,
}

/// MQTT broker address, as written in the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerHost<'a> {
    /// IPv4 literal, usable without DNS
    Ip(Ipv4Addr),
    /// Hostname to be resolved
    Name(&'a str),
}

impl DeviceConfig {
    /// Validates `constants` for `target` and builds the configuration.
    ///
    /// Fails on a zero reconnect interval, a zero scan duration, a zero
    /// MQTT port, or an LED pin that cannot drive an output on `target`.
    /// String values are taken as they are.
    pub fn load(constants: &Constants, target: Target) -> Result<Self, ConfigError> {
        check(
            constants.mqtt_reconnect_interval_seconds > 0,
            Field::MqttReconnectIntervalSeconds,
        )?;
        check(constants.scan_duration_seconds > 0, Field::ScanDurationSeconds)?;
        check(constants.mqtt_port > 0, Field::MqttPort)?;

        if !target.is_output_pin(constants.led_pin) {
            error!(
                "GPIO{} is not an output pin on {}",
                constants.led_pin,
                target.name()
            );
            return Err(ConfigError::InvalidValue(Field::LedPin));
        }

        let config = Self {
            wifi_ssid: constants.wifi_ssid,
            wifi_password: constants.wifi_password,
            mqtt_address: constants.mqtt_address,
            mqtt_port: constants.mqtt_port,
            mqtt_username: constants.mqtt_username,
            mqtt_password: constants.mqtt_password,
            host_name: constants.host_name,
            mqtt_reconnect_interval_seconds: constants.mqtt_reconnect_interval_seconds,
            scan_duration_seconds: constants.scan_duration_seconds,
            led_pin: constants.led_pin,
        };

        if config.has_placeholder_ssid() {
            warn!("Wi-Fi SSID is not set (\"{}\")", config.wifi_ssid);
        }

        debug!("Configuration loaded for {}: {}", target.name(), config);
        Ok(config)
    }

    pub const fn wifi_ssid(&self) -> &'static str {
        self.wifi_ssid
    }

    pub const fn wifi_password(&self) -> &'static str {
        self.wifi_password
    }

    pub const fn mqtt_address(&self) -> &'static str {
        self.mqtt_address
    }

    pub const fn mqtt_port(&self) -> u16 {
        self.mqtt_port
    }

    pub const fn mqtt_username(&self) -> &'static str {
        self.mqtt_username
    }

    pub const fn mqtt_password(&self) -> &'static str {
        self.mqtt_password
    }

    pub const fn host_name(&self) -> &'static str {
        self.host_name
    }

    pub const fn mqtt_reconnect_interval_seconds(&self) -> u8 {
        self.mqtt_reconnect_interval_seconds
    }

    pub const fn scan_duration_seconds(&self) -> u8 {
        self.scan_duration_seconds
    }

    pub const fn led_pin(&self) -> u8 {
        self.led_pin
    }

    pub const fn mqtt_reconnect_interval(&self) -> Duration {
        Duration::from_secs(self.mqtt_reconnect_interval_seconds as u64)
    }

    pub const fn scan_duration(&self) -> Duration {
        Duration::from_secs(self.scan_duration_seconds as u64)
    }

    /// Open network, no password
    pub fn wifi_is_open(&self) -> bool {
        self.wifi_password.is_empty()
    }

    pub fn mqtt_is_anonymous(&self) -> bool {
        self.mqtt_username.is_empty()
    }

    /// Returns true if the SSID was never filled in
    pub fn has_placeholder_ssid(&self) -> bool {
        self.wifi_ssid.is_empty() || self.wifi_ssid == PLACEHOLDER_SSID
    }

    pub fn broker_host(&self) -> BrokerHost<'static> {
        match Ipv4Addr::from_str(self.mqtt_address) {
            Ok(addr) => BrokerHost::Ip(addr),
            Err(_) => BrokerHost::Name(self.mqtt_address),
        }
    }

    /// Host name in the buffer type expected by the DHCP client
    pub fn dhcp_hostname(&self) -> Result<String<DHCP_HOSTNAME_MAX>, ConfigError> {
        String::<DHCP_HOSTNAME_MAX>::from_str(self.host_name)
            .map_err(|_| ConfigError::InvalidValue(Field::HostName))
    }
}

fn check(valid: bool, field: Field) -> Result<(), ConfigError> {
    if valid {
        Ok(())
    } else {
        error!("Invalid configuration value for {}", field);
        Err(ConfigError::InvalidValue(field))
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<empty>"
    } else {
        "***"
    }
}

impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_password", &redact(self.wifi_password))
            .field("mqtt_address", &self.mqtt_address)
            .field("mqtt_port", &self.mqtt_port)
            .field("mqtt_username", &self.mqtt_username)
            .field("mqtt_password", &redact(self.mqtt_password))
            .field("host_name", &self.host_name)
            .field(
                "mqtt_reconnect_interval_seconds",
                &self.mqtt_reconnect_interval_seconds,
            )
            .field("scan_duration_seconds", &self.scan_duration_seconds)
            .field("led_pin", &self.led_pin)
            .finish()
    }
}

impl fmt::Display for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host={} ssid={} wifi_password={} mqtt={}:{} mqtt_user={} mqtt_password={} reconnect={}s scan={}s led=GPIO{}",
            self.host_name,
            self.wifi_ssid,
            redact(self.wifi_password),
            self.mqtt_address,
            self.mqtt_port,
            if self.mqtt_is_anonymous() {
                "<anonymous>"
            } else {
                self.mqtt_username
            },
            redact(self.mqtt_password),
            self.mqtt_reconnect_interval_seconds,
            self.scan_duration_seconds,
            self.led_pin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn load(constants: &Constants) -> Result<DeviceConfig, ConfigError> {
        DeviceConfig::load(constants, Target::Esp32)
    }

    #[test]
    fn test_load_defaults() {
        let config = load(&Constants::DEFAULT).unwrap();
        assert_eq!(config.mqtt_reconnect_interval_seconds(), 60);
        assert_eq!(config.scan_duration_seconds(), 5);
        assert_eq!(config.mqtt_address(), "192.168.0.28");
        assert_eq!(config.mqtt_port(), 1883);
        assert_eq!(config.host_name(), "beacon_scanner1");
        assert_eq!(config.led_pin(), 2);
        assert_eq!(config.mqtt_reconnect_interval(), Duration::from_secs(60));
        assert_eq!(config.scan_duration(), Duration::from_secs(5));
        assert!(config.has_placeholder_ssid());
        assert!(config.mqtt_is_anonymous());
        assert!(!config.wifi_is_open());
    }

    #[test]
    fn test_zero_scan_duration_rejected() {
        let constants = Constants::DEFAULT.with_scan_duration_seconds(0);
        assert_eq!(
            load(&constants),
            Err(ConfigError::InvalidValue(Field::ScanDurationSeconds))
        );
    }

    #[test]
    fn test_zero_reconnect_interval_rejected() {
        let constants = Constants::DEFAULT.with_mqtt_reconnect_interval_seconds(0);
        assert_eq!(
            load(&constants),
            Err(ConfigError::InvalidValue(Field::MqttReconnectIntervalSeconds))
        );
    }

    #[test]
    fn test_zero_port_rejected() {
        let constants = Constants::DEFAULT.with_mqtt_address("broker.local", 0);
        assert_eq!(
            load(&constants),
            Err(ConfigError::InvalidValue(Field::MqttPort))
        );
    }

    #[test]
    fn test_led_pin_out_of_range() {
        for pin in [34, 40, 255] {
            let constants = Constants::DEFAULT.with_led_pin(pin);
            assert_eq!(
                load(&constants),
                Err(ConfigError::InvalidValue(Field::LedPin)),
                "GPIO{}",
                pin
            );
        }

        // valid on ESP32-S3 only
        let constants = Constants::DEFAULT.with_led_pin(40);
        assert!(DeviceConfig::load(&constants, Target::Esp32S3).is_ok());
        assert!(DeviceConfig::load(&constants, Target::Esp32C3).is_err());
    }

    #[test]
    fn test_reconnect_checked_before_scan() {
        let constants = Constants::DEFAULT
            .with_mqtt_reconnect_interval_seconds(0)
            .with_scan_duration_seconds(0)
            .with_led_pin(40);
        assert_eq!(
            load(&constants),
            Err(ConfigError::InvalidValue(Field::MqttReconnectIntervalSeconds))
        );
    }

    #[test]
    fn test_strings_accepted_as_is() {
        let constants = Constants::DEFAULT
            .with_wifi("", "")
            .with_mqtt_address("", 1883)
            .with_host_name("");
        let config = load(&constants).unwrap();
        assert!(config.wifi_is_open());
        assert!(config.has_placeholder_ssid());
        assert_eq!(config.mqtt_address(), "");
    }

    #[test]
    fn test_load_is_idempotent() {
        let constants = Constants::DEFAULT
            .with_wifi("home", "secret")
            .with_mqtt_credentials("scanner", "hunter2");
        assert_eq!(load(&constants).unwrap(), load(&constants).unwrap());
    }

    #[test]
    fn test_broker_host() {
        let config = load(&Constants::DEFAULT).unwrap();
        assert_eq!(
            config.broker_host(),
            BrokerHost::Ip(Ipv4Addr::new(192, 168, 0, 28))
        );

        let constants = Constants::DEFAULT.with_mqtt_address("broker.local", 1883);
        let config = load(&constants).unwrap();
        assert_eq!(config.broker_host(), BrokerHost::Name("broker.local"));

        let constants = Constants::DEFAULT.with_mqtt_address("192.168.0.256", 1883);
        let config = load(&constants).unwrap();
        assert_eq!(config.broker_host(), BrokerHost::Name("192.168.0.256"));
    }

    #[test]
    fn test_dhcp_hostname() {
        let config = load(&Constants::DEFAULT).unwrap();
        assert_eq!(config.dhcp_hostname().unwrap().as_str(), "beacon_scanner1");

        let constants = Constants::DEFAULT.with_host_name("beacon_scanner_with_a_long_name_x");
        let config = load(&constants).unwrap();
        assert_eq!(
            config.dhcp_hostname(),
            Err(ConfigError::InvalidValue(Field::HostName))
        );
    }

    #[test]
    fn test_secrets_redacted() {
        let constants = Constants::DEFAULT
            .with_wifi("home", "wifi-secret")
            .with_mqtt_credentials("scanner", "mqtt-secret");
        let config = load(&constants).unwrap();

        let debug = format!("{:?}", config);
        let display = format!("{}", config);
        for output in [&debug, &display] {
            assert!(!output.contains("wifi-secret"));
            assert!(!output.contains("mqtt-secret"));
        }
        assert!(display.contains("mqtt=192.168.0.28:1883"));
        assert!(display.contains("mqtt_user=scanner"));
        assert!(debug.contains("\"***\""));
    }

    #[test]
    fn test_display_anonymous_open() {
        let constants = Constants::DEFAULT.with_wifi("cafe", "");
        let config = load(&constants).unwrap();
        let display = format!("{}", config);
        assert!(display.contains("wifi_password=<empty>"));
        assert!(display.contains("mqtt_user=<anonymous>"));
    }

    proptest! {
        #[test]
        fn prop_nonzero_timings_load(
            reconnect in 1u8..=u8::MAX,
            scan in 1u8..=u8::MAX,
            port in 1u16..=u16::MAX,
        ) {
            let constants = Constants::DEFAULT
                .with_mqtt_reconnect_interval_seconds(reconnect)
                .with_scan_duration_seconds(scan)
                .with_mqtt_address("broker.local", port);
            let first = load(&constants).unwrap();
            let second = load(&constants).unwrap();
            prop_assert_eq!(first.mqtt_reconnect_interval_seconds(), reconnect);
            prop_assert_eq!(first.scan_duration_seconds(), scan);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_led_pin_follows_pin_map(pin in any::<u8>()) {
            let constants = Constants::DEFAULT.with_led_pin(pin);
            for target in [Target::Esp32, Target::Esp32C3, Target::Esp32C6, Target::Esp32S3] {
                prop_assert_eq!(
                    DeviceConfig::load(&constants, target).is_ok(),
                    target.is_output_pin(pin)
                );
            }
        }
    }
}
