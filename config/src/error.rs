use core::fmt;

/// Configuration fields, used to point at the offending value in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    WifiSsid,
    WifiPassword,
    MqttAddress,
    MqttPort,
    MqttUsername,
    MqttPassword,
    HostName,
    MqttReconnectIntervalSeconds,
    ScanDurationSeconds,
    LedPin,
}

impl Field {
    /// Key of the field in `cfg.toml`
    pub const fn name(self) -> &'static str {
        match self {
            Field::WifiSsid => "wifi_ssid",
            Field::WifiPassword => "wifi_password",
            Field::MqttAddress => "mqtt_address",
            Field::MqttPort => "mqtt_port",
            Field::MqttUsername => "mqtt_username",
            Field::MqttPassword => "mqtt_password",
            Field::HostName => "host_name",
            Field::MqttReconnectIntervalSeconds => "mqtt_reconnect_interval_seconds",
            Field::ScanDurationSeconds => "scan_duration_seconds",
            Field::LedPin => "led_pin",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue(Field),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue(field) => write!(f, "invalid value for {}", field),
        }
    }
}
