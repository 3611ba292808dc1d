/// Raw build-time values, before validation.
///
/// The firmware's build script generates one of these from `cfg.toml`;
/// keys missing from the file keep their value from [`Constants::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constants {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi password, empty for an open network
    pub wifi_password: &'static str,

    // MQTT broker hostname or IP address
    pub mqtt_address: &'static str,

    // MQTT port (usually 1883)
    pub mqtt_port: u16,

    // MQTT username, empty for anonymous access
    pub mqtt_username: &'static str,

    // MQTT password
    pub mqtt_password: &'static str,

    // Device name (used as DHCP hostname and MQTT client id)
    pub host_name: &'static str,

    // Delay between MQTT reconnection attempts
    pub mqtt_reconnect_interval_seconds: u8,

    // Length of one BLE scan window
    pub scan_duration_seconds: u8,

    // GPIO driving the status LED
    pub led_pin: u8,
}

impl Constants {
    pub const DEFAULT: Constants = Constants {
        wifi_ssid: "?",
        wifi_password: "?",
        mqtt_address: "192.168.0.28",
        mqtt_port: 1883,
        mqtt_username: "",
        mqtt_password: "",
        host_name: "beacon_scanner1",
        mqtt_reconnect_interval_seconds: 60,
        scan_duration_seconds: 5,
        led_pin: 2,
    };

    pub const fn with_wifi(mut self, ssid: &'static str, password: &'static str) -> Self {
        self.wifi_ssid = ssid;
        self.wifi_password = password;
        self
    }

    pub const fn with_mqtt_address(mut self, address: &'static str, port: u16) -> Self {
        self.mqtt_address = address;
        self.mqtt_port = port;
        self
    }

    pub const fn with_mqtt_credentials(
        mut self,
        username: &'static str,
        password: &'static str,
    ) -> Self {
        self.mqtt_username = username;
        self.mqtt_password = password;
        self
    }

    pub const fn with_host_name(mut self, host_name: &'static str) -> Self {
        self.host_name = host_name;
        self
    }

    pub const fn with_mqtt_reconnect_interval_seconds(mut self, seconds: u8) -> Self {
        self.mqtt_reconnect_interval_seconds = seconds;
        self
    }

    pub const fn with_scan_duration_seconds(mut self, seconds: u8) -> Self {
        self.scan_duration_seconds = seconds;
        self
    }

    pub const fn with_led_pin(mut self, pin: u8) -> Self {
        self.led_pin = pin;
        self
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::DEFAULT
    }
}
