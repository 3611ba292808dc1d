use std::{env, error::Error, fs, io::ErrorKind, path::Path};

use serde::Deserialize;

// Keys missing from cfg.toml keep these values
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    wifi_ssid: String,
    wifi_password: String,
    mqtt_address: String,
    mqtt_port: u16,
    mqtt_username: String,
    mqtt_password: String,
    host_name: String,
    mqtt_reconnect_interval_seconds: u8,
    scan_duration_seconds: u8,
    led_pin: u8,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            wifi_ssid: "?".into(),
            wifi_password: "?".into(),
            mqtt_address: "192.168.0.28".into(),
            mqtt_port: 1883,
            mqtt_username: String::new(),
            mqtt_password: String::new(),
            host_name: "beacon_scanner1".into(),
            mqtt_reconnect_interval_seconds: 60,
            scan_duration_seconds: 5,
            led_pin: 2,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse, a missing file means defaults
    let toml_str = match fs::read_to_string("cfg.toml") {
        Ok(toml_str) => toml_str,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("cargo:warning=cfg.toml not found, using default configuration (see cfg.toml.example)");
            String::new()
        }
        Err(e) => return Err(e.into()),
    };
    let raw: RawConfig = toml::from_str(&toml_str)?;

    // Generate Rust code
    let code = format!(
        r#"
        pub const CONSTANTS: Constants = Constants {{
            wifi_ssid: {ssid:?},
            wifi_password: {psk:?},
            mqtt_address: {ma:?},
            mqtt_port: {mp},
            mqtt_username: {mu:?},
            mqtt_password: {mpw:?},
            host_name: {host:?},
            mqtt_reconnect_interval_seconds: {reconnect},
            scan_duration_seconds: {scan},
            led_pin: {led},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_password,
        ma = raw.mqtt_address,
        mp = raw.mqtt_port,
        mu = raw.mqtt_username,
        mpw = raw.mqtt_password,
        host = raw.host_name,
        reconnect = raw.mqtt_reconnect_interval_seconds,
        scan = raw.scan_duration_seconds,
        led = raw.led_pin,
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
