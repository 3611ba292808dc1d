#![no_std]
#![no_main]

use static_cell::StaticCell;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println::logger::init_logger;
use log::{error, info, warn};

use beacon_scanner_config::{BrokerHost, DeviceConfig, DHCP_HOSTNAME_MAX};

pub mod config;
pub mod constants;

use constants::*;

esp_bootloader_esp_idf::esp_app_desc!();

static CONFIG: StaticCell<DeviceConfig> = StaticCell::new();

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    init_logger(log::LevelFilter::Info);

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    info!("Beacon scanner {} starting on {}", VERSION, TARGET.name());

    // Nothing else may start on an invalid configuration
    let config: &'static DeviceConfig = match config::load() {
        Ok(config) => CONFIG.init(config),
        Err(e) => loop {
            error!("Invalid configuration: {}, check cfg.toml and rebuild", e);
            Timer::after(Duration::from_secs(HALT_REPORT_INTERVAL_SECS)).await;
        },
    };

    report(config);

    // Wi-Fi, MQTT, BLE scan and LED tasks are spawned with `config` from here
}

fn report(config: &DeviceConfig) {
    info!("Configuration: {}", config);

    if config.wifi_is_open() {
        info!("Wi-Fi network {:?} is open", config.wifi_ssid());
    }

    match config.broker_host() {
        BrokerHost::Ip(addr) => info!("MQTT broker at {}:{}", addr, config.mqtt_port()),
        BrokerHost::Name(name) => info!(
            "MQTT broker {}:{} will be resolved via DNS",
            name,
            config.mqtt_port()
        ),
    }

    if config.mqtt_is_anonymous() {
        info!("MQTT connection is anonymous");
    }

    if config.dhcp_hostname().is_err() {
        warn!(
            "Host name {:?} exceeds {} bytes and cannot be sent over DHCP",
            config.host_name(),
            DHCP_HOSTNAME_MAX
        );
    }
}
