use crate::constants::LEVEL_COUNT;

pub struct Config {
    // IR command code to step the trainer resistance down
    pub cmd_down: u8,

    // IR command code to power the trainer on
    pub cmd_on: u8,

    // IR command code to step the trainer resistance up
    pub cmd_up: u8,

    // Default power thresholds in watts, one per resistance level (optional)
    pub default_levels: Option<[u16; LEVEL_COUNT]>,

    // IR remote device address for the trainer
    pub ir_addr: u16,

    // MQTT port (usually 1883)
    pub mqtt_port: u16,

    // MQTT broker hostname or IP address
    pub mqtt_server: &'static str,

    // MQTT topic prefix to subscribe to for per-level control settings (optional)
    pub topic_config_base: Option<&'static str>,

    // MQTT topic to publish power meter readings to
    pub topic_data: &'static str,

    // MQTT topic carrying the full level table in one retained message (optional)
    pub topic_levels: Option<&'static str>,

    // Wi-Fi passphrase
    pub wifi_pass: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
