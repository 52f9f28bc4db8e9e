use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

const CONFIG_PATH: &str = "cfg.toml";
const FALLBACK_TEMPLATE: &str = "templates/cfg-basic.toml";

// Must stay in sync with src/constants.rs (build scripts cannot use the lib).
const LEVEL_COUNT: usize = 6;
const PLACEHOLDER_PREFIX: &str = "YOUR_";

#[derive(Deserialize)]
struct RawConfig {
    wifi_ssid: String,
    wifi_pass: String,
    mqtt_server: String,
    mqtt_port: u16,
    topic_data: String,
    topic_config_base: Option<String>,
    topic_levels: Option<String>,
    default_levels: Option<Vec<u16>>,
    ir_addr: u16,
    cmd_on: u8,
    cmd_up: u8,
    cmd_down: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if the config or the fallback template changes
    println!("cargo:rerun-if-changed={CONFIG_PATH}");
    println!("cargo:rerun-if-changed={FALLBACK_TEMPLATE}");

    let path = if Path::new(CONFIG_PATH).exists() {
        CONFIG_PATH
    } else {
        println!(
            "cargo:warning={CONFIG_PATH} not found, building with {FALLBACK_TEMPLATE} defaults"
        );
        FALLBACK_TEMPLATE
    };

    // Read and parse
    let toml_str = fs::read_to_string(path)?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    if let Some(levels) = &raw.default_levels {
        if levels.len() != LEVEL_COUNT {
            return Err(format!(
                "default_levels must have exactly {LEVEL_COUNT} entries, got {}",
                levels.len()
            )
            .into());
        }
    }

    warn_on_placeholders(&raw);

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            cmd_down: {cmd_down},
            cmd_on: {cmd_on},
            cmd_up: {cmd_up},
            default_levels: {levels:?},
            ir_addr: {ir_addr},
            mqtt_port: {mqtt_port},
            mqtt_server: {mqtt_server:?},
            topic_config_base: {topic_config_base:?},
            topic_data: {topic_data:?},
            topic_levels: {topic_levels:?},
            wifi_pass: {wifi_pass:?},
            wifi_ssid: {wifi_ssid:?},
        }};
    "#,
        cmd_down = raw.cmd_down,
        cmd_on = raw.cmd_on,
        cmd_up = raw.cmd_up,
        levels = raw.default_levels,
        ir_addr = raw.ir_addr,
        mqtt_port = raw.mqtt_port,
        mqtt_server = raw.mqtt_server,
        topic_config_base = raw.topic_config_base,
        topic_data = raw.topic_data,
        topic_levels = raw.topic_levels,
        wifi_pass = raw.wifi_pass,
        wifi_ssid = raw.wifi_ssid,
    );

    fs::write(dest_path, code)?;
    Ok(())
}

// One cargo:warning per string field left at its template placeholder, so an
// unedited cfg.toml shows up in the build log of the dependent firmware.
fn warn_on_placeholders(raw: &RawConfig) {
    let fields = [
        ("wifi_ssid", Some(raw.wifi_ssid.as_str())),
        ("wifi_pass", Some(raw.wifi_pass.as_str())),
        ("mqtt_server", Some(raw.mqtt_server.as_str())),
        ("topic_data", Some(raw.topic_data.as_str())),
        ("topic_config_base", raw.topic_config_base.as_deref()),
        ("topic_levels", raw.topic_levels.as_deref()),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            if value.starts_with(PLACEHOLDER_PREFIX) {
                println!(
                    "cargo:warning={name} is still set to the placeholder {value:?}, edit {CONFIG_PATH}"
                );
            }
        }
    }
}
