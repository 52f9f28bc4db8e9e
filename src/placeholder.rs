use heapless::Vec;

use crate::config::Config;
use crate::constants::{PLACEHOLDER_PREFIX, STRING_FIELD_COUNT};

// Returns true when `value` still carries the template placeholder marker,
// i.e. the user copied a template to cfg.toml but did not edit this field.
pub fn is_placeholder(value: &str) -> bool {
    value.starts_with(PLACEHOLDER_PREFIX)
}

impl Config {
    // Names of the string fields still set to their template placeholders.
    // Capacity matches the number of string fields, so pushes cannot fail.
    pub fn placeholder_fields(&self) -> Vec<&'static str, STRING_FIELD_COUNT> {
        let checks: [(&'static str, Option<&str>); STRING_FIELD_COUNT] = [
            ("wifi_ssid", Some(self.wifi_ssid)),
            ("wifi_pass", Some(self.wifi_pass)),
            ("mqtt_server", Some(self.mqtt_server)),
            ("topic_data", Some(self.topic_data)),
            ("topic_config_base", self.topic_config_base),
            ("topic_levels", self.topic_levels),
        ];

        let mut fields = Vec::new();
        for (name, value) in checks {
            if value.is_some_and(is_placeholder) {
                let _ = fields.push(name);
            }
        }
        fields
    }

    // Logs one warning per field left at its template placeholder.
    pub fn warn_if_unedited(&self) {
        for field in self.placeholder_fields() {
            log::warn!("config field {field} still has its template placeholder value");
        }
    }
}
