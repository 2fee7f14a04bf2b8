use pocketbook_domain::Division;
use serde::{Deserialize, Serialize};

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    /// Hours after creation during which a transaction may be edited or deleted.
    #[serde(default = "Config::default_edit_window_hours")]
    pub edit_window_hours: u32,
    #[serde(default)]
    pub default_division: Division,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Seed the starter accounts and demo history on launch.
    #[serde(default = "Config::default_load_sample_data")]
    pub load_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            locale: Self::default_locale(),
            edit_window_hours: Self::default_edit_window_hours(),
            default_division: Division::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            load_sample_data: Self::default_load_sample_data(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_locale() -> String {
        "en-IN".into()
    }

    pub fn default_edit_window_hours() -> u32 {
        12
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_load_sample_data() -> bool {
        true
    }
}
