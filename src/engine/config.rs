// Configuration for the TextAn report wizard and its components
// Defaults mirror the desktop client's initial values

use std::time::Duration;

/// Report wizard configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WizardConfig {
    /// Text the edit step starts with
    pub default_report: String,

    /// Event poll interval of the TUI loop in milliseconds (default 50)
    pub tick_rate_ms: u64,
}

impl WizardConfig {
    pub const DEFAULT_REPORT: &'static str =
        "Ahoj, toto je testovaci zprava urcena pro vyzkouseni vsech moznosti oznacovani textu.";

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_report: Self::DEFAULT_REPORT.to_string(),
            tick_rate_ms: 50,
        }
    }
}

/// Selection gesture configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionConfig {
    /// Pressing a token inside the active range keeps the range instead of
    /// starting a new gesture (default false)
    pub keep_range_on_inner_press: bool,
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Background color (#1A1B26)
    pub background_color: String,

    /// Token text color (#A9B1D6)
    pub text_color: String,

    /// Background of selected tokens (#3D59A1)
    pub selected_color: String,

    /// Anchor token and entity underline color (#F7768E)
    pub anchor_color: String,

    /// Status line and separators (#646E96)
    pub dimmed_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#1A1B26".to_string(),
            text_color: "#A9B1D6".to_string(),
            selected_color: "#3D59A1".to_string(),
            anchor_color: "#F7768E".to_string(),
            dimmed_color: "#646E96".to_string(),
        }
    }
}

/// Master configuration combining all TextAn settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub wizard: WizardConfig,
    pub selection: SelectionConfig,
    pub theme: ThemeConfig,
}
