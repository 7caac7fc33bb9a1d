use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/delus/config.toml` or `~/.config/delus/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DELUS__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub shop: ShopSettings,
    pub scroll: ScrollSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Length of the simulated track, in seconds. Drives the time label.
    pub total_duration_secs: u64,
    /// Period of the progress timer (milliseconds). One tick advances progress by 1%.
    pub tick_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            total_duration_secs: 225,
            tick_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    /// Base URL of the shop server, without a trailing slash.
    pub base_url: String,
    /// Request timeout (milliseconds).
    pub timeout_ms: u64,
    /// Whether to fetch products and the playlist from the shop at startup.
    /// The bundled catalog is used when this is off or the fetch fails.
    pub load_catalog: bool,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_ms: 5000,
            load_catalog: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    pub behavior: ScrollBehaviorSetting,
    /// Number of frames a smooth scroll takes to reach its target.
    pub smooth_frames: u16,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            behavior: ScrollBehaviorSetting::Smooth,
            smooth_frames: 8,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollBehaviorSetting {
    Smooth,
    #[serde(alias = "auto", alias = "jump")]
    Instant,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Input poll interval (milliseconds); also the animation frame length.
    pub frame_ms: u64,
    /// How long an alert stays on screen (milliseconds). 0 keeps it until dismissed.
    pub alert_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " DELUS ".to_string(),
            frame_ms: 50,
            alert_ms: 4000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Directory for the rotating log files.
    pub directory: String,
    /// Default `tracing` filter directive; `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directory: ".logs".to_string(),
            filter: "delus=debug,warn".to_string(),
        }
    }
}
