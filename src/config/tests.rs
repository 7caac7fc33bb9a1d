use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_delus_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("DELUS_CONFIG_PATH", "/tmp/delus-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/delus-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("delus")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("delus")
            .join("config.toml")
    );
}

#[test]
fn defaults_describe_a_three_forty_five_track_ticking_every_second() {
    let s = Settings::default();
    assert_eq!(s.player.total_duration_secs, 225);
    assert_eq!(s.player.tick_ms, 1000);
    assert_eq!(s.scroll.behavior, ScrollBehaviorSetting::Smooth);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_scroll_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
total_duration_secs = 180
tick_ms = 250

[shop]
base_url = "http://shop.local:8080"
timeout_ms = 1500
load_catalog = true

[scroll]
behavior = "jump"
smooth_frames = 3

[ui]
header_text = "hello"
alert_ms = 0

[log]
directory = "/tmp/delus-logs"
filter = "delus=trace"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DELUS_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("DELUS__PLAYER__TICK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.total_duration_secs, 180);
    assert_eq!(s.player.tick_ms, 250);
    assert_eq!(s.shop.base_url, "http://shop.local:8080");
    assert_eq!(s.shop.timeout_ms, 1500);
    assert!(s.shop.load_catalog);
    assert_eq!(s.scroll.behavior, ScrollBehaviorSetting::Instant);
    assert_eq!(s.scroll.smooth_frames, 3);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.alert_ms, 0);
    assert_eq!(s.ui.frame_ms, 50);
    assert_eq!(s.log.directory, "/tmp/delus-logs");
    assert_eq!(s.log.filter, "delus=trace");
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
tick_ms = 1000
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("DELUS_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("DELUS__PLAYER__TICK_MS", "10");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.tick_ms, 10);
}

#[test]
fn validate_rejects_zero_tick_and_non_http_base_url() {
    let mut s = Settings::default();
    s.player.tick_ms = 0;
    assert!(s.validate().unwrap_err().contains("tick_ms"));

    let mut s = Settings::default();
    s.shop.base_url = "ftp://example.com".into();
    assert!(s.validate().unwrap_err().contains("base_url"));

    let mut s = Settings::default();
    s.scroll.smooth_frames = 0;
    assert!(s.validate().is_err());
}
