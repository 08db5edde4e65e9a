use shared_types::Settings;
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Read settings from `path`. A missing or unparseable file yields defaults.
pub fn read_settings(path: impl AsRef<Path>) -> Settings {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
            Settings::default()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config not found, using defaults");
            Settings::default()
        }
    }
}

/// Read `config.toml` into the global settings. Only the first call has effect.
pub fn load_settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        let settings = read_settings(CONFIG_PATH);
        tracing::info!(
            min_password_length = settings.min_password_length(),
            locale = %settings.i18n.locale,
            "settings loaded"
        );
        settings
    })
}

/// The loaded settings, or defaults if `load_settings()` hasn't run.
pub fn settings() -> &'static Settings {
    static DEFAULT: OnceLock<Settings> = OnceLock::new();
    SETTINGS
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(Settings::default))
}
