use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const LOG_LEVEL_KEY: &str = "cybertraining_log_level";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

/// Parse a log level name as stored in localStorage (case-insensitive).
pub fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

impl AppSettings {
    /// Combine the page hostname and a stored log level override.
    ///
    /// A recognized stored level wins over the localhost debug level; an
    /// unrecognized one is ignored.
    pub fn resolve(hostname: Option<&str>, stored_level: Option<&str>) -> Self {
        let mut settings = Self::default();

        if let Some(hostname) = hostname {
            settings.debug_mode = is_local_host(hostname);

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Some(level) = stored_level.and_then(parse_log_level) {
            settings.log_level = level;
        }

        settings
    }

    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let Some(window) = window() else {
            return Self::resolve(None, None);
        };

        let hostname = window.location().hostname().ok();
        let stored_level = match window.local_storage() {
            Ok(Some(storage)) => storage.get_item(LOG_LEVEL_KEY).ok().flatten(),
            _ => None,
        };

        Self::resolve(hostname.as_deref(), stored_level.as_deref())
    }

    /// Value written under the log level storage key
    pub fn stored_log_level(&self) -> String {
        self.log_level.as_str().to_lowercase()
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(LOG_LEVEL_KEY, &self.stored_log_level())?;
            }
        }
        Ok(())
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    // Only `init_settings` reads the browser
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_without_debug() {
        let settings = AppSettings::default();
        assert_eq!(settings.log_level, Level::Info);
        assert!(!settings.debug_mode);
    }

    #[test]
    fn parses_every_level_case_insensitively() {
        assert_eq!(parse_log_level("error"), Some(Level::Error));
        assert_eq!(parse_log_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_log_level("Info"), Some(Level::Info));
        assert_eq!(parse_log_level(" debug "), Some(Level::Debug));
        assert_eq!(parse_log_level("trace"), Some(Level::Trace));
    }

    #[test]
    fn rejects_unknown_levels() {
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn stored_level_round_trips_through_parser() {
        let settings = AppSettings {
            log_level: Level::Warn,
            debug_mode: false,
        };
        assert_eq!(settings.stored_log_level(), "warn");

        let restored = AppSettings::resolve(None, Some(&settings.stored_log_level()));
        assert_eq!(restored, settings);
    }

    #[test]
    fn resolve_without_window_uses_defaults() {
        assert_eq!(AppSettings::resolve(None, None), AppSettings::default());
    }

    #[test]
    fn resolve_localhost_enables_debug_logging() {
        let settings = AppSettings::resolve(Some("localhost"), None);
        assert!(settings.debug_mode);
        assert_eq!(settings.log_level, Level::Debug);
    }

    #[test]
    fn resolve_stored_level_overrides_localhost_debug() {
        let settings = AppSettings::resolve(Some("localhost"), Some("warn"));
        assert!(settings.debug_mode);
        assert_eq!(settings.log_level, Level::Warn);
    }

    #[test]
    fn resolve_ignores_unrecognized_stored_level() {
        let settings = AppSettings::resolve(Some("localhost"), Some("verbose"));
        assert!(settings.debug_mode);
        assert_eq!(settings.log_level, Level::Debug);
    }

    #[test]
    fn update_settings_is_visible_to_get_settings() {
        assert_eq!(get_settings(), AppSettings::default());

        update_settings(|s| {
            s.log_level = Level::Trace;
            s.debug_mode = true;
        });

        let settings = get_settings();
        assert_eq!(settings.log_level, Level::Trace);
        assert!(settings.debug_mode);
    }

    #[test]
    fn local_hosts_enable_debug() {
        assert!(is_local_host("localhost"));
        assert!(is_local_host("127.0.0.1"));
        assert!(!is_local_host("training.example.com"));
    }
}
