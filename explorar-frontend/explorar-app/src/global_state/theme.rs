use leptos::prelude::*;
use log::debug;
use std::str::FromStr;

const STORAGE_KEY: &str = "explorar.theme";

/// The visual theme mode of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Follow `prefers-color-scheme`.
    System,
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Next mode for the header toggle.
    pub fn cycle(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::System,
            ThemeMode::System => ThemeMode::Dark,
        }
    }

    /// Pick light or dark, given whether the system prefers dark.
    pub fn resolve(&self, system_prefers_dark: Option<bool>) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            // dark is the initial color mode when the system doesn't say
            ThemeMode::System => match system_prefers_dark {
                Some(false) => "light",
                _ => "dark",
            },
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "system" => ThemeMode::System,
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        })
    }
}

/// Global theme state. Persisted to localStorage and applied as `data-theme` on <html>.
#[derive(Clone, Copy)]
pub struct ThemeSettings {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeSettings {
    pub fn new() -> Self {
        let mode = RwSignal::new(load_mode_from_storage().unwrap_or_default());
        let settings = ThemeSettings { mode };

        Effect::new(move |_| {
            let m = settings.mode.get();
            apply_to_dom(m);
            persist(m);
        });

        settings
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
    }
}

/// Provide ThemeSettings into context if not already present and return it.
pub fn provide_theme_settings() -> ThemeSettings {
    if let Some(existing) = use_context::<ThemeSettings>() {
        return existing;
    }
    let settings = ThemeSettings::new();
    provide_context(settings);
    settings
}

pub fn use_theme_settings() -> Option<ThemeSettings> {
    use_context::<ThemeSettings>()
}

cfg_if::cfg_if! {
    if #[cfg(feature = "csr")] {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }

        fn persist(mode: ThemeMode) {
            if let Some(storage) = storage() {
                if let Err(e) = storage.set_item(STORAGE_KEY, mode.as_str()) {
                    log::warn!("failed to persist theme: {:?}", e.as_string());
                }
            }
        }

        fn load_mode_from_storage() -> Option<ThemeMode> {
            let value = storage()?.get_item(STORAGE_KEY).ok()??;
            ThemeMode::from_str(&value).ok()
        }

        fn apply_to_dom(mode: ThemeMode) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let prefers_dark = window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map(|mq| mq.matches());
            let resolved = mode.resolve(prefers_dark);
            if let Some(el) = window.document().and_then(|d| d.document_element()) {
                if let Err(e) = el.set_attribute("data-theme", resolved) {
                    log::warn!("failed to set data-theme: {:?}", e.as_string());
                }
            }
            debug!("applied theme => mode: {:?} (resolved: {})", mode, resolved);
        }
    } else {
        fn persist(_mode: ThemeMode) {}

        fn load_mode_from_storage() -> Option<ThemeMode> {
            None
        }

        fn apply_to_dom(mode: ThemeMode) {
            debug!("theme mode {:?} ({})", mode, STORAGE_KEY);
        }
    }
}
