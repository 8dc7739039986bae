use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_POLL_INTERVAL_MS: u32 = 5_000;

/// Runtime configuration injected by the hosting page through `window.ENV`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the sensor data API, without a trailing slash
    pub api_url: String,
    /// Interval between refreshes while polling is switched on
    pub poll_interval_ms: u32,
}

impl AppConfig {
    /// Load configuration from window.ENV, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_values(read_env("API_URL"), read_env("POLL_INTERVAL_MS"))
    }

    /// Build a configuration from raw `window.ENV` values
    pub fn from_values(api_url: Option<String>, poll_interval_ms: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let poll_interval_ms = match poll_interval_ms {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    log::warn!(
                        "Ignoring invalid POLL_INTERVAL_MS '{}', using {}ms",
                        raw,
                        DEFAULT_POLL_INTERVAL_MS
                    );
                    DEFAULT_POLL_INTERVAL_MS
                }
            },
            None => DEFAULT_POLL_INTERVAL_MS,
        };

        Self {
            api_url,
            poll_interval_ms,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Read a string value from window.ENV
fn read_env(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        // Numbers are allowed for numeric settings
        value
            .as_string()
            .or_else(|| value.as_f64().map(|n| n.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

/// Provide the application configuration to all pages
/// Call this at the root of the app (e.g., in App component)
pub fn provide_config() {
    let config = AppConfig::from_env();
    log::info!(
        "Using API at {} (poll every {}ms)",
        config.api_url,
        config.poll_interval_ms
    );
    provide_context(config);
}

/// Hook to access the application configuration
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig must be provided by a parent component")
}
