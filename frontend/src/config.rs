use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_PROXY_PATH: &str = "/api";
const HOST_DEFAULT_ORIGIN: &str = "http://127.0.0.1:3000";

/// Optional overrides, read from `window.__HR_DASHBOARD_ENV` or `./config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(alias = "PROXY_BASE_URL")]
    pub proxy_base_url: Option<String>,
}

/// Resolved endpoints handed to [`crate::api::ApiClient`] at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Reads go straight to the HR API.
    pub api_base_url: String,
    /// Writes go through the mutation proxy.
    pub proxy_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, proxy_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: trim_base(&api_base_url.into()),
            proxy_base_url: trim_base(&proxy_base_url.into()),
        }
    }

    pub fn resolve(runtime: RuntimeConfig, origin: &str) -> Self {
        let api = non_blank(runtime.api_base_url).unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let proxy = non_blank(runtime.proxy_base_url)
            .unwrap_or_else(|| format!("{}{}", trim_base(origin), DEFAULT_PROXY_PATH));
        Self::new(api, proxy)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(RuntimeConfig::default(), HOST_DEFAULT_ORIGIN)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trim_base(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    pub fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    /// `window.__HR_DASHBOARD_ENV = { API_BASE_URL: "...", PROXY_BASE_URL: "..." }`
    pub fn from_env_js() -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &JsValue::from_str("__HR_DASHBOARD_ENV")).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let read = |key: &str| {
            js_sys::Reflect::get(&any, &JsValue::from_str(key))
                .ok()
                .and_then(|v| v.as_string())
        };
        Some(RuntimeConfig {
            api_base_url: read("API_BASE_URL").or_else(|| read("api_base_url")),
            proxy_base_url: read("PROXY_BASE_URL").or_else(|| read("proxy_base_url")),
        })
    }

    pub async fn fetch_config_json(origin: &str) -> Option<RuntimeConfig> {
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

/// Resolves the client configuration once at startup.
#[cfg(target_arch = "wasm32")]
pub async fn load() -> ClientConfig {
    let origin = browser::origin().unwrap_or_else(|| HOST_DEFAULT_ORIGIN.to_string());
    if let Some(runtime) = browser::from_env_js() {
        return ClientConfig::resolve(runtime, &origin);
    }
    if let Some(runtime) = browser::fetch_config_json(&origin).await {
        return ClientConfig::resolve(runtime, &origin);
    }
    log::warn!("No runtime config found; using {}", DEFAULT_API_BASE_URL);
    ClientConfig::resolve(RuntimeConfig::default(), &origin)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load() -> ClientConfig {
    let runtime = RuntimeConfig {
        api_base_url: std::env::var("HR_API_BASE_URL").ok(),
        proxy_base_url: std::env::var("HR_PROXY_BASE_URL").ok(),
    };
    ClientConfig::resolve(runtime, HOST_DEFAULT_ORIGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_defaults_and_origin_for_proxy() {
        let config = ClientConfig::resolve(RuntimeConfig::default(), "https://hr.example.com/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.proxy_base_url, "https://hr.example.com/api");
    }

    #[test]
    fn resolve_prefers_runtime_values_and_trims_slashes() {
        let config = ClientConfig::resolve(
            RuntimeConfig {
                api_base_url: Some("https://api.example.com/v1/".into()),
                proxy_base_url: Some(" ".into()),
            },
            "http://localhost:8080",
        );
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.proxy_base_url, "http://localhost:8080/api");
    }

    #[test]
    fn runtime_config_reads_upper_case_keys() {
        let runtime: RuntimeConfig =
            serde_json::from_str(r#"{"API_BASE_URL":"http://a","PROXY_BASE_URL":"http://b/api"}"#)
                .unwrap();
        let config = ClientConfig::resolve(runtime, "http://ignored");
        assert_eq!(config, ClientConfig::new("http://a", "http://b/api"));
    }
}
