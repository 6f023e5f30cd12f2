use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::utils::CCStr;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v2";

/// Where the Wing API lives.
///
/// Resolved once per process from the environment. Loaders receive the
/// resulting [`ApiClient`] explicitly at construction and never read
/// ambient state themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: CCStr,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("WING_API_URL")
            .map(|url| CCStr::from(url.trim_end_matches('/')))
            .unwrap_or_else(|_| CCStr::from(DEFAULT_BASE_URL));
        Self { base_url }
    }
}

pub static API_CONFIG: GlobalSignal<ApiConfig> = Signal::global(ApiConfig::from_env);

pub(super) fn use_api_client_service() -> ApiClient {
    use_context_provider(|| {
        log::debug!("use_api_client_service - start");
        let client = ApiClient::new(&API_CONFIG.read().base_url);
        log::debug!("use_api_client_service - finished");
        client
    })
}

/// The process-wide [`ApiClient`] provided by `use_init_services`.
pub fn use_api_client() -> ApiClient {
    use_context()
}
