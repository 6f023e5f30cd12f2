mod config;

pub fn use_init_services() {
    log::debug!("init_services - start");
    let _ = config::use_api_client_service();
    log::debug!("init_services - finished");
}

pub mod prelude {
    pub use super::config::ApiConfig;

    pub mod state_management {
        pub use super::super::config::{use_api_client, API_CONFIG};
    }
}
