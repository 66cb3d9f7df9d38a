use std::env;

use serde::{Deserialize, Serialize};

fn default_endpoint_url() -> String {
    "http://127.0.0.1:5000/api/detect-ai".to_string()
}

fn default_ws_url() -> String {
    "ws://localhost:8080".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Classification endpoint every scan is POSTed to
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Editor bridge the websocket source connects to
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            ws_url: default_ws_url(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let endpoint_url =
            env::var("VERITY_ENDPOINT_URL").unwrap_or_else(|_| default_endpoint_url());
        let ws_url = env::var("WS_URL").unwrap_or_else(|_| default_ws_url());

        Self {
            endpoint_url,
            ws_url,
        }
    }
}
