use serde::{Deserialize, Serialize};

/// Panel configuration
///
/// Every field has a default, so a partial override (for example from the
/// page query string) is always a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base: String,
    /// Directory the service writes results to, as shown to the user
    pub output_dir: String,
    /// Command that starts the local service
    pub service_command: String,
    /// Address the panel is expected to be opened at
    pub service_url: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            output_dir: "docs/data".to_string(),
            service_command: "python src/app.py".to_string(),
            service_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl PanelConfig {
    /// Full URL for an API path such as `/api/erp`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Display path of a generated file
    pub fn output_path(&self, file_name: &str) -> String {
        let dir = self.output_dir.trim_end_matches('/');
        if dir.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", dir, file_name)
        }
    }
}
