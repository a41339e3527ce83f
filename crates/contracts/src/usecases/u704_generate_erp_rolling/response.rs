use serde::{Deserialize, Serialize};

use crate::shared::config::PanelConfig;
use crate::usecases::common::render::{generated_block, RenderResult, RenderedResult};

/// Reply of `/api/erprolling`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RollingResponse {
    /// Window the service actually used
    pub n: Option<i64>,
    pub output_csv: Option<String>,
    pub output_xlsx: Option<String>,
}

impl RenderResult for RollingResponse {
    fn render(&self, config: &PanelConfig) -> RenderedResult {
        let mut lines = Vec::new();
        if let Some(n) = self.n {
            lines.push(format!("n = {}", n));
        }
        lines.extend(generated_block(
            config,
            [self.output_csv.as_deref(), self.output_xlsx.as_deref()],
        ));

        RenderedResult {
            lines,
            field_updates: Vec::new(),
        }
    }
}
