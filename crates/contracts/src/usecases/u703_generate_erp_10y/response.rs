use serde::{Deserialize, Serialize};

use crate::shared::config::PanelConfig;
use crate::usecases::common::render::{generated_block, RenderResult, RenderedResult};

/// Reply of `/api/erp10y`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Erp10yResponse {
    pub output_csv: Option<String>,
    pub output_xlsx: Option<String>,
}

impl RenderResult for Erp10yResponse {
    fn render(&self, config: &PanelConfig) -> RenderedResult {
        RenderedResult {
            lines: generated_block(
                config,
                [self.output_csv.as_deref(), self.output_xlsx.as_deref()],
            ),
            field_updates: Vec::new(),
        }
    }
}
