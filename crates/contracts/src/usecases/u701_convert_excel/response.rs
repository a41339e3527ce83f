use serde::{Deserialize, Serialize};

use crate::shared::config::PanelConfig;
use crate::usecases::common::render::{generated_block, RenderResult, RenderedResult};

/// Reply of `/api/convert`. Older services return a single `output`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertResponse {
    pub output: Option<String>,
    pub output_csv: Option<String>,
    pub output_xlsx: Option<String>,
}

impl RenderResult for ConvertResponse {
    fn render(&self, config: &PanelConfig) -> RenderedResult {
        let has_single = self
            .output
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());

        let lines = if has_single {
            generated_block(config, [self.output.as_deref()])
        } else {
            generated_block(
                config,
                [self.output_csv.as_deref(), self.output_xlsx.as_deref()],
            )
        };

        RenderedResult {
            lines,
            field_updates: Vec::new(),
        }
    }
}
