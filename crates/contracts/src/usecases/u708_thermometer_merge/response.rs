use serde::{Deserialize, Serialize};

use crate::shared::config::PanelConfig;
use crate::usecases::common::render::{generated_block, RenderResult, RenderedResult};

/// Reply of `/api/thermometer/merge`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeResponse {
    pub output_csv: Option<String>,
    /// First date at which every included series has a percentile
    pub date_begin_used: Option<String>,
    pub date_end: Option<String>,
}

impl RenderResult for MergeResponse {
    fn render(&self, config: &PanelConfig) -> RenderedResult {
        let mut lines = Vec::new();
        if let (Some(begin), Some(end)) = (&self.date_begin_used, &self.date_end) {
            lines.push(format!("有效区间：{} → {}", begin, end));
        }
        lines.extend(generated_block(config, [self.output_csv.as_deref()]));

        RenderedResult {
            lines,
            field_updates: Vec::new(),
        }
    }
}
