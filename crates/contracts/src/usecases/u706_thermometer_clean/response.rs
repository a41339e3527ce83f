use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::config::PanelConfig;
use crate::usecases::common::render::{
    generated_block, ordered_outputs, RenderResult, RenderedResult,
};

pub const CLEAN_OUTPUT_KEYS: [&str; 3] = [
    "ratio_gdp_csv",
    "ratio_volume_csv",
    "ratio_securities_lend_csv",
];

/// Reply of `/api/thermometer/clean`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermometerCleanResponse {
    pub outputs: BTreeMap<String, Option<String>>,
}

impl RenderResult for ThermometerCleanResponse {
    fn render(&self, config: &PanelConfig) -> RenderedResult {
        RenderedResult {
            lines: generated_block(config, ordered_outputs(&self.outputs, &CLEAN_OUTPUT_KEYS)),
            field_updates: Vec::new(),
        }
    }
}
