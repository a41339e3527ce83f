use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::config::PanelConfig;
use crate::usecases::common::render::{
    generated_block, ordered_outputs, RenderResult, RenderedResult,
};

pub const PERCENTILE_OUTPUT_KEYS: [&str; 4] = [
    "ratio_gdp_csv",
    "ratio_volume_csv",
    "ratio_securities_lend_csv",
    "erp_csv",
];

/// Reply of `/api/thermometer/percentiles`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentilesResponse {
    pub outputs: BTreeMap<String, Option<String>>,
}

impl RenderResult for PercentilesResponse {
    fn render(&self, config: &PanelConfig) -> RenderedResult {
        RenderedResult {
            lines: generated_block(
                config,
                ordered_outputs(&self.outputs, &PERCENTILE_OUTPUT_KEYS),
            ),
            field_updates: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_order() {
        let response: PercentilesResponse = serde_json::from_str(
            r#"{"outputs": {
                "erp_csv": "ERP_Percentile.csv",
                "ratio_volume_csv": "Ratio_Volume_Percentile.csv",
                "ratio_gdp_csv": "Ratio_GDP_Percentile.csv"
            }}"#,
        )
        .unwrap();
        let rendered = response.render(&PanelConfig::default());
        assert_eq!(
            rendered.lines,
            vec![
                "已生成：",
                "- docs/data/Ratio_GDP_Percentile.csv",
                "- docs/data/Ratio_Volume_Percentile.csv",
                "- docs/data/ERP_Percentile.csv",
            ]
        );
    }
}
