use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::config::PanelConfig;
use crate::usecases::common::render::{
    generated_block, ordered_outputs, RenderResult, RenderedResult,
};

/// Order in which the service documents its ERP outputs
pub const ERP_OUTPUT_KEYS: [&str; 8] = [
    "data_PE_clean_csv",
    "data_PE_clean_xlsx",
    "data_bond_clean_csv",
    "data_bond_clean_xlsx",
    "merged_csv",
    "merged_xlsx",
    "erp_csv",
    "erp_xlsx",
];

/// Reply of `/api/erp`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErpResponse {
    pub outputs: BTreeMap<String, Option<String>>,
}

impl RenderResult for ErpResponse {
    fn render(&self, config: &PanelConfig) -> RenderedResult {
        RenderedResult {
            lines: generated_block(config, ordered_outputs(&self.outputs, &ERP_OUTPUT_KEYS)),
            field_updates: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subset_of_outputs() {
        let response: ErpResponse = serde_json::from_str(
            r#"{"outputs": {"erp_xlsx": "ERP.xlsx", "merged_csv": "merged.csv", "erp_csv": "", "data_PE_clean_csv": null}}"#,
        )
        .unwrap();
        let rendered = response.render(&PanelConfig::default());
        assert_eq!(
            rendered.lines,
            vec!["已生成：", "- docs/data/merged.csv", "- docs/data/ERP.xlsx"]
        );
    }

    #[test]
    fn test_missing_outputs_map() {
        let response: ErpResponse = serde_json::from_str("{}").unwrap();
        let rendered = response.render(&PanelConfig::default());
        assert_eq!(rendered.lines, vec!["已生成："]);
    }
}
