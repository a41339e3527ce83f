use serde::{Deserialize, Serialize};

use super::request::FIELD_END_DATE;
use crate::shared::config::PanelConfig;
use crate::usecases::common::render::{
    generated_block, FieldUpdate, RenderResult, RenderedResult,
};

/// Reply of `/api/erpinterval`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalResponse {
    pub input_start_date: Option<String>,
    pub input_end_date: Option<String>,
    pub used_start_date: Option<String>,
    pub used_end_date: Option<String>,
    pub adjusted_to_trading_day: bool,
    pub adjusted_end_to_trading_day: bool,
    pub output_csv: Option<String>,
    pub output_xlsx: Option<String>,
}

impl RenderResult for IntervalResponse {
    fn render(&self, config: &PanelConfig) -> RenderedResult {
        let used_start = self.used_start_date.as_deref().unwrap_or("");
        let used_end = self.used_end_date.as_deref().unwrap_or("");

        let start_note = if self.adjusted_to_trading_day {
            format!("（非交易日已自动调整为 {}）", used_start)
        } else {
            String::new()
        };
        let end_note = if self.adjusted_end_to_trading_day {
            format!("（非交易日已自动回退为 {}）", used_end)
        } else {
            String::new()
        };

        let mut lines = vec![
            format!(
                "起始日期：{} {}",
                self.input_start_date.as_deref().unwrap_or(""),
                start_note
            )
            .trim()
            .to_string(),
            format!(
                "终止日期：{} {}",
                self.input_end_date.as_deref().unwrap_or(""),
                end_note
            )
            .trim()
            .to_string(),
            format!("有效区间：{} → {}", used_start, used_end),
        ];
        lines.extend(generated_block(
            config,
            [self.output_csv.as_deref(), self.output_xlsx.as_deref()],
        ));

        let field_updates = if used_end.is_empty() {
            Vec::new()
        } else {
            vec![FieldUpdate {
                field: FIELD_END_DATE.to_string(),
                value: used_end.to_string(),
            }]
        };

        RenderedResult {
            lines,
            field_updates,
        }
    }
}
