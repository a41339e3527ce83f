use serde::{Deserialize, Serialize};

use super::response::IntervalResponse;
use crate::shared::validation::{parse_date, ValidationError};
use crate::usecases::common::{ActionKind, ActionRequest, PanelAction, RawInputs, UseCaseMetadata};

pub const FIELD_START_DATE: &str = "start_date";
pub const FIELD_END_DATE: &str = "end_date";

/// ERP bands over a fixed date interval.
///
/// Dates are only checked for the `YYYY-MM-DD` shape; the service moves them
/// to the nearest trading day and reports what it used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRequest {
    pub start_date: String,
    pub end_date: String,
}

impl UseCaseMetadata for IntervalRequest {
    fn usecase_index() -> &'static str {
        "u705"
    }

    fn usecase_name() -> &'static str {
        "generate_erp_interval"
    }

    fn display_name() -> &'static str {
        "ERP_Interval"
    }

    fn description() -> &'static str {
        "固定区间；非交易日会被自动调整"
    }

    fn endpoint() -> &'static str {
        "/api/erpinterval"
    }
}

impl PanelAction for IntervalRequest {
    type Response = IntervalResponse;

    const KIND: ActionKind = ActionKind::Interval;

    fn from_inputs(inputs: &RawInputs) -> Result<Self, ValidationError> {
        let start_date = parse_date(FIELD_START_DATE, "起始日期", inputs.text(FIELD_START_DATE))?;
        let end_date = parse_date(FIELD_END_DATE, "终止日期", inputs.text(FIELD_END_DATE))?;
        Ok(Self {
            start_date,
            end_date,
        })
    }

    fn pending_status(&self) -> String {
        format!(
            "正在生成 {}（{} → {}）...",
            Self::display_name(),
            self.start_date,
            self.end_date
        )
    }

    fn success_status() -> &'static str {
        "固定区间生成完成。"
    }

    fn failure_status() -> &'static str {
        "固定区间生成失败。"
    }
}

impl From<IntervalRequest> for ActionRequest {
    fn from(request: IntervalRequest) -> Self {
        ActionRequest::Interval(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_dates() {
        let inputs = RawInputs::new()
            .with_text(FIELD_START_DATE, "2024-01-01")
            .with_text(FIELD_END_DATE, " 2024-01-31 ");
        let request = IntervalRequest::from_inputs(&inputs).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "start_date": "2024-01-01", "end_date": "2024-01-31" })
        );
        assert_eq!(
            request.pending_status(),
            "正在生成 ERP_Interval（2024-01-01 → 2024-01-31）..."
        );
    }

    #[test]
    fn test_start_is_checked_first() {
        let inputs = RawInputs::new().with_text(FIELD_END_DATE, "bad");
        let err = IntervalRequest::from_inputs(&inputs).unwrap_err();
        assert_eq!(err.field, FIELD_START_DATE);
        assert_eq!(err.message, "请填写起始日期（YYYY-MM-DD）。");
    }

    #[test]
    fn test_malformed_end() {
        let inputs = RawInputs::new()
            .with_text(FIELD_START_DATE, "2024-01-01")
            .with_text(FIELD_END_DATE, "2024/01/31");
        let err = IntervalRequest::from_inputs(&inputs).unwrap_err();
        assert_eq!(err.message, "终止日期格式必须为 YYYY-MM-DD。");
    }
}
