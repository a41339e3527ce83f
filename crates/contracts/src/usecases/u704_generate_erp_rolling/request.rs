use serde::{Deserialize, Serialize};

use super::response::RollingResponse;
use crate::shared::validation::{IntRule, ValidationError};
use crate::usecases::common::{ActionKind, ActionRequest, PanelAction, RawInputs, UseCaseMetadata};

/// Window length in trading days
pub const ROLLING_WINDOW: IntRule = IntRule::new("n", 1, 4000);

/// ERP bands over a rolling window of `n` trading days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingRequest {
    pub n: i64,
}

impl UseCaseMetadata for RollingRequest {
    fn usecase_index() -> &'static str {
        "u704"
    }

    fn usecase_name() -> &'static str {
        "generate_erp_rolling"
    }

    fn display_name() -> &'static str {
        "ERP_Rolling Calculation"
    }

    fn description() -> &'static str {
        "n 个交易日滚动窗口（1-4000）"
    }

    fn endpoint() -> &'static str {
        "/api/erprolling"
    }
}

impl PanelAction for RollingRequest {
    type Response = RollingResponse;

    const KIND: ActionKind = ActionKind::Rolling;

    fn from_inputs(inputs: &RawInputs) -> Result<Self, ValidationError> {
        let n = ROLLING_WINDOW.parse(inputs.text(ROLLING_WINDOW.field))?;
        Ok(Self { n })
    }

    fn pending_status(&self) -> String {
        format!("正在生成 {}（n={}）...", Self::display_name(), self.n)
    }

    fn success_status() -> &'static str {
        "滚动计算生成完成。"
    }

    fn failure_status() -> &'static str {
        "滚动计算生成失败。"
    }
}

impl From<RollingRequest> for ActionRequest {
    fn from(request: RollingRequest) -> Self {
        ActionRequest::Rolling(request)
    }
}
