use serde::{Deserialize, Serialize};

use super::response::Erp10yResponse;
use crate::shared::validation::ValidationError;
use crate::usecases::common::{ActionKind, ActionRequest, PanelAction, RawInputs, UseCaseMetadata};

/// ERP bands over the fixed ten-year window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erp10yRequest {}

impl UseCaseMetadata for Erp10yRequest {
    fn usecase_index() -> &'static str {
        "u703"
    }

    fn usecase_name() -> &'static str {
        "generate_erp_10y"
    }

    fn display_name() -> &'static str {
        "ERP_10Year（Feature 3）"
    }

    fn description() -> &'static str {
        "固定 2000 个交易日窗口的中位数与标准差带"
    }

    fn endpoint() -> &'static str {
        "/api/erp10y"
    }
}

impl PanelAction for Erp10yRequest {
    type Response = Erp10yResponse;

    const KIND: ActionKind = ActionKind::Erp10y;

    fn from_inputs(_inputs: &RawInputs) -> Result<Self, ValidationError> {
        Ok(Self {})
    }

    fn success_status() -> &'static str {
        "ERP_10Year 生成完成。"
    }

    fn failure_status() -> &'static str {
        "ERP_10Year 生成失败。"
    }
}

impl From<Erp10yRequest> for ActionRequest {
    fn from(request: Erp10yRequest) -> Self {
        ActionRequest::Erp10y(request)
    }
}
