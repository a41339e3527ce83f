use serde::{Deserialize, Serialize};

use super::response::ErpResponse;
use crate::shared::validation::ValidationError;
use crate::usecases::common::{ActionKind, ActionRequest, PanelAction, RawInputs, UseCaseMetadata};

/// Rebuild the cleaned PE / bond tables, the merged table and the ERP series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErpRequest {}

impl UseCaseMetadata for ErpRequest {
    fn usecase_index() -> &'static str {
        "u702"
    }

    fn usecase_name() -> &'static str {
        "generate_erp"
    }

    fn display_name() -> &'static str {
        "ERP（Feature 2）"
    }

    fn description() -> &'static str {
        "由 data_PE 与 data_bond 计算股权风险溢价"
    }

    fn endpoint() -> &'static str {
        "/api/erp"
    }
}

impl PanelAction for ErpRequest {
    type Response = ErpResponse;

    const KIND: ActionKind = ActionKind::Erp;

    fn from_inputs(_inputs: &RawInputs) -> Result<Self, ValidationError> {
        Ok(Self {})
    }

    fn success_status() -> &'static str {
        "ERP 生成完成。"
    }

    fn failure_status() -> &'static str {
        "ERP 生成失败。"
    }
}

impl From<ErpRequest> for ActionRequest {
    fn from(request: ErpRequest) -> Self {
        ActionRequest::Erp(request)
    }
}
