use serde::{Deserialize, Serialize};

use super::response::ThermometerCleanResponse;
use crate::shared::validation::ValidationError;
use crate::usecases::common::{ActionKind, ActionRequest, PanelAction, RawInputs, UseCaseMetadata};

/// Clean the three ratio workbooks (GDP, volume, securities lending)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThermometerCleanRequest {}

impl UseCaseMetadata for ThermometerCleanRequest {
    fn usecase_index() -> &'static str {
        "u706"
    }

    fn usecase_name() -> &'static str {
        "thermometer_clean"
    }

    fn display_name() -> &'static str {
        "市场温度计：数据清洗"
    }

    fn endpoint() -> &'static str {
        "/api/thermometer/clean"
    }
}

impl PanelAction for ThermometerCleanRequest {
    type Response = ThermometerCleanResponse;

    const KIND: ActionKind = ActionKind::ThermometerClean;

    fn from_inputs(_inputs: &RawInputs) -> Result<Self, ValidationError> {
        Ok(Self {})
    }

    fn success_status() -> &'static str {
        "数据清洗完成。"
    }

    fn failure_status() -> &'static str {
        "数据清洗失败。"
    }
}

impl From<ThermometerCleanRequest> for ActionRequest {
    fn from(request: ThermometerCleanRequest) -> Self {
        ActionRequest::ThermometerClean(request)
    }
}
