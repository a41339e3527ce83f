use serde::{Deserialize, Serialize};

use super::response::ConvertResponse;
use crate::shared::validation::{parse_xlsx_filename, ValidationError};
use crate::usecases::common::{ActionKind, ActionRequest, PanelAction, RawInputs, UseCaseMetadata};

pub const FIELD_FILENAME: &str = "filename";

/// Convert one workbook from the input directory to CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// Bare `.xlsx` name as listed by `/api/files`
    pub filename: String,
}

impl UseCaseMetadata for ConvertRequest {
    fn usecase_index() -> &'static str {
        "u701"
    }

    fn usecase_name() -> &'static str {
        "convert_excel"
    }

    fn display_name() -> &'static str {
        "Excel 转 CSV"
    }

    fn description() -> &'static str {
        "将输入目录中的 xlsx 文件转换为 CSV 与清洗后的 xlsx"
    }

    fn endpoint() -> &'static str {
        "/api/convert"
    }
}

impl PanelAction for ConvertRequest {
    type Response = ConvertResponse;

    const KIND: ActionKind = ActionKind::Convert;

    fn from_inputs(inputs: &RawInputs) -> Result<Self, ValidationError> {
        let filename = parse_xlsx_filename(FIELD_FILENAME, inputs.text(FIELD_FILENAME))?;
        Ok(Self { filename })
    }

    fn pending_status(&self) -> String {
        format!("正在转换 {}...", self.filename)
    }

    fn success_status() -> &'static str {
        "转换完成。"
    }

    fn failure_status() -> &'static str {
        "转换失败。"
    }
}

impl From<ConvertRequest> for ActionRequest {
    fn from(request: ConvertRequest) -> Self {
        ActionRequest::Convert(request)
    }
}
