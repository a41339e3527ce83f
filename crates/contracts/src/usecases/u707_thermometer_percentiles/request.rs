use serde::{Deserialize, Serialize};

use super::response::PercentilesResponse;
use crate::shared::validation::{IntRule, ValidationError};
use crate::usecases::common::{ActionKind, ActionRequest, PanelAction, RawInputs, UseCaseMetadata};

/// Bounds for the eight window parameters, in form order.
///
/// The GDP ratio is a sparse series, hence the tighter bound.
pub const WINDOW_RULES: [IntRule; 8] = [
    IntRule::new("moving_average_gdp", 1, 1000),
    IntRule::new("rolling_period_gdp", 1, 1000),
    IntRule::new("moving_average_volume", 1, 4000),
    IntRule::new("rolling_period_volume", 1, 4000),
    IntRule::new("moving_average_securities", 1, 4000),
    IntRule::new("rolling_period_securities", 1, 4000),
    IntRule::new("moving_erp", 1, 4000),
    IntRule::new("rolling_period_erp", 1, 4000),
];

/// Moving-average and rolling-percentile windows per series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThermometerWindows {
    pub moving_average_gdp: i64,
    pub rolling_period_gdp: i64,
    pub moving_average_volume: i64,
    pub rolling_period_volume: i64,
    pub moving_average_securities: i64,
    pub rolling_period_securities: i64,
    pub moving_erp: i64,
    pub rolling_period_erp: i64,
}

impl ThermometerWindows {
    pub fn from_inputs(inputs: &RawInputs) -> Result<Self, ValidationError> {
        let [ma_gdp, rp_gdp, ma_volume, rp_volume, ma_sec, rp_sec, ma_erp, rp_erp] = WINDOW_RULES;
        let field = |rule: IntRule| rule.parse(inputs.text(rule.field));

        Ok(Self {
            moving_average_gdp: field(ma_gdp)?,
            rolling_period_gdp: field(rp_gdp)?,
            moving_average_volume: field(ma_volume)?,
            rolling_period_volume: field(rp_volume)?,
            moving_average_securities: field(ma_sec)?,
            rolling_period_securities: field(rp_sec)?,
            moving_erp: field(ma_erp)?,
            rolling_period_erp: field(rp_erp)?,
        })
    }
}

/// Rolling percentiles of the three ratios and the ERP series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentilesRequest {
    #[serde(flatten)]
    pub windows: ThermometerWindows,
}

impl UseCaseMetadata for PercentilesRequest {
    fn usecase_index() -> &'static str {
        "u707"
    }

    fn usecase_name() -> &'static str {
        "thermometer_percentiles"
    }

    fn display_name() -> &'static str {
        "市场温度计：分位计算"
    }

    fn description() -> &'static str {
        "平均移动窗口与滚动分位周期（GDP 1-1000，其余 1-4000）"
    }

    fn endpoint() -> &'static str {
        "/api/thermometer/percentiles"
    }
}

impl PanelAction for PercentilesRequest {
    type Response = PercentilesResponse;

    const KIND: ActionKind = ActionKind::ThermometerPercentiles;

    fn from_inputs(inputs: &RawInputs) -> Result<Self, ValidationError> {
        Ok(Self {
            windows: ThermometerWindows::from_inputs(inputs)?,
        })
    }

    fn success_status() -> &'static str {
        "分位计算完成。"
    }

    fn failure_status() -> &'static str {
        "分位计算失败。"
    }
}

impl From<PercentilesRequest> for ActionRequest {
    fn from(request: PercentilesRequest) -> Self {
        ActionRequest::ThermometerPercentiles(request)
    }
}
