use serde::{Deserialize, Serialize};

use super::response::MergeResponse;
use crate::shared::validation::{check_weight_sum, parse_weight, ValidationError};
use crate::usecases::common::{ActionKind, ActionRequest, PanelAction, RawInputs, UseCaseMetadata};
use crate::usecases::u707_thermometer_percentiles::ThermometerWindows;

pub const WEIGHT_FIELDS: [&str; 4] = [
    "weight_gdp",
    "weight_volume",
    "weight_securities",
    "weight_erp",
];

pub const INCLUSION_FIELDS: [&str; 5] = [
    "include_gdp",
    "include_volume",
    "include_securities",
    "include_erp",
    "include_close",
];

/// Blend weights in percent; together at most 100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeWeights {
    pub weight_gdp: f64,
    pub weight_volume: f64,
    pub weight_securities: f64,
    pub weight_erp: f64,
}

impl MergeWeights {
    pub fn from_inputs(inputs: &RawInputs) -> Result<Self, ValidationError> {
        let [gdp, volume, securities, erp] = WEIGHT_FIELDS;
        let weights = Self {
            weight_gdp: parse_weight(gdp, inputs.text(gdp))?,
            weight_volume: parse_weight(volume, inputs.text(volume))?,
            weight_securities: parse_weight(securities, inputs.text(securities))?,
            weight_erp: parse_weight(erp, inputs.text(erp))?,
        };
        check_weight_sum("weights", &weights.as_array())?;
        Ok(weights)
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.weight_gdp,
            self.weight_volume,
            self.weight_securities,
            self.weight_erp,
        ]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Which columns go into the merged table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeInclusions {
    pub include_gdp: bool,
    pub include_volume: bool,
    pub include_securities: bool,
    pub include_erp: bool,
    /// Index closing level next to the composite
    pub include_close: bool,
}

impl MergeInclusions {
    pub fn from_inputs(inputs: &RawInputs) -> Self {
        let [gdp, volume, securities, erp, close] = INCLUSION_FIELDS;
        Self {
            include_gdp: inputs.flag(gdp),
            include_volume: inputs.flag(volume),
            include_securities: inputs.flag(securities),
            include_erp: inputs.flag(erp),
            include_close: inputs.flag(close),
        }
    }
}

/// Weighted composite of the four percentile series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRequest {
    #[serde(flatten)]
    pub windows: ThermometerWindows,
    #[serde(flatten)]
    pub weights: MergeWeights,
    #[serde(flatten)]
    pub inclusions: MergeInclusions,
}

impl UseCaseMetadata for MergeRequest {
    fn usecase_index() -> &'static str {
        "u708"
    }

    fn usecase_name() -> &'static str {
        "thermometer_merge"
    }

    fn display_name() -> &'static str {
        "市场温度计：合成"
    }

    fn description() -> &'static str {
        "四项权重之和不超过 100%"
    }

    fn endpoint() -> &'static str {
        "/api/thermometer/merge"
    }
}

impl PanelAction for MergeRequest {
    type Response = MergeResponse;

    const KIND: ActionKind = ActionKind::ThermometerMerge;

    fn from_inputs(inputs: &RawInputs) -> Result<Self, ValidationError> {
        Ok(Self {
            windows: ThermometerWindows::from_inputs(inputs)?,
            weights: MergeWeights::from_inputs(inputs)?,
            inclusions: MergeInclusions::from_inputs(inputs),
        })
    }

    fn success_status() -> &'static str {
        "温度计合成完成。"
    }

    fn failure_status() -> &'static str {
        "温度计合成失败。"
    }
}

impl From<MergeRequest> for ActionRequest {
    fn from(request: MergeRequest) -> Self {
        ActionRequest::ThermometerMerge(request)
    }
}
