//! Declarative registry of panel actions.
//!
//! Each use case module contributes a request type implementing
//! [`PanelAction`]; [`ActionKind::spec`] turns it into an [`ActionSpec`] with
//! the endpoint, validator and renderer the controller needs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::config::PanelConfig;
use crate::shared::notice::Notice;
use crate::shared::validation::ValidationError;
use crate::usecases::u701_convert_excel::ConvertRequest;
use crate::usecases::u702_generate_erp::ErpRequest;
use crate::usecases::u703_generate_erp_10y::Erp10yRequest;
use crate::usecases::u704_generate_erp_rolling::RollingRequest;
use crate::usecases::u705_generate_erp_interval::IntervalRequest;
use crate::usecases::u706_thermometer_clean::ThermometerCleanRequest;
use crate::usecases::u707_thermometer_percentiles::PercentilesRequest;
use crate::usecases::u708_thermometer_merge::MergeRequest;

use super::inputs::RawInputs;
use super::render::{FieldUpdate, RenderResult, RenderedResult};
use super::usecase_metadata::UseCaseMetadata;

/// Notice title for a successful action
pub const SUCCESS_TITLE: &str = "完成";
/// Notice title for a failed action
pub const FAILURE_TITLE: &str = "生成失败";
/// Notice title for rejected input
pub const VALIDATION_TITLE: &str = "参数错误";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Convert,
    Erp,
    Erp10y,
    Rolling,
    Interval,
    ThermometerClean,
    ThermometerPercentiles,
    ThermometerMerge,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        ActionKind::Convert,
        ActionKind::Erp,
        ActionKind::Erp10y,
        ActionKind::Rolling,
        ActionKind::Interval,
        ActionKind::ThermometerClean,
        ActionKind::ThermometerPercentiles,
        ActionKind::ThermometerMerge,
    ];

    pub fn spec(self) -> ActionSpec {
        match self {
            ActionKind::Convert => ActionSpec::of::<ConvertRequest>(),
            ActionKind::Erp => ActionSpec::of::<ErpRequest>(),
            ActionKind::Erp10y => ActionSpec::of::<Erp10yRequest>(),
            ActionKind::Rolling => ActionSpec::of::<RollingRequest>(),
            ActionKind::Interval => ActionSpec::of::<IntervalRequest>(),
            ActionKind::ThermometerClean => ActionSpec::of::<ThermometerCleanRequest>(),
            ActionKind::ThermometerPercentiles => ActionSpec::of::<PercentilesRequest>(),
            ActionKind::ThermometerMerge => ActionSpec::of::<MergeRequest>(),
        }
    }
}

/// A use case request the panel can dispatch
pub trait PanelAction: UseCaseMetadata + Serialize + Into<ActionRequest> + Sized {
    type Response: RenderResult + DeserializeOwned;

    const KIND: ActionKind;

    /// Build a request from raw form values
    fn from_inputs(inputs: &RawInputs) -> Result<Self, ValidationError>;

    /// Status line while the request is in flight
    fn pending_status(&self) -> String {
        format!("正在生成 {}...", Self::display_name())
    }

    fn success_status() -> &'static str;

    fn failure_status() -> &'static str;
}

type Validator = fn(&RawInputs) -> Result<ActionRequest, ValidationError>;
type Renderer = fn(&Value, &PanelConfig) -> Result<RenderedResult, serde_json::Error>;

/// Registry entry for one action kind
#[derive(Clone)]
pub struct ActionSpec {
    pub kind: ActionKind,
    pub endpoint: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub usecase: String,
    pub success_status: &'static str,
    pub failure_status: &'static str,
    pub validate: Validator,
    pub render: Renderer,
}

impl ActionSpec {
    pub fn of<A: PanelAction>() -> Self {
        Self {
            kind: A::KIND,
            endpoint: A::endpoint(),
            display_name: A::display_name(),
            description: A::description(),
            usecase: A::full_name(),
            success_status: A::success_status(),
            failure_status: A::failure_status(),
            validate: validate_as::<A>,
            render: render_as::<A>,
        }
    }
}

impl std::fmt::Debug for ActionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSpec")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .field("usecase", &self.usecase)
            .finish()
    }
}

fn validate_as<A: PanelAction>(inputs: &RawInputs) -> Result<ActionRequest, ValidationError> {
    A::from_inputs(inputs).map(Into::into)
}

fn render_as<A: PanelAction>(
    value: &Value,
    config: &PanelConfig,
) -> Result<RenderedResult, serde_json::Error> {
    let response = A::Response::deserialize(value)?;
    Ok(response.render(config))
}

/// Validate raw inputs for an action kind
pub fn validate(kind: ActionKind, inputs: &RawInputs) -> Result<ActionRequest, ValidationError> {
    (kind.spec().validate)(inputs)
}

/// A validated request. Serializes to exactly the JSON body the service
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionRequest {
    Convert(ConvertRequest),
    Erp(ErpRequest),
    Erp10y(Erp10yRequest),
    Rolling(RollingRequest),
    Interval(IntervalRequest),
    ThermometerClean(ThermometerCleanRequest),
    ThermometerPercentiles(PercentilesRequest),
    ThermometerMerge(MergeRequest),
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::Convert(_) => ActionKind::Convert,
            ActionRequest::Erp(_) => ActionKind::Erp,
            ActionRequest::Erp10y(_) => ActionKind::Erp10y,
            ActionRequest::Rolling(_) => ActionKind::Rolling,
            ActionRequest::Interval(_) => ActionKind::Interval,
            ActionRequest::ThermometerClean(_) => ActionKind::ThermometerClean,
            ActionRequest::ThermometerPercentiles(_) => ActionKind::ThermometerPercentiles,
            ActionRequest::ThermometerMerge(_) => ActionKind::ThermometerMerge,
        }
    }

    pub fn pending_status(&self) -> String {
        match self {
            ActionRequest::Convert(r) => r.pending_status(),
            ActionRequest::Erp(r) => r.pending_status(),
            ActionRequest::Erp10y(r) => r.pending_status(),
            ActionRequest::Rolling(r) => r.pending_status(),
            ActionRequest::Interval(r) => r.pending_status(),
            ActionRequest::ThermometerClean(r) => r.pending_status(),
            ActionRequest::ThermometerPercentiles(r) => r.pending_status(),
            ActionRequest::ThermometerMerge(r) => r.pending_status(),
        }
    }

    /// JSON body for the POST
    pub fn body(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}

/// What a successful action reports back to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSummary {
    pub kind: ActionKind,
    pub status: String,
    pub title: String,
    pub lines: Vec<String>,
    pub field_updates: Vec<FieldUpdate>,
}

impl ActionSummary {
    pub fn notice(&self) -> Notice {
        Notice::from_lines(self.title.clone(), &self.lines)
    }
}
