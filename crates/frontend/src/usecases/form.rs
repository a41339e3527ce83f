//! Form values of every section, held as signals.
//!
//! The controller never sees signals; it gets a [`RawInputs`] snapshot
//! taken at click time.

use contracts::usecases::common::{FieldUpdate, RawInputs};
use contracts::usecases::u701_convert_excel::request::FIELD_FILENAME;
use contracts::usecases::u704_generate_erp_rolling::ROLLING_WINDOW;
use contracts::usecases::u705_generate_erp_interval::{FIELD_END_DATE, FIELD_START_DATE};
use contracts::usecases::u707_thermometer_percentiles::WINDOW_RULES;
use contracts::usecases::u708_thermometer_merge::{INCLUSION_FIELDS, WEIGHT_FIELDS};
use leptos::prelude::*;

pub const DEFAULT_ROLLING_WINDOW: &str = "2000";
pub const DEFAULT_WEIGHT: &str = "25";

/// Window defaults in `WINDOW_RULES` order
const DEFAULT_WINDOWS: [&str; 8] = ["1", "40", "20", "2000", "20", "2000", "20", "2000"];

pub const WINDOW_LABELS: [&str; 8] = [
    "GDP 移动平均",
    "GDP 滚动区间",
    "成交量 移动平均",
    "成交量 滚动区间",
    "证券化率 移动平均",
    "证券化率 滚动区间",
    "ERP 移动平均",
    "ERP 滚动区间",
];

pub const WEIGHT_LABELS: [&str; 4] = ["GDP 权重 %", "成交量 权重 %", "证券化率 权重 %", "ERP 权重 %"];

pub const INCLUSION_LABELS: [&str; 5] = ["GDP", "成交量", "证券化率", "ERP", "收盘价"];

#[derive(Clone, Copy)]
pub struct PanelForm {
    pub filename: RwSignal<String>,
    pub rolling_n: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub windows: [(&'static str, RwSignal<String>); 8],
    pub weights: [(&'static str, RwSignal<String>); 4],
    pub inclusions: [(&'static str, RwSignal<bool>); 5],
}

impl PanelForm {
    /// Fresh form; the interval end defaults to `today`.
    pub fn new(today: String) -> Self {
        Self {
            filename: RwSignal::new(String::new()),
            rolling_n: RwSignal::new(DEFAULT_ROLLING_WINDOW.to_string()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(today),
            windows: std::array::from_fn(|i| {
                (WINDOW_RULES[i].field, RwSignal::new(DEFAULT_WINDOWS[i].to_string()))
            }),
            weights: WEIGHT_FIELDS.map(|f| (f, RwSignal::new(DEFAULT_WEIGHT.to_string()))),
            inclusions: INCLUSION_FIELDS.map(|f| (f, RwSignal::new(true))),
        }
    }

    pub fn snapshot(&self) -> RawInputs {
        let mut inputs = RawInputs::new()
            .with_text(FIELD_FILENAME, self.filename.get_untracked())
            .with_text(ROLLING_WINDOW.field, self.rolling_n.get_untracked())
            .with_text(FIELD_START_DATE, self.start_date.get_untracked())
            .with_text(FIELD_END_DATE, self.end_date.get_untracked());

        for (field, value) in self.windows.iter().chain(self.weights.iter()) {
            inputs.set_text(*field, value.get_untracked());
        }
        for (field, checked) in self.inclusions.iter() {
            inputs.set_flag(*field, checked.get_untracked());
        }
        inputs
    }

    /// Write a value the service sent back (e.g. an adjusted end date)
    pub fn apply(&self, update: &FieldUpdate) {
        let Some(signal) = self.text_signal(&update.field) else {
            log::warn!("no form field named {}", update.field);
            return;
        };
        if signal.get_untracked() != update.value {
            signal.set(update.value.clone());
        }
    }

    fn text_signal(&self, field: &str) -> Option<RwSignal<String>> {
        match field {
            FIELD_FILENAME => Some(self.filename),
            FIELD_START_DATE => Some(self.start_date),
            FIELD_END_DATE => Some(self.end_date),
            f if f == ROLLING_WINDOW.field => Some(self.rolling_n),
            f => self
                .windows
                .iter()
                .chain(self.weights.iter())
                .find(|(name, _)| *name == f)
                .map(|(_, signal)| *signal),
        }
    }
}
