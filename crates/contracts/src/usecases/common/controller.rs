//! Action controller: gate, validate, dispatch and report.
//!
//! The controller owns no UI. It reads and writes [`PanelState`] through a
//! [`PanelStore`] and talks to the service through [`ComputeService`], so the
//! same code runs against Leptos signals in the browser and against a
//! `RefCell` in tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::shared::config::PanelConfig;
use crate::shared::notice::Notice;
use crate::shared::session::{ControlState, PanelState};
use crate::shared::validation::ValidationError;

use super::action::{
    validate, ActionKind, ActionRequest, ActionSummary, FAILURE_TITLE, SUCCESS_TITLE,
    VALIDATION_TITLE,
};
use super::inputs::RawInputs;
use super::service::ComputeService;
use super::usecase_result::{PanelError, UseCaseResult};

pub const CHECKING_STATUS: &str = "正在检查本地服务...";
pub const CONNECTED_STATUS: &str = "本地服务已连接，可以开始生成。";

/// Where the controller keeps [`PanelState`]
pub trait PanelStore {
    fn read<R>(&self, f: impl FnOnce(&PanelState) -> R) -> R;

    fn update(&self, f: impl FnOnce(&mut PanelState));
}

impl PanelStore for RefCell<PanelState> {
    fn read<R>(&self, f: impl FnOnce(&PanelState) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut PanelState)) {
        f(&mut self.borrow_mut())
    }
}

impl<T: PanelStore> PanelStore for Rc<T> {
    fn read<R>(&self, f: impl FnOnce(&PanelState) -> R) -> R {
        (**self).read(f)
    }

    fn update(&self, f: impl FnOnce(&mut PanelState)) {
        (**self).update(f)
    }
}

/// Holds the busy flag; clears it when dropped, whatever the exit path.
pub struct BusyGuard<'a, St: PanelStore> {
    store: &'a St,
}

impl<'a, St: PanelStore> BusyGuard<'a, St> {
    /// `None` while another holder is alive
    pub fn acquire(store: &'a St) -> Option<Self> {
        if store.read(|s| s.session.busy) {
            return None;
        }
        store.update(|s| s.session.busy = true);
        Some(Self { store })
    }
}

impl<St: PanelStore> Drop for BusyGuard<'_, St> {
    fn drop(&mut self) {
        self.store.update(|s| s.session.busy = false);
    }
}

#[derive(Clone)]
pub struct ActionController<S, St> {
    service: S,
    store: St,
    config: PanelConfig,
}

impl<S, St> ActionController<S, St>
where
    S: ComputeService,
    St: PanelStore,
{
    pub fn new(service: S, store: St, config: PanelConfig) -> Self {
        Self {
            service,
            store,
            config,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn controls(&self) -> ControlState {
        self.store.read(|s| s.controls())
    }

    pub fn is_busy(&self) -> bool {
        self.store.read(|s| s.session.busy)
    }

    /// Probe the service once. Returns whether it answered.
    pub async fn check_availability(&self) -> bool {
        let Some(_busy) = BusyGuard::acquire(&self.store) else {
            log::debug!("availability check skipped: panel is busy");
            return self.store.read(|s| s.session.service_available);
        };

        self.set_status(CHECKING_STATUS);

        match self.service.list_files().await {
            Ok(listing) => {
                log::info!("service reachable, {} workbook(s) listed", listing.files.len());
                self.store.update(|s| {
                    s.session.service_available = true;
                    s.files = listing.files;
                    s.status = CONNECTED_STATUS.to_string();
                });
                true
            }
            Err(failure) => {
                log::warn!("service probe failed: {:?}", failure);
                let command = self.config.service_command.clone();
                self.store.update(|s| {
                    s.session.service_available = false;
                    s.status = format!("本地服务未连接（请确认已运行 {}）。", command);
                });
                self.present_unavailable_notice(
                    "连接失败",
                    format!("无法连接本地服务，请先运行：{}", command),
                );
                false
            }
        }
    }

    /// The page was opened from disk; there is nothing to probe.
    pub fn mark_local_file_origin(&self) {
        let command = &self.config.service_command;
        let url = &self.config.service_url;
        log::warn!("panel opened from a local file, service calls disabled");

        self.store.update(|s| {
            s.session.service_available = false;
            s.status = format!("请运行：{}，然后访问 {}", command, url);
        });
        self.present_unavailable_notice(
            "需要启动本地服务",
            format!("请运行：{}，然后用浏览器打开 {}", command, url),
        );
    }

    /// Pure input check for one action kind
    pub fn validate(
        &self,
        kind: ActionKind,
        inputs: &RawInputs,
    ) -> Result<ActionRequest, ValidationError> {
        validate(kind, inputs)
    }

    /// Validate, then dispatch. Rejected input opens the parameter notice
    /// and never touches the busy flag.
    pub async fn run(&self, kind: ActionKind, inputs: &RawInputs) -> UseCaseResult<ActionSummary> {
        match validate(kind, inputs) {
            Ok(request) => self.dispatch(request).await,
            Err(err) => {
                log::debug!("{:?} rejected: {}", kind, err);
                self.present_notice(VALIDATION_TITLE, err.message.clone());
                Err(err.into())
            }
        }
    }

    /// Send one request. Only one may be in flight per panel.
    pub async fn dispatch(&self, request: ActionRequest) -> UseCaseResult<ActionSummary> {
        let Some(_busy) = BusyGuard::acquire(&self.store) else {
            log::debug!("{:?} refused: another action is in flight", request.kind());
            return Err(PanelError::Busy);
        };

        let spec = request.kind().spec();
        self.set_status(request.pending_status());
        log::info!("{}: POST {}", spec.usecase, spec.endpoint);

        let outcome = match self.service.post_json(spec.endpoint, request.body()).await {
            Ok(value) => (spec.render)(&value, &self.config)
                .map_err(|e| PanelError::UnexpectedResponse(e.to_string())),
            Err(failure) => Err(PanelError::from_failure(failure, &self.config)),
        };

        match outcome {
            Ok(rendered) => {
                log::info!("{} completed", spec.usecase);
                let summary = ActionSummary {
                    kind: spec.kind,
                    status: spec.success_status.to_string(),
                    title: SUCCESS_TITLE.to_string(),
                    lines: rendered.lines,
                    field_updates: rendered.field_updates,
                };
                self.set_status(summary.status.clone());
                self.store.update(|s| s.notice = Some(summary.notice()));
                Ok(summary)
            }
            Err(err) => {
                log::warn!("{} failed [{}]: {}", spec.usecase, err.code(), err);
                self.set_status(spec.failure_status);
                self.present_notice(FAILURE_TITLE, err.to_string());
                Err(err)
            }
        }
    }

    /// Open the notice, replacing whatever it showed
    pub fn present_notice(&self, title: impl Into<String>, body: impl Into<String>) {
        let notice = Notice::new(title, body);
        self.store.update(|s| s.notice = Some(notice));
    }

    pub fn dismiss_notice(&self) {
        self.store.update(|s| s.notice = None);
    }

    fn set_status(&self, status: impl Into<String>) {
        let status = status.into();
        self.store.update(|s| s.status = status);
    }

    fn present_unavailable_notice(&self, title: &str, body: String) {
        let already_shown = self.store.read(|s| s.unavailable_notice_shown);
        if already_shown {
            return;
        }
        self.store.update(|s| s.unavailable_notice_shown = true);
        self.present_notice(title, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::common::service::{FilesResponse, ServiceFailure};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    struct Call {
        endpoint: String,
        body: Value,
        busy: bool,
        status: String,
    }

    struct ScriptedService {
        store: Rc<RefCell<PanelState>>,
        probes: RefCell<VecDeque<Result<FilesResponse, ServiceFailure>>>,
        replies: RefCell<VecDeque<Result<Value, ServiceFailure>>>,
        calls: RefCell<Vec<Call>>,
        probe_busy: RefCell<Vec<bool>>,
        yield_on_post: bool,
    }

    impl ScriptedService {
        fn new(store: Rc<RefCell<PanelState>>) -> Self {
            Self {
                store,
                probes: RefCell::new(VecDeque::new()),
                replies: RefCell::new(VecDeque::new()),
                calls: RefCell::new(Vec::new()),
                probe_busy: RefCell::new(Vec::new()),
                yield_on_post: false,
            }
        }

        fn probe(self, result: Result<FilesResponse, ServiceFailure>) -> Self {
            self.probes.borrow_mut().push_back(result);
            self
        }

        fn reply(self, result: Result<Value, ServiceFailure>) -> Self {
            self.replies.borrow_mut().push_back(result);
            self
        }
    }

    #[async_trait(?Send)]
    impl ComputeService for ScriptedService {
        async fn list_files(&self) -> Result<FilesResponse, ServiceFailure> {
            let busy = self.store.borrow().session.busy;
            self.probe_busy.borrow_mut().push(busy);
            self.probes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ServiceFailure::Unreachable("no probe scripted".into())))
        }

        async fn post_json(&self, endpoint: &str, body: Value) -> Result<Value, ServiceFailure> {
            let (busy, status) = {
                let state = self.store.borrow();
                (state.session.busy, state.status.clone())
            };
            self.calls.borrow_mut().push(Call {
                endpoint: endpoint.to_string(),
                body,
                busy,
                status,
            });
            if self.yield_on_post {
                tokio::task::yield_now().await;
            }
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ServiceFailure::Unreachable("no reply scripted".into())))
        }
    }

    type TestController = ActionController<ScriptedService, Rc<RefCell<PanelState>>>;

    fn controller(script: impl FnOnce(ScriptedService) -> ScriptedService) -> TestController {
        let store = Rc::new(RefCell::new(PanelState::default()));
        let service = script(ScriptedService::new(store.clone()));
        let controller = ActionController::new(service, store, PanelConfig::default());
        controller.store().update(|s| s.session.service_available = true);
        controller
    }

    fn notice(controller: &TestController) -> Option<Notice> {
        controller.store().read(|s| s.notice.clone())
    }

    fn rolling(n: &str) -> RawInputs {
        RawInputs::new().with_text("n", n)
    }

    #[tokio::test]
    async fn test_probe_success_lists_files() {
        let controller = controller(|s| {
            s.probe(Ok(FilesResponse {
                files: vec!["data_PE.xlsx".into(), "data_bond.xlsx".into()],
            }))
        });
        controller.store().update(|s| s.session.service_available = false);

        assert!(controller.check_availability().await);

        let state = controller.store().read(|s| s.clone());
        assert!(state.session.service_available);
        assert!(!state.session.busy);
        assert_eq!(state.status, CONNECTED_STATUS);
        assert_eq!(state.files, vec!["data_PE.xlsx", "data_bond.xlsx"]);
        assert!(state.notice.is_none());
        assert_eq!(*controller.service().probe_busy.borrow(), vec![true]);
    }

    #[tokio::test]
    async fn test_probe_failure_disables_actions_and_notifies_once() {
        let controller = controller(|s| {
            s.probe(Err(ServiceFailure::Unreachable("Failed to fetch".into())))
                .probe(Err(ServiceFailure::Rejected {
                    status: 500,
                    error: None,
                }))
        });

        assert!(!controller.check_availability().await);
        let controls = controller.controls();
        assert!(!controls.actions_enabled);
        assert!(controls.inputs_enabled);
        let shown = notice(&controller).unwrap();
        assert_eq!(shown.title, "连接失败");
        assert!(shown.body.contains("python src/app.py"));

        controller.dismiss_notice();
        assert!(!controller.check_availability().await);
        assert!(notice(&controller).is_none());
        assert!(!controller.controls().actions_enabled);
    }

    #[tokio::test]
    async fn test_local_file_origin() {
        let controller = controller(|s| {
            s.probe(Err(ServiceFailure::Unreachable("Failed to fetch".into())))
        });

        controller.mark_local_file_origin();
        assert!(!controller.controls().actions_enabled);
        let shown = notice(&controller).unwrap();
        assert_eq!(shown.title, "需要启动本地服务");
        assert!(shown.body.contains("python src/app.py"));
        assert!(shown.body.contains("http://127.0.0.1:5000"));

        controller.dismiss_notice();
        controller.check_availability().await;
        assert!(notice(&controller).is_none());
    }

    #[tokio::test]
    async fn test_rolling_out_of_range_never_dispatches() {
        let controller = controller(|s| s);

        let result = controller.run(ActionKind::Rolling, &rolling("4001")).await;
        assert!(matches!(result, Err(PanelError::Validation(_))));

        let shown = notice(&controller).unwrap();
        assert_eq!(shown.title, VALIDATION_TITLE);
        assert!(shown.body.contains("1-4000"));
        assert!(controller.service().calls.borrow().is_empty());
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_rolling_dispatch() {
        let controller = controller(|s| {
            s.reply(Ok(json!({
                "n": 10,
                "output_csv": "ERP_Rolling Calculation.csv",
                "output_xlsx": "ERP_Rolling Calculation.xlsx"
            })))
        });

        let summary = controller.run(ActionKind::Rolling, &rolling("10")).await.unwrap();

        let calls = controller.service().calls.borrow().clone();
        assert_eq!(
            calls,
            vec![Call {
                endpoint: "/api/erprolling".into(),
                body: json!({ "n": 10 }),
                busy: true,
                status: "正在生成 ERP_Rolling Calculation（n=10）...".into(),
            }]
        );

        assert_eq!(summary.lines[0], "n = 10");
        let state = controller.store().read(|s| s.clone());
        assert!(!state.session.busy);
        assert_eq!(state.status, "滚动计算生成完成。");
        assert_eq!(state.notice, Some(summary.notice()));
        assert_eq!(state.notice.unwrap().title, "完成");
    }

    #[tokio::test]
    async fn test_interval_adjustment() {
        let controller = controller(|s| {
            s.reply(Ok(json!({
                "input_start_date": "2024-01-01",
                "input_end_date": "2024-01-31",
                "used_start_date": "2024-01-02",
                "used_end_date": "2024-01-31",
                "adjusted_to_trading_day": true,
                "adjusted_end_to_trading_day": false,
                "output_csv": "ERP_Interval.csv",
                "output_xlsx": "ERP_Interval.xlsx"
            })))
        });
        let inputs = RawInputs::new()
            .with_text("start_date", "2024-01-01")
            .with_text("end_date", "2024-01-31");

        let summary = controller.run(ActionKind::Interval, &inputs).await.unwrap();

        assert_eq!(
            controller.service().calls.borrow()[0].body,
            json!({ "start_date": "2024-01-01", "end_date": "2024-01-31" })
        );
        assert!(summary.notice().body.contains("（非交易日已自动调整为 2024-01-02）"));
        assert_eq!(summary.field_updates[0].field, "end_date");
    }

    #[tokio::test]
    async fn test_server_error_is_shown_verbatim() {
        let controller = controller(|s| {
            s.reply(Err(ServiceFailure::Rejected {
                status: 404,
                error: Some("找不到输入文件：data_PE".into()),
            }))
        });

        let result = controller.run(ActionKind::Erp, &RawInputs::new()).await;
        assert!(matches!(result, Err(PanelError::ServiceError { status: 404, .. })));

        let state = controller.store().read(|s| s.clone());
        assert!(!state.session.busy);
        assert_eq!(state.status, "ERP 生成失败。");
        assert_eq!(
            state.notice,
            Some(Notice::new("生成失败", "找不到输入文件：data_PE"))
        );
        assert!(state.controls().actions_enabled);
    }

    #[tokio::test]
    async fn test_network_failure_releases_busy() {
        let controller = controller(|s| s.reply(Err(ServiceFailure::Unreachable("reset".into()))));

        let result = controller.run(ActionKind::Erp10y, &RawInputs::new()).await;
        assert!(matches!(result, Err(PanelError::ServiceUnavailable(_))));
        assert!(!controller.is_busy());
        assert!(notice(&controller).unwrap().body.contains("python src/app.py"));
    }

    #[tokio::test]
    async fn test_unexpected_shape_releases_busy() {
        let controller = controller(|s| s.reply(Ok(json!({ "output_csv": 42 }))));

        let result = controller.run(ActionKind::Erp10y, &RawInputs::new()).await;
        assert!(matches!(result, Err(PanelError::UnexpectedResponse(_))));
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_dispatch_refused_while_busy() {
        let controller = controller(|s| s);
        controller.store().update(|s| s.session.busy = true);

        let request = controller.validate(ActionKind::Erp, &RawInputs::new()).unwrap();
        let result = controller.dispatch(request).await;

        assert_eq!(result, Err(PanelError::Busy));
        assert!(controller.service().calls.borrow().is_empty());
        assert!(controller.is_busy());
    }

    #[tokio::test]
    async fn test_single_flight_across_kinds() {
        let mut controller = controller(|s| s.reply(Ok(json!({ "outputs": {} }))));
        controller.service.yield_on_post = true;

        let erp = controller.validate(ActionKind::Erp, &RawInputs::new()).unwrap();
        let rolling = controller.validate(ActionKind::Rolling, &rolling("20")).unwrap();

        let (first, second) = tokio::join!(controller.dispatch(erp), controller.dispatch(rolling));

        let refused = [&first, &second]
            .iter()
            .filter(|r| matches!(r, Err(PanelError::Busy)))
            .count();
        assert_eq!(refused, 1);
        assert_eq!(controller.service().calls.borrow().len(), 1);
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn test_merge_weight_sum() {
        let controller = controller(|s| s);
        let mut inputs = RawInputs::new();
        for rule in crate::usecases::u707_thermometer_percentiles::WINDOW_RULES {
            inputs.set_text(rule.field, "10");
        }
        for (field, value) in crate::usecases::u708_thermometer_merge::WEIGHT_FIELDS
            .iter()
            .zip(["40", "30", "30", "1"])
        {
            inputs.set_text(*field, value);
        }

        let result = controller.run(ActionKind::ThermometerMerge, &inputs).await;
        assert!(matches!(result, Err(PanelError::Validation(_))));
        assert_eq!(notice(&controller).unwrap().body, "权重之和不能超过 100%。");
        assert!(controller.service().calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_new_notice_replaces_old() {
        let controller = controller(|s| s);
        controller.present_notice("a", "first");
        controller.present_notice("b", "second");
        assert_eq!(notice(&controller), Some(Notice::new("b", "second")));

        controller.dismiss_notice();
        controller.dismiss_notice();
        assert!(notice(&controller).is_none());
    }
}
