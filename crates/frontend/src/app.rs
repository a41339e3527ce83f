use crate::shared::api_utils::{is_local_file_origin, panel_config};
use crate::shared::date_utils::today_iso;
use crate::usecases::api::HttpComputeService;
use crate::usecases::form::PanelForm;
use crate::usecases::store::PanelSignal;
use crate::usecases::view::ControlPanel;
use crate::usecases::PanelController;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = panel_config();
    let controller = PanelController::new(
        HttpComputeService::new(config.clone()),
        PanelSignal::new(),
        config,
    );

    // Controller and form are shared with every section via context.
    provide_context(controller.clone());
    provide_context(PanelForm::new(today_iso()));

    // One probe at mount; afterwards only the manual recheck button.
    if is_local_file_origin() {
        controller.mark_local_file_origin();
    } else {
        spawn_local(async move {
            controller.check_availability().await;
        });
    }

    view! {
        <ConfigProvider>
            <ControlPanel />
        </ConfigProvider>
    }
}
